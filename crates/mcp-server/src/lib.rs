//! Zettelkasten MCP Server
//!
//! Guides an agent through turning a conversation into an atomic Zettelkasten card.
//!
//! ## Tools
//!
//! Draft stage (instructional only):
//! `start_draft_generation` → `title_thinker` → `generate_title` → `content_thinker` →
//! `generate_content`
//!
//! Card stage:
//! - `start_card_generation` - route to heading generation or template application
//! - `generate_heading` - heading guidance
//! - `apply_template` - render the configured template and save the card
//! - `save_card` - save an already formatted card under a given filename
//!
//! Every tool is stateless. The "next tool" each response names is a suggestion; any tool may
//! be called at any time.
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "zettelkasten": {
//!       "command": "zettel-mcp",
//!       "env": { "ZETTELKASTEN_CONFIG": "/path/to/config.toml" }
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod runtime_env;
pub mod tools;

pub use tools::{ToolName, ToolResponse, ZettelService};

pub async fn main_entry() -> Result<()> {
    runtime_env::init_logging();

    log::info!("Starting Zettelkasten MCP server");

    let settings = runtime_env::load_settings();
    let service = ZettelService::new(settings);
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::info!("Zettelkasten MCP server stopped");
    Ok(())
}
