//! Zettelkasten MCP tool surface.
//!
//! Schemas, prompt texts, and dispatch live in separate submodules; the registry in
//! `dispatch::registry` is the single table both `tools/list` and `tools/call` go through.

mod dispatch;
mod prompts;
mod response;
mod schemas;
mod util;

pub use dispatch::registry::{dispatch, ToolName};
pub use dispatch::ZettelService;
pub use response::ToolResponse;
