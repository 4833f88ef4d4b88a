//! MCP tool dispatch for the Zettelkasten card server.
//!
//! The service holds nothing but the settings loaded at startup. Every call is
//! routed through the static [`registry::ToolName`] table and answered
//! independently; the server never tracks where a client is in the workflow.

pub(crate) mod registry;
mod router;

#[cfg(test)]
mod tests;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler};
use serde_json::{Map, Value};
use std::sync::Arc;
use zettel_cards::Settings;

use crate::tools::response::ToolResponse;
use registry::ToolName;

const INSTRUCTIONS: &str = "Zettelkasten card builder. Call 'start_draft_generation' with the user's topic and follow the NEXT ACTION at the end of every response: title_thinker, generate_title, content_thinker, generate_content, then start_card_generation, optionally generate_heading, and finally apply_template to format and save the card. Use 'save_card' to store an already formatted card.";

/// Zettelkasten MCP service
#[derive(Clone)]
pub struct ZettelService {
    settings: Arc<Settings>,
}

impl ZettelService {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn dispatch(&self, name: &str, arguments: &Map<String, Value>) -> ToolResponse {
        registry::dispatch(name, arguments, &self.settings)
    }
}

impl ServerHandler for ZettelService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }

    #[allow(clippy::manual_async_fn)]
    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move {
            let tools = ToolName::ALL.into_iter().map(ToolName::to_tool).collect();
            Ok(ListToolsResult::with_all_items(tools))
        }
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            // Tools that take no arguments may be called without an arguments object.
            let arguments = request.arguments.unwrap_or_default();
            let response = self.dispatch(&request.name, &arguments);
            Ok(response.into_call_tool_result())
        }
    }
}
