use serde_json::{json, Map, Value};
use thiserror::Error;
use zettel_cards::CardError;
use zettel_protocol::{ErrorEnvelope, ToolNextAction};

use crate::tools::response::ToolResponse;
use crate::tools::schemas::ToolArgs;

/// Everything a handler can fail with. Nothing here is fatal to the server.
#[derive(Error, Debug)]
pub(in crate::tools) enum ToolError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Missing required argument `{argument}` for tool '{tool}'")]
    MissingArgument {
        tool: &'static str,
        argument: &'static str,
    },

    #[error("Invalid arguments for tool '{tool}': {message}")]
    InvalidArgument { tool: &'static str, message: String },

    #[error(transparent)]
    Card(#[from] CardError),
}

impl ToolError {
    pub(in crate::tools) fn code(&self) -> &'static str {
        match self {
            Self::UnknownTool { .. } => "unknown_tool",
            Self::MissingArgument { .. } => "missing_argument",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::Card(err) => err.code(),
        }
    }

    pub(in crate::tools) fn envelope(&self) -> ErrorEnvelope {
        let envelope = ErrorEnvelope::new(self.code(), self.to_string());
        match self {
            Self::UnknownTool { name } => envelope
                .with_details(json!({ "tool": name }))
                .with_hint("call tools/list to see the available tools"),
            Self::MissingArgument { tool, argument } => envelope
                .with_details(json!({ "tool": tool, "argument": argument }))
                .with_next_action(ToolNextAction::new(
                    *tool,
                    format!("call again with `{argument}` set"),
                )),
            Self::InvalidArgument { tool, .. } => envelope
                .with_details(json!({ "tool": tool }))
                .with_next_action(ToolNextAction::new(*tool, "call again with corrected arguments")),
            Self::Card(CardError::TemplateMissing { path }) => envelope
                .with_details(json!({ "template_file": path.display().to_string() }))
                .with_hint("set template_file in the config file"),
            Self::Card(CardError::PathTraversal { path }) => {
                envelope.with_details(json!({ "path": path.display().to_string() }))
            }
            Self::Card(CardError::BackupFailed { backup, .. }) => {
                envelope.with_details(json!({ "backup": backup.display().to_string() }))
            }
            Self::Card(CardError::SaveFailed { path, .. }) => {
                envelope.with_details(json!({ "path": path.display().to_string() }))
            }
        }
    }

    pub(in crate::tools) fn into_response(self) -> ToolResponse {
        log::debug!("tool error ({}): {self}", self.code());
        ToolResponse::error(self.envelope())
    }
}

/// Check required keys, then deserialize the argument object into `T`.
pub(in crate::tools) fn parse_args<T: ToolArgs>(
    tool: &'static str,
    arguments: &Map<String, Value>,
) -> Result<T, ToolError> {
    for &argument in T::REQUIRED {
        if arguments.get(argument).map_or(true, Value::is_null) {
            return Err(ToolError::MissingArgument { tool, argument });
        }
    }
    serde_json::from_value(Value::Object(arguments.clone())).map_err(|err| {
        ToolError::InvalidArgument {
            tool,
            message: err.to_string(),
        }
    })
}
