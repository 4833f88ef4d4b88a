use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Advisory hint telling the caller which tool is expected next.
///
/// Nothing enforces the hint: the server honors whatever tool is called next.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ToolNextAction {
    pub tool: String,
    #[serde(default)]
    pub args: serde_json::Value,
    pub reason: String,
}

impl ToolNextAction {
    pub fn new(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            args: serde_json::Value::Object(serde_json::Map::new()),
            reason: reason.into(),
        }
    }

    /// Arguments the caller can pass straight into the suggested tool.
    #[must_use]
    pub fn with_args(mut self, args: serde_json::Value) -> Self {
        self.args = args;
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
    pub hint: Option<String>,
    #[serde(default)]
    pub next_actions: Vec<ToolNextAction>,
}

impl ErrorEnvelope {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            hint: None,
            next_actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn with_next_action(mut self, action: ToolNextAction) -> Self {
        self.next_actions.push(action);
        self
    }
}

/// Result of a successful card write.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SavedCard {
    /// Absolute path of the written card.
    pub path: String,
    /// Whether a previous file at the same path was moved aside first.
    pub backup_created: bool,
    /// Number of characters (not bytes) written.
    pub chars_written: usize,
}
