use rmcp::model::{CallToolResult, Content};
use serde_json::{json, Map, Value};
use zettel_protocol::{ErrorEnvelope, SavedCard, ToolNextAction};

/// What a tool hands back: ordered text payloads plus advisory metadata.
#[derive(Debug, Clone)]
pub struct ToolResponse {
    pub payloads: Vec<String>,
    pub next_actions: Vec<ToolNextAction>,
    pub card: Option<SavedCard>,
    pub error: Option<ErrorEnvelope>,
}

impl ToolResponse {
    pub fn text(payload: impl Into<String>) -> Self {
        Self {
            payloads: vec![payload.into()],
            next_actions: Vec::new(),
            card: None,
            error: None,
        }
    }

    /// Single error payload describing the failure.
    pub fn error(envelope: ErrorEnvelope) -> Self {
        Self {
            payloads: vec![render_error(&envelope)],
            next_actions: Vec::new(),
            card: None,
            error: Some(envelope),
        }
    }

    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payloads.push(payload.into());
        self
    }

    #[must_use]
    pub fn with_next(self, tool: &str, reason: &str) -> Self {
        self.with_next_action(ToolNextAction::new(tool, reason))
    }

    #[must_use]
    pub fn with_next_action(mut self, action: ToolNextAction) -> Self {
        self.next_actions.push(action);
        self
    }

    #[must_use]
    pub fn with_card(mut self, card: SavedCard) -> Self {
        self.card = Some(card);
        self
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// All payloads joined by blank lines.
    pub fn joined_text(&self) -> String {
        self.payloads.join("\n\n")
    }

    pub fn into_call_tool_result(self) -> CallToolResult {
        let contents: Vec<Content> = self.payloads.into_iter().map(Content::text).collect();

        if let Some(error) = self.error {
            let mut result = CallToolResult::error(contents);
            result.structured_content = Some(json!({ "error": error }));
            return result;
        }

        let mut result = CallToolResult::success(contents);
        let mut structured = Map::new();
        if !self.next_actions.is_empty() {
            structured.insert("next_actions".to_string(), json!(self.next_actions));
        }
        if let Some(card) = self.card {
            structured.insert("card".to_string(), json!(card));
        }
        if !structured.is_empty() {
            result.structured_content = Some(Value::Object(structured));
        }
        result
    }
}

fn render_error(error: &ErrorEnvelope) -> String {
    let mut out = format!("Error: {}", error.message);
    if let Some(hint) = error.hint.as_deref().filter(|h| !h.trim().is_empty()) {
        out.push_str("\nHint: ");
        out.push_str(hint);
    }
    out
}
