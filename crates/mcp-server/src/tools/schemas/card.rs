use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ToolArgs;

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct StartCardGenerationRequest {
    #[schemars(description = "Set to true when calling this tool.")]
    pub start: bool,

    #[schemars(description = "All feedback the user gave on the draft.")]
    pub user_feedback: String,
}

impl ToolArgs for StartCardGenerationRequest {
    const REQUIRED: &'static [&'static str] = &["start", "user_feedback"];
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct GenerateHeadingRequest {}

impl ToolArgs for GenerateHeadingRequest {
    const REQUIRED: &'static [&'static str] = &[];
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ApplyTemplateRequest {
    #[schemars(description = "Finalized card title (without timestamp).")]
    pub title: String,

    #[schemars(description = "Finalized card content.")]
    pub content: String,

    /// Empty or absent means the card has no heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Optional content heading.")]
    pub heading: Option<String>,
}

impl ToolArgs for ApplyTemplateRequest {
    const REQUIRED: &'static [&'static str] = &["title", "content"];
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SaveCardRequest {
    #[schemars(description = "The complete formatted card text.")]
    pub formatted_card: String,

    #[schemars(
        description = "Filename for the card, e.g. '20250101120000 - Title.md'. Sanitized and kept inside the output directory."
    )]
    pub filename: String,
}

impl ToolArgs for SaveCardRequest {
    const REQUIRED: &'static [&'static str] = &["formatted_card", "filename"];
}
