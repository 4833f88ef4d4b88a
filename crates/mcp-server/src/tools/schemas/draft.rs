use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ToolArgs;

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct StartDraftGenerationRequest {
    #[schemars(description = "The user query.")]
    pub query: String,
}

impl ToolArgs for StartDraftGenerationRequest {
    const REQUIRED: &'static [&'static str] = &["query"];
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct TitleThinkerRequest {
    #[schemars(
        description = "Your reasoning about the main topic of the conversation, or an analysis of the title the user proposed."
    )]
    pub reasoning: String,
}

impl ToolArgs for TitleThinkerRequest {
    const REQUIRED: &'static [&'static str] = &["reasoning"];
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GenerateTitleRequest {
    #[schemars(description = "The title for the card (without timestamp).")]
    pub title: String,
}

impl ToolArgs for GenerateTitleRequest {
    const REQUIRED: &'static [&'static str] = &["title"];
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ContentThinkerRequest {
    #[schemars(description = "The title that was generated for this card.")]
    pub title: String,

    #[schemars(description = "Detailed reasoning about the card content given the title.")]
    pub reasoning: String,
}

impl ToolArgs for ContentThinkerRequest {
    const REQUIRED: &'static [&'static str] = &["title", "reasoning"];
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GenerateContentRequest {
    #[schemars(description = "The card body content.")]
    pub content: String,
}

impl ToolArgs for GenerateContentRequest {
    const REQUIRED: &'static [&'static str] = &["content"];
}
