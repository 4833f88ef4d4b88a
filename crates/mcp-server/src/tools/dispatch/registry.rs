//! Static tool table: one variant per tool, one handler per variant.

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde_json::{Map, Value};
use std::sync::Arc;
use zettel_cards::Settings;

use super::router::error::ToolError;
use super::router::{card, draft};
use crate::tools::response::ToolResponse;
use crate::tools::schemas::card::{
    ApplyTemplateRequest, GenerateHeadingRequest, SaveCardRequest, StartCardGenerationRequest,
};
use crate::tools::schemas::draft::{
    ContentThinkerRequest, GenerateContentRequest, GenerateTitleRequest,
    StartDraftGenerationRequest, TitleThinkerRequest,
};

type Handler = fn(&Map<String, Value>, &Settings) -> Result<ToolResponse, ToolError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    StartDraftGeneration,
    TitleThinker,
    GenerateTitle,
    ContentThinker,
    GenerateContent,
    StartCardGeneration,
    GenerateHeading,
    ApplyTemplate,
    SaveCard,
}

impl ToolName {
    /// Every tool, in workflow order.
    pub const ALL: [ToolName; 9] = [
        ToolName::StartDraftGeneration,
        ToolName::TitleThinker,
        ToolName::GenerateTitle,
        ToolName::ContentThinker,
        ToolName::GenerateContent,
        ToolName::StartCardGeneration,
        ToolName::GenerateHeading,
        ToolName::ApplyTemplate,
        ToolName::SaveCard,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ToolName::StartDraftGeneration => "start_draft_generation",
            ToolName::TitleThinker => "title_thinker",
            ToolName::GenerateTitle => "generate_title",
            ToolName::ContentThinker => "content_thinker",
            ToolName::GenerateContent => "generate_content",
            ToolName::StartCardGeneration => "start_card_generation",
            ToolName::GenerateHeading => "generate_heading",
            ToolName::ApplyTemplate => "apply_template",
            ToolName::SaveCard => "save_card",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    pub const fn description(self) -> &'static str {
        match self {
            ToolName::StartDraftGeneration => {
                "Call this first when the user wants to build a card. Starts the draft generation workflow."
            }
            ToolName::TitleThinker => {
                "Use before creating or refining the title. A deliberate pause in the workflow for quality writing."
            }
            ToolName::GenerateTitle => "Commit a title based on the title_thinker result.",
            ToolName::ContentThinker => {
                "Use before generating the card body. A deliberate pause in the workflow for quality writing."
            }
            ToolName::GenerateContent => {
                "Commit the card body: the dialogue synthesized into an atomic, narrative article."
            }
            ToolName::StartCardGeneration => {
                "Start the card generation workflow with the finalized draft and the user's feedback."
            }
            ToolName::GenerateHeading => "Get guidance for writing a detailed content heading.",
            ToolName::ApplyTemplate => {
                "Apply the card template to the finalized title, content and optional heading, then save the card."
            }
            ToolName::SaveCard => {
                "Save an already formatted card under the given filename in the output directory."
            }
        }
    }

    /// JSON schema of the tool's arguments.
    pub fn input_schema(self) -> Arc<JsonObject> {
        match self {
            ToolName::StartDraftGeneration => schema_for::<StartDraftGenerationRequest>(),
            ToolName::TitleThinker => schema_for::<TitleThinkerRequest>(),
            ToolName::GenerateTitle => schema_for::<GenerateTitleRequest>(),
            ToolName::ContentThinker => schema_for::<ContentThinkerRequest>(),
            ToolName::GenerateContent => schema_for::<GenerateContentRequest>(),
            ToolName::StartCardGeneration => schema_for::<StartCardGenerationRequest>(),
            ToolName::GenerateHeading => schema_for::<GenerateHeadingRequest>(),
            ToolName::ApplyTemplate => schema_for::<ApplyTemplateRequest>(),
            ToolName::SaveCard => schema_for::<SaveCardRequest>(),
        }
    }

    pub fn to_tool(self) -> Tool {
        Tool::new(self.as_str(), self.description(), self.input_schema())
    }

    fn handler(self) -> Handler {
        match self {
            ToolName::StartDraftGeneration => draft::start_draft_generation,
            ToolName::TitleThinker => draft::title_thinker,
            ToolName::GenerateTitle => draft::generate_title,
            ToolName::ContentThinker => draft::content_thinker,
            ToolName::GenerateContent => draft::generate_content,
            ToolName::StartCardGeneration => card::start_card_generation,
            ToolName::GenerateHeading => card::generate_heading,
            ToolName::ApplyTemplate => card::apply_template,
            ToolName::SaveCard => card::save_card,
        }
    }

    /// Run the tool. Failures come back as an error response, never as a panic or `Err`.
    pub fn invoke(self, arguments: &Map<String, Value>, settings: &Settings) -> ToolResponse {
        (self.handler())(arguments, settings).unwrap_or_else(ToolError::into_response)
    }
}

/// Route a call by tool name.
pub fn dispatch(name: &str, arguments: &Map<String, Value>, settings: &Settings) -> ToolResponse {
    match ToolName::from_name(name) {
        Some(tool) => {
            log::debug!("dispatch {name}");
            tool.invoke(arguments, settings)
        }
        None => {
            log::warn!("Unknown tool requested: {name}");
            ToolError::UnknownTool {
                name: name.to_string(),
            }
            .into_response()
        }
    }
}

fn schema_for<T: JsonSchema>() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(T);
    match serde_json::to_value(schema) {
        Ok(Value::Object(object)) => Arc::new(object),
        _ => Arc::new(JsonObject::new()),
    }
}
