// Stage 1: draft generation. Instructional only; nothing here touches the filesystem.

use serde_json::{json, Map, Value};
use zettel_cards::Settings;
use zettel_protocol::ToolNextAction;

use super::error::{parse_args, ToolError};
use crate::tools::dispatch::registry::ToolName;
use crate::tools::prompts;
use crate::tools::response::ToolResponse;
use crate::tools::schemas::draft::{
    ContentThinkerRequest, GenerateContentRequest, GenerateTitleRequest,
    StartDraftGenerationRequest, TitleThinkerRequest,
};

pub(in crate::tools::dispatch) fn start_draft_generation(
    arguments: &Map<String, Value>,
    _settings: &Settings,
) -> Result<ToolResponse, ToolError> {
    let request: StartDraftGenerationRequest =
        parse_args(ToolName::StartDraftGeneration.as_str(), arguments)?;
    let next = ToolName::TitleThinker;
    Ok(
        ToolResponse::text(prompts::title_thinker(&request.query, next.as_str()))
            .with_next(next.as_str(), "reason about the card topic before naming it"),
    )
}

/// Hands out the title-generation guidance, extended with the configured naming conventions.
pub(in crate::tools::dispatch) fn title_thinker(
    arguments: &Map<String, Value>,
    settings: &Settings,
) -> Result<ToolResponse, ToolError> {
    let _request: TitleThinkerRequest = parse_args(ToolName::TitleThinker.as_str(), arguments)?;
    let next = ToolName::GenerateTitle;
    let conventions = settings.load_naming_conventions();
    Ok(ToolResponse::text(prompts::title_generation(
        conventions.as_deref(),
        next.as_str(),
    ))
    .with_next(next.as_str(), "commit the card title"))
}

pub(in crate::tools::dispatch) fn generate_title(
    arguments: &Map<String, Value>,
    _settings: &Settings,
) -> Result<ToolResponse, ToolError> {
    let request: GenerateTitleRequest = parse_args(ToolName::GenerateTitle.as_str(), arguments)?;
    let next = ToolName::ContentThinker;
    let action = ToolNextAction::new(next.as_str(), "reason about the card content for this title")
        .with_args(json!({ "title": &request.title }));
    Ok(
        ToolResponse::text(prompts::content_thinker(&request.title, next.as_str()))
            .with_next_action(action),
    )
}

pub(in crate::tools::dispatch) fn content_thinker(
    arguments: &Map<String, Value>,
    _settings: &Settings,
) -> Result<ToolResponse, ToolError> {
    let request: ContentThinkerRequest =
        parse_args(ToolName::ContentThinker.as_str(), arguments)?;
    let next = ToolName::GenerateContent;
    Ok(
        ToolResponse::text(prompts::content_generation(&request.title, next.as_str()))
            .with_next(next.as_str(), "commit the card body"),
    )
}

pub(in crate::tools::dispatch) fn generate_content(
    arguments: &Map<String, Value>,
    _settings: &Settings,
) -> Result<ToolResponse, ToolError> {
    let _request: GenerateContentRequest =
        parse_args(ToolName::GenerateContent.as_str(), arguments)?;
    let next = ToolName::StartCardGeneration;
    Ok(ToolResponse::text(prompts::draft_complete(next.as_str()))
        .with_next(next.as_str(), "format and save the card after user review"))
}
