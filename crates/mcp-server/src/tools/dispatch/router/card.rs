// Stage 2: card generation. `apply_template` and `save_card` are the only tools that write.

use serde_json::{Map, Value};
use zettel_cards::{
    render_card, save_card as persist_card, CardError, CardFields, CardTimestamp, Settings,
    WriteOutcome,
};
use zettel_protocol::SavedCard;

use super::error::{parse_args, ToolError};
use crate::tools::dispatch::registry::ToolName;
use crate::tools::prompts;
use crate::tools::response::ToolResponse;
use crate::tools::schemas::card::{
    ApplyTemplateRequest, GenerateHeadingRequest, SaveCardRequest, StartCardGenerationRequest,
};
use crate::tools::util::preview;

const PREVIEW_MAX_CHARS: usize = 800;

pub(in crate::tools::dispatch) fn start_card_generation(
    arguments: &Map<String, Value>,
    _settings: &Settings,
) -> Result<ToolResponse, ToolError> {
    let _request: StartCardGenerationRequest =
        parse_args(ToolName::StartCardGeneration.as_str(), arguments)?;
    let heading = ToolName::GenerateHeading.as_str();
    let template = ToolName::ApplyTemplate.as_str();
    Ok(ToolResponse::text(prompts::card_router(heading, template))
        .with_next(heading, "the content needs a detailed heading")
        .with_next(template, "the content is ready to be formatted and saved"))
}

pub(in crate::tools::dispatch) fn generate_heading(
    arguments: &Map<String, Value>,
    _settings: &Settings,
) -> Result<ToolResponse, ToolError> {
    let _request: GenerateHeadingRequest =
        parse_args(ToolName::GenerateHeading.as_str(), arguments)?;
    let next = ToolName::ApplyTemplate;
    Ok(
        ToolResponse::text(prompts::heading_generation(next.as_str()))
            .with_next(next.as_str(), "pass the heading along with title and content"),
    )
}

pub(in crate::tools::dispatch) fn apply_template(
    arguments: &Map<String, Value>,
    settings: &Settings,
) -> Result<ToolResponse, ToolError> {
    apply_template_at(arguments, settings, &CardTimestamp::now())
}

/// Render the configured template with the given arguments and persist the card.
///
/// Every check (arguments, template) runs before the first filesystem mutation.
pub(in crate::tools::dispatch) fn apply_template_at(
    arguments: &Map<String, Value>,
    settings: &Settings,
    timestamp: &CardTimestamp,
) -> Result<ToolResponse, ToolError> {
    let tool = ToolName::ApplyTemplate.as_str();
    let request: ApplyTemplateRequest = parse_args(tool, arguments)?;
    if request.title.trim().is_empty() {
        return Err(ToolError::InvalidArgument {
            tool,
            message: "Title cannot be empty. Please generate a valid title.".to_string(),
        });
    }

    let template = settings
        .load_template()
        .ok_or_else(|| CardError::TemplateMissing {
            path: settings.template_path.clone(),
        })?;

    let fields = CardFields {
        title: &request.title,
        content: &request.content,
        heading: request.heading.as_deref().unwrap_or_default(),
    };
    let card = render_card(&template, &fields, timestamp);
    let outcome = persist_card(settings, &card.filename, &card.text)?;

    Ok(saved_response(outcome)
        .with_payload(prompts::card_preview(&preview(&card.text, PREVIEW_MAX_CHARS))))
}

pub(in crate::tools::dispatch) fn save_card(
    arguments: &Map<String, Value>,
    settings: &Settings,
) -> Result<ToolResponse, ToolError> {
    let request: SaveCardRequest = parse_args(ToolName::SaveCard.as_str(), arguments)?;
    let outcome = persist_card(settings, &request.filename, &request.formatted_card)?;
    Ok(saved_response(outcome))
}

fn saved_response(outcome: WriteOutcome) -> ToolResponse {
    let path = outcome.path.display().to_string();
    ToolResponse::text(prompts::card_saved(
        &path,
        outcome.backup_created,
        outcome.chars_written,
    ))
    .with_card(SavedCard {
        path,
        backup_created: outcome.backup_created,
        chars_written: outcome.chars_written,
    })
}
