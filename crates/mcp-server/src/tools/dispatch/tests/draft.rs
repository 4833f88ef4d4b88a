use super::super::registry::dispatch;
use super::{args, Workspace};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn start_draft_generation_echoes_query_and_routes_to_title_thinker() {
    let ws = Workspace::new(None);
    let response = dispatch(
        "start_draft_generation",
        &args(json!({ "query": "How do think tools work?" })),
        &ws.settings,
    );

    assert!(!response.is_error());
    assert_eq!(response.payloads.len(), 1);
    let text = response.joined_text();
    assert!(text.contains("**User Query**: How do think tools work?"));
    assert!(text.ends_with("**NEXT ACTION**: Call title_thinker."));
    assert_eq!(response.next_actions.len(), 1);
    assert_eq!(response.next_actions[0].tool, "title_thinker");
}

#[test]
fn title_thinker_appends_configured_naming_conventions() {
    let ws = Workspace::new(None);
    let conventions = ws.root.join("naming.md");
    std::fs::write(&conventions, "Use English nouns only.\n").unwrap();
    let settings = ws.settings.clone().with_naming_conventions(&conventions);

    let response = dispatch(
        "title_thinker",
        &args(json!({ "reasoning": "the topic is tool sequencing" })),
        &settings,
    );

    let text = response.joined_text();
    assert!(text.contains("**Naming Conventions**:\nUse English nouns only."));
    assert!(text.ends_with("Call generate_title."));
    assert_eq!(response.next_actions[0].tool, "generate_title");
}

#[test]
fn title_thinker_without_conventions_file_still_guides() {
    let ws = Workspace::new(None);
    let settings = ws
        .settings
        .clone()
        .with_naming_conventions(ws.root.join("missing.md"));

    let response = dispatch(
        "title_thinker",
        &args(json!({ "reasoning": "r" })),
        &settings,
    );

    assert!(!response.is_error());
    assert!(!response.joined_text().contains("Naming Conventions"));
}

#[test]
fn generate_title_passes_title_into_content_thinker_prompt() {
    let ws = Workspace::new(None);
    let response = dispatch(
        "generate_title",
        &args(json!({ "title": "Think Tools Force Deliberate Reasoning" })),
        &ws.settings,
    );

    let text = response.joined_text();
    assert!(text.contains("Think Tools Force Deliberate Reasoning"));
    assert!(text.ends_with("Call content_thinker."));
    assert_eq!(response.next_actions[0].tool, "content_thinker");
    assert_eq!(
        response.next_actions[0].args,
        json!({ "title": "Think Tools Force Deliberate Reasoning" })
    );
}

#[test]
fn content_thinker_requires_both_arguments() {
    let ws = Workspace::new(None);
    let response = dispatch(
        "content_thinker",
        &args(json!({ "title": "Only a title" })),
        &ws.settings,
    );

    let error = response.error.expect("missing reasoning is an error");
    assert_eq!(error.code, "missing_argument");
    assert_eq!(error.details.unwrap()["argument"], "reasoning");
    assert_eq!(error.next_actions.len(), 1);
    assert_eq!(error.next_actions[0].tool, "content_thinker");
    assert!(error.next_actions[0].reason.contains("`reasoning`"));
}

#[test]
fn generate_content_completes_the_draft_stage() {
    let ws = Workspace::new(None);
    let response = dispatch(
        "generate_content",
        &args(json!({ "content": "The body." })),
        &ws.settings,
    );

    let text = response.joined_text();
    assert!(text.contains("Stage 1: Draft Generation Complete"));
    assert!(text.contains("start_card_generation"));
    assert_eq!(response.next_actions[0].tool, "start_card_generation");
    assert!(ws.card_files().is_empty());
}
