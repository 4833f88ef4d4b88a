use super::super::registry::dispatch;
use super::super::router::card::apply_template_at;
use super::{args, Workspace, SCENARIO_TEMPLATE};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Map};
use zettel_cards::CardTimestamp;

fn fixed_timestamp() -> CardTimestamp {
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    CardTimestamp::from_datetime(&at)
}

#[test]
fn start_card_generation_offers_heading_and_template_routes() {
    let ws = Workspace::new(None);
    let response = dispatch(
        "start_card_generation",
        &args(json!({ "start": true, "user_feedback": "looks good" })),
        &ws.settings,
    );

    assert!(!response.is_error());
    let text = response.joined_text();
    assert!(text.contains("`generate_heading`"));
    assert!(text.contains("`apply_template`"));
    let tools: Vec<&str> = response
        .next_actions
        .iter()
        .map(|action| action.tool.as_str())
        .collect();
    assert_eq!(tools, vec!["generate_heading", "apply_template"]);
}

#[test]
fn start_card_generation_rejects_null_feedback() {
    let ws = Workspace::new(None);
    let response = dispatch(
        "start_card_generation",
        &args(json!({ "start": true, "user_feedback": null })),
        &ws.settings,
    );

    assert_eq!(response.error.unwrap().code, "missing_argument");
}

#[test]
fn generate_heading_takes_no_arguments() {
    let ws = Workspace::new(None);
    let response = dispatch("generate_heading", &Map::new(), &ws.settings);

    assert!(!response.is_error());
    assert!(response.joined_text().ends_with("Call apply_template."));
}

#[test]
fn apply_template_without_heading_drops_the_heading_line() {
    let ws = Workspace::new(Some(SCENARIO_TEMPLATE));
    let response = apply_template_at(
        &args(json!({ "title": "Test Note", "content": "Body text" })),
        &ws.settings,
        &fixed_timestamp(),
    )
    .expect("card saved");

    let saved = ws.out_dir().join("20250101120000 - Test Note.md");
    assert_eq!(
        std::fs::read_to_string(&saved).unwrap(),
        "# Test Note\n\nBody text\n\nDone."
    );

    let card = response.card.clone().expect("saved card metadata");
    assert!(card.path.ends_with("20250101120000 - Test Note.md"));
    assert!(!card.backup_created);
    assert_eq!(card.chars_written, "# Test Note\n\nBody text\n\nDone.".len());

    assert_eq!(response.payloads.len(), 2);
    assert!(response.payloads[0].starts_with("Card saved: "));
    assert!(response.payloads[1].contains("# Test Note"));
    assert!(!response.payloads[1].contains("Heading:"));
}

#[test]
fn apply_template_fills_heading_and_timestamps() {
    let ws = Workspace::new(Some(
        "---\ncreated: {{created_at}}\nid: {{timestamp}}\n---\n## {{heading}}\n{{content}}\n",
    ));
    apply_template_at(
        &args(json!({
            "title": "Think Tools",
            "content": "Body",
            "heading": "Think Tools: Checkpoints for Deliberate Reasoning",
        })),
        &ws.settings,
        &fixed_timestamp(),
    )
    .expect("card saved");

    let text =
        std::fs::read_to_string(ws.out_dir().join("20250101120000 - Think Tools.md")).unwrap();
    assert_eq!(
        text,
        "---\ncreated: 2025-01-01T12:00:00+00:00\nid: 20250101120000\n---\n\
         ## Think Tools: Checkpoints for Deliberate Reasoning\nBody\n"
    );
}

#[test]
fn applying_twice_keeps_a_backup_of_the_previous_card() {
    let ws = Workspace::new(Some("{{content}}"));
    let timestamp = fixed_timestamp();

    apply_template_at(
        &args(json!({ "title": "Same", "content": "first" })),
        &ws.settings,
        &timestamp,
    )
    .expect("first save");
    let second = apply_template_at(
        &args(json!({ "title": "Same", "content": "second" })),
        &ws.settings,
        &timestamp,
    )
    .expect("second save");

    assert!(second.card.unwrap().backup_created);
    assert_eq!(
        ws.card_files(),
        vec![
            "20250101120000 - Same.md".to_string(),
            "20250101120000 - Same.md.backup".to_string(),
        ]
    );
    let card = ws.out_dir().join("20250101120000 - Same.md");
    assert_eq!(std::fs::read_to_string(&card).unwrap(), "second");
    assert_eq!(
        std::fs::read_to_string(ws.out_dir().join("20250101120000 - Same.md.backup")).unwrap(),
        "first"
    );
}

#[test]
fn applying_twice_without_backups_overwrites_in_place() {
    let ws = Workspace::new(Some("{{content}}"));
    let settings = ws.settings.clone().with_backup(false);
    let timestamp = fixed_timestamp();

    for content in ["first", "second"] {
        let response = apply_template_at(
            &args(json!({ "title": "Same", "content": content })),
            &settings,
            &timestamp,
        )
        .expect("card saved");
        assert!(!response.card.unwrap().backup_created);
    }

    assert_eq!(ws.card_files(), vec!["20250101120000 - Same.md".to_string()]);
    assert_eq!(
        std::fs::read_to_string(ws.out_dir().join("20250101120000 - Same.md")).unwrap(),
        "second"
    );
}

#[test]
fn missing_template_fails_before_any_write() {
    let ws = Workspace::new(None);
    let response = dispatch(
        "apply_template",
        &args(json!({ "title": "Test Note", "content": "Body text" })),
        &ws.settings,
    );

    let error = response.error.expect("template is missing");
    assert_eq!(error.code, "template_missing");
    assert!(error.hint.is_some());
    assert!(!ws.out_dir().exists());
}

#[test]
fn empty_title_is_rejected() {
    let ws = Workspace::new(Some(SCENARIO_TEMPLATE));
    let response = dispatch(
        "apply_template",
        &args(json!({ "title": "  ", "content": "Body text" })),
        &ws.settings,
    );

    let error = response.error.expect("empty title");
    assert_eq!(error.code, "invalid_argument");
    assert!(error.message.contains("Title cannot be empty"));
    assert!(ws.card_files().is_empty());
}

#[test]
fn save_card_rejects_traversal_when_sanitization_is_off() {
    let ws = Workspace::new(None);
    let settings = ws.settings.clone().with_sanitization(false);
    let response = dispatch(
        "save_card",
        &args(json!({ "formatted_card": "pwned", "filename": "../../etc/passwd.md" })),
        &settings,
    );

    assert_eq!(response.error.unwrap().code, "path_traversal");
    assert!(ws.card_files().is_empty());
    assert!(!ws.root.join("etc").exists());
}

#[test]
fn save_card_sanitizes_traversal_into_the_output_directory() {
    let ws = Workspace::new(None);
    let response = dispatch(
        "save_card",
        &args(json!({ "formatted_card": "text", "filename": "../../etc/passwd.md" })),
        &ws.settings,
    );

    assert!(!response.is_error());
    assert_eq!(ws.card_files(), vec!["--etc-passwd.md".to_string()]);

    let result = response.into_call_tool_result();
    let structured = result.structured_content.expect("card metadata");
    assert_eq!(structured["card"]["chars_written"], 4);
    assert_eq!(structured["card"]["backup_created"], false);
}
