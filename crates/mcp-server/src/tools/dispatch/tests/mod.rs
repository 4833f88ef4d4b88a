use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};
use zettel_cards::Settings;

mod card;
mod draft;

const SCENARIO_TEMPLATE: &str = "# {{title}}\n\n{{content}}\n\nHeading: {{heading}}\nDone.";

struct Workspace {
    _tmp: TempDir,
    root: PathBuf,
    settings: Settings,
}

impl Workspace {
    /// Output dir `cards/` plus a template file, when one is given.
    fn new(template: Option<&str>) -> Self {
        let tmp = tempdir().expect("tempdir");
        let root = tmp.path().to_path_buf();
        let template_path = root.join("template.md");
        if let Some(template) = template {
            std::fs::write(&template_path, template).expect("write template");
        }
        let settings = Settings::new(root.join("cards"), template_path);
        Self {
            _tmp: tmp,
            root,
            settings,
        }
    }

    fn out_dir(&self) -> &Path {
        &self.settings.output_directory
    }

    fn card_files(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.out_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}
