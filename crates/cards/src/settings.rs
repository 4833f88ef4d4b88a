//! Process-wide card settings, loaded once from a TOML file.
//!
//! ```toml
//! template_file = "template.md"
//! output_directory = "~/zettelkasten/cards"
//! naming_conventions_file = "~/zettelkasten/naming.md"
//!
//! [file_operations]
//! create_backup = true
//! filename_sanitization = true
//! ```
//!
//! Every key is optional. A missing or broken file never stops the server: the loader logs a
//! warning and falls back to defaults.

use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::SettingsError;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_TEMPLATE_FILE: &str = "template.md";

/// Environment keys consulted (in order) for the config file location.
pub const CONFIG_PATH_ENV_KEYS: &[&str] = &["ZETTELKASTEN_CONFIG", "CONFIG_PATH"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_directory: PathBuf,
    pub template_path: PathBuf,
    pub create_backup: bool,
    pub filename_sanitization: bool,
    pub naming_conventions_path: Option<PathBuf>,
    source: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    template_file: Option<String>,
    output_directory: Option<String>,
    naming_conventions_file: Option<String>,
    file_operations: Option<RawFileOperations>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFileOperations {
    create_backup: Option<bool>,
    filename_sanitization: Option<bool>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_directory: default_output_directory(),
            template_path: PathBuf::from(DEFAULT_TEMPLATE_FILE),
            create_backup: true,
            filename_sanitization: true,
            naming_conventions_path: None,
            source: None,
        }
    }
}

impl Settings {
    pub fn new(output_directory: impl Into<PathBuf>, template_path: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
            template_path: template_path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_backup(mut self, create_backup: bool) -> Self {
        self.create_backup = create_backup;
        self
    }

    #[must_use]
    pub fn with_sanitization(mut self, filename_sanitization: bool) -> Self {
        self.filename_sanitization = filename_sanitization;
        self
    }

    #[must_use]
    pub fn with_naming_conventions(mut self, path: impl Into<PathBuf>) -> Self {
        self.naming_conventions_path = Some(path.into());
        self
    }

    /// Config file these settings were read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Load settings from the location named by the environment (see [`CONFIG_PATH_ENV_KEYS`]),
    /// falling back to `config.toml` in the working directory.
    pub fn from_env() -> Self {
        let path = config_path_from_lookup(|key| env::var(key).ok());
        Self::load_or_default(&path)
    }

    /// Strict loader: any problem with the file is reported to the caller.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let settings = Self::read_file(path)?;
        settings.ensure_output_directory()?;
        log::info!(
            "Loaded settings from {} (output: {})",
            path.display(),
            settings.output_directory.display()
        );
        Ok(settings)
    }

    /// Lenient loader used at startup: problems are logged and defaults apply.
    ///
    /// Only an unusable file falls back to defaults. An output directory that cannot be
    /// created keeps the configured values; the writer reports it on the first save.
    pub fn load_or_default(path: &Path) -> Self {
        let settings = match Self::read_file(path) {
            Ok(settings) => settings,
            Err(SettingsError::NotFound { path }) => {
                log::warn!(
                    "Config file not found at {}; using defaults",
                    path.display()
                );
                return Self::defaults_for_source(&path);
            }
            Err(err) => {
                log::warn!("Error loading config: {err}; using defaults");
                return Self::defaults_for_source(path);
            }
        };
        if let Err(err) = settings.ensure_output_directory() {
            log::warn!("{err}; keeping configured settings");
        }
        settings
    }

    fn read_file(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Err(SettingsError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw, Some(path)).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Re-read the config file these settings came from. The current value is left untouched.
    pub fn reload(&self) -> Self {
        match self.source.as_deref() {
            Some(path) => Self::load_or_default(path),
            None => self.clone(),
        }
    }

    pub fn from_toml_str(raw: &str, source: Option<&Path>) -> Result<Self, toml::de::Error> {
        let raw: RawSettings = toml::from_str(raw)?;
        let defaults = Self::default();
        let ops = raw.file_operations.unwrap_or_default();
        Ok(Self {
            output_directory: raw
                .output_directory
                .as_deref()
                .map(expand_tilde)
                .unwrap_or(defaults.output_directory),
            template_path: raw
                .template_file
                .as_deref()
                .map(expand_tilde)
                .unwrap_or(defaults.template_path),
            create_backup: ops.create_backup.unwrap_or(defaults.create_backup),
            filename_sanitization: ops
                .filename_sanitization
                .unwrap_or(defaults.filename_sanitization),
            naming_conventions_path: raw.naming_conventions_file.as_deref().map(expand_tilde),
            source: source.map(Path::to_path_buf),
        })
    }

    pub fn ensure_output_directory(&self) -> Result<(), SettingsError> {
        if self.output_directory.is_dir() {
            return Ok(());
        }
        std::fs::create_dir_all(&self.output_directory).map_err(|source| {
            SettingsError::OutputDirectory {
                path: self.output_directory.clone(),
                source,
            }
        })
    }

    /// Template text, or `None` when the file is missing, unreadable, or empty.
    pub fn load_template(&self) -> Option<String> {
        read_optional(&self.template_path, "template")
    }

    /// Naming conventions text, when a file is configured and readable.
    pub fn load_naming_conventions(&self) -> Option<String> {
        let path = self.naming_conventions_path.as_deref()?;
        read_optional(path, "naming conventions")
    }

    // The default output directory is created lazily by the writer.
    fn defaults_for_source(path: &Path) -> Self {
        Self {
            source: Some(path.to_path_buf()),
            ..Self::default()
        }
    }
}

/// Resolve the config file location from an environment lookup.
pub fn config_path_from_lookup<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    for key in CONFIG_PATH_ENV_KEYS {
        if let Some(value) = lookup(key) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return expand_tilde(trimmed);
            }
        }
    }
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// Expand a leading `~` to the home directory. Other paths pass through unchanged.
pub fn expand_tilde(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

fn default_output_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join("zettelkasten")
        .join("cards")
}

fn read_optional(path: &Path, what: &str) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    match std::fs::read_to_string(path) {
        Ok(text) if text.is_empty() => None,
        Ok(text) => Some(text),
        Err(err) => {
            log::warn!("Error loading {what} from {}: {err}", path.display());
            None
        }
    }
}
