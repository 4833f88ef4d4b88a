use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CardError>;

/// Failures on the render-and-persist path.
#[derive(Error, Debug)]
pub enum CardError {
    #[error("Template file not found at {}", path.display())]
    TemplateMissing { path: PathBuf },

    #[error("Invalid file path. Path traversal detected: {}", path.display())]
    PathTraversal { path: PathBuf },

    #[error("Error creating backup {}: {source}", backup.display())]
    BackupFailed {
        backup: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error saving card {}: {source}", path.display())]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CardError {
    /// Stable snake_case kind, used as the error code on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TemplateMissing { .. } => "template_missing",
            Self::PathTraversal { .. } => "path_traversal",
            Self::BackupFailed { .. } => "backup_failed",
            Self::SaveFailed { .. } => "save_failed",
        }
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Config file not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
