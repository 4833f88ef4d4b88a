//! Backup-then-write persistence for rendered cards.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{CardError, Result};
use crate::guard::{resolve_within, sanitize_filename};
use crate::settings::Settings;

/// Appended to the full file name, so `x.md` is preserved as `x.md.backup`.
pub const BACKUP_SUFFIX: &str = ".backup";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    pub backup_created: bool,
    pub chars_written: usize,
}

pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(OsString::new);
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

/// Sanitize (when enabled), contain, and write `text` as `filename` in the output directory.
///
/// Nothing is touched on disk when the name resolves outside the output directory.
pub fn save_card(settings: &Settings, filename: &str, text: &str) -> Result<WriteOutcome> {
    let dir = &settings.output_directory;
    std::fs::create_dir_all(dir).map_err(|source| CardError::SaveFailed {
        path: dir.clone(),
        source,
    })?;

    let name = if settings.filename_sanitization {
        sanitize_filename(filename)
    } else {
        filename.to_string()
    };
    let candidate = dir.join(&name);
    let Some(target) = resolve_within(&candidate, dir) else {
        log::warn!(
            "Rejected card path {} (outside {})",
            candidate.display(),
            dir.display()
        );
        return Err(CardError::PathTraversal { path: candidate });
    };

    write_card(&target, text, settings.create_backup)
}

/// Write `text` to `path`, first moving an existing file aside when `create_backup` is set.
///
/// The new text is staged in the output directory before the backup rename, so a card is only
/// moved aside once its replacement is on disk. A backup that was made stays in place even if
/// the final rename then fails.
pub fn write_card(path: &Path, text: &str, create_backup: bool) -> Result<WriteOutcome> {
    let save_failed = |source: io::Error| CardError::SaveFailed {
        path: path.to_path_buf(),
        source,
    };
    let staged = stage(path, text.as_bytes()).map_err(save_failed)?;

    let mut backup_created = false;
    if create_backup && path.exists() {
        let backup = backup_path_for(path);
        std::fs::rename(path, &backup)
            .map_err(|source| CardError::BackupFailed { backup: backup.clone(), source })?;
        log::info!("Backed up {} -> {}", path.display(), backup.display());
        backup_created = true;
    }

    staged.persist(path).map_err(|err| save_failed(err.error))?;

    let chars_written = text.chars().count();
    log::info!("Saved card {} ({chars_written} chars)", path.display());
    Ok(WriteOutcome {
        path: path.to_path_buf(),
        backup_created,
        chars_written,
    })
}

// The temp name is independent of the card name, so names close to the filesystem limit
// still fit.
fn stage(path: &Path, bytes: &[u8]) -> io::Result<NamedTempFile> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "card path has no parent"))?;
    let mut staged = NamedTempFile::new_in(parent)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;
    Ok(staged)
}
