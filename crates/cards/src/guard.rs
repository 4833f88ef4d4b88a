//! Filename sanitization and output-directory containment checks.
//!
//! The two layers are independent: sanitization removes separators and traversal tokens from
//! the proposed name, containment re-checks the final resolved path regardless.

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

pub const NOTE_EXTENSION: &str = ".md";

static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[<>:"|?*]"#).expect("static regex"));

/// Make a proposed filename safe to join onto the output directory.
///
/// The result never contains `/`, `\` or `..`, always ends with `.md`, and sanitizing it
/// again returns it unchanged.
pub fn sanitize_filename(name: &str) -> String {
    let flattened = name.replace(['/', '\\'], "-");
    let mut cleaned = DISALLOWED_CHARS.replace_all(&flattened, "").into_owned();
    while cleaned.contains("..") {
        cleaned = cleaned.replace("..", "");
    }
    if cleaned.ends_with(NOTE_EXTENSION) {
        return cleaned;
    }
    // A trailing dot would form `..` with the extension.
    let stem = cleaned.trim_end_matches('.');
    format!("{stem}{NOTE_EXTENSION}")
}

/// `true` only if `path` resolves to a location under `allowed_dir`.
pub fn validate_within(path: &Path, allowed_dir: &Path) -> bool {
    resolve_within(path, allowed_dir).is_some()
}

/// Resolved form of `path` when it stays under `allowed_dir`; `None` on escape or on any
/// resolution failure.
pub fn resolve_within(path: &Path, allowed_dir: &Path) -> Option<PathBuf> {
    let dir = resolve_lenient(allowed_dir)?;
    let resolved = resolve_lenient(path)?;
    if resolved.starts_with(&dir) && resolved != dir {
        Some(resolved)
    } else {
        None
    }
}

/// Canonicalize the existing prefix of `path` and apply the remaining components lexically.
///
/// Symlinks are followed wherever they exist. A link that cannot be resolved (dangling or
/// looping) fails the whole resolution.
fn resolve_lenient(path: &Path) -> Option<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(path)
    };

    let mut resolved = PathBuf::new();
    let mut on_disk = true;
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
                // Climbing back out of a missing subtree lands on disk again.
                on_disk = resolved.exists();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if !on_disk {
                    continue;
                }
                match resolved.canonicalize() {
                    Ok(canonical) => resolved = canonical,
                    Err(err) if err.kind() == ErrorKind::NotFound => {
                        if resolved.symlink_metadata().is_ok() {
                            return None;
                        }
                        on_disk = false;
                    }
                    Err(_) => return None,
                }
            }
        }
    }
    Some(resolved)
}
