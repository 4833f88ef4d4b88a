//! Literal `{{placeholder}}` substitution for card templates.

use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use std::fmt::Display;

use crate::guard::NOTE_EXTENSION;

pub const TITLE_PLACEHOLDER: &str = "{{title}}";
pub const CONTENT_PLACEHOLDER: &str = "{{content}}";
pub const TIMESTAMP_PLACEHOLDER: &str = "{{timestamp}}";
pub const CREATED_AT_PLACEHOLDER: &str = "{{created_at}}";
pub const HEADING_PLACEHOLDER: &str = "{{heading}}";

/// Both renderings of the card creation instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTimestamp {
    /// `YYYYMMDDHHMMSS`, used as the filename prefix.
    pub compact: String,
    /// RFC 3339 with offset, seconds precision.
    pub iso: String,
}

impl CardTimestamp {
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn from_datetime<Tz>(at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            compact: at.format("%Y%m%d%H%M%S").to_string(),
            iso: at.to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CardFields<'a> {
    pub title: &'a str,
    pub content: &'a str,
    /// Empty means "no heading".
    pub heading: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub text: String,
    pub filename: String,
}

pub fn render_card(
    template: &str,
    fields: &CardFields<'_>,
    timestamp: &CardTimestamp,
) -> RenderedCard {
    RenderedCard {
        text: render(template, fields, timestamp),
        filename: card_filename(timestamp, fields.title),
    }
}

/// Substitute every placeholder occurrence.
///
/// Without a heading, each line that still contains `{{heading}}` after the other
/// substitutions is dropped as a whole, including any other text on that line.
pub fn render(template: &str, fields: &CardFields<'_>, timestamp: &CardTimestamp) -> String {
    let rendered = template
        .replace(TITLE_PLACEHOLDER, fields.title)
        .replace(CONTENT_PLACEHOLDER, fields.content)
        .replace(TIMESTAMP_PLACEHOLDER, &timestamp.compact)
        .replace(CREATED_AT_PLACEHOLDER, &timestamp.iso);

    if fields.heading.is_empty() {
        strip_lines_containing(&rendered, HEADING_PLACEHOLDER)
    } else {
        rendered.replace(HEADING_PLACEHOLDER, fields.heading)
    }
}

/// `"<compact timestamp> - <title>.md"`
pub fn card_filename(timestamp: &CardTimestamp, title: &str) -> String {
    format!("{} - {title}{NOTE_EXTENSION}", timestamp.compact)
}

fn strip_lines_containing(text: &str, needle: &str) -> String {
    text.split('\n')
        .filter(|line| !line.contains(needle))
        .collect::<Vec<_>>()
        .join("\n")
}
