//! # Zettel Cards
//!
//! Rendering and persistence of Zettelkasten cards.
//!
//! ## Pipeline
//!
//! ```text
//! Settings (config.toml)
//!     │
//!     ├──> Template renderer ({{title}}, {{content}}, {{timestamp}}, {{created_at}}, {{heading}})
//!     │      └─> card text + "<YYYYMMDDHHMMSS> - <title>.md"
//!     │
//!     ├──> Guard (sanitize name, verify containment)
//!     │
//!     └──> Writer (backup existing file, write-then-rename)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use zettel_cards::{render_card, save_card, CardFields, CardTimestamp, Settings};
//!
//! let settings = Settings::from_env();
//! let template = settings.load_template().unwrap_or_default();
//! let card = render_card(
//!     &template,
//!     &CardFields { title: "Atomic Notes", content: "One idea per card.", heading: "" },
//!     &CardTimestamp::now(),
//! );
//! let outcome = save_card(&settings, &card.filename, &card.text)?;
//! println!("saved {}", outcome.path.display());
//! # Ok::<(), zettel_cards::CardError>(())
//! ```

mod error;
pub mod guard;
pub mod settings;
pub mod template;
pub mod writer;

pub use error::{CardError, Result, SettingsError};
pub use guard::{resolve_within, sanitize_filename, validate_within, NOTE_EXTENSION};
pub use settings::Settings;
pub use template::{card_filename, render, render_card, CardFields, CardTimestamp, RenderedCard};
pub use writer::{backup_path_for, save_card, write_card, WriteOutcome, BACKUP_SUFFIX};
