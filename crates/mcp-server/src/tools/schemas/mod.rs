//! Tool request schemas.
//!
//! Each request struct doubles as the JSON schema advertised in `tools/list` and as the typed
//! view a handler parses its arguments into.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;

pub(in crate::tools) mod card;
pub(in crate::tools) mod draft;

/// Typed tool arguments.
///
/// `REQUIRED` lists the keys that must be present (and non-null) before the arguments are
/// deserialized, so a missing key is reported by name instead of as a serde error.
pub(in crate::tools) trait ToolArgs: DeserializeOwned + JsonSchema {
    const REQUIRED: &'static [&'static str];
}
