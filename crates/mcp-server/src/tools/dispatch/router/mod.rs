// Per-tool handler functions used by the dispatch registry.

pub(super) mod card;
pub(super) mod draft;
pub(super) mod error;
