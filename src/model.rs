// File: ./src/model.rs
// Shared data types and rendering constants
use serde::{Deserialize, Serialize};

/// Prefix every unchecked checklist line is rendered with, and the prefix
/// the diff writer keys on when counting item lines in a dashboard body.
pub const CHECKBOX_PREFIX: &str = "- [ ] ";

/// Marker placed before the wiki-link in each per-document heading.
pub const HEADING_MARKER: &str = "📄";

/// One unchecked checklist line, already rendered with [`CHECKBOX_PREFIX`].
/// `source` is the vault-relative path of the note it came from; it is used
/// only for grouping and never appears inside `text`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub text: String,
    pub source: String,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }
}

/// Listing entry returned by a document store: path plus the modification
/// timestamp used for change detection (never for ordering).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocMeta {
    pub path: String,
    pub mtime: i64,
}
