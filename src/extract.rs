// File: ./src/extract.rs
// Pulls unchecked checklist lines out of note text
use crate::model::{CHECKBOX_PREFIX, ChecklistItem};

/// Scans `content` line by line and returns every unchecked checklist item
/// found, in line order, tagged with `source` for later grouping.
///
/// A line matches when it reads: optional leading whitespace, a dash,
/// optional whitespace, `[` whitespace* `]`, whitespace, then the item text.
/// Checked boxes (`[x]`) never match and items whose text trims to nothing
/// are dropped.
pub fn extract(content: &str, source: &str) -> Vec<ChecklistItem> {
    content
        .lines()
        .filter_map(match_unchecked)
        .map(|text| ChecklistItem::new(format!("{}{}", CHECKBOX_PREFIX, text), source))
        .collect()
}

/// Applies the checklist grammar to a single line. Deliberately a plain
/// scanner rather than a regex so the grammar stays auditable.
fn match_unchecked(line: &str) -> Option<&str> {
    let rest = line.trim_start();
    let rest = rest.strip_prefix('-')?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('[')?;
    // Only whitespace may appear inside the brackets; anything else
    // (e.g. "x") means the box is checked or malformed.
    let rest = rest.trim_start_matches(|c: char| c.is_whitespace());
    let rest = rest.strip_prefix(']')?;
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() { None } else { Some(text) }
}
