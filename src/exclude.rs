// File: ./src/exclude.rs
// Decides which vault paths are skipped during a scan

/// Returns true when `path` must not be scanned: either it is the dashboard
/// itself (scanning it would feed its own output back in forever), or it
/// sits under one of the configured excluded prefixes.
///
/// Prefixes are trimmed, empty entries ignored, and normalized to end with
/// a `/` so that prefix "archive" matches "archive/notes.md" but not
/// "archived-notes.md".
pub fn is_excluded(path: &str, target_path: &str, excluded_prefixes: &[String]) -> bool {
    if path == target_path {
        return true;
    }
    for prefix in excluded_prefixes {
        let trimmed = prefix.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.ends_with('/') {
            if path.starts_with(trimmed) {
                return true;
            }
        } else if path.starts_with(&format!("{}/", trimmed)) {
            return true;
        }
    }
    false
}
