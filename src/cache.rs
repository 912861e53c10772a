// File: ./src/cache.rs
// In-memory scan cache: avoids re-reading notes whose mtime is unchanged
use crate::model::ChecklistItem;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
struct CacheEntry {
    mtime: i64,
    items: Vec<ChecklistItem>,
}

/// Per-process cache mapping a vault path to the items last extracted from
/// it and the mtime that extraction was valid for. Starts empty; the
/// aggregator is its only user. Caching is a pure optimization: an entry is
/// reusable iff its stored mtime equals the document's current one.
#[derive(Debug, Default)]
pub struct ScanCache {
    entries: HashMap<String, CacheEntry>,
}

impl ScanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached items for `path` if they are still valid for
    /// `mtime`; `None` is a cache miss and the caller must re-extract.
    pub fn lookup(&self, path: &str, mtime: i64) -> Option<&[ChecklistItem]> {
        match self.entries.get(path) {
            Some(entry) if entry.mtime == mtime => Some(&entry.items),
            _ => None,
        }
    }

    /// Inserts or overwrites the entry for `path`.
    pub fn store(&mut self, path: &str, mtime: i64, items: Vec<ChecklistItem>) {
        self.entries
            .insert(path.to_string(), CacheEntry { mtime, items });
    }

    /// Drops every entry whose path is not in `current_paths`. Must run
    /// after all documents of a run have been visited, never mid-run.
    pub fn prune(&mut self, current_paths: &HashSet<String>) {
        self.entries.retain(|path, _| current_paths.contains(path));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
