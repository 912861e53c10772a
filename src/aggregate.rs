// File: ./src/aggregate.rs
// Orchestrates one aggregation run: enumerate, scan, prune, write, report
use crate::cache::ScanCache;
use crate::config::Settings;
use crate::exclude::is_excluded;
use crate::extract::extract;
use crate::store::{DocumentStore, StoreError};
use crate::writer::{WriteOutcome, write_dashboard};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("failed to enumerate documents: {0}")]
    List(#[source] StoreError),
    #[error("failed to write dashboard {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: StoreError,
    },
}

/// Summary of one run, handed to the notification sink by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub content_changed: bool,
    pub added: usize,
    pub removed: usize,
    /// Documents whose body was read and re-extracted this run.
    pub scanned: usize,
    /// Documents served from the scan cache this run.
    pub from_cache: usize,
}

impl RunReport {
    pub fn summary(&self) -> String {
        if self.content_changed {
            format!(
                "Dashboard updated: {} added, {} removed.",
                self.added, self.removed
            )
        } else {
            "No changes.".to_string()
        }
    }
}

/// Drives the whole pipeline and owns the scan cache. Runs are serialized
/// by the `&mut self` receiver: within one process the borrow checker is
/// the run-level lock, so no busy-flag is needed.
pub struct Aggregator<S: DocumentStore> {
    store: S,
    settings: Settings,
    cache: ScanCache,
}

impl<S: DocumentStore> Aggregator<S> {
    pub fn new(store: S, settings: Settings) -> Self {
        Self {
            store,
            settings,
            cache: ScanCache::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn cache(&self) -> &ScanCache {
        &self.cache
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// One full aggregation run. Per-document read failures are logged and
    /// cost that document its contribution this run (it is retried next
    /// run, since nothing is cached for it). Only enumeration or dashboard
    /// write failures abort the run.
    pub async fn aggregate(&mut self) -> Result<RunReport, AggregateError> {
        let docs = self.store.list().await.map_err(AggregateError::List)?;

        let mut items = Vec::new();
        let mut current_paths = HashSet::new();
        let mut scanned = 0usize;
        let mut from_cache = 0usize;

        for doc in &docs {
            if is_excluded(
                &doc.path,
                &self.settings.target_path,
                &self.settings.excluded_prefixes,
            ) {
                debug!(path = %doc.path, "excluded from scan");
                continue;
            }
            current_paths.insert(doc.path.clone());

            if let Some(cached) = self.cache.lookup(&doc.path, doc.mtime) {
                from_cache += 1;
                items.extend_from_slice(cached);
                continue;
            }

            let content = match self.store.read(&doc.path).await {
                Ok(content) => content,
                Err(e) => {
                    warn!(path = %doc.path, error = %e, "failed to read note, skipping");
                    continue;
                }
            };
            scanned += 1;
            let extracted = extract(&content, &doc.path);
            items.extend_from_slice(&extracted);
            self.cache.store(&doc.path, doc.mtime, extracted);
        }

        // Pruning only after the full visit: evicting mid-run would force
        // pointless re-reads within the same run.
        self.cache.prune(&current_paths);

        let WriteOutcome {
            content_changed,
            added,
            removed,
        } = write_dashboard(&self.store, &self.settings.target_path, &items)
            .await
            .map_err(|source| AggregateError::OutputWrite {
                path: self.settings.target_path.clone(),
                source,
            })?;

        let report = RunReport {
            content_changed,
            added,
            removed,
            scanned,
            from_cache,
        };
        info!(
            scanned,
            from_cache,
            items = items.len(),
            changed = content_changed,
            "aggregation run finished"
        );
        Ok(report)
    }
}
