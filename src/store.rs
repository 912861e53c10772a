// File: ./src/store.rs
// Document store collaborator: the vault as seen by the aggregator
use crate::model::DocMeta;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("document already exists: {0}")]
    AlreadyExists(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Everything the aggregator needs from document storage. Implemented by
/// [`FsStore`] in production and by in-memory fakes in tests.
#[async_trait]
pub trait DocumentStore {
    /// Enumerates all documents with their current modification times.
    /// Ordering must be stable across calls while the vault is unchanged.
    async fn list(&self) -> Result<Vec<DocMeta>, StoreError>;
    async fn read(&self, path: &str) -> Result<String, StoreError>;
    async fn create(&self, path: &str, text: &str) -> Result<(), StoreError>;
    async fn modify(&self, path: &str, text: &str) -> Result<(), StoreError>;
    /// Returns the document's listing entry, or `None` if no document
    /// exists at `path`.
    async fn exists(&self, path: &str) -> Result<Option<DocMeta>, StoreError>;
}

/// Markdown vault rooted at a directory on disk. Paths are vault-relative
/// and slash-separated regardless of platform.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    // Millisecond resolution: whole seconds would let a note rewritten in
    // the same second it was scanned keep validating a stale cache entry.
    fn mtime_of(meta: &std::fs::Metadata) -> i64 {
        meta.modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }

    fn relative(&self, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(&self.root).ok()?;
        let mut parts = Vec::new();
        for component in rel.iter() {
            // A component that is not valid UTF-8 disqualifies the whole
            // entry rather than producing a mangled path.
            parts.push(component.to_str()?);
        }
        Some(parts.join("/"))
    }

    /// Atomic write: write to a .tmp sibling then rename over the target.
    async fn atomic_write(&self, path: &Path, text: &str) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = path.with_extension("tmp");
        tokio::fs::write(&tmp, text).await?;
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FsStore {
    async fn list(&self) -> Result<Vec<DocMeta>, StoreError> {
        let mut docs = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            // Skip dotfiles and dot-directories (.git, .obsidian, ...).
            .filter_entry(|e| {
                e.depth() == 0
                    || !e
                        .file_name()
                        .to_str()
                        .is_some_and(|name| name.starts_with('.'))
            });
        for entry in walker {
            let entry = entry.map_err(|e| StoreError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            let Some(path) = self.relative(entry.path()) else {
                continue;
            };
            let meta = entry.metadata().map_err(|e| StoreError::Io(e.into()))?;
            docs.push(DocMeta {
                path,
                mtime: Self::mtime_of(&meta),
            });
        }
        // Stable enumeration keeps dashboard group order reproducible.
        docs.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(docs)
    }

    async fn read(&self, path: &str) -> Result<String, StoreError> {
        let full = self.full_path(path);
        match tokio::fs::read_to_string(&full).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(path.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn create(&self, path: &str, text: &str) -> Result<(), StoreError> {
        let full = self.full_path(path);
        if tokio::fs::try_exists(&full).await? {
            return Err(StoreError::AlreadyExists(path.to_string()));
        }
        self.atomic_write(&full, text).await
    }

    async fn modify(&self, path: &str, text: &str) -> Result<(), StoreError> {
        let full = self.full_path(path);
        if !tokio::fs::try_exists(&full).await? {
            return Err(StoreError::NotFound(path.to_string()));
        }
        self.atomic_write(&full, text).await
    }

    async fn exists(&self, path: &str) -> Result<Option<DocMeta>, StoreError> {
        if path.is_empty() {
            return Ok(None);
        }
        let full = self.full_path(path);
        match tokio::fs::metadata(&full).await {
            Ok(meta) if meta.is_file() => Ok(Some(DocMeta {
                path: path.to_string(),
                mtime: Self::mtime_of(&meta),
            })),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
