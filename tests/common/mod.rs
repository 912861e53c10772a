// Shared test double: an in-memory document store with read-count
// instrumentation, so cache behavior can be asserted without touching disk.
#![allow(dead_code)]
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use todoboard::model::DocMeta;
use todoboard::store::{DocumentStore, StoreError};

#[derive(Default)]
pub struct MemStore {
    docs: Mutex<HashMap<String, (i64, String)>>,
    reads: Mutex<HashMap<String, usize>>,
    broken: Mutex<HashSet<String>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, path: &str, mtime: i64, text: &str) {
        self.docs
            .lock()
            .unwrap()
            .insert(path.to_string(), (mtime, text.to_string()));
    }

    pub fn remove(&self, path: &str) {
        self.docs.lock().unwrap().remove(path);
    }

    pub fn body(&self, path: &str) -> Option<String> {
        self.docs
            .lock()
            .unwrap()
            .get(path)
            .map(|(_, text)| text.clone())
    }

    /// Number of read() calls issued against `path` so far.
    pub fn reads_of(&self, path: &str) -> usize {
        self.reads.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    /// Makes read() fail for `path` with an I/O error until cleared.
    pub fn set_broken(&self, path: &str, broken: bool) {
        let mut set = self.broken.lock().unwrap();
        if broken {
            set.insert(path.to_string());
        } else {
            set.remove(path);
        }
    }
}

#[async_trait]
impl DocumentStore for MemStore {
    async fn list(&self) -> Result<Vec<DocMeta>, StoreError> {
        let mut docs: Vec<DocMeta> = self
            .docs
            .lock()
            .unwrap()
            .iter()
            .map(|(path, (mtime, _))| DocMeta {
                path: path.clone(),
                mtime: *mtime,
            })
            .collect();
        docs.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(docs)
    }

    async fn read(&self, path: &str) -> Result<String, StoreError> {
        *self
            .reads
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_insert(0) += 1;
        if self.broken.lock().unwrap().contains(path) {
            return Err(StoreError::Io(std::io::Error::other("simulated failure")));
        }
        self.docs
            .lock()
            .unwrap()
            .get(path)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| StoreError::NotFound(path.to_string()))
    }

    async fn create(&self, path: &str, text: &str) -> Result<(), StoreError> {
        let mut docs = self.docs.lock().unwrap();
        if docs.contains_key(path) {
            return Err(StoreError::AlreadyExists(path.to_string()));
        }
        docs.insert(path.to_string(), (0, text.to_string()));
        Ok(())
    }

    async fn modify(&self, path: &str, text: &str) -> Result<(), StoreError> {
        let mut docs = self.docs.lock().unwrap();
        let Some(entry) = docs.get_mut(path) else {
            return Err(StoreError::NotFound(path.to_string()));
        };
        entry.1 = text.to_string();
        Ok(())
    }

    async fn exists(&self, path: &str) -> Result<Option<DocMeta>, StoreError> {
        Ok(self
            .docs
            .lock()
            .unwrap()
            .get(path)
            .map(|(mtime, _)| DocMeta {
                path: path.to_string(),
                mtime: *mtime,
            }))
    }
}
