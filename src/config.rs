// File: ./src/config.rs
// Persisted settings: vault location, dashboard path, exclusions
use crate::storage;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_TARGET: &str = "Todo Dashboard.md";

/// Settings are immutable for the duration of an aggregation run. Missing
/// fields in the stored file merge over the defaults below.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Settings {
    /// Vault root directory. Optional in the file; the CLI requires it
    /// either here or as an argument.
    pub vault_dir: Option<String>,
    /// Vault-relative path of the dashboard note.
    pub target_path: String,
    /// Vault-relative path prefixes to skip while scanning.
    pub excluded_prefixes: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: None,
            target_path: DEFAULT_TARGET.to_string(),
            excluded_prefixes: Vec::new(),
        }
    }
}

impl Settings {
    pub fn get_path() -> Option<PathBuf> {
        // ISOLATION: Check env var first
        if let Ok(test_dir) = env::var("TODOBOARD_TEST_DIR") {
            let path = PathBuf::from(test_dir);
            if !path.exists() {
                let _ = fs::create_dir_all(&path);
            }
            return Some(path.join("config.toml"));
        }

        if let Some(proj) = ProjectDirs::from("com", "trougnouf", "todoboard") {
            let config_dir = proj.config_dir();
            if !config_dir.exists() {
                let _ = fs::create_dir_all(config_dir);
            }
            return Some(config_dir.join("config.toml"));
        }
        None
    }

    /// Loads settings, falling back to defaults when the file is missing
    /// or unreadable. Unknown fields are ignored, missing ones defaulted.
    pub fn load() -> Self {
        if let Some(path) = Self::get_path()
            && path.exists()
            && let Ok(content) = fs::read_to_string(&path)
            && let Ok(settings) = toml::from_str::<Settings>(&content)
        {
            return settings;
        }
        Self::default()
    }

    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::get_path() {
            storage::with_lock(&path, || {
                let body = toml::to_string_pretty(self)?;
                storage::atomic_write(&path, body)
            })?;
        }
        Ok(())
    }
}
