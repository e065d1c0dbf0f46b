//! # Configuration
//!
//! Drafts configuration is managed by [`confique`], which layers environment
//! variables over an optional TOML file and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `DRAFTS_STORAGE_KEY`, `DRAFTS_FEATURED_COUNT`.
//! 2. **Config file**: `<data_dir>/drafts.toml`.
//! 3. **Compiled Defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_key` | `drafts_posts_v1` | Name of the slot holding the collection |
//! | `featured_count` | `3` | How many records the home view shows |

use crate::error::{DraftsError, Result};
use crate::store::DEFAULT_STORAGE_KEY;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILENAME: &str = "drafts.toml";
const DEFAULT_FEATURED_COUNT: usize = 3;

/// Configuration for drafts, stored in `drafts.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DraftsConfig {
    /// Name of the storage slot holding the collection.
    #[config(env = "DRAFTS_STORAGE_KEY", default = "drafts_posts_v1")]
    pub storage_key: String,

    /// Number of records shown on the home view.
    #[config(env = "DRAFTS_FEATURED_COUNT", default = 3)]
    pub featured_count: usize,
}

impl Default for DraftsConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            featured_count: DEFAULT_FEATURED_COUNT,
        }
    }
}

impl DraftsConfig {
    /// Loads configuration for the given data directory. A missing file is fine;
    /// a malformed one is an error.
    pub fn load(data_dir: &Path) -> Result<Self> {
        DraftsConfig::builder()
            .env()
            .file(data_dir.join(CONFIG_FILENAME))
            .load()
            .map_err(|e| DraftsError::Config(e.to_string()))
    }

    /// Get a single setting as display text.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage_key" => Some(self.storage_key.clone()),
            "featured_count" => Some(self.featured_count.to_string()),
            _ => None,
        }
    }
}
