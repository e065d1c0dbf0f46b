//! # Initialization
//!
//! Resolves where drafts keeps its data, loads configuration from there and
//! wires a [`DraftsApi`] over a [`FileStore`].
//!
//! ## Data Directory
//!
//! In priority order:
//! 1. An explicit override (the CLI's `--data` flag).
//! 2. The `DRAFTS_DATA` environment variable (handy for tests and scripts).
//! 3. The OS-appropriate data directory (via the `directories` crate), e.g.
//!    `~/.local/share/drafts` on Linux.
//!
//! The directory is not created here; the store creates it on first save.

use crate::api::DraftsApi;
use crate::config::DraftsConfig;
use crate::error::{DraftsError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use log::{info, warn};
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "DRAFTS_DATA";

pub struct DraftsContext {
    pub api: DraftsApi<FileStore>,
    pub config: DraftsConfig,
    pub data_dir: PathBuf,
}

/// Picks the data directory following the order documented above.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "drafts", "drafts")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DraftsError::Config("Could not determine a data directory".to_string()))
}

/// Builds the context used by UI clients.
///
/// A malformed config file is reported and replaced by defaults rather than
/// blocking access to the archive.
pub fn initialize(data_override: Option<PathBuf>) -> Result<DraftsContext> {
    let data_dir = resolve_data_dir(data_override)?;

    let config = match DraftsConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!("event=config_load status=fallback error={}", e);
            DraftsConfig::default()
        }
    };

    let store = FileStore::new(data_dir.clone()).with_key(config.storage_key.clone());
    info!(
        "event=core_init status=ok data_dir={} key={}",
        data_dir.display(),
        config.storage_key
    );

    Ok(DraftsContext {
        api: DraftsApi::new(store),
        config,
        data_dir,
    })
}
