use super::backend::StorageBackend;
use super::{RecordStore, DEFAULT_STORAGE_KEY};
use crate::error::{DraftsError, Result};
use crate::model::Record;
use log::{debug, warn};
use std::collections::HashSet;

/// [`RecordStore`] over a single slot of a [`StorageBackend`].
pub struct SlotStore<B: StorageBackend> {
    /// The underlying storage backend.
    pub(crate) backend: B,
    key: String,
}

impl<B: StorageBackend> SlotStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Where the slot lives, for diagnostics.
    pub fn location(&self) -> String {
        self.backend.slot_location(&self.key)
    }
}

/// Parses the raw slot content. Blank content counts as an empty collection;
/// a repeated id makes the whole slot malformed.
fn parse_slot(raw: &str) -> std::result::Result<Vec<Record>, String> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Vec<Record> = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    let mut seen = HashSet::with_capacity(records.len());
    if let Some(dup) = records.iter().find(|r| !seen.insert(r.id.as_str())) {
        return Err(format!("duplicate id {}", dup.id));
    }
    Ok(records)
}

impl<B: StorageBackend> RecordStore for SlotStore<B> {
    fn load(&self) -> Vec<Record> {
        let raw = match self.backend.read_slot(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=store_load status=absent key={}", self.key);
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    "event=store_load status=unreadable key={} error={}",
                    self.key, e
                );
                return Vec::new();
            }
        };

        match parse_slot(&raw) {
            Ok(records) => {
                debug!(
                    "event=store_load status=ok key={} records={}",
                    self.key,
                    records.len()
                );
                records
            }
            Err(e) => {
                warn!(
                    "event=store_load status=malformed key={} error={}",
                    self.key, e
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        let content = serde_json::to_string(records).map_err(DraftsError::Serialization)?;
        self.backend.write_slot(&self.key, &content)?;
        debug!(
            "event=store_save status=ok key={} records={}",
            self.key,
            records.len()
        );
        Ok(())
    }
}
