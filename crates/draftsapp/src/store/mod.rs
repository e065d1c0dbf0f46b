//! # Storage Layer
//!
//! The whole collection lives in **one named slot** of a persistent key-value
//! substrate. There is no per-record storage and no partial update.
//!
//! ## Two Traits
//!
//! - [`backend::StorageBackend`]: the "how" of storage. Reads and writes raw
//!   strings under a key (a file per key on disk, a map in memory).
//! - [`RecordStore`]: the "what". Turns the slot into a `Vec<Record>` and back,
//!   with the load/save contract described below.
//!
//! [`slot_store::SlotStore`] implements `RecordStore` over any backend.
//!
//! ## Load Contract
//!
//! `load()` never fails. Each of these yields an empty collection:
//!
//! 1. **Absent**: the slot has never been written.
//! 2. **Unreadable**: the backend returned an I/O error.
//! 3. **Malformed**: the content is not a JSON array of records (see
//!    [`crate::model`] for which fields are lenient and which are not), or two
//!    records share an id.
//!
//! Cases 2 and 3 are logged at `warn`. Note that the next successful `save()`
//! overwrites the malformed content.
//!
//! ## Save Contract
//!
//! `save()` replaces the entire collection with a single write. Errors
//! propagate to the caller, who must not assume anything was persisted.
//!
//! Callers must not assume isolation from other writers. Commands do
//! load → compute → save, so two processes sharing a slot can lose each
//! other's updates; the last writer wins. No cross-process locking is done.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production, one `{key}.json` file per slot.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── drafts.toml              # Configuration (optional)
//! └── drafts_posts_v1.json     # The record slot
//! ```

use crate::error::Result;
use crate::model::Record;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod slot_store;

/// Default name of the slot holding the collection.
pub const DEFAULT_STORAGE_KEY: &str = "drafts_posts_v1";

/// Abstract interface for the record collection.
pub trait RecordStore {
    /// Returns the persisted collection, or an empty one if there is nothing
    /// usable in storage.
    fn load(&self) -> Vec<Record>;

    /// Replaces the whole persisted collection.
    fn save(&mut self, records: &[Record]) -> Result<()>;
}
