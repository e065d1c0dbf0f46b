//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every drafts operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g. resolving an id prefix to a stored id)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own and never formats output.
//!
//! ## Generic Over RecordStore
//!
//! `DraftsApi<S: RecordStore>` owns its store:
//! - Production: `DraftsApi<FileStore>`
//! - Testing: `DraftsApi<InMemoryStore>`
//!
//! ## Concurrency
//!
//! Every mutating call is load → compute → save with no locking. Two processes
//! pointed at the same data directory can overwrite each other's changes; the
//! last writer wins.

use crate::commands;
use crate::error::Result;
use crate::model::{RecordId, Sample, Tag};
use crate::store::RecordStore;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Stats};
pub use crate::query::{RecordQuery, SortMode, TagFilter};

/// The main API facade for drafts operations.
pub struct DraftsApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> DraftsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates and stores a new draft. `thought` defaults to empty and `tag`
    /// to [`Tag::Unspecified`].
    pub fn create_record(
        &mut self,
        message: &str,
        thought: Option<&str>,
        tag: Option<Tag>,
    ) -> Result<CmdResult> {
        commands::create::run(&mut self.store, message, thought, tag)
    }

    /// Adds one reaction to the record with exactly this id. Unknown ids are a no-op.
    pub fn increment_relate(&mut self, id: &str) -> Result<CmdResult> {
        commands::relate::run(&mut self.store, id)
    }

    pub fn seed_samples(&mut self, samples: &[Sample]) -> Result<CmdResult> {
        commands::seed::run(&mut self.store, samples)
    }

    pub fn list_featured(&self, count: usize) -> Result<CmdResult> {
        commands::featured::run(&self.store, count)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn query_records(&self, query: &RecordQuery) -> Result<CmdResult> {
        commands::list::run(&self.store, query)
    }

    /// Resolves a full id or unambiguous prefix against the stored collection.
    pub fn resolve_id(&self, input: &str) -> Result<Option<RecordId>> {
        let records = self.store.load();
        commands::helpers::resolve_id(&records, input)
    }
}
