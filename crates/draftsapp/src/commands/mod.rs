//! # Command Layer
//!
//! This module contains the **core business logic** of drafts. Each use case lives
//! in its own submodule as a plain function over a [`RecordStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate input (trimming, the empty-message gate, the safety scan)
//! - Do the load → compute → save cycle against the store
//! - Return a structured [`CmdResult`] with affected records and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr, or formatting
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Write Discipline
//!
//! Mutating commands load the collection immediately before computing the new
//! one and save it in a single call. A command that fails validation, or that
//! has nothing to change, does not write at all.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and inspect both the `CmdResult` and the stored collection.
//!
//! ## Command Modules
//!
//! - [`create`]: Validate and prepend a new record
//! - [`relate`]: Bump a record's reaction counter
//! - [`seed`]: Prepend a batch of trusted sample records
//! - [`list`]: Filtered, sorted archive view
//! - [`featured`]: First few records in stored order
//! - [`stats`]: Record count and total reactions
//! - [`helpers`]: Shared utilities (id prefix resolution)
//!
//! [`RecordStore`]: crate::store::RecordStore

use crate::model::Record;
use serde::Serialize;

pub mod create;
pub mod featured;
pub mod helpers;
pub mod list;
pub mod relate;
pub mod seed;
pub mod stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Collection totals shown on the home view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub records: usize,
    pub relates: u64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created or modified by the command.
    pub affected_records: Vec<Record>,
    /// Records to display, in display order.
    pub listed_records: Vec<Record>,
    pub stats: Option<Stats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }
}
