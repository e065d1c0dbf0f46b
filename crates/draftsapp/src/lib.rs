//! # Drafts Architecture
//!
//! Drafts keeps an archive of short anonymous "unsent messages". Anyone can add
//! one, browse and filter the archive, and say they relate to an entry.
//!
//! This crate is the **UI-agnostic core**; the `drafts` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/drafts)                                        │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - Owns the built-in sample drafts                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create / relate / seed / list / featured / stats         │
//! │  - Uses safety.rs before writes, query.rs for views         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait: load / save of the whole collection   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - Record ids are pairwise distinct.
//! - Nothing is written when a create fails validation.
//! - `relates` only ever moves up, by exactly one per reaction.
//! - Views are copies; the query engine never touches the stored collection.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, and never writes to stdout/stderr. Diagnostics go
//! through the `log` facade; the client decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each use case
//! - [`store`]: Storage abstraction and implementations
//! - [`safety`]: Best-effort identifying-content scan
//! - [`query`]: Filter and sort engine for the archive view
//! - [`model`]: Core data types (`Record`, `Tag`, `Sample`)
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod query;
pub mod safety;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
