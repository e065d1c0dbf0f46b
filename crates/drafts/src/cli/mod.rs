//! # CLI Behavior
//!
//! This is **one possible UI client** for drafts, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ## Commands
//!
//! - `drafts` / `drafts home`: totals plus the most recent drafts.
//! - `drafts post <message...> [--thought T] [--tag TAG]`: write a draft.
//! - `drafts list [--search Q] [--tag TAG|all] [--sort newest|relate]`: the archive.
//! - `drafts relate <id>`: say you relate (a unique id prefix is enough).
//! - `drafts seed`: add the built-in sample drafts.
//! - `drafts stats`, `drafts config [key]`.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Output formatting (colors, columns, relative times)
//! - `logging`: flexi_logger bootstrap for the `log` facade

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
