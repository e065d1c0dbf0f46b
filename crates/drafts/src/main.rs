//! # Drafts CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/drafts/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch + context wiring (commands.rs)                  │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  draftsapp: API facade → commands → store                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation failures (empty message, links, handles, phone numbers) are
//! printed verbatim; every other error is prefixed with `Error:`. Both exit 1.

mod cli;
mod samples;

fn main() {
    if let Err(e) = cli::run() {
        if e.is_validation() {
            eprintln!("{}", e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
