//! Logger bootstrap for the CLI process.
//!
//! Library diagnostics go through the `log` facade as `event=... status=...`
//! lines. The CLI sends them to stderr so stdout stays clean for output.
//! `RUST_LOG` sets the level filter unless `--verbose` forces `debug`.

use flexi_logger::{Logger, LoggerHandle};

const DEFAULT_SPEC: &str = "warn";
const VERBOSE_SPEC: &str = "debug";

/// Starts logging. The returned handle must be kept alive for the process.
///
/// Failure to start the logger is not fatal; the CLI simply runs silent.
pub fn init_logging(verbose: bool) -> Option<LoggerHandle> {
    let logger = if verbose {
        Logger::try_with_str(VERBOSE_SPEC)
    } else {
        Logger::try_with_env_or_str(DEFAULT_SPEC)
    };

    logger
        .ok()?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .ok()
}
