//! Diagnostic logging.
//!
//! The terminal belongs to the game, so log output goes to a file. Logging
//! is off unless `FLYING_SQUIRREL_LOG` names that file; `RUST_LOG` picks the
//! level and defaults to `info`.

use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log file path.
pub const LOG_ENV: &str = "FLYING_SQUIRREL_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Filter from `RUST_LOG`, or `info` when unset or unparsable.
pub fn env_filter() -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the file logger if `FLYING_SQUIRREL_LOG` is set.
/// Returns whether logging was enabled.
pub fn init() -> Result<bool> {
    match std::env::var_os(LOG_ENV) {
        Some(path) if !path.is_empty() => {
            init_file(Path::new(&path))?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn init_file(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("could not install logger: {e}"))
}
