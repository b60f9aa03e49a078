//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Resolve store path and logging settings shared by FFI and CLI hosts.
//!
//! # Invariants
//! - Blank variables are treated as unset.
//! - The store path is resolved once per process.

use crate::logging::default_log_level;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Overrides the SQLite store file.
pub const DB_PATH_ENV: &str = "PINNOTE_DB_PATH";
/// Overrides the log level (`trace|debug|info|warn|error`).
pub const LOG_LEVEL_ENV: &str = "PINNOTE_LOG_LEVEL";
/// Enables file logging in hosts that support it.
pub const LOG_DIR_ENV: &str = "PINNOTE_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "pinnote_store.sqlite3";

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Store file path: `PINNOTE_DB_PATH`, or a file in the temp directory.
pub fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            env_value(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME))
        })
        .clone()
}

/// Log level from `PINNOTE_LOG_LEVEL`, or the build-mode default.
pub fn resolve_log_level() -> String {
    env_value(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string())
}

/// Log directory from `PINNOTE_LOG_DIR`, if set.
pub fn resolve_log_dir() -> Option<String> {
    env_value(LOG_DIR_ENV)
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
