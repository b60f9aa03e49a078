//! Rolling file logging for pinnote hosts.
//!
//! # Responsibility
//! - Start one `flexi_logger` file backend per process.
//! - Capture panics into the log with a sanitized payload.
//!
//! # Invariants
//! - Repeating `init_logging` with the same level and directory is a no-op.
//! - A second call with a different level or directory is rejected.
//! - Nothing here panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "pinnote";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 5;
const PANIC_PAYLOAD_LIMIT: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    config: LogConfig,
    _handle: LoggerHandle,
}

/// Validated logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: &'static str,
    pub dir: PathBuf,
}

impl LogConfig {
    /// Parses a level name and an absolute directory.
    pub fn parse(level: &str, dir: &str) -> Result<Self, LoggingError> {
        Ok(Self {
            level: parse_level(level)?,
            dir: parse_dir(dir)?,
        })
    }
}

#[derive(Debug)]
pub enum LoggingError {
    UnknownLevel(String),
    EmptyDir,
    RelativeDir(String),
    CreateDir(PathBuf, std::io::Error),
    Backend(flexi_logger::FlexiLoggerError),
    /// Logging is already running with a different configuration.
    Conflict { active: LogConfig },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyDir => write!(f, "log directory cannot be empty"),
            Self::RelativeDir(dir) => {
                write!(f, "log directory must be an absolute path, got `{dir}`")
            }
            Self::CreateDir(dir, err) => {
                write!(f, "failed to create log directory `{}`: {err}", dir.display())
            }
            Self::Backend(err) => write!(f, "failed to start logger: {err}"),
            Self::Conflict { active } => write!(
                f,
                "logging already active (level `{}`, dir `{}`); refusing to reconfigure",
                active.level,
                active.dir.display()
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir(_, err) => Some(err),
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - Invalid level or directory.
/// - Directory creation or backend startup failure.
/// - `Conflict` when already started with other settings.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    let requested = LogConfig::parse(level, log_dir)?;
    let active = ACTIVE.get_or_try_init(|| start_logger(&requested))?;
    if active.config != requested {
        return Err(LoggingError::Conflict {
            active: active.config.clone(),
        });
    }
    Ok(())
}

/// Active `(level, dir)`, or `None` before `init_logging` succeeds.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (active.config.level, active.config.dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(config: &LogConfig) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(&config.dir)
        .map_err(|err| LoggingError::CreateDir(config.dir.clone(), err))?;

    let handle = Logger::try_with_str(config.level)
        .map_err(LoggingError::Backend)?
        .log_to_file(
            FileSpec::default()
                .directory(config.dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(LoggingError::Backend)?;

    install_panic_hook();
    info!(
        "event=logging_start module=logging status=ok level={} dir={} os={} version={}",
        config.level,
        config.dir.display(),
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        config: config.clone(),
        _handle: handle,
    })
}

fn parse_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnknownLevel(other.to_string())),
    }
}

fn parse_dir(dir: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = dir.trim();
    if trimmed.is_empty() {
        return Err(LoggingError::EmptyDir);
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(LoggingError::RelativeDir(trimmed.to_string()));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Payload may contain note text; strip newlines and cap length.
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        error!(
            "event=panic module=logging status=error location={} payload={}",
            location,
            one_line(&payload, PANIC_PAYLOAD_LIMIT)
        );
        previous(info);
    }));
}

fn one_line(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let mut truncated: String = flattened.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}
