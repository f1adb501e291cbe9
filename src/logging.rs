//! Logging setup.
//!
//! Diagnostics go to stderr through a compact `tracing` layer. Optionally a
//! second layer writes plain-text logs to `~/.dps/logs/`, with files older
//! than the retention period removed at startup. `RUST_LOG` overrides the
//! configured level.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use clap::ValueEnum;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Default log retention in hours.
pub const DEFAULT_LOG_RETENTION_HOURS: u32 = 24;

/// Verbosity selected with `--log-level` or `log_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Everything including docker commands and match counts.
    #[value(name = "DEBUG")]
    Debug,
    /// Informational messages such as empty results.
    #[value(name = "INFO")]
    Info,
    /// Warnings only.
    #[default]
    #[value(name = "WARNING", alias = "WARN")]
    Warning,
    /// Errors only.
    #[value(name = "ERROR")]
    Error,
}

impl LogLevel {
    /// Parses a level name (case-insensitive). `warn` is accepted for
    /// `WARNING`.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// `EnvFilter` directive for this level.
    #[must_use]
    pub fn directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum level.
    pub level: LogLevel,
    /// Also write a log file.
    pub to_file: bool,
    /// Log retention period in hours.
    pub retention_hours: u32,
    /// Use ANSI colors on stderr.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            to_file: false,
            retention_hours: DEFAULT_LOG_RETENTION_HOURS,
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Parses retention hours from string.
    #[must_use]
    pub fn parse_retention(value: &str) -> Option<u32> {
        value.trim().parse().ok()
    }
}

/// Returns the log directory path (~/.dps/logs/).
#[must_use]
pub fn log_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dps")
        .join("logs")
}

/// Returns a fresh log file path inside `dir`.
#[must_use]
pub fn log_file_path(dir: &Path) -> PathBuf {
    let now = chrono::Local::now();
    dir.join(format!("dps_{}.log", now.format("%Y-%m-%d_%H-%M-%S")))
}

/// Removes `.log` files in `dir` older than `retention_hours`.
///
/// # Errors
/// Returns error if the directory cannot be read.
pub fn cleanup_old_logs(dir: &Path, retention_hours: u32) -> io::Result<u32> {
    if !dir.exists() {
        return Ok(0);
    }

    let retention = Duration::from_secs(u64::from(retention_hours) * 3600);
    let now = SystemTime::now();
    let mut deleted = 0;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some("log") {
            continue;
        }

        let age = entry
            .metadata()
            .and_then(|m| m.modified())
            .ok()
            .and_then(|modified| now.duration_since(modified).ok());
        if let Some(age) = age {
            if age > retention && fs::remove_file(&path).is_ok() {
                deleted += 1;
            }
        }
    }

    Ok(deleted)
}

/// Initializes the global subscriber.
///
/// Returns the log file path when file logging is enabled.
///
/// # Errors
/// Returns error if the log file cannot be created or a subscriber is
/// already installed.
pub fn init(config: &LogConfig) -> io::Result<Option<PathBuf>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.directive()));

    let stderr_layer = fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(config.ansi)
        .with_writer(io::stderr);

    let mut deleted = 0;
    let mut log_path = None;
    let file_layer = if config.to_file {
        let dir = log_directory();
        fs::create_dir_all(&dir)?;
        deleted = cleanup_old_logs(&dir, config.retention_hours)?;

        let path = log_file_path(&dir);
        let file = File::create(&path)?;
        log_path = Some(path);

        Some(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(false),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)?;

    if let Some(path) = &log_path {
        tracing::debug!("Log file: {}", path.display());
        if deleted > 0 {
            tracing::debug!("Cleaned up {} old log file(s)", deleted);
        }
    }

    Ok(log_path)
}
