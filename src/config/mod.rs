//! Configuration module for dps.
//!
//! Handles loading and parsing the optional `~/.dpsrc` file. The file is
//! never created automatically. Each setting is a `key = value` line; `#`
//! starts a comment, either on its own line or after whitespace following a
//! value.
//!
//! ```text
//! style = minimal
//! hide_columns = Command, Ports
//! header_color = #5f87ff   # inline comment
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use thiserror::Error;
use tracing::warn;

use crate::columns::HideList;
use crate::logging::{DEFAULT_LOG_RETENTION_HOURS, LogConfig, LogLevel};
use crate::render::TableStyle;
use crate::theme::parse_color;

/// Config file name in the home directory.
pub const CONFIG_FILE_NAME: &str = ".dpsrc";

/// Errors while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// A known key has a value that cannot be used.
    #[error("config line {line}: invalid value '{value}' for '{key}'")]
    InvalidValue {
        /// 1-based line number.
        line: usize,
        /// Setting name.
        key: String,
        /// Offending value.
        value: String,
    },
}

/// Settings read from `.dpsrc`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path the config was read from (it may not exist).
    pub config_path: PathBuf,
    /// Default table style.
    pub style: Option<TableStyle>,
    /// Default log level.
    pub log_level: Option<LogLevel>,
    /// Write a log file.
    pub log_to_file: bool,
    /// Log file retention in hours.
    pub log_retention_hours: u32,
    /// Columns always hidden.
    pub hide_columns: HideList,
    /// Default for `--all`.
    pub all: bool,
    /// Default for `--no-trunc`.
    pub no_trunc: bool,
    /// `false` disables ANSI styling.
    pub color: bool,
    /// Header text color.
    pub header_color: Option<Color>,
    /// Border color.
    pub border_color: Option<Color>,
    /// Docker binary.
    pub docker_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: Self::default_config_path(),
            style: None,
            log_level: None,
            log_to_file: false,
            log_retention_hours: DEFAULT_LOG_RETENTION_HOURS,
            hide_columns: HideList::new(),
            all: false,
            no_trunc: false,
            color: true,
            header_color: None,
            border_color: None,
            docker_command: None,
        }
    }
}

impl Config {
    /// Returns the default config file path (~/.dpsrc).
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Loads configuration from the default path.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_config_path())
    }

    /// Loads configuration from a specific path. A missing file gives the
    /// defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self {
            config_path: path.to_path_buf(),
            ..Self::default()
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(config),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        config.parse(&content)?;
        Ok(config)
    }

    /// Parses config file content over the current settings.
    ///
    /// # Errors
    /// Returns the first invalid value.
    pub fn parse(&mut self, content: &str) -> Result<(), ConfigError> {
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                warn!("Ignoring config line {}: expected 'key = value'", idx + 1);
                continue;
            };

            let key = key.trim().to_lowercase();
            let value = strip_inline_comment(value.trim());
            self.apply_setting(idx + 1, &key, value)?;
        }
        Ok(())
    }

    /// Applies a single setting.
    fn apply_setting(&mut self, line: usize, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            line,
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "style" => self.style = Some(TableStyle::from_name(value).ok_or_else(invalid)?),
            "log_level" => self.log_level = Some(LogLevel::from_name(value).ok_or_else(invalid)?),
            "log_to_file" => self.log_to_file = parse_bool(value).ok_or_else(invalid)?,
            "log_retention_hours" | "log_retention" => {
                self.log_retention_hours = LogConfig::parse_retention(value).ok_or_else(invalid)?;
            }
            "hide_columns" => self.hide_columns.extend_csv(value),
            "all" => self.all = parse_bool(value).ok_or_else(invalid)?,
            "no_trunc" => self.no_trunc = parse_bool(value).ok_or_else(invalid)?,
            "color" => self.color = parse_bool(value).ok_or_else(invalid)?,
            "header_color" => self.header_color = Some(parse_color(value).ok_or_else(invalid)?),
            "border_color" => self.border_color = Some(parse_color(value).ok_or_else(invalid)?),
            "docker_command" => {
                self.docker_command = Some(value.to_string()).filter(|v| !v.is_empty());
            }
            _ => warn!("Ignoring unknown config key '{}' on line {}", key, line),
        }
        Ok(())
    }
}

/// Parses a config boolean.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Cuts a trailing `# comment` that follows whitespace.
///
/// A value that starts with `#` (a hex color) is kept.
fn strip_inline_comment(value: &str) -> &str {
    let cut = value
        .char_indices()
        .zip(value.chars().skip(1))
        .find(|((_, c), next)| c.is_whitespace() && *next == '#')
        .map(|((idx, _), _)| idx);
    match cut {
        Some(idx) => value[..idx].trim_end(),
        None => value,
    }
}
