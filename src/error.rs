//! Top-level error type.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::docker::DockerError;

/// Any failure that aborts a run.
#[derive(Debug, Error)]
pub enum AppError {
    /// Running or parsing `docker ps` failed.
    #[error(transparent)]
    Docker(#[from] DockerError),

    /// The config file could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging could not be set up.
    #[error("failed to initialize logging: {0}")]
    Logging(#[source] io::Error),

    /// Writing the table failed.
    #[error("failed to write output: {0}")]
    Render(#[from] io::Error),
}
