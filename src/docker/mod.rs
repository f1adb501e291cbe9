//! Docker CLI integration.
//!
//! Provides functionality for:
//! - Building the `docker ps` argument vector from user options
//! - Running the docker binary and capturing its output
//! - Parsing `{{json .}}` output into [`Record`](crate::record::Record)s
//!
//! Only the `docker` command line tool is used; the daemon API is never
//! contacted directly.

pub mod command;
pub mod parse;
pub mod runner;

use std::process::ExitStatus;
use std::string::FromUtf8Error;

use thiserror::Error;

pub use command::PsOptions;
pub use parse::parse_records;
pub use runner::{DockerCli, docker_program};

/// Errors from running `docker ps`.
#[derive(Debug, Error)]
pub enum DockerError {
    /// The docker binary could not be found.
    #[error("'{0}' command not found. Ensure Docker is installed and on your PATH")]
    NotInstalled(String),

    /// The docker binary exists but could not be started.
    #[error("failed to run '{program}': {source}")]
    Spawn {
        /// Binary that was launched.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Docker exited unsuccessfully.
    #[error("docker command failed ({status}): {stderr}")]
    CommandFailed {
        /// Exit status of the process.
        status: ExitStatus,
        /// Captured stderr, trimmed.
        stderr: String,
    },

    /// Docker wrote output that is not UTF-8.
    #[error("docker output is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),

    /// A line of `docker ps` output is not valid JSON.
    #[error("invalid JSON on line {line} of docker output: {source}")]
    InvalidJson {
        /// 1-based line number.
        line: usize,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A line of `docker ps` output is JSON but not an object.
    #[error("line {line} of docker output is not a JSON object")]
    NotAnObject {
        /// 1-based line number.
        line: usize,
    },
}
