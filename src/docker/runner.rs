//! Running the docker binary.

use std::io::ErrorKind;
use std::process::Command;

use tracing::debug;

use super::{DockerError, PsOptions, parse_records};
use crate::record::Record;

/// Environment variable overriding the docker binary.
pub const DOCKER_ENV: &str = "DPS_DOCKER";

/// Returns the docker command name for the current platform.
fn default_program() -> &'static str {
    if cfg!(target_os = "windows") {
        "docker.exe"
    } else {
        "docker"
    }
}

/// Picks the docker binary: environment first, then config, then the
/// platform default. Blank values are ignored.
#[must_use]
pub fn docker_program(env: Option<&str>, config: Option<&str>) -> String {
    [env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(default_program())
        .to_string()
}

/// Handle on the docker command line tool.
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: String,
}

impl DockerCli {
    /// Uses `program` as the docker binary.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs `docker ps --format '{{json .}}'` and parses the rows.
    pub fn ps(&self, options: &PsOptions) -> Result<Vec<Record>, DockerError> {
        let stdout = self.run(&options.json_args())?;
        let records = parse_records(&stdout)?;
        debug!("Parsed {} container records", records.len());
        Ok(records)
    }

    /// Runs `docker ps -q` and returns its output without trailing
    /// whitespace.
    pub fn ps_quiet(&self, options: &PsOptions) -> Result<String, DockerError> {
        let stdout = self.run(&options.quiet_args())?;
        Ok(stdout.trim_end().to_string())
    }

    fn run(&self, args: &[String]) -> Result<String, DockerError> {
        debug!("Executing: {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => DockerError::NotInstalled(self.program.clone()),
                _ => DockerError::Spawn {
                    program: self.program.clone(),
                    source,
                },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(DockerError::CommandFailed {
                status: output.status,
                stderr,
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
