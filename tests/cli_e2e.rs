//! End-to-end tests: run the `dps` binary against a scripted fake docker.
//!
//! The fake is selected through `DPS_DOCKER`, and `--config` points at a
//! file that does not exist so the user's own `~/.dpsrc` is never read.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const FAKE_DOCKER: &str = r#"#!/bin/sh
echo "$@" >> "$(dirname "$0")/calls.log"
case " $* " in
  *" -q "*)
    printf 'abc123\ndef456\n'
    ;;
  *)
    echo '{"ID":"abc123","Image":"nginx","Command":"nginx","CreatedAt":"2026-10-01","Status":"Up 2 hours","Ports":"80/tcp","Names":"web"}'
    echo '{"ID":"def456","Image":"redis","Command":"redis-server","CreatedAt":"2026-10-02","Status":"Exited (0) 1 day ago","Ports":"","Names":"cache"}'
    ;;
esac
"#;

const BROKEN_DOCKER: &str = "#!/bin/sh\necho 'Cannot connect to the Docker daemon' >&2\nexit 1\n";

struct Sandbox {
    dir: TempDir,
    docker: PathBuf,
}

impl Sandbox {
    fn new(script: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let docker = dir.path().join("docker");
        std::fs::write(&docker, script).unwrap();
        let mut perms = std::fs::metadata(&docker).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&docker, perms).unwrap();
        Self { dir, docker }
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join("dpsrc")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_dps"))
            .arg("--config")
            .arg(self.config())
            .arg("--no-color")
            .args(args)
            .env("DPS_DOCKER", &self.docker)
            .env("HOME", self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    fn calls(&self) -> String {
        std::fs::read_to_string(self.dir.path().join("calls.log")).unwrap_or_default()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write(path: &Path, content: &str) {
    std::fs::write(path, content).unwrap();
}

#[test]
fn test_default_table() {
    let sandbox = Sandbox::new(FAKE_DOCKER);
    let output = sandbox.run(&[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    for header in ["ID", "Image", "Command", "Created", "Status", "Ports", "Names"] {
        assert!(out.contains(header), "missing {header} in:\n{out}");
    }
    assert!(out.contains("web") && out.contains("cache"));
    assert!(!out.contains('\u{1b}'), "no escapes expected with --no-color");
    assert!(sandbox.calls().starts_with("ps --format {{json .}}"));
}

#[test]
fn test_column_switches_and_find() {
    let sandbox = Sandbox::new(FAKE_DOCKER);
    let output = sandbox.run(&["--name", "--status", "--find", "Status=Up*"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Names") && out.contains("Status"));
    assert!(!out.contains("Image"));
    assert!(out.contains("web"));
    assert!(!out.contains("cache"));
}

#[test]
fn test_find_without_matches_exits_cleanly() {
    let sandbox = Sandbox::new(FAKE_DOCKER);
    let output = sandbox.run(&["--find", "Names=nothing-*", "--log-level", "INFO"]);

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("No containers matched find filters."));
}

#[test]
fn test_size_column_adds_size_flag() {
    let sandbox = Sandbox::new(FAKE_DOCKER);
    let output = sandbox.run(&["--size", "-a", "--filter", "status=running"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        sandbox.calls().trim_end(),
        "ps --format {{json .}} -a -s -f status=running"
    );
}

#[test]
fn test_quiet_prints_ids() {
    let sandbox = Sandbox::new(FAKE_DOCKER);
    let output = sandbox.run(&["-q", "--find", "Names=web"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "abc123\ndef456\n");
    assert!(stderr(&output).contains("Ignoring --find filter"));
    assert_eq!(sandbox.calls().trim_end(), "ps -q");
}

#[test]
fn test_config_file_applies() {
    let sandbox = Sandbox::new(FAKE_DOCKER);
    write(
        &sandbox.config(),
        "style = ascii\nall = yes\nhide_columns = Command,Created\n",
    );
    let output = sandbox.run(&[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with('+'), "ascii border expected:\n{out}");
    assert!(!out.contains("Command"));
    assert!(sandbox.calls().starts_with("ps --format {{json .}} -a"));
}

#[test]
fn test_docker_failure_exits_with_error() {
    let sandbox = Sandbox::new(BROKEN_DOCKER);
    let output = sandbox.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("Error:"), "stderr: {err}");
    assert!(err.contains("Cannot connect to the Docker daemon"));
}

#[test]
fn test_conflicting_flags_rejected() {
    let sandbox = Sandbox::new(FAKE_DOCKER);
    let output = sandbox.run(&["-n", "3", "--latest"]);

    assert!(!output.status.success());
    assert!(sandbox.calls().is_empty());
}
