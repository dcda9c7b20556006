//! External module resolver invocation (`go mod vendor`, `go mod tidy`).
//!
//! The resolver is a black box: its output streams are forwarded to the
//! terminal and never parsed. Resolution can fail transiently (network
//! flakiness, proxy hiccups), so each invocation is attempted up to
//! [`RESOLVER_ATTEMPTS`] times, with no delay between attempts, before the
//! failure is surfaced as fatal.
//!
//! Subprocesses are scoped to the repository directory through an explicit
//! working-directory parameter; the process-global working directory is
//! never mutated.

use std::path::Path;
use std::process::{Command, Stdio};

use log::warn;

use crate::error::{Error, Result};
use crate::fsutil::remove_if_exists;

/// How many times a resolver invocation is attempted before giving up.
pub const RESOLVER_ATTEMPTS: u32 = 2;

/// Delete any existing vendor tree, then run `go mod vendor -v` in
/// `repo_dir` to materialize a fresh one.
pub fn vendor_modules(repo_dir: &Path) -> Result<()> {
    remove_if_exists(&repo_dir.join("vendor"))?;
    run_resolver(repo_dir, &["mod", "vendor", "-v"])
}

/// Run `go mod tidy` in `repo_dir`.
pub fn tidy(repo_dir: &Path) -> Result<()> {
    run_resolver(repo_dir, &["mod", "tidy"])
}

/// Delete the vendor tree inside `repo_dir`; absence is not an error.
pub fn delete_vendor(repo_dir: &Path) -> Result<()> {
    remove_if_exists(&repo_dir.join("vendor"))?;
    Ok(())
}

fn run_resolver(repo_dir: &Path, args: &[&str]) -> Result<()> {
    run_with_retry("go", args, repo_dir)
}

fn run_with_retry(program: &str, args: &[&str], repo_dir: &Path) -> Result<()> {
    let command = format!("{} {}", program, args.join(" "));
    let mut message = String::new();

    for attempt in 1..=RESOLVER_ATTEMPTS {
        let result = Command::new(program)
            .args(args)
            .current_dir(repo_dir)
            .env("GO111MODULE", "on")
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match result {
            Ok(status) if status.success() => return Ok(()),
            Ok(status) => message = format!("exited with {}", status),
            Err(e) => message = e.to_string(),
        }
        warn!(
            "`{}` failed on attempt {}/{}: {}",
            command, attempt, RESOLVER_ATTEMPTS, message
        );
    }

    Err(Error::Process { command, message })
}
