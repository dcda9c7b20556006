//! Version-control client invocation.
//!
//! Cloning uses the system git command, which automatically handles SSH
//! keys, credential helpers, and anything else configured in the user's
//! environment. Output streams are forwarded to the terminal for human
//! inspection, never parsed.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Clone `url` into `target_dir`. Any non-zero exit is fatal.
pub fn clone(url: &str, target_dir: &Path) -> Result<()> {
    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent).map_err(Error::file(parent))?;
    }

    let command = format!("git clone {}", url);
    let status = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(target_dir)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| Error::Process {
            command: command.clone(),
            message: e.to_string(),
        })?;

    if !status.success() {
        return Err(Error::Process {
            command,
            message: format!("exited with {}", status),
        });
    }

    Ok(())
}
