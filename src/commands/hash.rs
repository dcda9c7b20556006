//! # Hash Command Implementation
//!
//! Prints the bare fingerprint of the dependency manifests (`go.mod` and
//! `go.sum`) to stdout. Missing manifests contribute nothing to the
//! digest, so the command works in a repository that has never resolved
//! anything yet.

use anyhow::Result;
use clap::Args;

use vendorspace::cache;
use vendorspace::workspace::Workspace;

/// Print the fingerprint of the dependency manifests
#[derive(Args, Debug)]
pub struct HashArgs {}

/// Execute the `hash` command.
pub fn execute(workspace: &Workspace, _args: HashArgs) -> Result<()> {
    let fingerprint = cache::manifest_fingerprint(&workspace.repo_dir())?;
    println!("{}", fingerprint);
    Ok(())
}
