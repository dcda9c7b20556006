//! # Update Command Implementation
//!
//! This module implements the `update` subcommand, which reconciles an
//! existing workspace with a freshly resolved dependency closure:
//!
//! 1. Prune everything under `src/` that is not a live repository (or an
//!    ancestor directory of one), clearing leftovers of a previous flatten.
//! 2. Resolve the dependency closure into a fresh vendor tree.
//! 3. Flatten the vendor tree into `src/`.
//!
//! Pruning runs before flattening so the merge never overwrites a
//! directory that is itself a live repository: live repositories carry a
//! version-control marker and survive the prune, so they are still present
//! to be detected, while stale vendored directories are cleared out of the
//! way.

use anyhow::Result;
use clap::Args;

use vendorspace::workspace::Workspace;
use vendorspace::{gomod, vendor};

/// Re-resolve dependencies and reconcile the workspace src/ tree
#[derive(Args, Debug)]
pub struct UpdateArgs {}

/// Execute the `update` command.
pub fn execute(workspace: &Workspace, _args: UpdateArgs) -> Result<()> {
    workspace.require_src()?;

    eprintln!("# Cleaning up src");
    workspace.prune_non_repositories()?;

    eprintln!("# Vendoring modules");
    gomod::vendor_modules(&workspace.repo_dir())?;

    eprintln!("# Flattening vendor");
    vendor::flatten(&workspace.vendor_dir(), &workspace.src_dir())?;

    Ok(())
}
