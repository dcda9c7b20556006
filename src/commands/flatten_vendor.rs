//! # Flatten-Vendor Command Implementation
//!
//! Flattens an already-materialized vendor tree (for example one restored
//! by `unzip-vendor`) into the workspace `src/` tree, after pruning stale
//! non-repository material out of the way.

use anyhow::Result;
use clap::Args;

use vendorspace::vendor;
use vendorspace::workspace::Workspace;

/// Flatten an existing vendor tree into the workspace src/ tree
#[derive(Args, Debug)]
pub struct FlattenVendorArgs {}

/// Execute the `flatten-vendor` command.
pub fn execute(workspace: &Workspace, _args: FlattenVendorArgs) -> Result<()> {
    workspace.require_src()?;

    eprintln!("# Cleaning up src");
    workspace.prune_non_repositories()?;

    eprintln!("# Flattening vendor");
    vendor::flatten(&workspace.vendor_dir(), &workspace.src_dir())?;
    Ok(())
}
