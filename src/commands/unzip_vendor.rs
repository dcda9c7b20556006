//! # Unzip-Vendor Command Implementation
//!
//! Materializes a vendor tree from an archive previously written by
//! `zip-vendor` or `cache`. Any existing vendor tree is deleted first so
//! the restore starts from a clean destination.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use vendorspace::workspace::Workspace;
use vendorspace::{archive, gomod};

/// Restore a vendor tree from a previously written archive
#[derive(Args, Debug)]
pub struct UnzipVendorArgs {
    /// Source archive file.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,
}

/// Execute the `unzip-vendor` command.
pub fn execute(workspace: &Workspace, args: UnzipVendorArgs) -> Result<()> {
    eprintln!("# Unzipping vendor");

    let data = fs::read(&args.source)
        .with_context(|| format!("unable to read archive {}", args.source.display()))?;

    gomod::delete_vendor(&workspace.repo_dir())?;
    archive::restore(&data, &workspace.vendor_dir())?;
    Ok(())
}
