//! # Zip-Vendor Command Implementation
//!
//! Resolves the dependency closure, archives the resulting vendor tree to
//! the given destination file, and deletes the vendor tree afterwards.
//! The archive can later be materialized with `unzip-vendor`, possibly on
//! another machine or in a build environment without network access.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use vendorspace::workspace::Workspace;
use vendorspace::{archive, gomod};

/// Vendor dependencies and archive the vendor tree to a file
#[derive(Args, Debug)]
pub struct ZipVendorArgs {
    /// Destination file for the vendor archive.
    #[arg(value_name = "DESTINATION")]
    pub destination: PathBuf,
}

/// Execute the `zip-vendor` command.
pub fn execute(workspace: &Workspace, args: ZipVendorArgs) -> Result<()> {
    eprintln!("# Zipping vendor");

    let repo_dir = workspace.repo_dir();
    gomod::vendor_modules(&repo_dir)?;

    let data = archive::capture(&workspace.vendor_dir())?;

    eprintln!("# Deleting vendor");
    gomod::delete_vendor(&repo_dir)?;

    fs::write(&args.destination, data)
        .with_context(|| format!("unable to write archive to {}", args.destination.display()))?;
    Ok(())
}
