//! # Setup Command Implementation
//!
//! This module implements the `setup` subcommand, which bootstraps a fresh
//! workspace:
//!
//! 1. Clone the primary repository into `src/<package>`.
//! 2. Resolve its dependency closure into a vendor tree.
//! 3. Flatten the vendor tree into `src/` next to the repository.
//!
//! An existing `src/` tree is never touched unless `--overwrite` is given,
//! in which case `src/` and `bin/` are deleted and everything is recloned
//! from scratch.

use anyhow::Result;
use clap::Args;

use vendorspace::workspace::Workspace;
use vendorspace::{fsutil, git, gomod, vendor};

/// Clone the primary repository and build the flattened workspace
#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Overwrite an existing workspace and reclone everything.
    #[arg(long)]
    pub overwrite: bool,
}

/// Execute the `setup` command.
pub fn execute(workspace: &Workspace, args: SetupArgs) -> Result<()> {
    let src = workspace.src_dir();
    if src.exists() && !args.overwrite {
        anyhow::bail!(
            "src directory {} already set up, pass --overwrite to reclone",
            src.display()
        );
    }

    fsutil::remove_if_exists(&workspace.bin_dir())?;
    fsutil::remove_if_exists(&src)?;

    eprintln!("# Cloning repository");
    git::clone(&workspace.repo_url, &workspace.repo_dir())?;

    eprintln!("# Vendoring modules");
    gomod::vendor_modules(&workspace.repo_dir())?;

    eprintln!("# Flattening vendor");
    vendor::flatten(&workspace.vendor_dir(), &src)?;

    Ok(())
}
