//! # Cache Command Implementation
//!
//! This module implements the `cache` subcommand: fingerprint the
//! dependency manifests, resolve the closure, snapshot the resulting
//! vendor tree into `<repo>/vendor.zip`, and print the fingerprint on
//! stdout as `HASH: <hex>` for an external build system to capture as a
//! cache key.
//!
//! The resolver runs unconditionally; the archive is an optimization for
//! callers, not a bypass of resolution. By default the
//! written archive is restored into a sibling directory as a verification
//! round trip; `--no-verify` skips that step.

use anyhow::Result;
use clap::Args;

use vendorspace::cache;
use vendorspace::workspace::Workspace;

/// Snapshot the vendor tree and print the manifest fingerprint
#[derive(Args, Debug)]
pub struct CacheArgs {
    /// Skip the verification restore of the freshly written archive.
    #[arg(long)]
    pub no_verify: bool,
}

/// Execute the `cache` command.
pub fn execute(workspace: &Workspace, args: CacheArgs) -> Result<()> {
    eprintln!("# Caching");

    let repo_dir = workspace.repo_dir();
    let archive_path = repo_dir.join("vendor.zip");
    let fingerprint = cache::sync_with_cache(&repo_dir, &archive_path, !args.no_verify)?;

    println!("HASH: {}", fingerprint);
    Ok(())
}
