//! # Modules Command Implementation
//!
//! Prints the sorted, de-duplicated module list parsed from the vendor
//! manifest, one module per line on stdout. The manifest is looked up
//! inside the vendor tree first and falls back to `src/modules.txt`, where
//! a flatten moves it. A missing manifest yields an empty list.
//!
//! De-duplication collapses entries that string-prefix a kept entry (so
//! subpackage lines fold into their module); pass `--no-prefix-collapse`
//! to keep every distinct line instead.

use anyhow::Result;
use clap::Args;

use vendorspace::manifest::{self, DedupPolicy};
use vendorspace::workspace::Workspace;

/// Print the sorted, de-duplicated module list from the vendor manifest
#[derive(Args, Debug)]
pub struct ModulesArgs {
    /// Only remove exact duplicates instead of collapsing prefixed entries.
    #[arg(long)]
    pub no_prefix_collapse: bool,
}

/// Execute the `modules` command.
pub fn execute(workspace: &Workspace, args: ModulesArgs) -> Result<()> {
    let vendored = workspace.vendor_dir().join("modules.txt");
    let flattened = workspace.src_dir().join("modules.txt");
    let path = if vendored.is_file() { vendored } else { flattened };

    let policy = DedupPolicy {
        prefix_collapse: !args.no_prefix_collapse,
    };
    for module in manifest::read_modules(&path, policy)? {
        println!("{}", module);
    }
    Ok(())
}
