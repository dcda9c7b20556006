//! # Istidy Command Implementation
//!
//! Checks whether the dependency manifest is tidy: reads `go.mod`, runs
//! the resolver's tidy step, and re-reads `go.mod`. If tidying changed the
//! file, the changed lines are printed (`+` added, `-` removed). The
//! command fails only when tidying *removed* lines: extra requirements
//! are the signal a contributor forgot to tidy before committing, while
//! additions can come from toolchain version drift and are reported
//! without failing.

use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result};
use clap::Args;

use vendorspace::gomod;
use vendorspace::workspace::Workspace;

/// Check whether the dependency manifest is tidy
#[derive(Args, Debug)]
pub struct IstidyArgs {}

/// Execute the `istidy` command.
pub fn execute(workspace: &Workspace, _args: IstidyArgs) -> Result<()> {
    let manifest = workspace.repo_dir().join("go.mod");

    let before = fs::read_to_string(&manifest)
        .with_context(|| format!("unable to read {}", manifest.display()))?;

    eprintln!("# Tidying modules");
    gomod::tidy(&workspace.repo_dir())?;

    let after = fs::read_to_string(&manifest)
        .with_context(|| format!("unable to read {}", manifest.display()))?;

    if before == after {
        return Ok(());
    }

    let (diff, removed) = diff_lines(&before, &after);
    eprintln!("go.mod is not tidy");
    eprintln!("{}", diff);
    if removed {
        anyhow::bail!("go.mod is not tidy: tidying removed lines");
    }
    Ok(())
}

/// Line-level diff of two manifests: `-` lines only in `before`, `+` lines
/// only in `after`. Duplicate lines are counted, not collapsed.
fn diff_lines(before: &str, after: &str) -> (String, bool) {
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for line in before.lines() {
        *counts.entry(line).or_default() -= 1;
    }
    for line in after.lines() {
        *counts.entry(line).or_default() += 1;
    }

    let mut diff = String::new();
    let mut removed = false;
    for line in before.lines() {
        if counts.get(line).copied().unwrap_or(0) < 0 {
            diff.push_str(&format!("-{}\n", line));
            removed = true;
            *counts.entry(line).or_default() += 1;
        }
    }
    for line in after.lines() {
        if counts.get(line).copied().unwrap_or(0) > 0 {
            diff.push_str(&format!("+{}\n", line));
            *counts.entry(line).or_default() -= 1;
        }
    }

    (diff.trim_end().to_string(), removed)
}
