//! Vendor manifest parsing and module list de-duplication.
//!
//! The vendor manifest is a UTF-8 text file with one module identifier per
//! line; lines starting with `#` are comments and blank lines are ignored.
//! A missing manifest is treated as an empty module list, not an error.
//!
//! De-duplication is deliberately loose: after sorting, a line is dropped
//! when it merely string-prefixes the previously kept line, so
//! `example.com/dep/internal` collapses into `example.com/dep`. This is a
//! string-prefix match, not a path-segment match, and can over-collapse
//! unrelated entries sharing a textual prefix (`foo` swallows `foobar`).
//! The behavior is preserved for compatibility but exposed as an explicit
//! [`DedupPolicy`] so callers can fall back to exact-duplicate removal.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Controls how the sorted module list is de-duplicated.
#[derive(Debug, Clone, Copy)]
pub struct DedupPolicy {
    /// When `true` (the default), drop any entry that string-prefixes the
    /// previously kept entry. When `false`, only exact duplicates are
    /// removed.
    pub prefix_collapse: bool,
}

impl Default for DedupPolicy {
    fn default() -> Self {
        Self {
            prefix_collapse: true,
        }
    }
}

/// Parse a manifest file into a sorted, de-duplicated module list.
///
/// A missing file yields an empty list; any other read failure is an error
/// naming the path.
pub fn read_modules(path: &Path, policy: DedupPolicy) -> Result<Vec<String>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::file(path)(e)),
    };

    Ok(dedup_modules(data.lines(), policy))
}

/// Sort and de-duplicate raw manifest lines.
///
/// Blank lines and `#` comments are discarded before sorting.
pub fn dedup_modules<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    policy: DedupPolicy,
) -> Vec<String> {
    let mut unsorted: Vec<&str> = lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    unsorted.sort_unstable();

    let mut modules: Vec<String> = Vec::new();
    for line in unsorted {
        if let Some(kept) = modules.last() {
            if line == kept {
                continue;
            }
            if policy.prefix_collapse && line.starts_with(kept.as_str()) {
                continue;
            }
        }
        modules.push(line.to_string());
    }
    modules
}
