//! Small filesystem helpers shared across the library.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Remove a file or directory tree if it exists.
///
/// A missing path is not an error; returns whether anything was removed.
pub fn remove_if_exists(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(Error::file(path)(e)),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(Error::file(path))?;
    Ok(true)
}

/// Render a relative path with forward slashes, regardless of platform.
///
/// Only normal components are kept; prefixes and parent references never
/// appear in the walk-relative paths this is used on.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
