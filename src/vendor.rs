//! Flattening a resolved vendor tree into the workspace source tree.
//!
//! The resolver materializes one top-level directory per dependency inside
//! the vendor root (plus its manifest file). Flattening moves those
//! top-level entries onto the workspace `src/` tree with single renames, so
//! a dependency's internals travel atomically with it and are never walked
//! individually.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Move every immediate child of `vendor_dir` into `src_dir`, then remove
/// the emptied vendor root.
///
/// The operation is safe to re-run after a partial failure: an entry whose
/// destination already exists replaces it, so retrying continues where the
/// previous attempt stopped. A failure still aborts immediately; there is
/// no rollback of entries already moved.
pub fn flatten(vendor_dir: &Path, src_dir: &Path) -> Result<()> {
    let entries = fs::read_dir(vendor_dir).map_err(Error::file(vendor_dir))?;

    for entry in entries {
        let entry = entry.map_err(Error::file(vendor_dir))?;
        let source = entry.path();
        let dest = src_dir.join(entry.file_name());

        replace_if_exists(&dest)?;
        debug!("moving {} -> {}", source.display(), dest.display());
        fs::rename(&source, &dest).map_err(Error::file(&source))?;
    }

    fs::remove_dir(vendor_dir).map_err(Error::file(vendor_dir))?;
    Ok(())
}

/// Clear the destination of a pending move so the rename cannot fail on an
/// existing entry.
fn replace_if_exists(dest: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(dest) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::file(dest)(e)),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(dest)
    } else {
        fs::remove_file(dest)
    };
    result.map_err(Error::file(dest))
}
