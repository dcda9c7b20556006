//! Archive-level caching of the resolved vendor tree.
//!
//! The cache key is the fingerprint of the dependency manifests (`go.mod`
//! and `go.sum`). The resolver still runs unconditionally, since it skips
//! work internally when nothing changed; the archive plus printed
//! fingerprint let an external build system decide whether a stored vendor
//! snapshot can be reused instead of re-resolving.

use std::fs;
use std::path::Path;

use log::info;

use crate::archive;
use crate::error::{Error, Result};
use crate::gomod;
use crate::hash;

/// Manifest files, in fingerprint order.
pub const MANIFEST_FILES: [&str; 2] = ["go.mod", "go.sum"];

/// Directory name the verification restore unpacks into, as a sibling of
/// the vendor tree.
pub const VERIFY_DIR: &str = "vendor-verify";

/// Fingerprint the dependency manifests of the repository at `repo_dir`.
pub fn manifest_fingerprint(repo_dir: &Path) -> Result<String> {
    let paths: Vec<_> = MANIFEST_FILES
        .iter()
        .map(|name| repo_dir.join(name))
        .collect();
    hash::fingerprint(&paths)
}

/// Capture the vendor tree of `repo_dir` into an archive at `archive_path`.
///
/// With `verify`, the freshly written archive is restored into a sibling
/// directory as a round-trip check of the blob that was persisted.
pub fn snapshot_vendor(repo_dir: &Path, archive_path: &Path, verify: bool) -> Result<()> {
    let data = archive::capture(&repo_dir.join("vendor"))?;
    fs::write(archive_path, &data).map_err(Error::file(archive_path))?;
    info!("wrote vendor archive to {}", archive_path.display());

    if verify {
        let verify_dir = repo_dir.join(VERIFY_DIR);
        crate::fsutil::remove_if_exists(&verify_dir)?;
        archive::restore(&data, &verify_dir)?;
    }
    Ok(())
}

/// Full cache cycle: fingerprint the manifests, resolve dependencies,
/// snapshot the vendor tree, and return the fingerprint for use as a cache
/// key by external tooling.
pub fn sync_with_cache(repo_dir: &Path, archive_path: &Path, verify: bool) -> Result<String> {
    let fingerprint = manifest_fingerprint(repo_dir)?;
    gomod::vendor_modules(repo_dir)?;
    snapshot_vendor(repo_dir, archive_path, verify)?;
    Ok(fingerprint)
}
