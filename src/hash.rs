//! Content fingerprinting over dependency manifest files.
//!
//! The fingerprint is a SHA-256 digest over the concatenated bytes of an
//! ordered list of files, hex-encoded for display. Missing files contribute
//! nothing to the digest, so the fingerprint of `[go.mod, go.sum]` is stable
//! whether or not a `go.sum` exists yet. A caller that needs to distinguish
//! "missing" from "present but empty" must include a sentinel input.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Compute the hex-encoded SHA-256 fingerprint of the given files, in order.
///
/// Files that do not exist are skipped; any other read failure aborts with
/// an error naming the failing path.
pub fn fingerprint<P: AsRef<Path>>(paths: &[P]) -> Result<String> {
    let mut hasher = Sha256::new();

    for path in paths {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(data) => hasher.update(&data),
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(Error::file(path)(e)),
        }
    }

    Ok(hex::encode(hasher.finalize()))
}
