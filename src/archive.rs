//! Capture and restore of a directory subtree as a single zip blob.
//!
//! Capture records every regular file under a root with its root-relative,
//! forward-slash path; directories are implicit in the path prefixes and are
//! recreated on demand during restore. Entry order follows the walk order of
//! the tree, so two captures of byte-identical trees are not guaranteed to
//! be byte-identical blobs; the fingerprint in [`crate::hash`] is the cache
//! key, not the archive bytes.
//!
//! Restore is additive: files already present at the destination but absent
//! from the archive are left alone. Callers that need a clean tree must
//! clear the destination first.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use log::debug;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::error::{Error, Result};
use crate::fsutil::to_slash;

/// Serialize the subtree rooted at `root` into a zip blob.
///
/// Fails if the root does not exist or any file cannot be read; nothing is
/// returned on failure (all-or-nothing).
pub fn capture(root: &Path) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = match entry.path().strip_prefix(root) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let name = to_slash(rel);
        debug!("capturing {}", name);

        let data = fs::read(entry.path()).map_err(Error::file(entry.path()))?;
        writer.start_file(name, options)?;
        writer.write_all(&data)?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Materialize an archive blob into `destination`, creating missing parent
/// directories and overwriting existing files.
///
/// A write failure aborts immediately and leaves a partially restored tree;
/// there is no rollback.
pub fn restore(data: &[u8], destination: &Path) -> Result<()> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;

    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        if file.is_dir() {
            continue;
        }
        let rel = file.enclosed_name().ok_or_else(|| Error::Validation {
            message: format!("archive entry {:?} escapes the destination", file.name()),
        })?;
        let path = destination.join(rel);
        debug!("restoring {}", path.display());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(Error::file(parent))?;
        }
        let mut out = fs::File::create(&path).map_err(Error::file(&path))?;
        std::io::copy(&mut file, &mut out).map_err(Error::file(&path))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn write_tree(root: &Path, files: &[(&str, &str)]) {
        for (rel, content) in files {
            let path = root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
    }

    fn read_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
        let mut files = BTreeMap::new();
        for entry in WalkDir::new(root) {
            let entry = entry.unwrap();
            if entry.file_type().is_file() {
                let rel = to_slash(entry.path().strip_prefix(root).unwrap());
                files.insert(rel, fs::read(entry.path()).unwrap());
            }
        }
        files
    }

    #[test]
    fn test_capture_restore_round_trip() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source");
        let dest = temp.path().join("dest");
        write_tree(
            &source,
            &[
                ("modules.txt", "# example.com/dep v1.0.0\nexample.com/dep\n"),
                ("example.com/dep/dep.go", "package dep\n"),
                ("example.com/dep/internal/impl.go", "package internal\n"),
            ],
        );

        let blob = capture(&source).unwrap();
        restore(&blob, &dest).unwrap();

        assert_eq!(read_tree(&source), read_tree(&dest));
    }

    #[test]
    fn test_capture_skips_directories() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source");
        fs::create_dir_all(source.join("empty/nested")).unwrap();
        write_tree(&source, &[("top.txt", "top")]);

        let blob = capture(&source).unwrap();
        let dest = temp.path().join("dest");
        restore(&blob, &dest).unwrap();

        // Only the file comes back; empty directories are not part of the
        // archive format.
        assert!(dest.join("top.txt").exists());
        assert!(!dest.join("empty").exists());
    }

    #[test]
    fn test_capture_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let result = capture(&temp.path().join("missing"));
        assert!(result.is_err());
    }

    #[test]
    fn test_restore_is_additive() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source");
        let dest = temp.path().join("dest");
        write_tree(&source, &[("a.txt", "new a")]);
        write_tree(&dest, &[("a.txt", "old a"), ("keep.txt", "keep me")]);

        let blob = capture(&source).unwrap();
        restore(&blob, &dest).unwrap();

        // Archived paths are overwritten, everything else survives.
        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "new a");
        assert_eq!(fs::read_to_string(dest.join("keep.txt")).unwrap(), "keep me");
    }

    #[test]
    fn test_restore_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source");
        write_tree(&source, &[("deep/nested/path/file.go", "package deep\n")]);

        let blob = capture(&source).unwrap();
        let dest = temp.path().join("dest");
        restore(&blob, &dest).unwrap();

        assert_eq!(
            fs::read_to_string(dest.join("deep/nested/path/file.go")).unwrap(),
            "package deep\n"
        );
    }

    #[test]
    fn test_capture_twice_restores_identically() {
        // Archive bytes may differ between captures, but the restored trees
        // must not.
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source");
        write_tree(&source, &[("x/a.txt", "a"), ("y/b.txt", "b")]);

        let first = capture(&source).unwrap();
        let second = capture(&source).unwrap();

        let dest1 = temp.path().join("dest1");
        let dest2 = temp.path().join("dest2");
        restore(&first, &dest1).unwrap();
        restore(&second, &dest2).unwrap();
        assert_eq!(read_tree(&dest1), read_tree(&dest2));
    }
}
