//! Workspace layout and repository boundary detection.
//!
//! A workspace is a root directory whose `src/` subtree holds the primary
//! repository at `src/<package>` plus one top-level directory per flattened
//! dependency. A directory counts as a repository root when it contains the
//! version-control metadata marker ([`REPO_MARKER`]); everything under
//! `src/` that is neither a repository root nor an ancestor of one is
//! considered leftover vendored material and can be pruned.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::fsutil::to_slash;

/// Name of the metadata directory that marks a repository root.
pub const REPO_MARKER: &str = ".git";

/// Layout and identity of a managed workspace.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Workspace root directory.
    pub root: PathBuf,
    /// Import path of the primary package, forward-slash separated,
    /// e.g. `github.com/example/project`.
    pub package: String,
    /// Clone URL of the primary package repository.
    pub repo_url: String,
    /// Compare workspace-relative paths case-insensitively during boundary
    /// detection. Defaults to `true`; on case-sensitive filesystems where
    /// distinctly-cased paths are meant to be distinct, turn this off.
    pub case_insensitive: bool,
}

impl Workspace {
    pub fn new(
        root: impl Into<PathBuf>,
        package: impl Into<String>,
        repo_url: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            package: package.into(),
            repo_url: repo_url.into(),
            case_insensitive: true,
        }
    }

    /// The `src/` subtree holding all repositories and dependencies.
    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    /// The workspace `bin/` directory.
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    /// Directory of the primary repository: `src/<package>`.
    pub fn repo_dir(&self) -> PathBuf {
        let mut dir = self.src_dir();
        for part in self.package.split('/') {
            dir.push(part);
        }
        dir
    }

    /// The vendor tree produced by the external resolver inside the primary
    /// repository.
    pub fn vendor_dir(&self) -> PathBuf {
        self.repo_dir().join("vendor")
    }

    /// Fail with a validation error when the workspace has no `src/` tree.
    pub fn require_src(&self) -> Result<()> {
        let src = self.src_dir();
        if src.is_dir() {
            return Ok(());
        }
        Err(Error::Validation {
            message: format!("src directory {} missing, run setup", src.display()),
        })
    }

    /// Normalize a `src/`-relative path for boundary comparison: forward
    /// slashes, optionally lowercased.
    fn normalize(&self, rel: &Path) -> String {
        let slash = to_slash(rel);
        if self.case_insensitive {
            slash.to_lowercase()
        } else {
            slash
        }
    }

    fn normalized_package(&self) -> String {
        if self.case_insensitive {
            self.package.to_lowercase()
        } else {
            self.package.clone()
        }
    }

    /// Discovery pass: walk `src/` and record the normalized relative path
    /// of every directory containing the repository marker.
    ///
    /// The primary package path is pre-seeded into the result so it stays
    /// protected even before its repository has been cloned. Descent stops
    /// at each marker directory itself; the rest of the repository is still
    /// walked, so a repository vendored inside another is recorded too.
    pub fn collect_repository_roots(&self) -> Result<BTreeSet<String>> {
        let src = self.src_dir();
        let mut roots = BTreeSet::new();
        roots.insert(self.normalized_package());

        let mut walker = WalkDir::new(&src).into_iter();
        while let Some(entry) = walker.next() {
            let entry = entry?;
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                continue;
            }
            if entry.file_name() == REPO_MARKER {
                let repo = entry
                    .path()
                    .parent()
                    .and_then(|parent| parent.strip_prefix(&src).ok());
                if let Some(repo) = repo {
                    let repo = self.normalize(repo);
                    if !repo.is_empty() {
                        debug!("found repository root {}", repo);
                        roots.insert(repo);
                    }
                }
                walker.skip_current_dir();
            }
        }

        Ok(roots)
    }

    /// Pruning pass: delete everything under `src/` that is neither a
    /// recorded repository root (kept whole, descent stops) nor an ancestor
    /// path of one (kept, descent continues).
    ///
    /// Any walk or removal failure aborts the whole operation; a partially
    /// pruned tree is safe to re-run against.
    pub fn prune_non_repositories(&self) -> Result<()> {
        let roots = self.collect_repository_roots()?;
        let src = self.src_dir();

        let mut walker = WalkDir::new(&src).into_iter();
        while let Some(entry) = walker.next() {
            let entry = entry?;
            if entry.depth() == 0 {
                continue;
            }
            let rel = match entry.path().strip_prefix(&src) {
                Ok(rel) => rel,
                Err(_) => continue,
            };
            let rel = self.normalize(rel);

            if roots.contains(&rel) {
                // A live repository: fully protected, including internals.
                if entry.file_type().is_dir() {
                    walker.skip_current_dir();
                }
                continue;
            }
            let is_ancestor = roots
                .iter()
                .any(|root| root.strip_prefix(&rel).is_some_and(|rest| rest.starts_with('/')));
            if is_ancestor {
                // An ancestor on the way to a repository: keep, descend.
                continue;
            }

            debug!("pruning {}", entry.path().display());
            if entry.file_type().is_dir() {
                fs::remove_dir_all(entry.path()).map_err(Error::file(entry.path()))?;
                walker.skip_current_dir();
            } else {
                fs::remove_file(entry.path()).map_err(Error::file(entry.path()))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn workspace(root: &Path) -> Workspace {
        Workspace::new(root, "github.com/example/project", "https://example.invalid")
    }

    fn mkdirs(root: &Path, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
    }

    #[test]
    fn test_repo_dir_follows_package_path() {
        let ws = workspace(Path::new("/work"));
        assert_eq!(
            ws.repo_dir(),
            Path::new("/work/src/github.com/example/project")
        );
        assert_eq!(
            ws.vendor_dir(),
            Path::new("/work/src/github.com/example/project/vendor")
        );
    }

    #[test]
    fn test_require_src_missing() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(temp.path());
        assert!(ws.require_src().is_err());

        fs::create_dir_all(ws.src_dir()).unwrap();
        assert!(ws.require_src().is_ok());
    }

    #[test]
    fn test_collect_roots_finds_marked_directories() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(temp.path());
        mkdirs(
            &ws.src_dir(),
            &["github.com/x/y/.git", "github.com/x/stale", "golang.org/z/.git"],
        );

        let roots = ws.collect_repository_roots().unwrap();
        assert!(roots.contains("github.com/x/y"));
        assert!(roots.contains("golang.org/z"));
        assert!(roots.contains("github.com/example/project"));
        assert!(!roots.contains("github.com/x/stale"));
    }

    #[test]
    fn test_prune_deletes_stale_keeps_repos_and_ancestors() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(temp.path());
        let src = ws.src_dir();
        mkdirs(
            &src,
            &["github.com/x/y/.git", "github.com/x/y/pkg", "github.com/x/stale/deep"],
        );
        fs::write(src.join("github.com/x/y/main.go"), b"package main").unwrap();

        ws.prune_non_repositories().unwrap();

        assert!(src.join("github.com/x/y/.git").is_dir());
        assert!(src.join("github.com/x/y/pkg").is_dir());
        assert!(src.join("github.com/x/y/main.go").is_file());
        assert!(src.join("github.com/x").is_dir());
        assert!(!src.join("github.com/x/stale").exists());
    }

    #[test]
    fn test_prune_removes_stray_files() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(temp.path());
        let src = ws.src_dir();
        mkdirs(&src, &["github.com/x/y/.git"]);
        fs::write(src.join("modules.txt"), b"example.com/dep\n").unwrap();
        fs::write(src.join("github.com/stray.txt"), b"stray").unwrap();

        ws.prune_non_repositories().unwrap();

        assert!(!src.join("modules.txt").exists());
        assert!(!src.join("github.com/stray.txt").exists());
        assert!(src.join("github.com/x/y").is_dir());
    }

    #[test]
    fn test_prune_protects_primary_package_without_marker() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(temp.path());
        let src = ws.src_dir();
        mkdirs(&src, &["github.com/example/project/cmd"]);
        fs::write(src.join("github.com/example/project/go.mod"), b"module x").unwrap();

        ws.prune_non_repositories().unwrap();

        assert!(src.join("github.com/example/project/cmd").is_dir());
        assert!(src.join("github.com/example/project/go.mod").is_file());
    }

    #[test]
    fn test_prune_case_insensitive_by_default() {
        let temp = TempDir::new().unwrap();
        let mut ws = workspace(temp.path());
        ws.package = "github.com/Example/Project".to_string();
        let src = ws.src_dir();
        mkdirs(&src, &["github.com/example/project/cmd"]);

        ws.prune_non_repositories().unwrap();
        assert!(src.join("github.com/example/project/cmd").is_dir());
    }

    #[test]
    fn test_prune_case_sensitive_does_not_match_differently_cased() {
        let temp = TempDir::new().unwrap();
        let mut ws = workspace(temp.path());
        ws.package = "github.com/Example/Project".to_string();
        ws.case_insensitive = false;
        let src = ws.src_dir();
        mkdirs(&src, &["github.com/example/project/cmd"]);

        ws.prune_non_repositories().unwrap();
        // The differently-cased directory is not the protected package.
        assert!(!src.join("github.com/example/project").exists());
    }

    #[test]
    fn test_prune_on_empty_src() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(temp.path());
        fs::create_dir_all(ws.src_dir()).unwrap();
        ws.prune_non_repositories().unwrap();
        assert!(ws.src_dir().is_dir());
    }
}
