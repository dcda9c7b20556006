//! # Vendorspace Library
//!
//! Core functionality for managing a flattened workspace: a single source
//! repository cloned under `src/<package>`, with its transitive dependency
//! closure vendored, flattened next to it, and snapshotted into a
//! content-addressed archive so dependency resolution can be skipped when
//! the manifests have not changed.
//!
//! ## Core Concepts
//!
//! - **Workspace (`workspace`)**: the managed directory layout, plus
//!   repository boundary detection: deciding which directories under
//!   `src/` are live repositories (protected) and which are leftover
//!   vendored material (pruned).
//! - **Flattening (`vendor`)**: merging a freshly resolved vendor tree into
//!   `src/` at the top level, one rename per dependency.
//! - **Fingerprinting (`hash`) and archiving (`archive`)**: a SHA-256
//!   digest over the dependency manifests keys a zip snapshot of the
//!   vendor tree, so external tooling can restore instead of re-resolving.
//! - **Manifest parsing (`manifest`)**: the sorted, de-duplicated module
//!   list derived from the vendor manifest.
//! - **Collaborators (`git`, `gomod`)**: the version-control client and the
//!   module resolver, invoked as opaque subprocesses.
//!
//! ## Execution Flow
//!
//! A typical `update` run executes: prune non-repositories, resolve the
//! dependency closure into a fresh vendor tree, flatten it into `src/`.
//! A `cache` run executes: fingerprint manifests, resolve, capture the
//! vendor tree into an archive, and print the fingerprint for an external
//! build system to use as a cache key.
//!
//! All operations are synchronous and single-threaded; the library assumes
//! exclusive access to the workspace directory.

pub mod archive;
pub mod cache;
pub mod error;
pub mod fsutil;
pub mod git;
pub mod gomod;
pub mod hash;
pub mod manifest;
pub mod vendor;
pub mod workspace;

#[cfg(test)]
mod manifest_proptest;
