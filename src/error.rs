//! # Error Handling
//!
//! Centralized error type for the `vendorspace` library, built with
//! `thiserror`. Every fallible operation in the library returns the
//! [`Result`] alias defined here; nothing is recovered internally, errors
//! propagate to the command layer where they terminate the run with a
//! diagnostic.
//!
//! The variants map onto the three failure classes of the tool:
//!
//! - I/O failures ([`Error::File`], [`Error::Io`], [`Error::Walk`],
//!   [`Error::Archive`]) from reads, writes, renames, and tree walks.
//! - Subprocess failures ([`Error::Process`]) from a failed clone or from
//!   the external resolver after its bounded retry is exhausted.
//! - Configuration failures ([`Error::Validation`]) such as operating on a
//!   workspace that has not been set up yet.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for vendorspace operations
#[derive(Error, Debug)]
pub enum Error {
    /// An I/O error tied to a specific file or directory.
    ///
    /// Used wherever the failing path is known, so diagnostics can name the
    /// offending entry.
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error without a more specific path context, wrapped from
    /// `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A directory walk failed. The underlying error names the entry that
    /// could not be visited.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Reading or writing the vendor archive failed.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// An external subprocess exited non-zero or could not be spawned.
    #[error("command failed: {command}: {message}")]
    Process { command: String, message: String },

    /// Required configuration or workspace state is missing.
    #[error("{message}")]
    Validation { message: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Attach a path context to an `std::io::Error`.
    pub fn file(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
        let path = path.into();
        move |source| Error::File { path, source }
    }
}
