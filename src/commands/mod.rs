//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `vendorspace` command-line tool. Each subcommand is defined in its own
//! file to keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap`.
//! - An `execute` function that takes the shared workspace and the parsed
//!   `Args` and performs the command's logic by calling into the
//!   `vendorspace` library.
//!
//! Step banners go to stderr; machine-readable output (fingerprints,
//! module lists) goes to stdout so external tooling can capture it.

pub mod cache;
pub mod completions;
pub mod flatten_vendor;
pub mod hash;
pub mod istidy;
pub mod modules;
pub mod setup;
pub mod unzip_vendor;
pub mod update;
pub mod zip_vendor;
