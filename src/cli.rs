//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use vendorspace::workspace::Workspace;

use crate::commands;

/// Vendorspace - Manage a flattened workspace for a repository and its
/// vendored dependencies
#[derive(Parser, Debug)]
#[command(name = "vendorspace")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Workspace root directory.
    #[arg(long, global = true, value_name = "DIR", env = "VENDORSPACE_ROOT")]
    root: Option<PathBuf>,

    /// Primary package import path (e.g. github.com/example/project).
    #[arg(long, global = true, value_name = "PACKAGE", env = "VENDORSPACE_PKG")]
    pkg: Option<String>,

    /// Clone URL of the primary package repository.
    #[arg(long, global = true, value_name = "URL", env = "VENDORSPACE_REPO")]
    repo: Option<String>,

    /// Compare workspace paths case-sensitively during repository boundary
    /// detection.
    #[arg(long, global = true)]
    case_sensitive: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Set up the workspace: clone the primary repository, vendor its
    /// dependencies, and flatten them into src/
    Setup(commands::setup::SetupArgs),

    /// Re-resolve dependencies and reconcile the workspace src/ tree
    Update(commands::update::UpdateArgs),

    /// Resolve dependencies, snapshot the vendor tree, and print the
    /// manifest fingerprint as a cache key
    Cache(commands::cache::CacheArgs),

    /// Print the fingerprint of the dependency manifests
    Hash(commands::hash::HashArgs),

    /// Vendor dependencies and archive the vendor tree to a file
    ZipVendor(commands::zip_vendor::ZipVendorArgs),

    /// Restore a vendor tree from a previously written archive
    UnzipVendor(commands::unzip_vendor::UnzipVendorArgs),

    /// Flatten an existing vendor tree into the workspace src/ tree
    FlattenVendor(commands::flatten_vendor::FlattenVendorArgs),

    /// Print the sorted, de-duplicated module list from the vendor manifest
    Modules(commands::modules::ModulesArgs),

    /// Check whether the dependency manifest is tidy
    Istidy(commands::istidy::IstidyArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .init();

        // Validated lazily: completions need no workspace configuration.
        let workspace = self.workspace();
        match self.command {
            Commands::Setup(args) => commands::setup::execute(&workspace?, args),
            Commands::Update(args) => commands::update::execute(&workspace?, args),
            Commands::Cache(args) => commands::cache::execute(&workspace?, args),
            Commands::Hash(args) => commands::hash::execute(&workspace?, args),
            Commands::ZipVendor(args) => commands::zip_vendor::execute(&workspace?, args),
            Commands::UnzipVendor(args) => commands::unzip_vendor::execute(&workspace?, args),
            Commands::FlattenVendor(args) => commands::flatten_vendor::execute(&workspace?, args),
            Commands::Modules(args) => commands::modules::execute(&workspace?, args),
            Commands::Istidy(args) => commands::istidy::execute(&workspace?, args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }

    /// Build the workspace from global flags and environment defaults,
    /// reporting every missing piece of configuration at once.
    fn workspace(&self) -> Result<Workspace> {
        if let (Some(root), Some(pkg), Some(repo)) = (&self.root, &self.pkg, &self.repo) {
            let root = root.canonicalize().unwrap_or_else(|_| root.clone());
            let mut workspace = Workspace::new(root, pkg, repo);
            workspace.case_insensitive = !self.case_sensitive;
            return Ok(workspace);
        }

        let mut missing = Vec::new();
        if self.root.is_none() {
            missing.push("workspace root (--root or VENDORSPACE_ROOT)");
        }
        if self.pkg.is_none() {
            missing.push("package name (--pkg or VENDORSPACE_PKG)");
        }
        if self.repo.is_none() {
            missing.push("repository url (--repo or VENDORSPACE_REPO)");
        }
        anyhow::bail!("missing configuration: {}", missing.join(", "))
    }
}
