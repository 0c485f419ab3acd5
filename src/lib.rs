#![warn(missing_docs)]

//! # Appreport - ImageSize Compress Metadata Reporter
//!
//! Appreport is a small command-line reporter for the ImageSize Compress
//! React Native application. It prints the project's directory layout, the
//! marketed feature checklist, the screen list, and name/version/dependency
//! metadata read from the project's `package.json` manifest.
//!
//! It does not compress images, render UI, or invoke the mobile toolchain;
//! everything it prints is either walked from the filesystem or a constant.
//!
//! ## Architecture
//!
//! - [`tree`]: directory traversal and indented tree rendering
//! - [`manifest`]: `package.json` loading and dependency lookup
//! - [`report`]: report sections and the top-to-bottom orchestrator
//!
//! ## Example Usage
//!
//! ```no_run
//! use appreport::{ReportContext, report};
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = ReportContext::new()?;
//! report::execute(&ctx)?;
//! # Ok(())
//! # }
//! ```

/// `package.json` loading and dependency lookup.
pub mod manifest;

/// Report sections and the orchestrator that runs them in order.
pub mod report;

/// Directory traversal and indented tree rendering.
pub mod tree;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Current version of the appreport binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default manifest file name, relative to the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Directory names pruned from traversal, subtrees included.
pub const EXCLUDED_DIRS: [&str; 4] = ["node_modules", ".git", "build", "dist"];

/// Paths the reporter reads from.
///
/// Both the traversal root and the manifest location are explicit here rather
/// than taken from the process working directory, so components can be tested
/// in isolation against temporary directories.
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Root of the project tree to enumerate.
    pub root: PathBuf,

    /// Location of the `package.json` manifest.
    pub manifest_path: PathBuf,
}

impl ReportContext {
    /// Creates a context rooted at the current working directory, with the
    /// manifest at the default relative location.
    ///
    /// # Errors
    /// Returns an error if the current working directory cannot be determined.
    pub fn new() -> Result<Self> {
        let root = std::env::current_dir().context("Could not determine working directory")?;
        Ok(Self::with_root(root))
    }

    /// Creates a context rooted at `root`, with the manifest at the default
    /// location under it.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        let manifest_path = root.join(MANIFEST_FILE);
        Self {
            root,
            manifest_path,
        }
    }

    /// Creates a context with explicit root and manifest paths.
    #[must_use]
    pub fn with_paths(root: PathBuf, manifest_path: PathBuf) -> Self {
        Self {
            root,
            manifest_path,
        }
    }
}
