//! core::paths
//!
//! Centralized path routing for restamp storage and well-known build
//! locations.
//!
//! # Storage Layout
//!
//! Relative to the deployment root (the working directory, or `--cwd`):
//! - `config/generated-config.json` - deployment configuration written by
//!   the config generator ahead of injection
//! - `.next/` - compiled build output to rewrite
//! - `.restamp/config.toml` - root-scoped settings
//! - `.restamp/lock` - exclusive run lock
//!
//! **Hard rule:** no code outside this module may compute these joins;
//! everything routes through [`StampPaths`].

use std::path::{Path, PathBuf};

/// Centralized path routing for a deployment root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampPaths {
    /// The deployment root directory.
    pub root: PathBuf,
}

impl StampPaths {
    /// Create path routing for the given deployment root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Default location of the deployment configuration.
    pub fn deploy_config_path(&self) -> PathBuf {
        self.root.join("config").join("generated-config.json")
    }

    /// Default build output directory.
    pub fn build_output_dir(&self) -> PathBuf {
        self.root.join(".next")
    }

    /// Directory holding restamp's own state.
    pub fn stamp_dir(&self) -> PathBuf {
        self.root.join(".restamp")
    }

    /// Root-scoped settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.stamp_dir().join("config.toml")
    }

    /// Run lock file.
    pub fn lock_path(&self) -> PathBuf {
        self.stamp_dir().join("lock")
    }

    /// Resolve a user-supplied path against the deployment root.
    ///
    /// Absolute paths pass through unchanged; relative paths are taken
    /// relative to the root rather than the process working directory, so
    /// `--cwd` behaves the same for flags and settings values.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}
