//! core::config
//!
//! Settings files and deployment configuration loading.
//!
//! # Overview
//!
//! Two distinct inputs live here:
//!
//! - **Settings** (`config.toml`) - optional knobs for where things are:
//!   build directory, deployment config path, alternative sentinel. Loaded
//!   from two scopes with root overriding global.
//! - **Deployment configuration** (JSON) - the real configuration to inject.
//!   Loading it is the one step whose failure aborts a run.
//!
//! # Settings Locations
//!
//! Global scope, searched in order:
//! 1. `$RESTAMP_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/restamp/config.toml`
//! 3. `~/.restamp/config.toml`
//!
//! Root scope: `<root>/.restamp/config.toml`.
//!
//! Missing settings files are not errors (defaults apply); malformed ones
//! are.

pub mod schema;

pub use schema::SettingsFile;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::core::paths::StampPaths;

/// Errors from settings loading.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to parse settings file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid settings value: {0}")]
    InvalidValue(String),
}

/// Errors from deployment configuration loading. Fatal for the whole run.
#[derive(Debug, Error)]
pub enum DeployConfigError {
    /// The configuration file could not be read.
    #[error("failed to read deployment configuration '{path}': {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },

    /// The configuration file is not valid JSON.
    #[error("failed to parse deployment configuration '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

/// Merged settings from both scopes.
///
/// Accessors apply precedence: root scope overrides global scope. `None`
/// means "use the well-known default" from [`StampPaths`].
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Global-scope settings.
    pub global: SettingsFile,
    /// Root-scope settings, if the file exists.
    pub root: Option<SettingsFile>,
}

impl Settings {
    /// Load settings from both scopes.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be read,
    /// parsed, or validated. Missing files are not an error.
    pub fn load(paths: Option<&StampPaths>) -> Result<Self, SettingsError> {
        let global = Self::load_global()?;
        let root = match paths {
            Some(paths) => Self::load_root(paths)?,
            None => None,
        };

        global.validate()?;
        if let Some(ref root) = root {
            root.validate()?;
        }

        Ok(Self { global, root })
    }

    /// Load global-scope settings from standard locations.
    fn load_global() -> Result<SettingsFile, SettingsError> {
        if let Ok(path) = std::env::var("RESTAMP_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::read_file(&path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("restamp/config.toml");
            if path.exists() {
                return Self::read_file(&path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".restamp/config.toml");
            if path.exists() {
                return Self::read_file(&path);
            }
        }

        Ok(SettingsFile::default())
    }

    /// Load root-scope settings if present.
    fn load_root(paths: &StampPaths) -> Result<Option<SettingsFile>, SettingsError> {
        let path = paths.settings_path();
        if !path.exists() {
            return Ok(None);
        }
        Self::read_file(&path).map(Some)
    }

    /// Read and parse one settings file.
    fn read_file(path: &Path) -> Result<SettingsFile, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|e| SettingsError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| SettingsError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Configured build output directory, if any.
    pub fn build_dir(&self) -> Option<&Path> {
        self.root
            .as_ref()
            .and_then(|r| r.build_dir.as_deref())
            .or(self.global.build_dir.as_deref())
    }

    /// Configured deployment configuration path, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.root
            .as_ref()
            .and_then(|r| r.config_path.as_deref())
            .or(self.global.config_path.as_deref())
    }

    /// Configured alternative sentinel path, if any.
    pub fn placeholder_path(&self) -> Option<&Path> {
        self.root
            .as_ref()
            .and_then(|r| r.placeholder_path.as_deref())
            .or(self.global.placeholder_path.as_deref())
    }
}

/// Read and parse a JSON configuration file.
///
/// Leading and trailing whitespace is tolerated; config generators tend to
/// end the file with a newline. The caller re-serializes the parsed value
/// canonically, so the on-disk formatting never leaks into replacement
/// patterns.
pub fn load_deployment(path: &Path) -> Result<Value, DeployConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| DeployConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(contents.trim()).map_err(|e| DeployConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
