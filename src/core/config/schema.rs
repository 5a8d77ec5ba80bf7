//! core::config::schema
//!
//! Settings file schema.
//!
//! The same schema is used for both scopes (global and root); precedence is
//! applied by [`crate::core::config::Settings`]. All fields are optional -
//! an empty file is valid and means "use the well-known defaults".

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::SettingsError;

/// Contents of a settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Build output directory, relative to the deployment root unless
    /// absolute. Defaults to `.next`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_dir: Option<PathBuf>,

    /// Deployment configuration path. Defaults to
    /// `config/generated-config.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<PathBuf>,

    /// JSON file holding an alternative sentinel configuration for builds
    /// that were not produced with the built-in placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_path: Option<PathBuf>,
}

impl SettingsFile {
    /// Validate the settings values.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("build_dir", &self.build_dir),
            ("config_path", &self.config_path),
            ("placeholder_path", &self.placeholder_path),
        ] {
            if let Some(path) = value {
                if path.as_os_str().is_empty() {
                    return Err(SettingsError::InvalidValue(format!(
                        "{} must not be empty",
                        field
                    )));
                }
            }
        }
        Ok(())
    }
}
