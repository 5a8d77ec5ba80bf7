//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves paths and settings (flag > settings file > well-known default)
//! 2. Calls the engine to do the work
//! 3. Formats and displays output
//!
//! Handlers do NOT rewrite artifacts directly.

mod completion;
mod inject;
mod placeholder_cmd;
mod scan_cmd;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use inject::inject;
pub use placeholder_cmd::placeholder;
pub use scan_cmd::scan;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::args::Command;
use crate::core::config::{self, Settings};
use crate::core::paths::StampPaths;
use crate::core::placeholder::{self, ConfigForms};
use crate::engine::Context;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Inject {
            config,
            build_dir,
            dry_run,
        } => inject::inject(ctx, config, build_dir, dry_run),
        Command::Scan { build_dir } => scan_cmd::scan(ctx, build_dir),
        Command::Placeholder { dialect } => placeholder_cmd::placeholder(dialect),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Resolve the deployment root and load settings for it.
pub(crate) fn resolve_environment(ctx: &Context) -> Result<(StampPaths, Settings)> {
    let root = ctx
        .resolve_root()
        .context("failed to determine working directory")?;
    let paths = StampPaths::new(root);
    let settings = Settings::load(Some(&paths))?;
    Ok((paths, settings))
}

/// The sentinel to recognize: the built-in one, or the alternative named by
/// the `placeholder_path` setting.
pub(crate) fn resolve_placeholder(
    paths: &StampPaths,
    settings: &Settings,
) -> Result<ConfigForms> {
    match settings.placeholder_path() {
        Some(path) => {
            let path = paths.resolve(path);
            let value = config::load_deployment(&path)
                .context("failed to load alternative placeholder configuration")?;
            Ok(ConfigForms::derive(&value))
        }
        None => Ok(placeholder::builtin()),
    }
}

/// Build output directory: flag > settings > well-known default.
pub(crate) fn resolve_build_dir(
    paths: &StampPaths,
    settings: &Settings,
    flag: Option<PathBuf>,
) -> PathBuf {
    match flag {
        Some(path) => paths.resolve(&path),
        None => match settings.build_dir() {
            Some(path) => paths.resolve(path),
            None => paths.build_output_dir(),
        },
    }
}

/// Deployment configuration path: flag > settings > well-known default.
pub(crate) fn resolve_config_path(
    paths: &StampPaths,
    settings: &Settings,
    flag: Option<PathBuf>,
) -> PathBuf {
    match flag {
        Some(path) => paths.resolve(&path),
        None => match settings.config_path() {
            Some(path) => paths.resolve(path),
            None => paths.deploy_config_path(),
        },
    }
}
