//! inject command - rewrite a compiled build with the deployment configuration

use std::path::PathBuf;

use anyhow::Result;

use crate::core::lock::RunLock;
use crate::engine::{self, Context, OsDir};

/// Inject the deployment configuration into the build output tree.
///
/// Per-file failures end up in the summary, not in the exit code; only a
/// missing or malformed deployment configuration (or an unenumerable build
/// directory) makes this return an error.
pub fn inject(
    ctx: &Context,
    config: Option<PathBuf>,
    build_dir: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let (paths, settings) = super::resolve_environment(ctx)?;
    let config_path = super::resolve_config_path(&paths, &settings, config);
    let build_dir = super::resolve_build_dir(&paths, &settings, build_dir);
    let placeholder = super::resolve_placeholder(&paths, &settings)?;

    // Serialize whole runs: two entrypoints must not interleave their
    // read-modify-write passes over one build tree. Dry runs write nothing
    // and skip the lock.
    let _lock = if dry_run {
        None
    } else {
        Some(RunLock::acquire(&paths)?)
    };

    engine::inject::run(ctx, &OsDir, &config_path, &build_dir, &placeholder, dry_run)?;
    Ok(())
}
