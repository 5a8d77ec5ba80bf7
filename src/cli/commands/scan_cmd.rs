//! scan command - list artifacts still embedding the placeholder

use std::path::PathBuf;

use anyhow::Result;

use crate::engine::{self, Context, OsDir};
use crate::ui::output;

/// List the artifact files that still embed a placeholder form.
///
/// Read-only: useful for checking whether a build is still a template or
/// has already been parameterized.
pub fn scan(ctx: &Context, build_dir: Option<PathBuf>) -> Result<()> {
    let (paths, settings) = super::resolve_environment(ctx)?;
    let build_dir = super::resolve_build_dir(&paths, &settings, build_dir);
    let placeholder = super::resolve_placeholder(&paths, &settings)?;

    let verbosity = ctx.verbosity();
    let files = engine::scan::scan(&OsDir, &build_dir, &placeholder.patterns(), verbosity)?;

    if files.is_empty() {
        output::print("no template artifacts found", verbosity);
        return Ok(());
    }

    for file in &files {
        output::print(file.display(), verbosity);
    }
    output::print(format!("{} template artifact(s)", files.len()), verbosity);

    Ok(())
}
