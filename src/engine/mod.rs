//! engine
//!
//! Orchestrates the injection lifecycle: Load -> Derive -> Scan -> Rewrite ->
//! Verify -> Persist.
//!
//! # Architecture
//!
//! 1. **Load**: read and parse the deployment configuration
//! 2. **Derive**: serialize it in both dialects
//! 3. **Scan**: find every artifact embedding a placeholder form
//! 4. **Rewrite**: substitute the replacement form, all occurrences
//! 5. **Verify**: confirm the rewritten content embeds the new configuration
//! 6. **Persist**: write the file back in place
//!
//! # Invariants
//!
//! - Scanning is read-only and deterministic within a run
//! - Nothing is persisted for a file whose rewrite could not be verified
//! - Per-file failures are aggregated into the summary, never raised

pub mod inject;
pub mod rewrite;
pub mod scan;

// Re-exports for convenience
pub use inject::{run, FileOutcome, FileReport, InjectError, Summary};
pub use rewrite::{rewrite, RewriteOutcome};
pub use scan::{scan, DirSource, Entry, EntryKind, OsDir, ScanError};

use std::io;
use std::path::PathBuf;

use crate::ui::output::Verbosity;

/// Execution context for commands.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Deployment root override (from `--cwd`).
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Minimal output.
    pub quiet: bool,
}

impl Context {
    /// Verbosity derived from the global flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// The deployment root this invocation operates on.
    pub fn resolve_root(&self) -> io::Result<PathBuf> {
        match &self.cwd {
            Some(path) => Ok(path.clone()),
            None => std::env::current_dir(),
        }
    }
}
