//! engine::inject
//!
//! The injection orchestrator.
//!
//! # Architecture
//!
//! One run is a sequential pass over the build tree:
//!
//! 1. Load and parse the deployment configuration (the only fatal step
//!    besides directory enumeration)
//! 2. Derive its serialized forms
//! 3. Scan for artifacts embedding the placeholder
//! 4. Per file: read, rewrite, verify, persist
//! 5. Aggregate and report
//!
//! Files are processed one at a time; no two operations ever target the
//! same path in one run, so no ordering guarantee between files is needed.
//!
//! # Invariants
//!
//! - A file is persisted only after the rewritten content is verified to
//!   contain a replacement form
//! - Per-file failures are aggregated into the summary, never raised
//! - Zero discovered files is success: an already-patched or non-template
//!   build is valid

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::core::config::{self, DeployConfigError};
use crate::core::placeholder::ConfigForms;
use crate::engine::scan::{self, DirSource, ScanError};
use crate::engine::{rewrite, Context};
use crate::ui::output::{self, Verbosity};

/// Errors that abort an injection run.
#[derive(Debug, Error)]
pub enum InjectError {
    /// Deployment configuration missing or malformed.
    #[error(transparent)]
    Config(#[from] DeployConfigError),

    /// Build tree enumeration failed.
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Per-file outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Placeholder replaced, verified, and persisted (or would have been,
    /// under dry-run).
    Updated,
    /// The file could not be read.
    ReadFailed(String),
    /// The scanner matched the file but the rewriter found no exact form;
    /// detection and substitution patterns have diverged.
    PatternMissing,
    /// The rewritten content did not contain a replacement form; nothing
    /// was written.
    VerifyFailed,
    /// Persisting the rewritten content failed.
    WriteFailed(String),
}

impl FileOutcome {
    /// Whether this outcome counts as a successful update.
    pub fn is_updated(&self) -> bool {
        matches!(self, FileOutcome::Updated)
    }
}

/// Per-file report for one run. Never persisted; discarded after the
/// summary is emitted.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// The artifact file.
    pub path: PathBuf,
    /// What happened to it.
    pub outcome: FileOutcome,
}

/// Aggregate result of one injection run.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    /// Files successfully rewritten and verified.
    pub updated: usize,
    /// Files that failed at any per-file step.
    pub failed: usize,
    /// Per-file reports, in scan order.
    pub files: Vec<FileReport>,
}

impl Summary {
    fn from_reports(files: Vec<FileReport>) -> Self {
        let updated = files.iter().filter(|r| r.outcome.is_updated()).count();
        Self {
            updated,
            failed: files.len() - updated,
            files,
        }
    }
}

/// Run the injection over a build tree.
///
/// Reads the deployment configuration at `config_path`, finds every file
/// under `build_dir` embedding a serialized form of `placeholder`, and
/// rewrites each in place. Under `dry_run`, everything short of persisting
/// happens and outcomes are reported as they would have been.
///
/// # Errors
///
/// Only an unreadable/unparseable deployment configuration or a failed
/// directory enumeration abort the run; per-file failures are aggregated
/// into the returned [`Summary`].
pub fn run(
    ctx: &Context,
    source: &dyn DirSource,
    config_path: &Path,
    build_dir: &Path,
    placeholder: &ConfigForms,
    dry_run: bool,
) -> Result<Summary, InjectError> {
    let verbosity = ctx.verbosity();

    let deployment = config::load_deployment(config_path)?;
    // Re-serializing the parsed value normalizes whatever formatting the
    // generator used into the canonical forms used for matching.
    let replacement = ConfigForms::derive(&deployment);

    let patterns = placeholder.patterns();
    let files = scan::scan(source, build_dir, &patterns, verbosity)?;

    if files.is_empty() {
        output::warn(
            "no files embedding the placeholder configuration were found",
            verbosity,
        );
        return Ok(Summary::default());
    }

    output::print(format!("found {} file(s) to update", files.len()), verbosity);

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let outcome = inject_file(source, &path, placeholder, &replacement, dry_run, verbosity);
        report_outcome(&path, &outcome, dry_run, verbosity);
        reports.push(FileReport { path, outcome });
    }

    let summary = Summary::from_reports(reports);
    output::print(
        format!(
            "update complete: {} succeeded, {} failed",
            summary.updated, summary.failed
        ),
        verbosity,
    );

    Ok(summary)
}

/// Rewrite one artifact file.
fn inject_file(
    source: &dyn DirSource,
    path: &Path,
    placeholder: &ConfigForms,
    replacement: &ConfigForms,
    dry_run: bool,
    verbosity: Verbosity,
) -> FileOutcome {
    let content = match source.read_file(path) {
        Ok(content) => content,
        Err(e) => return FileOutcome::ReadFailed(e.to_string()),
    };

    let outcome = rewrite::rewrite(&content, placeholder, replacement);
    if !outcome.replaced {
        return FileOutcome::PatternMissing;
    }

    // The rewritten text must embed the new configuration before anything
    // is persisted.
    if !outcome.content.contains(&replacement.js_literal)
        && !outcome.content.contains(&replacement.json)
    {
        return FileOutcome::VerifyFailed;
    }

    output::debug(
        format!(
            "{} rewritten, content digest {}",
            path.display(),
            content_digest(&outcome.content)
        ),
        verbosity,
    );

    if dry_run {
        return FileOutcome::Updated;
    }

    match fs::write(path, outcome.content) {
        Ok(()) => FileOutcome::Updated,
        Err(e) => FileOutcome::WriteFailed(e.to_string()),
    }
}

/// Log one file's outcome at the appropriate level.
fn report_outcome(
    path: &Path,
    outcome: &FileOutcome,
    dry_run: bool,
    verbosity: Verbosity,
) {
    match outcome {
        FileOutcome::Updated => {
            let verb = if dry_run { "would update" } else { "updated" };
            output::print(format!("{} {}", verb, path.display()), verbosity);
        }
        FileOutcome::ReadFailed(e) => {
            output::error(format!("cannot read file '{}': {}", path.display(), e));
        }
        FileOutcome::PatternMissing => {
            output::warn(
                format!("no placeholder form matched in '{}'", path.display()),
                verbosity,
            );
        }
        FileOutcome::VerifyFailed => {
            output::warn(
                format!("could not verify replacement in '{}'", path.display()),
                verbosity,
            );
        }
        FileOutcome::WriteFailed(e) => {
            output::error(format!("cannot write file '{}': {}", path.display(), e));
        }
    }
}

/// Hex sha256 of rewritten content, logged as verification evidence.
fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
