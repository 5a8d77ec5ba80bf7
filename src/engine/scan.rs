//! engine::scan
//!
//! Artifact discovery over a build output tree.
//!
//! # Architecture
//!
//! Traversal goes through the [`DirSource`] trait so the scanner can be
//! exercised against an in-memory tree; [`OsDir`] is the production
//! implementation over `std::fs`. The walk is depth-first with entries
//! sorted by path within each directory, so one run's log order is
//! reproducible.
//!
//! # Invariants
//!
//! - Scanning is read-only; it never mutates the build tree
//! - Directories are purely structural; only file contents are matched
//! - One unreadable file (including binary assets that are not valid UTF-8)
//!   never fails the scan; it is logged and skipped
//! - Failing to enumerate a directory is fatal: discovery cannot proceed
//!   from a partial listing

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ui::output::{self, Verbosity};

/// Errors from scanning operations.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Failed to enumerate a directory.
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: io::Error,
    },
}

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Dir,
    /// Anything else (sockets, device nodes, symlinks); skipped.
    Other,
}

/// A single directory entry as reported by a [`DirSource`].
#[derive(Debug, Clone)]
pub struct Entry {
    /// Full path of the entry.
    pub path: PathBuf,
    /// What the entry is.
    pub kind: EntryKind,
}

/// Source of directory listings and file contents.
///
/// Production code uses [`OsDir`]; tests substitute an in-memory tree.
pub trait DirSource {
    /// List the entries of `dir`.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<Entry>>;

    /// Read the full text content of `path`.
    fn read_file(&self, path: &Path) -> io::Result<String>;
}

/// [`DirSource`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDir;

impl DirSource for OsDir {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            entries.push(Entry {
                path: entry.path(),
                kind,
            });
        }
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Recursively find the files under `root` whose content contains at least
/// one of `patterns` as an exact substring.
///
/// Unreadable files are logged as errors and excluded; the scan continues.
pub fn scan(
    source: &dyn DirSource,
    root: &Path,
    patterns: &[&str],
    verbosity: Verbosity,
) -> Result<Vec<PathBuf>, ScanError> {
    let mut found = Vec::new();
    walk(source, root, patterns, verbosity, &mut found)?;
    Ok(found)
}

fn walk(
    source: &dyn DirSource,
    dir: &Path,
    patterns: &[&str],
    verbosity: Verbosity,
    found: &mut Vec<PathBuf>,
) -> Result<(), ScanError> {
    output::debug(format!("scanning {}", dir.display()), verbosity);

    let mut entries = source.read_dir(dir).map_err(|e| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    for entry in entries {
        match entry.kind {
            EntryKind::Dir => walk(source, &entry.path, patterns, verbosity, found)?,
            EntryKind::File => match source.read_file(&entry.path) {
                Ok(content) => {
                    if patterns.iter().any(|p| content.contains(p)) {
                        found.push(entry.path);
                    }
                }
                Err(e) => {
                    output::error(format!("cannot read file '{}': {}", entry.path.display(), e));
                }
            },
            EntryKind::Other => {}
        }
    }

    Ok(())
}
