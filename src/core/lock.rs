//! core::lock
//!
//! Exclusive lock for injection runs.
//!
//! # Overview
//!
//! An injection run is a read-modify-write pass over the whole build tree.
//! Two runs interleaving on the same tree (a restarted container entrypoint,
//! an operator retry) could each verify against content the other is about
//! to overwrite, so a run takes an OS-level exclusive lock on
//! `<root>/.restamp/lock` for its duration.
//!
//! # Invariants
//!
//! - Lock acquisition is non-blocking (fails fast if another run holds it)
//! - The lock is released automatically on drop (RAII)
//! - Read-only commands never take the lock

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use crate::core::paths::StampPaths;

/// Errors from locking operations.
#[derive(Debug, Error)]
pub enum LockError {
    /// Another process is already injecting into this root.
    #[error("another restamp run is in progress for this deployment root")]
    AlreadyLocked,

    /// Failed to create the lock file or its directory.
    #[error("failed to create lock: {0}")]
    CreateFailed(String),

    /// Failed to acquire the OS lock.
    #[error("failed to acquire lock: {0}")]
    AcquireFailed(String),
}

/// An exclusive lock on a deployment root, held for one injection run.
#[derive(Debug)]
pub struct RunLock {
    path: PathBuf,
    /// Open handle with the OS lock held; `None` once released.
    file: Option<File>,
}

impl RunLock {
    /// Attempt to acquire the run lock for a deployment root.
    ///
    /// Non-blocking: returns [`LockError::AlreadyLocked`] immediately if
    /// another process holds the lock.
    pub fn acquire(paths: &StampPaths) -> Result<Self, LockError> {
        let stamp_dir = paths.stamp_dir();
        fs::create_dir_all(&stamp_dir).map_err(|e| {
            LockError::CreateFailed(format!("cannot create {}: {}", stamp_dir.display(), e))
        })?;

        let path = paths.lock_path();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| {
                LockError::CreateFailed(format!("cannot open {}: {}", path.display(), e))
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Self {
                path,
                file: Some(file),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => Err(LockError::AlreadyLocked),
            Err(e) => Err(LockError::AcquireFailed(e.to_string())),
        }
    }

    /// Check if the lock is currently held by this guard.
    pub fn is_held(&self) -> bool {
        self.file.is_some()
    }

    /// Get the path to the lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            let _ = file.unlock();
        }
    }
}
