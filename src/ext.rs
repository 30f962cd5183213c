//! # Extension Traits
//!
//! Convenience queries built on [`FsRead::metadata`](crate::FsRead::metadata).
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`exists`](FsExt::exists) | Check whether anything exists at a path |
//! | [`is_file`](FsExt::is_file) | Check if path is a regular file |
//! | [`is_dir`](FsExt::is_dir) | Check if path is a directory |
//!
//! All of them answer `Ok(false)` for a missing path and only return `Err`
//! when the backend could not tell.

use crate::{Fs, FsError};
use std::path::Path;

/// Extension methods for any filesystem capability.
///
/// # Example
///
/// ```rust
/// use chart_writer::{Fs, FsExt, FsError};
/// use std::path::Path;
///
/// fn has_chart<B: Fs>(backend: &B) -> Result<bool, FsError> {
///     backend.is_file(Path::new("/chart/Chart.yaml"))
/// }
/// ```
pub trait FsExt: Fs {
    /// Check if something exists at `path`.
    ///
    /// Returns `Ok(false)` only for [`FsError::NotFound`]; any other stat
    /// failure is returned as-is.
    fn exists(&self, path: &Path) -> Result<bool, FsError> {
        match self.metadata(path) {
            Ok(_) => Ok(true),
            Err(FsError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Check if the path points to a regular file.
    fn is_file(&self, path: &Path) -> Result<bool, FsError> {
        match self.metadata(path) {
            Ok(m) => Ok(m.is_file()),
            Err(FsError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Check if the path points to a directory.
    fn is_dir(&self, path: &Path) -> Result<bool, FsError> {
        match self.metadata(path) {
            Ok(m) => Ok(m.is_dir()),
            Err(FsError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl<B: Fs + ?Sized> FsExt for B {}
