//! Write operations.

use std::path::Path;

use crate::{FsError, Permissions};

/// Write operations for a filesystem capability.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsWrite`.
pub trait FsWrite: Send + Sync {
    /// Write data to a file, creating it if absent and truncating it otherwise.
    ///
    /// `perm` is applied only when the file is created; an existing file keeps
    /// its mode. Parent directories must exist. Use
    /// [`FsDir::create_dir_all`](super::FsDir::create_dir_all) first.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the parent directory does not exist
    /// - [`FsError::NotAFile`] if the path is a directory
    /// - [`FsError::PermissionDenied`] if write access is denied
    fn write_file(&self, path: &Path, data: &[u8], perm: Permissions) -> Result<(), FsError>;
}

impl<T: FsWrite + ?Sized> FsWrite for &T {
    fn write_file(&self, path: &Path, data: &[u8], perm: Permissions) -> Result<(), FsError> {
        (**self).write_file(path, data, perm)
    }
}

impl<T: FsWrite + ?Sized> FsWrite for Box<T> {
    fn write_file(&self, path: &Path, data: &[u8], perm: Permissions) -> Result<(), FsError> {
        (**self).write_file(path, data, perm)
    }
}
