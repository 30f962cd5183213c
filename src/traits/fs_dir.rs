//! Directory operations.

use std::path::Path;

use crate::{FsError, Permissions};

/// Directory operations for a filesystem capability.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsDir`.
pub trait FsDir: Send + Sync {
    /// Create a directory and all missing parents.
    ///
    /// Idempotent: succeeds if the directory already exists. Newly created
    /// directories get `perm`; existing ones are left alone.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotADirectory`] if a component of the path exists but is not a directory
    /// - [`FsError::PermissionDenied`] if a component cannot be created
    fn create_dir_all(&self, path: &Path, perm: Permissions) -> Result<(), FsError>;
}

impl<T: FsDir + ?Sized> FsDir for &T {
    fn create_dir_all(&self, path: &Path, perm: Permissions) -> Result<(), FsError> {
        (**self).create_dir_all(path, perm)
    }
}

impl<T: FsDir + ?Sized> FsDir for Box<T> {
    fn create_dir_all(&self, path: &Path, perm: Permissions) -> Result<(), FsError> {
        (**self).create_dir_all(path, perm)
    }
}
