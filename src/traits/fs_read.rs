//! Read and stat operations.

use std::path::Path;

use crate::{FsError, Metadata};

/// Read operations for a filesystem capability.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self`; backends
/// with mutable state use interior mutability (`RwLock`, `Mutex`).
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsRead`.
pub trait FsRead: Send + Sync {
    /// Get metadata for a path (follows symlinks).
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path does not exist. Backends must use
    ///   this variant for a missing path and nothing else, since callers rely
    ///   on it to tell "absent" apart from "could not check".
    /// - [`FsError::PermissionDenied`] if the path cannot be inspected
    fn metadata(&self, path: &Path) -> Result<Metadata, FsError>;

    /// Read entire file contents as bytes.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path does not exist
    /// - [`FsError::NotAFile`] if the path is a directory
    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError>;
}

impl<T: FsRead + ?Sized> FsRead for &T {
    fn metadata(&self, path: &Path) -> Result<Metadata, FsError> {
        (**self).metadata(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        (**self).read(path)
    }
}

impl<T: FsRead + ?Sized> FsRead for Box<T> {
    fn metadata(&self, path: &Path) -> Result<Metadata, FsError> {
        (**self).metadata(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        (**self).read(path)
    }
}
