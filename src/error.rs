//! Error types for chart writing and the filesystem capability beneath it.

use std::fmt;
use std::path::{Path, PathBuf};

/// Filesystem capability error with contextual variants.
///
/// Returned by every [`Fs`](crate::Fs) operation. Variants carry the path
/// (and operation, where relevant) that failed.
///
/// # Examples
///
/// ```rust
/// use chart_writer::FsError;
/// use std::path::PathBuf;
///
/// let err = FsError::NotFound { path: PathBuf::from("/missing") };
/// assert_eq!(err.to_string(), "not found: /missing");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// Path does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Path already exists when it shouldn't.
    #[error("{operation}: already exists: {path}")]
    AlreadyExists {
        /// The path that already exists.
        path: PathBuf,
        /// The operation that failed.
        operation: &'static str,
    },

    /// Expected a file but found something else.
    #[error("not a file: {path}")]
    NotAFile {
        /// The path that is not a file.
        path: PathBuf,
    },

    /// Expected a directory but found something else.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that is not a directory.
        path: PathBuf,
    },

    /// Permission denied for operation.
    #[error("{operation}: permission denied: {path}")]
    PermissionDenied {
        /// The path where permission was denied.
        path: PathBuf,
        /// The operation that was denied.
        operation: &'static str,
    },

    /// Path cannot be represented by the backend.
    #[error("invalid path: {path} ({reason})")]
    InvalidPath {
        /// The rejected path.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },

    /// Generic backend error.
    #[error("backend error: {0}")]
    Backend(String),

    /// I/O error with context.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Convert an I/O error, attaching the operation and path that produced it.
    ///
    /// `NotFound`, `PermissionDenied` and `AlreadyExists` map onto their
    /// dedicated variants; everything else is kept as [`FsError::Io`].
    pub fn from_io(operation: &'static str, path: &Path, error: std::io::Error) -> Self {
        let path = path.to_path_buf();
        match error.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path, operation },
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists { path, operation },
            _ => FsError::Io {
                operation,
                path,
                source: error,
            },
        }
    }

    /// Returns `true` if this error means the path does not exist.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound { .. })
    }
}

/// Failure to persist a single chart file.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The parent directory chain could not be created.
    #[error("failed to create directory {dir}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        dir: PathBuf,
        /// The capability error.
        #[source]
        source: FsError,
    },

    /// The file content could not be written.
    #[error("failed to write file {path}: {source}")]
    Write {
        /// The resolved target path.
        path: PathBuf,
        /// The capability error.
        #[source]
        source: FsError,
    },
}

impl WriteError {
    /// The on-disk path the failed operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            WriteError::CreateDir { dir, .. } => dir,
            WriteError::Write { path, .. } => path,
        }
    }

    /// The underlying capability error.
    pub fn fs_error(&self) -> &FsError {
        match self {
            WriteError::CreateDir { source, .. } | WriteError::Write { source, .. } => source,
        }
    }
}

/// One failed record of a batch, keyed by the record's chart-relative path.
#[derive(Debug, thiserror::Error)]
#[error("unable to write file {path}: {source}")]
pub struct FileFailure {
    /// The record path as supplied by the caller.
    pub path: PathBuf,
    /// Why the record failed.
    #[source]
    pub source: WriteError,
}

/// Aggregate error from [`ChartWriter::write_files`](crate::ChartWriter::write_files).
///
/// Holds every failing record in input order. Records that are not listed
/// here were written or skipped successfully.
#[derive(Debug)]
pub struct BatchError {
    failures: Vec<FileFailure>,
}

impl BatchError {
    pub(crate) fn new(failures: Vec<FileFailure>) -> Self {
        debug_assert!(!failures.is_empty());
        Self { failures }
    }

    /// All failures, in the order the records were supplied.
    pub fn failures(&self) -> &[FileFailure] {
        &self.failures
    }

    /// Number of failed records.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Always `false` for an error that was actually returned.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Record paths that failed.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.failures.iter().map(|f| f.path.as_path())
    }

    /// Consume the error, returning the individual failures.
    pub fn into_failures(self) -> Vec<FileFailure> {
        self.failures
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("errors writing files: [")?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{failure}")?;
        }
        f.write_str("]")
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.failures
            .first()
            .map(|f| f as &(dyn std::error::Error + 'static))
    }
}
