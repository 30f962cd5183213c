//! Core types: file records, existence policy, and the metadata a
//! filesystem capability reports.

use std::path::{Path, PathBuf};

/// Type of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

/// Metadata returned by [`FsRead::metadata`](crate::FsRead::metadata).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Type of the entry.
    pub file_type: FileType,
    /// Size in bytes (0 for directories).
    pub size: u64,
    /// Permissions.
    pub permissions: Permissions,
}

impl Metadata {
    /// Returns `true` if this is a regular file.
    #[inline]
    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    /// Returns `true` if this is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }
}

/// Unix-style permissions stored as a mode bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permissions(u32);

impl Permissions {
    /// Mode for directories created by the writer (`rwxr-xr-x`).
    pub const DIR_MODE: Self = Self(0o755);

    /// Mode for files created by the writer (`rw-r--r--`).
    pub const FILE_MODE: Self = Self(0o644);

    /// Create permissions from a Unix mode (e.g., 0o755).
    #[inline]
    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & 0o7777)
    }

    /// Get the raw mode value.
    #[inline]
    pub const fn mode(&self) -> u32 {
        self.0
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::FILE_MODE
    }
}

/// What to do when a chart file already exists at its target path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExistsPolicy {
    /// Replace the existing file.
    #[default]
    Override,
    /// Leave the existing file untouched.
    Skip,
}

/// A generated file waiting to be written under a chart directory.
///
/// # Example
///
/// ```rust
/// use chart_writer::{ChartFile, ExistsPolicy};
///
/// let values = ChartFile::new("values.yaml", "replicaCount: 1").skip_if_exists();
/// assert_eq!(values.policy, ExistsPolicy::Skip);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartFile {
    /// Path relative to the chart directory, including the file name.
    pub path: PathBuf,
    /// Full textual content. May be empty.
    pub content: String,
    /// Behavior when the target already exists.
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: ExistsPolicy,
}

impl ChartFile {
    /// A record that overrides any existing file.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            policy: ExistsPolicy::Override,
        }
    }

    /// Set the existence policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ExistsPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for `with_policy(ExistsPolicy::Skip)`.
    #[must_use]
    pub fn skip_if_exists(self) -> Self {
        self.with_policy(ExistsPolicy::Skip)
    }

    /// The record path.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
