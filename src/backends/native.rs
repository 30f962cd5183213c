//! `std::fs` backed capability.

use std::io::Write;
use std::path::Path;

use crate::{FileType, FsDir, FsError, FsRead, FsWrite, Metadata, Permissions};

/// The real filesystem.
///
/// Paths are handed to the operating system unchanged. On Unix the requested
/// [`Permissions`] are applied to newly created files and directories (still
/// subject to the process umask); elsewhere they are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFs;

impl NativeFs {
    /// Create a handle to the native filesystem.
    pub fn new() -> Self {
        Self
    }
}

impl FsRead for NativeFs {
    fn metadata(&self, path: &Path) -> Result<Metadata, FsError> {
        let meta = std::fs::metadata(path).map_err(|e| FsError::from_io("stat", path, e))?;
        let file_type = if meta.is_dir() {
            FileType::Directory
        } else {
            FileType::File
        };
        Ok(Metadata {
            file_type,
            size: if meta.is_dir() { 0 } else { meta.len() },
            permissions: permissions_of(&meta),
        })
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        if std::fs::metadata(path).is_ok_and(|m| m.is_dir()) {
            return Err(FsError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        std::fs::read(path).map_err(|e| FsError::from_io("read", path, e))
    }
}

impl FsWrite for NativeFs {
    fn write_file(&self, path: &Path, data: &[u8], perm: Permissions) -> Result<(), FsError> {
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(perm.mode());
        }
        #[cfg(not(unix))]
        let _ = perm;

        let mut file = options.open(path).map_err(|e| {
            if path.is_dir() {
                FsError::NotAFile {
                    path: path.to_path_buf(),
                }
            } else {
                FsError::from_io("write_file", path, e)
            }
        })?;
        file.write_all(data)
            .and_then(|()| file.flush())
            .map_err(|e| FsError::from_io("write_file", path, e))
    }
}

impl FsDir for NativeFs {
    fn create_dir_all(&self, path: &Path, perm: Permissions) -> Result<(), FsError> {
        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(perm.mode());
        }
        #[cfg(not(unix))]
        let _ = perm;

        builder.create(path).map_err(|e| match e.kind() {
            // a file sits where a directory is needed
            std::io::ErrorKind::AlreadyExists | std::io::ErrorKind::NotADirectory => {
                FsError::NotADirectory {
                    path: path.to_path_buf(),
                }
            }
            _ => FsError::from_io("create_dir_all", path, e),
        })
    }
}

#[cfg(unix)]
fn permissions_of(meta: &std::fs::Metadata) -> Permissions {
    use std::os::unix::fs::PermissionsExt;
    Permissions::from_mode(meta.permissions().mode())
}

#[cfg(not(unix))]
fn permissions_of(meta: &std::fs::Metadata) -> Permissions {
    if meta.is_dir() {
        Permissions::DIR_MODE
    } else if meta.permissions().readonly() {
        Permissions::from_mode(0o444)
    } else {
        Permissions::FILE_MODE
    }
}
