//! In-memory capability.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{FileType, FsDir, FsError, FsRead, FsWrite, Metadata, Permissions};

#[derive(Debug, Clone)]
enum Node {
    File { data: Vec<u8>, perm: Permissions },
    Dir { perm: Permissions },
}

/// An in-memory filesystem.
///
/// Paths are stored exactly as given (no normalization). The root `/` and the
/// empty path always exist as directories, so both absolute and relative chart
/// directories work. Paths containing a NUL byte are rejected with
/// [`FsError::InvalidPath`], mirroring what an operating system would refuse.
///
/// # Example
///
/// ```rust
/// use chart_writer::{ChartFile, ChartWriter, FsRead, MemoryFs};
/// use std::path::Path;
///
/// let fs = MemoryFs::new();
/// ChartWriter::new("/chart", &fs)
///     .write_file(&ChartFile::new("Chart.yaml", "name: demo"))
///     .unwrap();
/// assert_eq!(fs.read(Path::new("/chart/Chart.yaml")).unwrap(), b"name: demo\n");
/// ```
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: RwLock<HashMap<PathBuf, Node>>,
}

impl MemoryFs {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its parent directories) before use.
    ///
    /// # Panics
    ///
    /// Panics if the path cannot be created, e.g. a parent is a file.
    #[must_use]
    pub fn with_file(self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent, Permissions::DIR_MODE)
                .unwrap_or_else(|e| panic!("cannot seed {}: {e}", path.display()));
        }
        self.write_file(path, content.as_ref(), Permissions::FILE_MODE)
            .unwrap_or_else(|e| panic!("cannot seed {}: {e}", path.display()));
        self
    }

    /// Permissions recorded for `path`, if it exists.
    pub fn permissions(&self, path: &Path) -> Option<Permissions> {
        self.nodes().get(path).map(|node| match node {
            Node::File { perm, .. } | Node::Dir { perm } => *perm,
        })
    }

    /// Number of regular files stored.
    pub fn file_count(&self) -> usize {
        self.nodes()
            .values()
            .filter(|n| matches!(n, Node::File { .. }))
            .count()
    }

    fn nodes(&self) -> RwLockReadGuard<'_, HashMap<PathBuf, Node>> {
        self.nodes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn nodes_mut(&self) -> RwLockWriteGuard<'_, HashMap<PathBuf, Node>> {
        self.nodes.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn is_implicit_dir(path: &Path) -> bool {
    path.as_os_str().is_empty() || path.components().all(|c| matches!(c, Component::RootDir))
}

fn check_path(path: &Path) -> Result<(), FsError> {
    if path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(FsError::InvalidPath {
            path: path.to_path_buf(),
            reason: "contains a NUL byte".into(),
        });
    }
    Ok(())
}

impl FsRead for MemoryFs {
    fn metadata(&self, path: &Path) -> Result<Metadata, FsError> {
        check_path(path)?;
        if is_implicit_dir(path) {
            return Ok(Metadata {
                file_type: FileType::Directory,
                size: 0,
                permissions: Permissions::DIR_MODE,
            });
        }
        match self.nodes().get(path) {
            Some(Node::File { data, perm }) => Ok(Metadata {
                file_type: FileType::File,
                size: data.len() as u64,
                permissions: *perm,
            }),
            Some(Node::Dir { perm }) => Ok(Metadata {
                file_type: FileType::Directory,
                size: 0,
                permissions: *perm,
            }),
            None => Err(FsError::NotFound {
                path: path.to_path_buf(),
            }),
        }
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        check_path(path)?;
        match self.nodes().get(path) {
            Some(Node::File { data, .. }) => Ok(data.clone()),
            Some(Node::Dir { .. }) => Err(FsError::NotAFile {
                path: path.to_path_buf(),
            }),
            None if is_implicit_dir(path) => Err(FsError::NotAFile {
                path: path.to_path_buf(),
            }),
            None => Err(FsError::NotFound {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl FsWrite for MemoryFs {
    fn write_file(&self, path: &Path, data: &[u8], perm: Permissions) -> Result<(), FsError> {
        check_path(path)?;
        if is_implicit_dir(path) {
            return Err(FsError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let mut nodes = self.nodes_mut();
        if let Some(parent) = path.parent().filter(|p| !is_implicit_dir(p)) {
            match nodes.get(parent) {
                Some(Node::Dir { .. }) => {}
                Some(Node::File { .. }) => {
                    return Err(FsError::NotADirectory {
                        path: parent.to_path_buf(),
                    });
                }
                None => {
                    return Err(FsError::NotFound {
                        path: parent.to_path_buf(),
                    });
                }
            }
        }

        match nodes.get_mut(path) {
            Some(Node::Dir { .. }) => Err(FsError::NotAFile {
                path: path.to_path_buf(),
            }),
            Some(Node::File { data: existing, .. }) => {
                existing.clear();
                existing.extend_from_slice(data);
                Ok(())
            }
            None => {
                nodes.insert(
                    path.to_path_buf(),
                    Node::File {
                        data: data.to_vec(),
                        perm,
                    },
                );
                Ok(())
            }
        }
    }
}

impl FsDir for MemoryFs {
    fn create_dir_all(&self, path: &Path, perm: Permissions) -> Result<(), FsError> {
        check_path(path)?;
        let mut nodes = self.nodes_mut();

        // Validate the whole chain before creating anything.
        let missing: Vec<&Path> = path
            .ancestors()
            .filter(|p| !is_implicit_dir(p))
            .map(|p| match nodes.get(p) {
                Some(Node::File { .. }) => Err(FsError::NotADirectory {
                    path: p.to_path_buf(),
                }),
                Some(Node::Dir { .. }) => Ok(None),
                None => Ok(Some(p)),
            })
            .filter_map(Result::transpose)
            .collect::<Result<_, _>>()?;

        for dir in missing {
            nodes.insert(dir.to_path_buf(), Node::Dir { perm });
        }
        Ok(())
    }
}
