//! Persisting chart files under a target directory.

use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};

use crate::{
    BatchError, ChartFile, ExistsPolicy, FileFailure, Fs, FsExt, Permissions, WriteError,
};

/// Writes [`ChartFile`]s below a chart directory through a filesystem capability.
///
/// Each call is independent: the writer holds no state besides the target
/// directory and the capability.
///
/// # Example
///
/// ```rust
/// use chart_writer::{ChartFile, ChartWriter, FsRead, MemoryFs};
/// use std::path::Path;
///
/// let fs = MemoryFs::new().with_file("/out/values.yaml", "old\n");
/// let writer = ChartWriter::new("/out", &fs);
///
/// writer
///     .write_files(&[
///         ChartFile::new("templates/service.yaml", "kind: Service"),
///         ChartFile::new("values.yaml", "new").skip_if_exists(),
///     ])
///     .unwrap();
///
/// assert_eq!(fs.read(Path::new("/out/templates/service.yaml")).unwrap(), b"kind: Service\n");
/// assert_eq!(fs.read(Path::new("/out/values.yaml")).unwrap(), b"old\n");
/// ```
#[derive(Debug, Clone)]
pub struct ChartWriter<F> {
    directory: PathBuf,
    fs: F,
}

impl<F: Fs> ChartWriter<F> {
    /// Create a writer rooted at `directory`.
    pub fn new(directory: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            directory: directory.into(),
            fs,
        }
    }

    /// The chart directory every record is resolved against.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The underlying filesystem capability.
    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Target path for a record path.
    ///
    /// Every component of `path` is appended below the chart directory, so a
    /// leading `/` nests under it instead of replacing it. The joined path is
    /// then cleaned lexically: `.` is dropped and `..` removes the preceding
    /// name, never climbing above the root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        let record = path
            .components()
            .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir));
        clean(self.directory.components().chain(record))
    }

    /// Persist one file.
    ///
    /// Content is written with exactly one trailing newline (see
    /// [`normalize_eof`]). If the target already exists and the record's
    /// policy is [`ExistsPolicy::Skip`], nothing is written and `Ok(())` is
    /// returned. Missing parent directories are created with
    /// [`Permissions::DIR_MODE`]; new files get [`Permissions::FILE_MODE`].
    ///
    /// A stat failure other than "not found" counts as "exists": a `Skip`
    /// record is then left alone and an `Override` record is written anyway.
    ///
    /// # Errors
    ///
    /// - [`WriteError::CreateDir`] if the parent directory chain cannot be created
    /// - [`WriteError::Write`] if the content cannot be written
    pub fn write_file(&self, file: &ChartFile) -> Result<(), WriteError> {
        self.persist(file).map(|_| ())
    }

    fn persist(&self, file: &ChartFile) -> Result<Outcome, WriteError> {
        let content = normalize_eof(&file.content);
        let path = self.resolve(&file.path);

        if file.policy == ExistsPolicy::Skip && self.fs.exists(&path).unwrap_or(true) {
            debug!(path = %path.display(), "skipping existing file");
            return Ok(Outcome::Skipped);
        }

        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            trace!(dir = %dir.display(), "ensuring directory");
            self.fs
                .create_dir_all(dir, Permissions::DIR_MODE)
                .map_err(|source| WriteError::CreateDir {
                    dir: dir.to_path_buf(),
                    source,
                })?;
        }

        debug!(path = %path.display(), bytes = content.len(), "writing file");
        self.fs
            .write_file(&path, content.as_bytes(), Permissions::FILE_MODE)
            .map_err(|source| WriteError::Write { path, source })?;
        Ok(Outcome::Written)
    }

    /// Persist every file in order.
    ///
    /// A failing record does not stop the batch; there is no rollback, so
    /// records before and after a failure are still written.
    ///
    /// # Errors
    ///
    /// [`BatchError`] listing each failed record path with its cause.
    pub fn write_files<'a, I>(&self, files: I) -> Result<(), BatchError>
    where
        I: IntoIterator<Item = &'a ChartFile>,
    {
        let (mut written, mut skipped) = (0usize, 0usize);
        let mut failures = Vec::new();
        for file in files {
            match self.persist(file) {
                Ok(Outcome::Written) => written += 1,
                Ok(Outcome::Skipped) => skipped += 1,
                Err(source) => failures.push(FileFailure {
                    path: file.path.clone(),
                    source,
                }),
            }
        }

        debug!(
            directory = %self.directory.display(),
            written,
            skipped,
            failed = failures.len(),
            "chart files processed"
        );

        if failures.is_empty() {
            Ok(())
        } else {
            Err(BatchError::new(failures))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Written,
    Skipped,
}

fn clean<'a>(components: impl IntoIterator<Item = Component<'a>>) -> PathBuf {
    let mut parts: Vec<Component<'a>> = Vec::new();
    for component in components {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.into_iter().collect()
}

/// Ensure non-empty content ends with a newline.
///
/// Empty content stays empty. Content that already ends with `\n` is
/// borrowed unchanged.
///
/// ```rust
/// use chart_writer::normalize_eof;
///
/// assert_eq!(normalize_eof("a: 1"), "a: 1\n");
/// assert_eq!(normalize_eof("a: 1\n"), "a: 1\n");
/// assert_eq!(normalize_eof(""), "");
/// ```
pub fn normalize_eof(content: &str) -> Cow<'_, str> {
    if content.is_empty() || content.ends_with('\n') {
        Cow::Borrowed(content)
    } else {
        let mut owned = String::with_capacity(content.len() + 1);
        owned.push_str(content);
        owned.push('\n');
        Cow::Owned(owned)
    }
}
