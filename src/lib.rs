//! # chart-writer
//!
//! Writes generated chart files (templated manifests, values, helpers) to a
//! target directory through a pluggable filesystem capability.
//!
//! This is the last step of a generation pipeline: callers produce
//! [`ChartFile`] records in memory, and [`ChartWriter`] materializes them,
//! honoring each record's [`ExistsPolicy`] and making sure non-empty content
//! ends with a newline.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use chart_writer::{ChartFile, ChartWriter, NativeFs};
//!
//! # let tmp = tempfile::TempDir::new().unwrap();
//! # let dir = tmp.path().join("dist/chart");
//! let writer = ChartWriter::new(&dir, NativeFs);
//! writer.write_files(&[
//!     ChartFile::new("Chart.yaml", "apiVersion: v2\nname: project"),
//!     ChartFile::new("values.yaml", "replicaCount: 1").skip_if_exists(),
//!     ChartFile::new("templates/_helpers.tpl", ""),
//! ])?;
//! # assert!(dir.join("templates/_helpers.tpl").is_file());
//! # Ok::<(), chart_writer::BatchError>(())
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`ChartWriter`] | Writes one file or a batch below a directory |
//! | [`ChartFile`] | Relative path, content and existence policy |
//! | [`ExistsPolicy`] | `Override` (default) or `Skip` an existing file |
//! | [`Fs`] | Filesystem capability: [`FsRead`] + [`FsWrite`] + [`FsDir`] |
//! | [`NativeFs`] / [`MemoryFs`] | Real disk / in-memory capability |
//! | [`WriteError`] / [`BatchError`] | Single-file and aggregate failures |
//!
//! ---
//!
//! ## Semantics
//!
//! - Files are created with mode `0o644`, directories with `0o755`
//!   ([`Permissions::FILE_MODE`], [`Permissions::DIR_MODE`]).
//! - A batch is best-effort: every record is attempted in order, there is no
//!   rollback, and all failures are returned together in a [`BatchError`].
//! - Nothing is logged at error level; failures are returned. Progress is
//!   reported through `tracing` at `debug`/`trace` level.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/deserialize [`ChartFile`], [`ExistsPolicy`], [`Permissions`], [`FileType`] |

mod backends;
mod error;
mod ext;
mod traits;
mod types;
mod writer;

// Public re-exports - error types
pub use error::{BatchError, FileFailure, FsError, WriteError};

// Public re-exports - core types
pub use types::{ChartFile, ExistsPolicy, FileType, Metadata, Permissions};

// Public re-exports - capability traits
pub use ext::FsExt;
pub use traits::{Fs, FsDir, FsRead, FsWrite};

// Public re-exports - backends
pub use backends::{MemoryFs, NativeFs};

// Public re-exports - writer
pub use writer::{ChartWriter, normalize_eof};
