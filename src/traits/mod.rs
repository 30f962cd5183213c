//! # Filesystem Capability Traits
//!
//! The injected capability the chart writer persists through.
//!
//! ```text
//! FsRead + FsWrite + FsDir = Fs
//! ```
//!
//! | Trait | Methods | Role |
//! |-------|---------|------|
//! | [`FsRead`] | `metadata`, `read` | existence check (stat) |
//! | [`FsWrite`] | `write_file` | create-or-truncate |
//! | [`FsDir`] | `create_dir_all` | recursive mkdir |
//!
//! ## Blanket Implementations
//!
//! [`Fs`] is implemented for every type implementing the three component
//! traits. The component traits are also implemented for `&T` and `Box<T>`,
//! so a writer can borrow a backend or own a `Box<dyn Fs>`:
//!
//! ```rust
//! use chart_writer::{ChartWriter, Fs, MemoryFs};
//!
//! let fs = MemoryFs::new();
//! let borrowed = ChartWriter::new("/chart", &fs);
//! let boxed: ChartWriter<Box<dyn Fs>> = ChartWriter::new("/chart", Box::new(MemoryFs::new()));
//! # let _ = (borrowed, boxed);
//! ```

mod fs_dir;
mod fs_read;
mod fs_write;

pub use fs_dir::FsDir;
pub use fs_read::FsRead;
pub use fs_write::FsWrite;

/// A filesystem capability: stat, write and directory creation.
///
/// Automatically implemented for any type that implements [`FsRead`],
/// [`FsWrite`] and [`FsDir`]. Never implement `Fs` directly.
///
/// # Example
///
/// ```rust
/// use chart_writer::{Fs, FsError, Permissions};
/// use std::path::Path;
///
/// fn install<B: Fs>(fs: &B, dst: &Path, data: &[u8]) -> Result<(), FsError> {
///     if let Some(parent) = dst.parent() {
///         fs.create_dir_all(parent, Permissions::DIR_MODE)?;
///     }
///     fs.write_file(dst, data, Permissions::FILE_MODE)
/// }
/// ```
pub trait Fs: FsRead + FsWrite + FsDir {}

impl<T: FsRead + FsWrite + FsDir> Fs for T {}
