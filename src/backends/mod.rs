//! Concrete filesystem capabilities.
//!
//! - [`NativeFs`] delegates to `std::fs` and the operating system.
//! - [`MemoryFs`] keeps everything in memory; use it as a test double or for
//!   dry runs that should never touch the disk.

mod memory;
mod native;

pub use memory::MemoryFs;
pub use native::NativeFs;
