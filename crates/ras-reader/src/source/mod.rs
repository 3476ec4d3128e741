//! Byte sources backing a [`RandomAccessReader`](crate::RandomAccessReader)
//!
//! A byte source is a fixed-length run of bytes addressed by absolute offset.
//! The reader only ever talks to the [`ByteSource`] trait, so every backend
//! here is interchangeable:
//!
//! - [`ArraySource`] - bytes held in memory
//! - [`MmapSource`] - a read-only memory mapping of a file (`mmap` feature)
//! - [`FileSource`] - positional reads through a plain file handle
//! - [`WindowSource`] - a bounded sub-range of another source
//! - [`IndependentSource`] - a non-owning delegate used by reader views
//!
//! Sources are shared between a reader and its views through
//! [`SharedSource`], which is why every method takes `&self`.

mod array;
mod factory;
mod file;
mod independent;
#[cfg(feature = "mmap")]
mod mmap;
mod window;

pub use array::ArraySource;
pub use factory::SourceFactory;
pub use file::FileSource;
pub use independent::IndependentSource;
#[cfg(feature = "mmap")]
pub use mmap::MmapSource;
pub use window::WindowSource;

use std::fmt;
use std::sync::Arc;

use crate::error::Result;

/// Backend that holds the bytes of a source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Bytes held in memory
    Memory,
    /// Read-only memory mapping of a file
    MemoryMapped,
    /// Positional reads through a file handle
    File,
    /// Sub-range of another source
    Window,
}

impl SourceKind {
    /// Human readable name of the backend
    pub fn name(self) -> &'static str {
        match self {
            SourceKind::Memory => "in memory",
            SourceKind::MemoryMapped => "memory mapped",
            SourceKind::File => "plain file access",
            SourceKind::Window => "window",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A byte source shared between a reader and its views
pub type SharedSource = Arc<dyn ByteSource>;

/// Random access to a fixed-length sequence of bytes
pub trait ByteSource: Send + Sync + fmt::Debug {
    /// Returns the byte at `offset`, or `None` if `offset` is past the end.
    fn get_byte(&self, offset: u64) -> Result<Option<u8>>;

    /// Copies bytes starting at `offset` into `buf`.
    ///
    /// Returns the number of bytes copied, which may be less than
    /// `buf.len()` near the end of the source, or `None` if `offset` is
    /// past the end. Never reads beyond [`length`](Self::length).
    fn get_bytes(&self, offset: u64, buf: &mut [u8]) -> Result<Option<usize>>;

    /// Total number of addressable bytes
    fn length(&self) -> Result<u64>;

    /// Releases the resources held by this source.
    ///
    /// Calling this more than once is a no-op. Reads after release fail
    /// with [`Error::Closed`](crate::Error::Closed).
    fn close(&self) -> Result<()>;

    /// The backend serving the bytes
    fn kind(&self) -> SourceKind;
}

/// Copies from an in-memory slice with the [`ByteSource::get_bytes`] contract
pub(crate) fn copy_from_slice(data: &[u8], offset: u64, buf: &mut [u8]) -> Option<usize> {
    let start = usize::try_from(offset).ok().filter(|&start| start < data.len())?;
    let count = buf.len().min(data.len() - start);
    buf[..count].copy_from_slice(&data[start..start + count]);
    Some(count)
}

/// Byte at `offset` of an in-memory slice, `None` past the end
pub(crate) fn byte_at(data: &[u8], offset: u64) -> Option<u8> {
    usize::try_from(offset)
        .ok()
        .and_then(|index| data.get(index).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_from_slice_short_read() {
        let data = [1u8, 2, 3, 4, 5];
        let mut buf = [0u8; 4];

        assert_eq!(copy_from_slice(&data, 3, &mut buf), Some(2));
        assert_eq!(&buf[..2], &[4, 5]);
    }

    #[test]
    fn test_copy_from_slice_past_end() {
        let data = [1u8, 2, 3];
        let mut buf = [0u8; 2];

        assert_eq!(copy_from_slice(&data, 3, &mut buf), None);
        assert_eq!(copy_from_slice(&data, u64::MAX, &mut buf), None);
    }

    #[test]
    fn test_source_kind_display() {
        assert_eq!(SourceKind::MemoryMapped.to_string(), "memory mapped");
        assert_eq!(SourceKind::File.to_string(), "plain file access");
    }

    #[test]
    fn test_byte_at() {
        let data = [7u8, 8];
        assert_eq!(byte_at(&data, 1), Some(8));
        assert_eq!(byte_at(&data, 2), None);
    }
}
