//! Memory-mapped file byte source

use memmap2::{Mmap, MmapOptions};
use parking_lot::RwLock;
use std::fs::File;
use std::path::Path;

use super::{ByteSource, SourceKind, byte_at, copy_from_slice};
use crate::error::{Error, Result};

/// A read-only memory mapping of a file.
///
/// The mapping is dropped on [`close`](ByteSource::close). The file must not
/// be truncated by another process while it is mapped.
#[derive(Debug)]
pub struct MmapSource {
    /// The mapping, `None` once released
    map: RwLock<Option<Mmap>>,
    /// Length of the mapped region
    length: u64,
}

impl MmapSource {
    /// Map the file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_file(&file)
    }

    /// Map an already opened file.
    ///
    /// The mapping stays valid after `file` is dropped.
    pub fn from_file(file: &File) -> Result<Self> {
        // Safety: the mapping is read-only and callers are documented not to
        // truncate the file while it is mapped.
        #[allow(unsafe_code)]
        let map = unsafe { MmapOptions::new().map(file) }
            .map_err(|e| Error::memory_map(format!("Failed to map file: {}", e)))?;

        let length = map.len() as u64;
        log::debug!("Mapped {} bytes", length);

        Ok(Self {
            map: RwLock::new(Some(map)),
            length,
        })
    }
}

impl ByteSource for MmapSource {
    fn get_byte(&self, offset: u64) -> Result<Option<u8>> {
        let guard = self.map.read();
        let map = guard.as_ref().ok_or(Error::Closed)?;
        Ok(byte_at(map, offset))
    }

    fn get_bytes(&self, offset: u64, buf: &mut [u8]) -> Result<Option<usize>> {
        let guard = self.map.read();
        let map = guard.as_ref().ok_or(Error::Closed)?;
        Ok(copy_from_slice(map, offset, buf))
    }

    fn length(&self) -> Result<u64> {
        if self.map.read().is_none() {
            return Err(Error::Closed);
        }
        Ok(self.length)
    }

    fn close(&self) -> Result<()> {
        if self.map.write().take().is_some() {
            log::trace!("Unmapped {} bytes", self.length);
        }
        Ok(())
    }

    fn kind(&self) -> SourceKind {
        SourceKind::MemoryMapped
    }
}
