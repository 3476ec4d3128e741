//! In-memory byte source

use parking_lot::RwLock;

use super::{ByteSource, SourceKind, byte_at, copy_from_slice};
use crate::error::{Error, Result};

/// A byte source that owns its data in memory.
///
/// Releasing the source drops the buffer.
#[derive(Debug)]
pub struct ArraySource {
    /// The owned bytes, `None` once released
    data: RwLock<Option<Vec<u8>>>,
}

impl ArraySource {
    /// Creates a source over `data`
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data: RwLock::new(Some(data)),
        }
    }

    /// Returns true once [`close`](ByteSource::close) has been called
    pub fn is_closed(&self) -> bool {
        self.data.read().is_none()
    }
}

impl From<Vec<u8>> for ArraySource {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for ArraySource {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl ByteSource for ArraySource {
    fn get_byte(&self, offset: u64) -> Result<Option<u8>> {
        let guard = self.data.read();
        let data = guard.as_deref().ok_or(Error::Closed)?;
        Ok(byte_at(data, offset))
    }

    fn get_bytes(&self, offset: u64, buf: &mut [u8]) -> Result<Option<usize>> {
        let guard = self.data.read();
        let data = guard.as_deref().ok_or(Error::Closed)?;
        Ok(copy_from_slice(data, offset, buf))
    }

    fn length(&self) -> Result<u64> {
        let guard = self.data.read();
        let data = guard.as_deref().ok_or(Error::Closed)?;
        Ok(data.len() as u64)
    }

    fn close(&self) -> Result<()> {
        if self.data.write().take().is_some() {
            log::trace!("Released in-memory byte source");
        }
        Ok(())
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Memory
    }
}
