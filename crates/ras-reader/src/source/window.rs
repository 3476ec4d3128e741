//! Bounded sub-range of another byte source

use super::{ByteSource, SharedSource, SourceKind};
use crate::error::{Error, Result};

/// A window `[offset, offset + length)` onto a parent source.
///
/// Offset 0 of the window is `offset` in the parent. The window does not own
/// its parent: [`close`](ByteSource::close) leaves the parent untouched.
#[derive(Debug)]
pub struct WindowSource {
    source: SharedSource,
    offset: u64,
    length: u64,
}

impl WindowSource {
    /// Create a window onto `source`.
    ///
    /// Fails if `offset` lies past the end of the parent. A window reaching
    /// beyond the parent's end is cut short when read.
    pub fn new(source: SharedSource, offset: u64, length: u64) -> Result<Self> {
        let source_length = source.length()?;
        if offset > source_length {
            return Err(Error::InvalidWindow {
                offset,
                length,
                source_length,
            });
        }

        Ok(Self {
            source,
            offset,
            length,
        })
    }

    fn effective_length(&self) -> Result<u64> {
        let parent = self.source.length()?;
        Ok(self.length.min(parent.saturating_sub(self.offset)))
    }
}

impl ByteSource for WindowSource {
    fn get_byte(&self, offset: u64) -> Result<Option<u8>> {
        if offset >= self.effective_length()? {
            return Ok(None);
        }
        self.source.get_byte(self.offset + offset)
    }

    fn get_bytes(&self, offset: u64, buf: &mut [u8]) -> Result<Option<usize>> {
        let length = self.effective_length()?;
        if offset >= length {
            return Ok(None);
        }

        let count = (length - offset).min(buf.len() as u64) as usize;
        self.source.get_bytes(self.offset + offset, &mut buf[..count])
    }

    fn length(&self) -> Result<u64> {
        self.effective_length()
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ArraySource;
    use std::sync::Arc;

    fn parent(data: &[u8]) -> SharedSource {
        Arc::new(ArraySource::from(data))
    }

    #[test]
    fn test_window_maps_offsets() {
        let window = WindowSource::new(parent(b"abcdefgh"), 2, 4).unwrap();

        assert_eq!(window.length().unwrap(), 4);
        assert_eq!(window.get_byte(0).unwrap(), Some(b'c'));
        assert_eq!(window.get_byte(3).unwrap(), Some(b'f'));
        assert_eq!(window.get_byte(4).unwrap(), None);

        let mut buf = [0u8; 10];
        assert_eq!(window.get_bytes(1, &mut buf).unwrap(), Some(3));
        assert_eq!(&buf[..3], b"def");
    }

    #[test]
    fn test_window_clamped_to_parent() {
        let window = WindowSource::new(parent(b"abcdef"), 4, 100).unwrap();
        assert_eq!(window.length().unwrap(), 2);
        assert_eq!(window.get_byte(2).unwrap(), None);
    }

    #[test]
    fn test_window_past_parent_end() {
        let result = WindowSource::new(parent(b"abc"), 4, 1);
        assert!(matches!(
            result,
            Err(Error::InvalidWindow {
                offset: 4,
                source_length: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_window_error_names_offset() {
        let err = WindowSource::new(parent(b"a"), 2, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid window: offset 2 is past the end of the source (1 bytes)"
        );

        // Only the start is checked, the length is clamped on read
        let window = WindowSource::new(parent(b"abc"), 1, 100).unwrap();
        assert_eq!(window.length().unwrap(), 2);
    }

    #[test]
    fn test_close_leaves_parent_open() {
        let source = parent(b"abc");
        let window = WindowSource::new(Arc::clone(&source), 0, 3).unwrap();

        window.close().unwrap();

        assert_eq!(source.get_byte(0).unwrap(), Some(b'a'));
        assert_eq!(window.get_byte(1).unwrap(), Some(b'b'));
    }
}
