//! Non-owning delegate used by reader views

use super::{ByteSource, SharedSource, SourceKind};
use crate::error::Result;

/// Forwards every read to a shared source but never releases it.
///
/// Readers created with [`create_view`](crate::RandomAccessReader::create_view)
/// sit on one of these, so closing the view cannot close the parent's source.
/// Closing the parent still releases the shared source, after which reads
/// through this delegate fail.
#[derive(Debug)]
pub struct IndependentSource {
    source: SharedSource,
}

impl IndependentSource {
    /// Wrap `source` without taking ownership of its lifetime
    pub fn new(source: SharedSource) -> Self {
        Self { source }
    }
}

impl ByteSource for IndependentSource {
    fn get_byte(&self, offset: u64) -> Result<Option<u8>> {
        self.source.get_byte(offset)
    }

    fn get_bytes(&self, offset: u64, buf: &mut [u8]) -> Result<Option<usize>> {
        self.source.get_bytes(offset, buf)
    }

    fn length(&self) -> Result<u64> {
        self.source.length()
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }

    fn kind(&self) -> SourceKind {
        self.source.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::source::ArraySource;
    use std::sync::Arc;

    #[test]
    fn test_close_does_not_release_delegate() {
        let source: SharedSource = Arc::new(ArraySource::new(vec![1, 2, 3]));
        let independent = IndependentSource::new(Arc::clone(&source));

        independent.close().unwrap();
        assert_eq!(source.get_byte(2).unwrap(), Some(3));
        assert_eq!(independent.length().unwrap(), 3);
    }

    #[test]
    fn test_sees_delegate_release() {
        let source: SharedSource = Arc::new(ArraySource::new(vec![1, 2, 3]));
        let independent = IndependentSource::new(Arc::clone(&source));

        source.close().unwrap();
        assert!(matches!(independent.get_byte(0), Err(Error::Closed)));
    }
}
