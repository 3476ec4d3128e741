//! Plain file byte source

use parking_lot::Mutex;
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use super::{ByteSource, SourceKind};
use crate::error::{Error, Result};

/// A byte source reading through a plain file handle.
///
/// Every access seeks the handle to the requested offset first, so the
/// handle is kept behind a lock. Use this for files too large to map.
#[derive(Debug)]
pub struct FileSource {
    /// The open handle, `None` once released
    file: Mutex<Option<File>>,
    /// File length captured when the source was opened
    length: u64,
}

impl FileSource {
    /// Open the file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_file(file)
    }

    /// Wrap an already opened file
    pub fn from_file(file: File) -> Result<Self> {
        let length = file.metadata()?.len();
        Ok(Self {
            file: Mutex::new(Some(file)),
            length,
        })
    }
}

impl ByteSource for FileSource {
    fn get_byte(&self, offset: u64) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        Ok(self.get_bytes(offset, &mut byte)?.map(|_| byte[0]))
    }

    fn get_bytes(&self, offset: u64, buf: &mut [u8]) -> Result<Option<usize>> {
        let mut guard = self.file.lock();
        let file = guard.as_mut().ok_or(Error::Closed)?;

        if offset >= self.length {
            return Ok(None);
        }

        let available = (self.length - offset).min(buf.len() as u64) as usize;
        file.seek(SeekFrom::Start(offset))?;

        let mut filled = 0;
        while filled < available {
            match file.read(&mut buf[filled..available]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }

        // The file shrank underneath us
        if filled == 0 && available > 0 {
            log::warn!(
                "File ended at offset {} before its recorded length {}",
                offset,
                self.length
            );
            return Ok(None);
        }

        Ok(Some(filled))
    }

    fn length(&self) -> Result<u64> {
        if self.file.lock().is_none() {
            return Err(Error::Closed);
        }
        Ok(self.length)
    }

    fn close(&self) -> Result<()> {
        if self.file.lock().take().is_some() {
            log::trace!("Closed file byte source");
        }
        Ok(())
    }

    fn kind(&self) -> SourceKind {
        SourceKind::File
    }
}
