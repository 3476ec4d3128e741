//! Random-access reader with single-byte pushback
//!
//! [`RandomAccessReader`] keeps a cursor into a [`ByteSource`] and an optional
//! pushed-back byte. The position seen by callers is always
//! `cursor - (1 if a byte is pushed back)`, and every seek drops the
//! pushed-back byte.
//!
//! # Examples
//!
//! ```
//! use ras_reader::RandomAccessReader;
//!
//! let mut reader = RandomAccessReader::from_bytes(vec![0x12, 0x34, b'h', b'i', b'\n']);
//! assert_eq!(reader.read_u16()?, 0x1234);
//!
//! let first = reader.read_byte()?.unwrap();
//! reader.push_back(first)?;
//! assert_eq!(reader.position()?, 2);
//!
//! assert_eq!(reader.read_line()?.as_deref(), Some("hi"));
//! assert_eq!(reader.read_line()?, None);
//! # Ok::<(), ras_reader::Error>(())
//! ```

use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::Arc;

use crate::config::SourceConfig;
use crate::decode::{Endian, FixedWidth};
use crate::encoding::{TextEncoding, decode_modified_utf8};
use crate::error::{Error, Result};
use crate::source::{ByteSource, IndependentSource, SharedSource, SourceFactory, SourceKind};

/// Cursor over a byte source with pushback, seeking and typed decoding
#[derive(Debug)]
pub struct RandomAccessReader {
    /// The bytes being read
    source: SharedSource,
    /// Absolute offset of the next byte fetched from the source
    cursor: u64,
    /// Byte to replay before consulting the source again
    pushback: Option<u8>,
    /// Set by `close`; every later call fails
    closed: bool,
}

impl RandomAccessReader {
    /// Create a reader that owns `source` and releases it on close
    pub fn new<S: ByteSource + 'static>(source: S) -> Self {
        Self::from_shared(Arc::new(source))
    }

    /// Create a reader over an already shared source.
    ///
    /// Closing the reader closes `source`; wrap it in an
    /// [`IndependentSource`] to read without owning it.
    pub fn from_shared(source: SharedSource) -> Self {
        Self {
            source,
            cursor: 0,
            pushback: None,
            closed: false,
        }
    }

    /// Create a reader over bytes in memory
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self::from_shared(SourceFactory::default().create_from_bytes(data))
    }

    /// Open a file with the backend chosen by `config`
    pub fn open<P: AsRef<Path>>(path: P, config: &SourceConfig) -> Result<Self> {
        let source = SourceFactory::new(config.clone()).create_from_path(path)?;
        Ok(Self::from_shared(source))
    }

    /// An independent reader over the same bytes.
    ///
    /// The view starts at offset 0 with no pushback. Reading, seeking or
    /// closing the view never affects this reader. Closing this reader
    /// releases the shared source, after which the view's reads fail.
    pub fn create_view(&self) -> Result<Self> {
        Ok(Self::from_shared(self.create_source_view()?))
    }

    /// A non-owning delegate of this reader's source
    pub fn create_source_view(&self) -> Result<SharedSource> {
        self.ensure_open()?;
        Ok(Arc::new(IndependentSource::new(Arc::clone(&self.source))))
    }

    /// An independent reader over `[offset, offset + length)` of this
    /// reader's source. Offset 0 of the view is `offset` here.
    pub fn create_window_view(&self, offset: u64, length: u64) -> Result<Self> {
        self.ensure_open()?;
        let window =
            SourceFactory::default().create_window(Arc::clone(&self.source), offset, length)?;
        Ok(Self::from_shared(window))
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(Error::Closed);
        }
        Ok(())
    }

    /// Push `byte` back so the next read returns it.
    ///
    /// Only one byte is held; a second call replaces the first.
    pub fn push_back(&mut self, byte: u8) -> Result<()> {
        self.ensure_open()?;
        self.pushback = Some(byte);
        Ok(())
    }

    /// Read one byte, `None` at end of data.
    ///
    /// A pushed-back byte is returned without touching the source. At end of
    /// data the cursor stays where it is.
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        self.ensure_open()?;
        if let Some(byte) = self.pushback.take() {
            return Ok(Some(byte));
        }

        let byte = self.source.get_byte(self.cursor)?;
        if byte.is_some() {
            self.cursor += 1;
        }
        Ok(byte)
    }

    /// Read up to `buf.len()` bytes.
    ///
    /// Returns the number of bytes delivered, which may be fewer than
    /// requested, or `None` if nothing at all was available. An empty `buf`
    /// returns `Some(0)` without consuming the pushed-back byte.
    pub fn read_block(&mut self, buf: &mut [u8]) -> Result<Option<usize>> {
        self.ensure_open()?;
        if buf.is_empty() {
            return Ok(Some(0));
        }

        let mut count = 0;
        if let Some(byte) = self.pushback.take() {
            buf[0] = byte;
            count = 1;
        }

        if count < buf.len() {
            if let Some(n) = self.source.get_bytes(self.cursor, &mut buf[count..])? {
                self.cursor += n as u64;
                count += n;
            }
        }

        if count == 0 {
            return Ok(None);
        }
        Ok(Some(count))
    }

    /// Fill `buf` completely.
    ///
    /// Fails with [`Error::UnexpectedEof`] if the data runs out first. Bytes
    /// delivered before that point are left in `buf`.
    pub fn read_fully(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read_block(&mut buf[filled..])? {
                Some(n) => filled += n,
                None => return Err(Error::UnexpectedEof),
            }
        }
        Ok(())
    }

    /// Skip forward by up to `n` bytes, returning the distance moved.
    ///
    /// A pushed-back byte counts as the first skipped byte. The rest of the
    /// skip seeks directly, stopping at the end of the source.
    pub fn skip(&mut self, n: i64) -> Result<u64> {
        self.ensure_open()?;
        if n <= 0 {
            return Ok(0);
        }

        let mut remaining = n as u64;
        let mut skipped = 0;
        if self.pushback.take().is_some() {
            remaining -= 1;
            skipped = 1;
        }

        let start = self.cursor;
        let target = start.saturating_add(remaining).min(self.length()?.max(start));
        self.seek(target)?;

        Ok(skipped + (target - start))
    }

    /// Move to absolute offset `pos`, dropping any pushed-back byte.
    ///
    /// Seeking past the end is allowed; reads there report end of data.
    pub fn seek(&mut self, pos: u64) -> Result<()> {
        self.ensure_open()?;
        self.cursor = pos;
        self.pushback = None;
        Ok(())
    }

    /// Offset of the next byte a read will return
    pub fn position(&self) -> Result<u64> {
        self.ensure_open()?;
        // A byte pushed back at offset 0 has no earlier position to report
        Ok(self.cursor.saturating_sub(u64::from(self.pushback.is_some())))
    }

    /// Length of the underlying source
    pub fn length(&self) -> Result<u64> {
        self.ensure_open()?;
        self.source.length()
    }

    /// Backend serving this reader's bytes
    pub fn source_kind(&self) -> Result<SourceKind> {
        self.ensure_open()?;
        Ok(self.source.kind())
    }

    /// Whether [`close`](Self::close) has been called
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Release the source and invalidate this reader.
    ///
    /// Calling it again is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.pushback = None;
        self.source.close()
    }

    /// Read one fixed-width value in the given byte order.
    ///
    /// Fails with [`Error::UnexpectedEof`] if any of its bytes is missing.
    pub fn read_value<T: FixedWidth>(&mut self, endian: Endian) -> Result<T> {
        let mut bytes = <T::Bytes as Default>::default();
        for slot in bytes.as_mut() {
            *slot = self.read_byte()?.ok_or(Error::UnexpectedEof)?;
        }
        Ok(T::decode(bytes, endian))
    }

    /// Read a byte as a boolean, nonzero is `true`
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read_value(Endian::Big)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_value(Endian::Big)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_value(Endian::Big)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_value(Endian::Big)
    }

    pub fn read_i16_le(&mut self) -> Result<i16> {
        self.read_value(Endian::Little)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_value(Endian::Big)
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.read_value(Endian::Little)
    }

    /// Read a big-endian UTF-16 code unit (same value as [`read_u16`](Self::read_u16))
    pub fn read_char(&mut self) -> Result<u16> {
        self.read_u16()
    }

    /// Read a little-endian UTF-16 code unit
    pub fn read_char_le(&mut self) -> Result<u16> {
        self.read_u16_le()
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_value(Endian::Big)
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        self.read_value(Endian::Little)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_value(Endian::Big)
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.read_value(Endian::Little)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_value(Endian::Big)
    }

    pub fn read_i64_le(&mut self) -> Result<i64> {
        self.read_value(Endian::Little)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_value(Endian::Big)
    }

    pub fn read_f32_le(&mut self) -> Result<f32> {
        self.read_value(Endian::Little)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_value(Endian::Big)
    }

    pub fn read_f64_le(&mut self) -> Result<f64> {
        self.read_value(Endian::Little)
    }

    /// Read a line terminated by `\n`, `\r`, `\r\n` or end of data.
    ///
    /// Each byte becomes the character with the same code point. Returns
    /// `None` only when end of data is hit before any byte was read, so an
    /// empty line is `Some("")`.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        loop {
            match self.read_byte()? {
                None => {
                    if line.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Some(b'\n') => break,
                Some(b'\r') => {
                    let after_cr = self.position()?;
                    if self.read_byte()? != Some(b'\n') {
                        self.seek(after_cr)?;
                    }
                    break;
                }
                Some(byte) => line.push(char::from(byte)),
            }
        }
        Ok(Some(line))
    }

    /// Read exactly `length` bytes and decode them with `encoding`
    pub fn read_string(&mut self, length: usize, encoding: TextEncoding) -> Result<String> {
        let mut buf = vec![0u8; length];
        self.read_fully(&mut buf)?;
        encoding.decode(&buf)
    }

    /// Read a string prefixed by its big-endian 16-bit byte length and
    /// encoded in modified UTF-8
    pub fn read_utf(&mut self) -> Result<String> {
        let length = self.read_u16()?;
        let mut buf = vec![0u8; usize::from(length)];
        self.read_fully(&mut buf)?;
        decode_modified_utf8(&buf)
    }
}

impl Read for RandomAccessReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_block(buf)?.unwrap_or(0))
    }
}

impl Seek for RandomAccessReader {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (base, delta) = match pos {
            SeekFrom::Start(offset) => (0, i128::from(offset)),
            SeekFrom::End(delta) => (self.length()?, i128::from(delta)),
            SeekFrom::Current(delta) => (self.position()?, i128::from(delta)),
        };

        let target = u64::try_from(i128::from(base) + delta).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid seek to a negative or overflowing position",
            )
        })?;

        RandomAccessReader::seek(self, target)?;
        Ok(target)
    }
}
