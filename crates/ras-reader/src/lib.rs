//! Random-access binary reading for format decoders.
//!
//! This crate provides [`RandomAccessReader`], a cursor over a [`ByteSource`]
//! with one byte of pushback, absolute seeking, and decoding of fixed-width
//! integers and floats in big-endian and little-endian byte order. Image and
//! font decoders build their record parsing on top of it.
//!
//! Byte sources are interchangeable backends: bytes in memory, a memory
//! mapped file, a plain file handle, or a bounded window onto another
//! source. A reader can hand out independent views of its source, each with
//! its own cursor.
//!
//! # Examples
//!
//! ```
//! use ras_reader::{RandomAccessReader, TextEncoding};
//!
//! let data = vec![0x00, 0x00, 0x00, 0x2A, 0x2A, 0x00, b'B', b'M'];
//! let mut reader = RandomAccessReader::from_bytes(data);
//!
//! assert_eq!(reader.read_i32()?, 42);
//! assert_eq!(reader.read_u16_le()?, 42);
//!
//! let mut view = reader.create_view()?;
//! assert_eq!(view.read_u8()?, 0);
//!
//! assert_eq!(reader.read_string(2, TextEncoding::Ascii)?, "BM");
//! # Ok::<(), ras_reader::Error>(())
//! ```
//!
//! Opening a file picks the backend according to a [`SourceConfig`]:
//!
//! ```no_run
//! use ras_reader::{RandomAccessReader, SourceConfig};
//!
//! let mut reader = RandomAccessReader::open("image.bmp", &SourceConfig::default())?;
//! let magic = reader.read_u16()?;
//! # Ok::<(), ras_reader::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod decode;
pub mod encoding;
pub mod error;
pub mod reader;
pub mod source;

pub use config::SourceConfig;
pub use decode::{Endian, FixedWidth};
pub use encoding::TextEncoding;
pub use error::{Error, Result};
pub use reader::RandomAccessReader;
pub use source::{ByteSource, SharedSource, SourceFactory, SourceKind};

/// Common imports for decoders built on the reader
pub mod prelude {
    pub use crate::config::SourceConfig;
    pub use crate::decode::{Endian, FixedWidth};
    pub use crate::encoding::TextEncoding;
    pub use crate::reader::RandomAccessReader;
    pub use crate::source::{
        ArraySource, ByteSource, SharedSource, SourceFactory, SourceKind, WindowSource,
    };
    pub use std::io::{Read, Seek, SeekFrom};
}
