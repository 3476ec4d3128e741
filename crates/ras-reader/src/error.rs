//! Error types for random-access reading

use std::io;
use thiserror::Error;

/// Result type alias for reader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for byte sources and readers
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from the underlying medium
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A typed read needed more bytes than the source holds
    #[error("Unexpected end of data")]
    UnexpectedEof,

    /// Bytes are not valid in the requested text encoding
    #[error("Invalid {encoding} data: {reason}")]
    InvalidEncoding {
        /// Name of the encoding used for decoding
        encoding: String,
        /// What was wrong with the input
        reason: String,
    },

    /// Encoding name could not be resolved
    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    /// The reader or its source has been closed
    #[error("Byte source is closed")]
    Closed,

    /// Window starts past the end of its parent source
    #[error("Invalid window: offset {offset} is past the end of the source ({source_length} bytes)")]
    InvalidWindow {
        /// Start of the window in the parent
        offset: u64,
        /// Requested window length
        length: u64,
        /// Length of the parent source
        source_length: u64,
    },

    /// Memory mapping error
    #[error("Memory mapping error: {0}")]
    MemoryMap(String),
}

impl Error {
    /// Create a new InvalidEncoding error
    pub fn invalid_encoding<E: Into<String>, S: Into<String>>(encoding: E, reason: S) -> Self {
        Error::InvalidEncoding {
            encoding: encoding.into(),
            reason: reason.into(),
        }
    }

    /// Create a new MemoryMap error
    pub fn memory_map<S: Into<String>>(msg: S) -> Self {
        Error::MemoryMap(msg.into())
    }

    /// Check if this error means the data ran out
    pub fn is_eof(&self) -> bool {
        match self {
            Error::UnexpectedEof => true,
            Error::Io(e) => e.kind() == io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => e,
            Error::UnexpectedEof => io::Error::new(io::ErrorKind::UnexpectedEof, err),
            Error::InvalidEncoding { .. } | Error::UnknownEncoding(_) => {
                io::Error::new(io::ErrorKind::InvalidData, err)
            }
            Error::InvalidWindow { .. } => io::Error::new(io::ErrorKind::InvalidInput, err),
            Error::Closed | Error::MemoryMap(_) => io::Error::other(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::invalid_encoding("UTF-8", "invalid byte at offset 2");
        assert_eq!(
            format!("{}", error),
            "Invalid UTF-8 data: invalid byte at offset 2"
        );

        let error = Error::InvalidWindow {
            offset: 10,
            length: 4,
            source_length: 8,
        };
        assert_eq!(
            format!("{}", error),
            "Invalid window: offset 10 is past the end of the source (8 bytes)"
        );
    }

    #[test]
    fn test_is_eof() {
        assert!(Error::UnexpectedEof.is_eof());
        assert!(Error::Io(io::Error::from(io::ErrorKind::UnexpectedEof)).is_eof());
        assert!(!Error::Closed.is_eof());
    }

    #[test]
    fn test_into_io_error_kind() {
        let io_err: io::Error = Error::UnexpectedEof.into();
        assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);

        let io_err: io::Error = Error::invalid_encoding("ASCII", "byte 0xff").into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);

        let original = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let io_err: io::Error = Error::Io(original).into();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }
}
