//! Strict text decoding for fixed-length and length-prefixed strings

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Text encodings understood by
/// [`read_string`](crate::RandomAccessReader::read_string)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-8
    #[default]
    Utf8,
    /// UTF-16, big-endian, no byte order mark
    Utf16Be,
    /// UTF-16, little-endian, no byte order mark
    Utf16Le,
    /// UTF-16 with an optional byte order mark, big-endian without one
    Utf16,
    /// ISO-8859-1, every byte maps to the code point of the same value
    Latin1,
    /// 7-bit US-ASCII
    Ascii,
    /// Windows code page 1252
    Windows1252,
}

/// Code points for bytes 0x80..=0x9F in Windows-1252, `None` if undefined
const WINDOWS_1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

impl TextEncoding {
    /// Canonical name of the encoding
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16Be => "UTF-16BE",
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Utf16 => "UTF-16",
            TextEncoding::Latin1 => "ISO-8859-1",
            TextEncoding::Ascii => "US-ASCII",
            TextEncoding::Windows1252 => "windows-1252",
        }
    }

    /// Decode `bytes`, failing on any input not valid in this encoding
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| {
                Error::invalid_encoding(self.name(), e.utf8_error().to_string())
            }),
            TextEncoding::Utf16Be => decode_utf16(self, bytes, u16::from_be_bytes),
            TextEncoding::Utf16Le => decode_utf16(self, bytes, u16::from_le_bytes),
            TextEncoding::Utf16 => match bytes {
                [0xFE, 0xFF, rest @ ..] => decode_utf16(self, rest, u16::from_be_bytes),
                [0xFF, 0xFE, rest @ ..] => decode_utf16(self, rest, u16::from_le_bytes),
                _ => decode_utf16(self, bytes, u16::from_be_bytes),
            },
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            TextEncoding::Ascii => bytes
                .iter()
                .enumerate()
                .map(|(i, &b)| {
                    if b.is_ascii() {
                        Ok(char::from(b))
                    } else {
                        Err(Error::invalid_encoding(
                            self.name(),
                            format!("byte 0x{:02x} at offset {} is not ASCII", b, i),
                        ))
                    }
                })
                .collect(),
            TextEncoding::Windows1252 => bytes
                .iter()
                .enumerate()
                .map(|(i, &b)| match b {
                    0x80..=0x9F => WINDOWS_1252_HIGH[usize::from(b - 0x80)].ok_or_else(|| {
                        Error::invalid_encoding(
                            self.name(),
                            format!("byte 0x{:02x} at offset {} is undefined", b, i),
                        )
                    }),
                    _ => Ok(char::from(b)),
                })
                .collect(),
        }
    }
}

fn decode_utf16(
    encoding: TextEncoding,
    bytes: &[u8],
    unit: fn([u8; 2]) -> u16,
) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::invalid_encoding(
            encoding.name(),
            format!("odd byte count {}", bytes.len()),
        ));
    }

    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| Error::invalid_encoding(encoding.name(), e.to_string()))
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "utf-16be" | "utf16be" | "unicodebigunmarked" => Ok(TextEncoding::Utf16Be),
            "utf-16le" | "utf16le" | "unicodelittleunmarked" => Ok(TextEncoding::Utf16Le),
            "utf-16" | "utf16" | "unicode" => Ok(TextEncoding::Utf16),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(TextEncoding::Latin1),
            "us-ascii" | "ascii" => Ok(TextEncoding::Ascii),
            "windows-1252" | "cp1252" | "winansi" => Ok(TextEncoding::Windows1252),
            _ => Err(Error::UnknownEncoding(s.to_string())),
        }
    }
}

/// Decode modified UTF-8 as written by length-prefixed string encoders.
///
/// Differs from UTF-8 in two ways: NUL may be encoded as `C0 80`, and
/// characters outside the BMP are stored as two three-byte surrogates.
/// Unpaired surrogates are rejected.
pub fn decode_modified_utf8(bytes: &[u8]) -> Result<String> {
    const NAME: &str = "modified UTF-8";

    let continuation = |index: usize| -> Result<u16> {
        match bytes.get(index) {
            Some(&b) if b & 0xC0 == 0x80 => Ok(u16::from(b & 0x3F)),
            Some(&b) => Err(Error::invalid_encoding(
                NAME,
                format!("bad continuation byte 0x{:02x} at offset {}", b, index),
            )),
            None => Err(Error::invalid_encoding(
                NAME,
                format!("sequence truncated at offset {}", index),
            )),
        }
    };

    let mut units = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match b >> 4 {
            0x0..=0x7 => {
                units.push(u16::from(b));
                i += 1;
            }
            0xC | 0xD => {
                units.push((u16::from(b & 0x1F) << 6) | continuation(i + 1)?);
                i += 2;
            }
            0xE => {
                let unit = (u16::from(b & 0x0F) << 12)
                    | (continuation(i + 1)? << 6)
                    | continuation(i + 2)?;
                units.push(unit);
                i += 3;
            }
            _ => {
                return Err(Error::invalid_encoding(
                    NAME,
                    format!("invalid lead byte 0x{:02x} at offset {}", b, i),
                ));
            }
        }
    }

    String::from_utf16(&units).map_err(|e| Error::invalid_encoding(NAME, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("UTF-8", TextEncoding::Utf8)]
    #[test_case("utf_16be", TextEncoding::Utf16Be)]
    #[test_case("UnicodeBigUnmarked", TextEncoding::Utf16Be)]
    #[test_case("Cp1252", TextEncoding::Windows1252)]
    #[test_case("latin1", TextEncoding::Latin1)]
    fn test_parse_encoding_names(name: &str, expected: TextEncoding) {
        assert_eq!(name.parse::<TextEncoding>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_encoding() {
        let err = "EBCDIC".parse::<TextEncoding>().unwrap_err();
        assert!(matches!(err, Error::UnknownEncoding(name) if name == "EBCDIC"));
    }

    #[test]
    fn test_utf8_is_strict() {
        assert_eq!(TextEncoding::Utf8.decode("héllo".as_bytes()).unwrap(), "héllo");

        let err = TextEncoding::Utf8.decode(&[b'a', 0xFF]).unwrap_err();
        assert!(matches!(err, Error::InvalidEncoding { .. }));
    }

    #[test]
    fn test_utf16_variants() {
        assert_eq!(TextEncoding::Utf16Be.decode(&[0x00, 0x41, 0x00, 0x42]).unwrap(), "AB");
        assert_eq!(TextEncoding::Utf16Le.decode(&[0x41, 0x00, 0x42, 0x00]).unwrap(), "AB");
        assert_eq!(TextEncoding::Utf16.decode(&[0xFF, 0xFE, 0x41, 0x00]).unwrap(), "A");
        assert_eq!(TextEncoding::Utf16.decode(&[0x00, 0x41]).unwrap(), "A");

        assert!(TextEncoding::Utf16Be.decode(&[0x00, 0x41, 0x00]).is_err());
        // Lone high surrogate
        assert!(TextEncoding::Utf16Be.decode(&[0xD8, 0x00]).is_err());
    }

    #[test]
    fn test_single_byte_encodings() {
        assert_eq!(TextEncoding::Latin1.decode(&[0x41, 0xE9]).unwrap(), "Aé");
        assert_eq!(TextEncoding::Windows1252.decode(&[0x80, 0x41]).unwrap(), "€A");
        assert!(TextEncoding::Windows1252.decode(&[0x81]).is_err());
        assert!(TextEncoding::Ascii.decode(&[0x41, 0x80]).is_err());
    }

    #[test]
    fn test_modified_utf8() {
        assert_eq!(decode_modified_utf8(b"plain").unwrap(), "plain");
        assert_eq!(decode_modified_utf8(&[0xC0, 0x80]).unwrap(), "\0");
        assert_eq!(decode_modified_utf8(&[0xC3, 0xA9]).unwrap(), "é");
        assert_eq!(decode_modified_utf8(&[0xE2, 0x82, 0xAC]).unwrap(), "€");

        // U+1F600 as a surrogate pair
        let pair = [0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80];
        assert_eq!(decode_modified_utf8(&pair).unwrap(), "\u{1F600}");
    }

    #[test]
    fn test_modified_utf8_rejects_malformed() {
        assert!(decode_modified_utf8(&[0xE2, 0x82]).is_err());
        assert!(decode_modified_utf8(&[0xC3, 0x41]).is_err());
        assert!(decode_modified_utf8(&[0x80]).is_err());
        assert!(decode_modified_utf8(&[0xF0, 0x9F, 0x98, 0x80]).is_err());
    }
}
