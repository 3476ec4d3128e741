//! Fixed-width numeric decoding
//!
//! Every multi-byte value is decoded by a pure function from a fixed-size
//! byte array, parameterised by [`Endian`]. The reader collects the bytes and
//! hands them over; nothing here touches a source.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Byte order of a multi-byte value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Most significant byte first
    #[default]
    Big,
    /// Least significant byte first
    Little,
}

/// A value with a fixed encoded width
pub trait FixedWidth: Sized + Copy {
    /// Byte array holding one encoded value
    type Bytes: Default + AsRef<[u8]> + AsMut<[u8]>;

    /// Decode from exactly one encoded value
    fn decode(bytes: Self::Bytes, endian: Endian) -> Self;
}

/// Decode an unsigned 16-bit value
pub fn decode_u16(bytes: [u8; 2], endian: Endian) -> u16 {
    match endian {
        Endian::Big => BigEndian::read_u16(&bytes),
        Endian::Little => LittleEndian::read_u16(&bytes),
    }
}

/// Decode a signed 16-bit value
pub fn decode_i16(bytes: [u8; 2], endian: Endian) -> i16 {
    match endian {
        Endian::Big => BigEndian::read_i16(&bytes),
        Endian::Little => LittleEndian::read_i16(&bytes),
    }
}

/// Decode an unsigned 32-bit value
pub fn decode_u32(bytes: [u8; 4], endian: Endian) -> u32 {
    match endian {
        Endian::Big => BigEndian::read_u32(&bytes),
        Endian::Little => LittleEndian::read_u32(&bytes),
    }
}

/// Decode a signed 32-bit value
pub fn decode_i32(bytes: [u8; 4], endian: Endian) -> i32 {
    match endian {
        Endian::Big => BigEndian::read_i32(&bytes),
        Endian::Little => LittleEndian::read_i32(&bytes),
    }
}

/// Decode an unsigned 64-bit value
pub fn decode_u64(bytes: [u8; 8], endian: Endian) -> u64 {
    match endian {
        Endian::Big => BigEndian::read_u64(&bytes),
        Endian::Little => LittleEndian::read_u64(&bytes),
    }
}

/// Decode a signed 64-bit value.
///
/// Equivalent to combining two 32-bit words as
/// `(high << 32) | (low & 0xFFFF_FFFF)`, where the high word comes first in
/// big-endian data and second in little-endian data.
pub fn decode_i64(bytes: [u8; 8], endian: Endian) -> i64 {
    match endian {
        Endian::Big => BigEndian::read_i64(&bytes),
        Endian::Little => LittleEndian::read_i64(&bytes),
    }
}

/// Decode an IEEE 754 single from its bit pattern
pub fn decode_f32(bytes: [u8; 4], endian: Endian) -> f32 {
    f32::from_bits(decode_u32(bytes, endian))
}

/// Decode an IEEE 754 double from its bit pattern
pub fn decode_f64(bytes: [u8; 8], endian: Endian) -> f64 {
    f64::from_bits(decode_u64(bytes, endian))
}

impl FixedWidth for u8 {
    type Bytes = [u8; 1];

    fn decode(bytes: Self::Bytes, _endian: Endian) -> Self {
        bytes[0]
    }
}

impl FixedWidth for i8 {
    type Bytes = [u8; 1];

    fn decode(bytes: Self::Bytes, _endian: Endian) -> Self {
        bytes[0] as i8
    }
}

impl FixedWidth for bool {
    type Bytes = [u8; 1];

    fn decode(bytes: Self::Bytes, _endian: Endian) -> Self {
        bytes[0] != 0
    }
}

impl FixedWidth for u16 {
    type Bytes = [u8; 2];

    fn decode(bytes: Self::Bytes, endian: Endian) -> Self {
        decode_u16(bytes, endian)
    }
}

impl FixedWidth for i16 {
    type Bytes = [u8; 2];

    fn decode(bytes: Self::Bytes, endian: Endian) -> Self {
        decode_i16(bytes, endian)
    }
}

impl FixedWidth for u32 {
    type Bytes = [u8; 4];

    fn decode(bytes: Self::Bytes, endian: Endian) -> Self {
        decode_u32(bytes, endian)
    }
}

impl FixedWidth for i32 {
    type Bytes = [u8; 4];

    fn decode(bytes: Self::Bytes, endian: Endian) -> Self {
        decode_i32(bytes, endian)
    }
}

impl FixedWidth for u64 {
    type Bytes = [u8; 8];

    fn decode(bytes: Self::Bytes, endian: Endian) -> Self {
        decode_u64(bytes, endian)
    }
}

impl FixedWidth for i64 {
    type Bytes = [u8; 8];

    fn decode(bytes: Self::Bytes, endian: Endian) -> Self {
        decode_i64(bytes, endian)
    }
}

impl FixedWidth for f32 {
    type Bytes = [u8; 4];

    fn decode(bytes: Self::Bytes, endian: Endian) -> Self {
        decode_f32(bytes, endian)
    }
}

impl FixedWidth for f64 {
    type Bytes = [u8; 8];

    fn decode(bytes: Self::Bytes, endian: Endian) -> Self {
        decode_f64(bytes, endian)
    }
}
