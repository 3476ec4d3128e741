//! Typed value, line and string decoding commands

use anyhow::{Context, Result};
use std::path::Path;

use ras_reader::prelude::*;

use crate::cli::ValueKind;

fn open_at(file: &Path, config: &SourceConfig, offset: u64) -> Result<RandomAccessReader> {
    let mut reader = RandomAccessReader::open(file, config)
        .with_context(|| format!("Failed to open file: {}", file.display()))?;
    reader.seek(offset)?;
    Ok(reader)
}

/// Decode one value of `kind` and format it for display
fn read_formatted(reader: &mut RandomAccessReader, kind: ValueKind) -> ras_reader::Result<String> {
    Ok(match kind {
        ValueKind::Bool => reader.read_bool()?.to_string(),
        ValueKind::I8 => reader.read_i8()?.to_string(),
        ValueKind::U8 => reader.read_u8()?.to_string(),
        ValueKind::I16 => reader.read_i16()?.to_string(),
        ValueKind::I16le => reader.read_i16_le()?.to_string(),
        ValueKind::U16 => reader.read_u16()?.to_string(),
        ValueKind::U16le => reader.read_u16_le()?.to_string(),
        ValueKind::I32 => reader.read_i32()?.to_string(),
        ValueKind::I32le => reader.read_i32_le()?.to_string(),
        ValueKind::U32 => reader.read_u32()?.to_string(),
        ValueKind::U32le => reader.read_u32_le()?.to_string(),
        ValueKind::I64 => reader.read_i64()?.to_string(),
        ValueKind::I64le => reader.read_i64_le()?.to_string(),
        ValueKind::F32 => reader.read_f32()?.to_string(),
        ValueKind::F32le => reader.read_f32_le()?.to_string(),
        ValueKind::F64 => reader.read_f64()?.to_string(),
        ValueKind::F64le => reader.read_f64_le()?.to_string(),
    })
}

pub fn execute_read(
    file: &Path,
    config: &SourceConfig,
    kind: ValueKind,
    offset: u64,
    count: u64,
) -> Result<()> {
    let mut reader = open_at(file, config, offset)?;

    for _ in 0..count {
        let position = reader.position()?;
        let value = read_formatted(&mut reader, kind).with_context(|| {
            format!(
                "Failed to read {}-byte value at offset {}",
                kind.width(),
                position
            )
        })?;
        println!("{position:08x}: {value}");
    }

    reader.close()?;
    Ok(())
}

pub fn execute_lines(
    file: &Path,
    config: &SourceConfig,
    offset: u64,
    max: Option<usize>,
) -> Result<()> {
    let mut reader = open_at(file, config, offset)?;

    let mut printed = 0;
    while max.is_none_or(|max| printed < max) {
        let Some(line) = reader.read_line()? else {
            break;
        };
        println!("{line}");
        printed += 1;
    }

    log::debug!("Printed {} lines, stopped at offset {}", printed, reader.position()?);
    reader.close()?;
    Ok(())
}

pub fn execute_string(
    file: &Path,
    config: &SourceConfig,
    length: usize,
    offset: u64,
    encoding: &str,
) -> Result<()> {
    let encoding: TextEncoding = encoding.parse()?;
    let mut reader = open_at(file, config, offset)?;

    let text = reader
        .read_string(length, encoding)
        .with_context(|| format!("Failed to decode {} bytes as {}", length, encoding))?;
    println!("{text}");

    reader.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_formatted() {
        let mut reader = RandomAccessReader::from_bytes(vec![0xFF, 0xFE, 0x00, 0x00, 0x80, 0x3F]);
        assert_eq!(read_formatted(&mut reader, ValueKind::I16).unwrap(), "-2");
        assert_eq!(read_formatted(&mut reader, ValueKind::F32le).unwrap(), "1");
        assert!(read_formatted(&mut reader, ValueKind::U8).unwrap_err().is_eof());
    }
}
