//! File information and hex dump commands

use anyhow::{Context, Result};
use std::path::Path;

use ras_reader::prelude::*;

use crate::utils::{HEX_ROW_WIDTH, format_bytes, format_hex_row};

fn open(file: &Path, config: &SourceConfig) -> Result<RandomAccessReader> {
    RandomAccessReader::open(file, config)
        .with_context(|| format!("Failed to open file: {}", file.display()))
}

pub fn execute_info(file: &Path, config: &SourceConfig) -> Result<()> {
    let mut reader = open(file, config)?;
    let length = reader.length()?;

    println!("File: {}", file.display());
    println!("Size: {} ({} bytes)", format_bytes(length), length);
    println!("Access: {}", reader.source_kind()?);

    let mut head = [0u8; HEX_ROW_WIDTH];
    if let Some(n) = reader.read_block(&mut head)? {
        println!("Head: {}", format_hex_row(0, &head[..n]));
    }

    reader.close()?;
    Ok(())
}

pub fn execute_dump(file: &Path, config: &SourceConfig, offset: u64, length: u64) -> Result<()> {
    let mut reader = open(file, config)?;
    let total = reader.length()?;
    if offset > total {
        anyhow::bail!("Offset {} is past the end of the file ({} bytes)", offset, total);
    }

    let mut view = reader.create_window_view(offset, length)?;
    log::debug!(
        "Dumping {} bytes at offset {}",
        view.length()?,
        offset
    );

    let mut row = [0u8; HEX_ROW_WIDTH];
    let mut row_offset = offset;
    while let Some(n) = view.read_block(&mut row)? {
        println!("{}", format_hex_row(row_offset, &row[..n]));
        row_offset += n as u64;
    }

    view.close()?;
    reader.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_open_reports_backend() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"backend").unwrap();
        file.flush().unwrap();

        let plain = open(file.path(), &SourceConfig::plain()).unwrap();
        assert_eq!(plain.source_kind().unwrap(), SourceKind::File);

        let in_memory = open(file.path(), &SourceConfig::in_memory()).unwrap();
        assert_eq!(in_memory.source_kind().unwrap(), SourceKind::Memory);

        let empty = NamedTempFile::new().unwrap();
        let reader = open(empty.path(), &SourceConfig::default()).unwrap();
        assert_eq!(reader.source_kind().unwrap(), SourceKind::Memory);
    }
}
