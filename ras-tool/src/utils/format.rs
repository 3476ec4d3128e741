//! Formatting utilities

use humansize::{DECIMAL, format_size};

/// Bytes shown per hex dump row
pub const HEX_ROW_WIDTH: usize = 16;

/// Format file size in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Format one hex dump row: offset, hex bytes, printable ASCII
pub fn format_hex_row(offset: u64, bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(HEX_ROW_WIDTH * 3);
    for i in 0..HEX_ROW_WIDTH {
        match bytes.get(i) {
            Some(b) => hex.push_str(&format!("{b:02x} ")),
            None => hex.push_str("   "),
        }
        if i == HEX_ROW_WIDTH / 2 - 1 {
            hex.push(' ');
        }
    }

    let ascii: String = bytes
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                char::from(b)
            } else {
                '.'
            }
        })
        .collect();

    format!("{offset:08x}  {hex} |{ascii}|")
}
