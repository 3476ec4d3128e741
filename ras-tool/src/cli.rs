//! Root CLI structure for ras-tool

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use ras_reader::SourceConfig;

#[derive(Parser)]
#[command(name = "ras-tool")]
#[command(about = "Inspect binary files with random-access reads", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Read through a plain file handle instead of memory mapping
    #[arg(long, global = true, conflicts_with = "in_memory")]
    pub plain: bool,

    /// Load the whole file into memory
    #[arg(long, global = true)]
    pub in_memory: bool,
}

impl Cli {
    /// Source configuration selected by the global flags
    pub fn source_config(&self) -> SourceConfig {
        if self.plain {
            SourceConfig::plain()
        } else if self.in_memory {
            SourceConfig::in_memory()
        } else {
            SourceConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display length and backend of a file
    Info {
        /// Path to the file
        file: PathBuf,
    },

    /// Hex dump a range of a file
    Dump {
        /// Path to the file
        file: PathBuf,

        /// Offset to start at
        #[arg(short, long, default_value_t = 0)]
        offset: u64,

        /// Number of bytes to dump
        #[arg(short, long, default_value_t = 256)]
        length: u64,
    },

    /// Decode fixed-width values at an offset
    Read {
        /// Path to the file
        file: PathBuf,

        /// Value type, `le` suffix for little-endian
        #[arg(short = 't', long = "type", value_enum)]
        kind: ValueKind,

        /// Offset of the first value
        #[arg(short, long, default_value_t = 0)]
        offset: u64,

        /// Number of consecutive values
        #[arg(short, long, default_value_t = 1)]
        count: u64,
    },

    /// Print lines starting at an offset
    Lines {
        /// Path to the file
        file: PathBuf,

        /// Offset to start at
        #[arg(short, long, default_value_t = 0)]
        offset: u64,

        /// Maximum number of lines to print
        #[arg(short, long)]
        max: Option<usize>,
    },

    /// Decode a fixed-length string
    String {
        /// Path to the file
        file: PathBuf,

        /// Number of bytes to decode
        #[arg(short, long)]
        length: usize,

        /// Offset of the string
        #[arg(short, long, default_value_t = 0)]
        offset: u64,

        /// Text encoding (e.g., "UTF-8", "UTF-16BE", "ISO-8859-1", "Cp1252")
        #[arg(short, long, default_value = "UTF-8")]
        encoding: String,
    },
}

/// Fixed-width value types accepted by `read --type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    Bool,
    I8,
    U8,
    I16,
    I16le,
    U16,
    U16le,
    I32,
    I32le,
    U32,
    U32le,
    I64,
    I64le,
    F32,
    F32le,
    F64,
    F64le,
}

impl ValueKind {
    /// Encoded width in bytes
    pub fn width(self) -> u64 {
        match self {
            ValueKind::Bool | ValueKind::I8 | ValueKind::U8 => 1,
            ValueKind::I16 | ValueKind::I16le | ValueKind::U16 | ValueKind::U16le => 2,
            ValueKind::I32
            | ValueKind::I32le
            | ValueKind::U32
            | ValueKind::U32le
            | ValueKind::F32
            | ValueKind::F32le => 4,
            ValueKind::I64 | ValueKind::I64le | ValueKind::F64 | ValueKind::F64le => 8,
        }
    }
}
