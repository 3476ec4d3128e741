//! Shared utilities for the ras-tool CLI

pub mod format;

pub use format::*;
