//! Command implementations for ras-tool

pub mod decode;
pub mod inspect;
