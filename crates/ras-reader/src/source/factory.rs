//! Picks a byte source backend for a given input

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use super::{ArraySource, FileSource, SharedSource, WindowSource};
use crate::config::SourceConfig;
use crate::error::Result;

/// Creates byte sources according to a [`SourceConfig`]
#[derive(Debug, Clone, Default)]
pub struct SourceFactory {
    config: SourceConfig,
}

impl SourceFactory {
    /// Create a factory using `config`
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    /// Wrap bytes already in memory
    pub fn create_from_bytes(&self, data: Vec<u8>) -> SharedSource {
        Arc::new(ArraySource::new(data))
    }

    /// Open the file at `path`.
    ///
    /// Small files (per [`SourceConfig::read_into_memory_below`]) and empty
    /// files are loaded into memory. Otherwise the file is memory mapped when
    /// the configuration allows it, falling back to plain positional reads if
    /// mapping is disabled, too large, or fails.
    pub fn create_from_path<P: AsRef<Path>>(&self, path: P) -> Result<SharedSource> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let size = file.metadata()?.len();

        if size == 0 || self.config.loads_into_memory(size) {
            log::debug!("Reading {} ({} bytes) into memory", path.display(), size);
            let mut data = Vec::with_capacity(size as usize);
            file.read_to_end(&mut data)?;
            return Ok(Arc::new(ArraySource::new(data)));
        }

        if self.config.allows_mapping(size) {
            if let Some(source) = try_map(path, &file) {
                return Ok(source);
            }
        } else {
            log::debug!(
                "Memory mapping not allowed for {} ({} bytes)",
                path.display(),
                size
            );
        }

        log::debug!("Opening {} for plain random access", path.display());
        Ok(Arc::new(FileSource::from_file(file)?))
    }

    /// A bounded window onto `source`, see [`WindowSource`]
    pub fn create_window(
        &self,
        source: SharedSource,
        offset: u64,
        length: u64,
    ) -> Result<SharedSource> {
        Ok(Arc::new(WindowSource::new(source, offset, length)?))
    }
}

#[cfg(feature = "mmap")]
fn try_map(path: &Path, file: &File) -> Option<SharedSource> {
    match super::MmapSource::from_file(file) {
        Ok(source) => {
            log::debug!("Memory mapped {}", path.display());
            Some(Arc::new(source))
        }
        Err(e) => {
            log::warn!(
                "Memory mapping {} failed, falling back to file access: {}",
                path.display(),
                e
            );
            None
        }
    }
}

#[cfg(not(feature = "mmap"))]
fn try_map(_path: &Path, _file: &File) -> Option<SharedSource> {
    None
}
