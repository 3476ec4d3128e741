//! Configuration for opening byte sources

/// Controls which backend [`SourceFactory`](crate::source::SourceFactory)
/// picks when opening a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Read through a plain file handle instead of memory mapping.
    ///
    /// Use it if the file is too big to be mapped in the address space.
    pub plain_random_access: bool,
    /// Files larger than this are never mapped
    pub max_map_size: u64,
    /// Files smaller than this are read fully into memory (0 disables)
    pub read_into_memory_below: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            plain_random_access: false,
            max_map_size: 2 * 1024 * 1024 * 1024, // 2GB limit
            read_into_memory_below: 0,
        }
    }
}

impl SourceConfig {
    /// Never map files, always use positional reads
    pub fn plain() -> Self {
        Self {
            plain_random_access: true,
            ..Self::default()
        }
    }

    /// Load every file into memory
    pub fn in_memory() -> Self {
        Self {
            read_into_memory_below: u64::MAX,
            ..Self::default()
        }
    }

    /// Whether a file of `file_size` bytes may be memory mapped
    pub fn allows_mapping(&self, file_size: u64) -> bool {
        cfg!(feature = "mmap") && !self.plain_random_access && file_size <= self.max_map_size
    }

    /// Whether a file of `file_size` bytes should be loaded into memory
    pub fn loads_into_memory(&self, file_size: u64) -> bool {
        file_size < self.read_into_memory_below
    }
}
