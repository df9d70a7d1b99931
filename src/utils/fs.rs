//! File system utility functions
//!
//! Provides safe file operations with proper error handling.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Create directories recursively
    #[instrument(skip(self))]
    pub fn create_dir_all<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        debug!("Creating directory: {}", path.display());
        fs::create_dir_all(path)
    }

    /// Write content to a file, creating parent directories if needed
    #[instrument(skip(self, contents))]
    pub fn write_file<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> io::Result<()> {
        let path = path.as_ref();

        debug!("Writing file: {}", path.display());

        // Bare file names have an empty parent
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent)?;
        }

        fs::write(path, contents)?;
        debug!("File written successfully");
        Ok(())
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
