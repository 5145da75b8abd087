//! Filesystem abstraction for testability.

use std::io::Write;
use std::path::Path;

/// Trait for the file reads and writes a badge run makes.
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Create or truncate a file and write `contents` to it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()>;
}

/// Mode for newly created output files on Unix.
#[cfg(unix)]
const OUTPUT_FILE_MODE: u32 = 0o640;

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(OUTPUT_FILE_MODE);
        }
        options.open(path)?.write_all(contents.as_bytes())
    }
}

#[cfg(test)]
#[path = "filesystem_tests.rs"]
mod tests;
