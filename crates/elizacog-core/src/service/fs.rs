//! FileSystem trait for abstracting file I/O.
//!
//! Defined in elizacog-core so the bridge can lay out directories and write
//! templates without depending on any specific filesystem implementation. The
//! `LocalFileSystem` adapter lives in elizacog-infra.

use std::path::Path;

/// Abstraction over blocking filesystem operations.
///
/// Lets the bridge be exercised against an in-memory implementation in tests.
pub trait FileSystem: Send + Sync {
    /// Write string content to a file, creating parent directories as needed.
    /// An existing file is overwritten.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), std::io::Error>;

    /// Read a file's content as a string.
    fn read_file(&self, path: &Path) -> Result<String, std::io::Error>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error>;

    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> bool;
}
