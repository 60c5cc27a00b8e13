//! Filesystem adapters for ElizaCog.
//!
//! Implements the `FileSystem` trait from `elizacog-core` with blocking
//! `std::fs` calls, and resolves the `--directory` argument into the base
//! directory the bridge works in.

use std::path::{Path, PathBuf};

use elizacog_core::service::fs::FileSystem;

/// Local filesystem implementation of the `FileSystem` trait.
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Create a new LocalFileSystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFileSystem {
    fn write_file(&self, path: &Path, content: &str) -> Result<(), std::io::Error> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
    }

    fn read_file(&self, path: &Path) -> Result<String, std::io::Error> {
        std::fs::read_to_string(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        std::fs::create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or(false)
    }
}

/// Resolve the working directory into an absolute base directory.
///
/// With `create`, the directory (and its parents) is created first and the
/// result is canonicalized. Without it nothing on disk is touched; the path
/// is only made absolute, so a missing directory still resolves.
pub fn resolve_base_dir(directory: &Path, create: bool) -> Result<PathBuf, std::io::Error> {
    if create {
        std::fs::create_dir_all(directory)?;
        directory.canonicalize()
    } else {
        std::path::absolute(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_and_read_file() {
        let dir = tempdir().unwrap();
        let fs = LocalFileSystem::new();
        let file_path = dir.path().join("test.txt");

        fs.write_file(&file_path, "hello world").unwrap();
        let content = fs.read_file(&file_path).unwrap();
        assert_eq!(content, "hello world");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let fs = LocalFileSystem::new();
        let file_path = dir.path().join("nested").join("deep").join("test.txt");

        fs.write_file(&file_path, "nested content").unwrap();
        assert_eq!(fs.read_file(&file_path).unwrap(), "nested content");
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempdir().unwrap();
        let fs = LocalFileSystem::new();
        let file_path = dir.path().join("bridge.py");

        fs.write_file(&file_path, "first version, longer").unwrap();
        fs.write_file(&file_path, "second").unwrap();
        assert_eq!(fs.read_file(&file_path).unwrap(), "second");
    }

    #[test]
    fn test_create_dir_all_and_exists() {
        let dir = tempdir().unwrap();
        let fs = LocalFileSystem::new();
        let nested = dir.path().join("a").join("b").join("c");

        assert!(!fs.exists(&nested));
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));
        // Already present is fine.
        fs.create_dir_all(&nested).unwrap();
    }

    #[test]
    fn test_resolve_base_dir_creates_when_asked() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("ai");

        let resolved = resolve_base_dir(&target, true).unwrap();
        assert!(resolved.is_dir());
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_resolve_base_dir_without_create_touches_nothing() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("missing");

        let resolved = resolve_base_dir(&target, false).unwrap();
        assert!(resolved.is_absolute());
        assert!(!target.exists());
    }

    #[test]
    fn test_resolve_relative_dir_is_absolute() {
        let resolved = resolve_base_dir(Path::new("."), false).unwrap();
        assert!(resolved.is_absolute());
    }
}
