//! In-memory test doubles for the service ports.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::service::fs::FileSystem;
use crate::service::probe::{DependencyProbe, ProbeFailure};

/// Filesystem kept entirely in memory.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: Mutex<BTreeMap<PathBuf, String>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl FileSystem for MemoryFileSystem {
    fn write_file(&self, path: &Path, content: &str) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<String, Error> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, path.display().to_string()))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.dirs.lock().unwrap().contains(path)
    }
}

/// Filesystem on which every mutation fails.
pub struct ReadOnlyFileSystem;

impl FileSystem for ReadOnlyFileSystem {
    fn write_file(&self, _path: &Path, _content: &str) -> Result<(), Error> {
        Err(Error::new(ErrorKind::PermissionDenied, "read-only filesystem"))
    }

    fn read_file(&self, path: &Path) -> Result<String, Error> {
        Err(Error::new(ErrorKind::NotFound, path.display().to_string()))
    }

    fn create_dir_all(&self, _path: &Path) -> Result<(), Error> {
        Err(Error::new(ErrorKind::PermissionDenied, "read-only filesystem"))
    }

    fn exists(&self, _path: &Path) -> bool {
        false
    }
}

/// Probe with a fixed answer.
pub struct FixedProbe(pub bool);

impl DependencyProbe for FixedProbe {
    fn probe(&self) -> Result<(), ProbeFailure> {
        if self.0 {
            Ok(())
        } else {
            Err(ProbeFailure("opencog not installed".to_string()))
        }
    }
}
