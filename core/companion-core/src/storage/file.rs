//! Directory-backed storage: one `<key>.json` file per key.
//!
//! Uses temp file + rename so a crash mid-write never leaves a partial value.

use fs_err as fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{StorageError, StorageResult};

use super::{validate_key, Storage};

#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// The directory is created lazily on first write.
    pub fn new(root: &Path) -> Self {
        FileStorage {
            root: root.to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }
}

fn io_error(key: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source,
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|e| io_error(key, e))?;

        let mut temp_file = NamedTempFile::new_in(&self.root).map_err(|e| io_error(key, e))?;
        temp_file
            .write_all(value.as_bytes())
            .map_err(|e| io_error(key, e))?;
        temp_file.flush().map_err(|e| io_error(key, e))?;
        temp_file
            .persist(&path)
            .map_err(|e| StorageError::Persist {
                path: path.clone(),
                source: e.error,
            })?;

        tracing::trace!(key, path = %path.display(), bytes = value.len(), "Wrote stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}
