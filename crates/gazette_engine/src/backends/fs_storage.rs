use std::fs::File;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use gazette_core::{ObjectStorage, StorageError};

/// Object storage backed by a local directory; keys are relative paths.
#[derive(Debug, Clone)]
pub struct FsObjectStorage {
    root: PathBuf,
}

impl FsObjectStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of `key` inside the root. Rejects keys escaping the root.
    pub fn object_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        let is_plain = !key.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if !is_plain {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl ObjectStorage for FsObjectStorage {
    fn download(&self, file_path: &str, destination: &mut dyn Write) -> Result<u64, StorageError> {
        let path = self.object_path(file_path)?;
        let mut source = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(file_path.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        let copied = io::copy(&mut source, destination)?;
        Ok(copied)
    }
}
