use std::fs;
use std::path::{Path, PathBuf};

use gazette_core::{GazetteRecord, IndexError, SearchIndex};

use crate::persist::AtomicFileWriter;

/// Search index stand-in writing one JSON document per gazette.
///
/// Documents are keyed by `file_checksum`, so indexing the same gazette twice
/// replaces the earlier document instead of duplicating it.
#[derive(Debug, Clone)]
pub struct DirectoryIndex {
    writer: AtomicFileWriter,
}

impl DirectoryIndex {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir.into()),
        }
    }

    pub fn dir(&self) -> &Path {
        self.writer.dir()
    }

    pub fn document_path(&self, file_checksum: &str) -> Result<PathBuf, IndexError> {
        Ok(self.dir().join(document_file_name(file_checksum)?))
    }

    /// Reads a previously indexed document back, if present.
    pub fn get_document(&self, file_checksum: &str) -> Result<Option<GazetteRecord>, IndexError> {
        let path = self.document_path(file_checksum)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read(&path)?;
        let document =
            serde_json::from_slice(&content).map_err(|err| IndexError::Serialize(err.to_string()))?;
        Ok(Some(document))
    }
}

impl SearchIndex for DirectoryIndex {
    fn upsert_document(&mut self, document: &GazetteRecord) -> Result<(), IndexError> {
        let file_name = document_file_name(&document.file_checksum)?;
        let content = serde_json::to_vec_pretty(document)
            .map_err(|err| IndexError::Serialize(err.to_string()))?;
        self.writer
            .write(&file_name, &content)
            .map_err(|err| IndexError::Io(err.into()))?;
        Ok(())
    }
}

fn document_file_name(file_checksum: &str) -> Result<String, IndexError> {
    let is_safe = !file_checksum.is_empty()
        && file_checksum
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !is_safe {
        return Err(IndexError::InvalidDocumentId(file_checksum.to_string()));
    }
    Ok(format!("{file_checksum}.json"))
}
