use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use engine_logging::{engine_debug, engine_info};
use gazette_core::{DatabaseError, GazetteDatabase, GazetteId, GazetteRecord};

use crate::persist::AtomicFileWriter;

/// Gazette table kept as a JSON array in a single file.
///
/// The file is re-read on every call so external edits between runs are
/// picked up; writes go through `AtomicFileWriter`.
#[derive(Debug, Clone)]
pub struct JsonFileDatabase {
    path: PathBuf,
    file_name: String,
    writer: AtomicFileWriter,
}

impl JsonFileDatabase {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DatabaseError> {
        let path = path.into();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                DatabaseError::Malformed(format!("not a database file path: {}", path.display()))
            })?
            .to_string();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(Self {
            path,
            file_name,
            writer: AtomicFileWriter::new(dir),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every gazette in file order. A missing file is an empty table.
    pub fn load_all(&self) -> Result<Vec<GazetteRecord>, DatabaseError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&content).map_err(|err| {
            DatabaseError::Malformed(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save_all(&self, gazettes: &[GazetteRecord]) -> Result<(), DatabaseError> {
        let content = serde_json::to_vec_pretty(gazettes)
            .map_err(|err| DatabaseError::Malformed(err.to_string()))?;
        self.writer
            .write(&self.file_name, &content)
            .map_err(io::Error::from)?;
        Ok(())
    }
}

impl GazetteDatabase for JsonFileDatabase {
    fn pending_gazettes(&mut self) -> Result<Vec<GazetteRecord>, DatabaseError> {
        let pending: Vec<GazetteRecord> = self
            .load_all()?
            .into_iter()
            .filter(GazetteRecord::is_pending)
            .collect();
        engine_info!(
            "Loaded {} pending gazettes from {:?}",
            pending.len(),
            self.path
        );
        Ok(pending)
    }

    fn mark_processed(&mut self, id: GazetteId, file_checksum: &str) -> Result<(), DatabaseError> {
        let mut gazettes = self.load_all()?;
        let gazette = gazettes
            .iter_mut()
            .find(|gazette| gazette.matches(id, file_checksum))
            .ok_or_else(|| DatabaseError::UnknownGazette {
                id,
                file_checksum: file_checksum.to_string(),
            })?;
        gazette.processed = true;
        self.save_all(&gazettes)?;
        engine_debug!("Marked gazette {} ({}) as processed", id, file_checksum);
        Ok(())
    }
}
