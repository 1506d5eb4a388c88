use std::io::{self, Write};
use std::path::PathBuf;

use engine_logging::{engine_debug, engine_info, engine_warn};
use gazette_core::{
    DatabaseError, GazetteDatabase, GazetteRecord, IndexError, ObjectStorage, SearchIndex,
    StorageError,
};
use thiserror::Error;

use crate::extract::TextExtractor;
use crate::scratch::{ExtractedTextFile, ScratchSpace};
use crate::types::{RecordOutcome, RunSummary};

/// Failures that abort a run. Extraction failures never show up here; they
/// only skip the affected gazette.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("failed to download {file_path}: {source}")]
    Storage {
        file_path: String,
        #[source]
        source: StorageError,
    },
    #[error("index error: {0}")]
    Index(#[from] IndexError),
    #[error("scratch file error: {0}")]
    Scratch(#[from] io::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Where raw downloads are written. Defaults to the system temp dir.
    pub work_dir: Option<PathBuf>,
}

/// Sequential text extraction over every pending gazette.
///
/// Per gazette: download into a scratch file, extract text into a second file,
/// index the enriched record, then flag it as processed. Both scratch files
/// are removed before the next gazette starts, whatever the outcome.
#[derive(Debug, Clone, Default)]
pub struct ExtractionPipeline {
    scratch: ScratchSpace,
}

impl ExtractionPipeline {
    pub fn new(settings: PipelineSettings) -> Self {
        Self {
            scratch: ScratchSpace::new(settings.work_dir),
        }
    }

    pub fn run(
        &self,
        database: &mut dyn GazetteDatabase,
        storage: &dyn ObjectStorage,
        index: &mut dyn SearchIndex,
        extractor: &dyn TextExtractor,
    ) -> Result<RunSummary, PipelineError> {
        engine_info!("Starting text extraction from pending gazettes");
        let pending = database.pending_gazettes()?;
        let mut summary = RunSummary {
            pending: pending.len(),
            ..RunSummary::default()
        };

        for gazette in pending {
            let id = gazette.id;
            let outcome = self.process_gazette(gazette, database, storage, index, extractor)?;
            engine_debug!("Gazette {} {}", id, outcome);
            summary.record(id, &outcome);
        }

        engine_info!("Text extraction finished: {}", summary);
        Ok(summary)
    }

    fn process_gazette(
        &self,
        mut gazette: GazetteRecord,
        database: &mut dyn GazetteDatabase,
        storage: &dyn ObjectStorage,
        index: &mut dyn SearchIndex,
        extractor: &dyn TextExtractor,
    ) -> Result<RecordOutcome, PipelineError> {
        engine_debug!("Processing gazette {}", gazette.file_path);

        // Both guards below delete their file on every exit path.
        let mut raw_file = self.scratch.raw_file()?;
        let bytes = storage
            .download(&gazette.file_path, raw_file.as_file_mut())
            .map_err(|source| PipelineError::Storage {
                file_path: gazette.file_path.clone(),
                source,
            })?;
        raw_file.as_file_mut().flush()?;
        engine_debug!("Downloaded {} bytes for gazette {}", bytes, gazette.id);

        let text_file = match extractor.extract(raw_file.path()) {
            Ok(path) => ExtractedTextFile::adopt(path),
            Err(err) => return Ok(skip(&gazette, err.to_string())),
        };
        gazette.source_text = match text_file.read_text() {
            Ok(text) => text,
            Err(err) => return Ok(skip(&gazette, format!("unreadable extracted text: {err}"))),
        };

        index.upsert_document(&gazette)?;
        database.mark_processed(gazette.id, &gazette.file_checksum)?;
        Ok(RecordOutcome::Processed)
    }
}

fn skip(gazette: &GazetteRecord, reason: String) -> RecordOutcome {
    engine_warn!(
        "Could not process gazette {}. Cause: {}",
        gazette.file_path,
        reason
    );
    RecordOutcome::Skipped { reason }
}
