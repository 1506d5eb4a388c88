use std::io::{self, Write};

use thiserror::Error;

use crate::{GazetteId, GazetteRecord};

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed gazette data: {0}")]
    Malformed(String),
    #[error("no gazette with id {id} and checksum {file_checksum}")]
    UnknownGazette {
        id: GazetteId,
        file_checksum: String,
    },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("invalid object key: {0}")]
    InvalidKey(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("document id is not usable: {0}")]
    InvalidDocumentId(String),
    #[error("failed to serialize document: {0}")]
    Serialize(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Source of gazettes awaiting extraction and sink for the processed flag.
pub trait GazetteDatabase {
    /// Every gazette not yet marked as processed, in the order they should be
    /// handled.
    fn pending_gazettes(&mut self) -> Result<Vec<GazetteRecord>, DatabaseError>;

    /// Flags the gazette identified by `id` and `file_checksum` as processed.
    fn mark_processed(&mut self, id: GazetteId, file_checksum: &str) -> Result<(), DatabaseError>;
}

/// Read access to the object store holding raw gazette files.
pub trait ObjectStorage {
    /// Streams the object stored under `file_path` into `destination` and
    /// returns the number of bytes written.
    fn download(&self, file_path: &str, destination: &mut dyn Write) -> Result<u64, StorageError>;
}

/// Search index receiving enriched gazette documents.
pub trait SearchIndex {
    /// Inserts the document, replacing any document with the same
    /// `file_checksum`.
    fn upsert_document(&mut self, document: &GazetteRecord) -> Result<(), IndexError>;
}
