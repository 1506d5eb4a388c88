//! Gazette core: record model, collaborator seams and pure text helpers.
mod collaborators;
mod record;
mod text;

pub use collaborators::{
    DatabaseError, GazetteDatabase, IndexError, ObjectStorage, SearchIndex, StorageError,
};
pub use record::{GazetteId, GazetteRecord};
pub use text::clean_extra_whitespaces;
