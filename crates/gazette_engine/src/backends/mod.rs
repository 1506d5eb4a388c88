//! File-system implementations of the collaborator traits.
mod dir_index;
mod fs_storage;
mod json_database;

pub use dir_index::DirectoryIndex;
pub use fs_storage::FsObjectStorage;
pub use json_database::JsonFileDatabase;
