use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub type GazetteId = i64;

/// One gazette as stored by the database and sent to the search index.
///
/// The pipeline only ever writes `source_text`; every other field is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteRecord {
    pub id: GazetteId,
    /// Content-derived identifier, also used as the index document id.
    pub file_checksum: String,
    /// Object storage key of the raw file.
    pub file_path: String,
    #[serde(default)]
    pub source_text: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub edition_number: String,
    #[serde(default)]
    pub is_extra_edition: bool,
    #[serde(default)]
    pub power: String,
    #[serde(default)]
    pub file_url: String,
    pub territory_id: String,
    #[serde(default)]
    pub territory_name: String,
    #[serde(default)]
    pub state_code: String,
    pub scraped_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub processed: bool,
}

impl GazetteRecord {
    /// Whether the gazette still waits for text extraction.
    pub fn is_pending(&self) -> bool {
        !self.processed
    }

    /// Returns true when `id` and `file_checksum` both identify this gazette.
    pub fn matches(&self, id: GazetteId, file_checksum: &str) -> bool {
        self.id == id && self.file_checksum == file_checksum
    }
}
