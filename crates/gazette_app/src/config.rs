//! Runner configuration, read from a RON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_LOG_FILE: &str = "gazette.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Which text extractor the runner plugs into the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractorKind {
    PlainText,
    Html,
    #[default]
    Sniffing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON file holding the gazette table.
    pub database_path: PathBuf,
    /// Directory standing in for the object storage bucket.
    pub storage_root: PathBuf,
    /// Directory receiving one JSON document per indexed gazette.
    pub index_dir: PathBuf,
    /// Scratch directory for downloads and extracted text. System temp dir if unset.
    #[serde(default)]
    pub work_dir: Option<PathBuf>,
    #[serde(default)]
    pub extractor: ExtractorKind,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl AppConfig {
    /// Loads the config; relative paths are taken from the config file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolved_against(base))
    }

    fn parse(content: &str) -> Result<Self, String> {
        ron::from_str(content).map_err(|err| err.to_string())
    }

    fn resolved_against(self, base: &Path) -> Self {
        let resolve = |path: PathBuf| {
            if path.is_absolute() {
                path
            } else {
                base.join(path)
            }
        };
        Self {
            database_path: resolve(self.database_path),
            storage_root: resolve(self.storage_root),
            index_dir: resolve(self.index_dir),
            work_dir: self.work_dir.map(resolve),
            extractor: self.extractor,
            log_file: resolve(self.log_file),
        }
    }
}
