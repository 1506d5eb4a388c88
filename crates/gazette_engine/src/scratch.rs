use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::{Builder, NamedTempFile, TempPath};

const RAW_FILE_PREFIX: &str = "gazette-raw-";
const TEXT_FILE_PREFIX: &str = "gazette-text-";
const TEXT_FILE_SUFFIX: &str = ".txt";

/// Directory where per-gazette transient files are created.
///
/// `None` means the system temp directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScratchSpace {
    dir: Option<PathBuf>,
}

impl ScratchSpace {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    /// Empty, writable file for a raw download. Deleted when dropped.
    pub fn raw_file(&self) -> io::Result<NamedTempFile> {
        self.create(Builder::new().prefix(RAW_FILE_PREFIX))
    }

    /// Writes `text` to a new `.txt` file and releases it to the caller.
    ///
    /// The returned path is no longer cleaned up automatically; whoever
    /// receives it owns the file.
    pub fn write_text_file(&self, text: &str) -> io::Result<PathBuf> {
        let mut file = self.create(
            Builder::new()
                .prefix(TEXT_FILE_PREFIX)
                .suffix(TEXT_FILE_SUFFIX),
        )?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        let path = file.into_temp_path().keep()?;
        Ok(path)
    }

    fn create(&self, builder: &mut Builder<'_, '_>) -> io::Result<NamedTempFile> {
        match &self.dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
    }
}

/// Extracted-text file handed back by a `TextExtractor`.
///
/// Owning this guard means owning the file: it is removed on drop, whether or
/// not it still exists.
#[derive(Debug)]
pub struct ExtractedTextFile {
    path: TempPath,
}

impl ExtractedTextFile {
    pub fn adopt(path: PathBuf) -> Self {
        Self {
            path: TempPath::from_path(path),
        }
    }

    /// Full file content. Fails if the file is missing or not valid UTF-8.
    pub fn read_text(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}
