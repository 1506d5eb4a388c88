use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use gazette_core::clean_extra_whitespaces;
use scraper::{Html, Node};
use thiserror::Error;

use crate::decode::{decode_text, DecodeError};
use crate::scratch::ScratchSpace;

/// Leading bytes inspected when sniffing content.
const SNIFF_LEN: u64 = 8 * 1024;
const PDF_SIGNATURE: &[u8] = b"%PDF-";
const IGNORED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type: {0}")]
    Unsupported(String),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Turns a raw gazette file into a plain-text file.
///
/// Implementations return the path of a new file holding the extracted text.
/// The caller takes ownership of that file and deletes it when done.
pub trait TextExtractor {
    fn extract(&self, raw_file: &Path) -> Result<PathBuf, ExtractError>;
}

impl<F> TextExtractor for F
where
    F: Fn(&Path) -> Result<PathBuf, ExtractError>,
{
    fn extract(&self, raw_file: &Path) -> Result<PathBuf, ExtractError> {
        self(raw_file)
    }
}

/// Extractor for files that already are text, in any common encoding.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor {
    output: ScratchSpace,
}

impl PlainTextExtractor {
    pub fn new(output: ScratchSpace) -> Self {
        Self { output }
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, raw_file: &Path) -> Result<PathBuf, ExtractError> {
        let bytes = fs::read(raw_file)?;
        reject_binary(&bytes)?;
        let decoded = decode_text(&bytes)?;
        let text = clean_extra_whitespaces(&decoded.text);
        Ok(self.output.write_text_file(&text)?)
    }
}

/// Extractor for gazettes published as HTML pages.
///
/// Keeps the text of every node except script-like elements.
#[derive(Debug, Clone, Default)]
pub struct HtmlTextExtractor {
    output: ScratchSpace,
}

impl HtmlTextExtractor {
    pub fn new(output: ScratchSpace) -> Self {
        Self { output }
    }
}

impl TextExtractor for HtmlTextExtractor {
    fn extract(&self, raw_file: &Path) -> Result<PathBuf, ExtractError> {
        let bytes = fs::read(raw_file)?;
        reject_binary(&bytes)?;
        let decoded = decode_text(&bytes)?;
        let text = html_to_text(&decoded.text);
        Ok(self.output.write_text_file(&text)?)
    }
}

/// Picks the HTML or plain-text extractor from the file's leading bytes.
#[derive(Debug, Clone, Default)]
pub struct SniffingExtractor {
    html: HtmlTextExtractor,
    plain: PlainTextExtractor,
}

impl SniffingExtractor {
    pub fn new(output: ScratchSpace) -> Self {
        Self {
            html: HtmlTextExtractor::new(output.clone()),
            plain: PlainTextExtractor::new(output),
        }
    }
}

impl TextExtractor for SniffingExtractor {
    fn extract(&self, raw_file: &Path) -> Result<PathBuf, ExtractError> {
        let head = read_head(raw_file)?;
        if looks_like_html(&head) {
            self.html.extract(raw_file)
        } else {
            self.plain.extract(raw_file)
        }
    }
}

fn read_head(path: &Path) -> Result<Vec<u8>, ExtractError> {
    let mut head = Vec::new();
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut head)?;
    Ok(head)
}

fn looks_like_html(head: &[u8]) -> bool {
    let lowered = String::from_utf8_lossy(head).to_ascii_lowercase();
    let trimmed = lowered.trim_start_matches('\u{feff}').trim_start();
    if trimmed.starts_with("<!doctype html") || trimmed.starts_with("<html") {
        return true;
    }
    // Fragments without a root element still have to open with markup.
    trimmed.starts_with('<') && has_body_tag(trimmed)
}

fn has_body_tag(lowered: &str) -> bool {
    lowered.match_indices("<body").any(|(at, tag)| {
        lowered[at + tag.len()..]
            .chars()
            .next()
            .is_some_and(|c| c == '>' || c == '/' || c.is_ascii_whitespace())
    })
}

fn reject_binary(bytes: &[u8]) -> Result<(), ExtractError> {
    let head = &bytes[..bytes.len().min(SNIFF_LEN as usize)];
    // UTF-16 text legitimately contains NUL bytes.
    if Encoding::for_bom(head).is_some() {
        return Ok(());
    }
    if head.starts_with(PDF_SIGNATURE) {
        return Err(ExtractError::Unsupported("PDF document".into()));
    }
    if head.contains(&0) {
        return Err(ExtractError::Unsupported("binary content".into()));
    }
    Ok(())
}

fn html_to_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut pieces: Vec<&str> = Vec::new();
    for node in doc.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let ignored = node.ancestors().any(|ancestor| {
            matches!(ancestor.value(), Node::Element(el) if IGNORED_ELEMENTS.contains(&el.name()))
        });
        if !ignored {
            pieces.push(text);
        }
    }
    clean_extra_whitespaces(&pieces.join("\n"))
}
