//! Gazette engine: extraction pipeline, scratch files and local backends.
mod decode;
mod extract;
mod persist;
mod pipeline;
mod scratch;
mod types;

pub mod backends;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use extract::{
    ExtractError, HtmlTextExtractor, PlainTextExtractor, SniffingExtractor, TextExtractor,
};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use pipeline::{ExtractionPipeline, PipelineError, PipelineSettings};
pub use scratch::{ExtractedTextFile, ScratchSpace};
pub use types::{RecordOutcome, RunSummary};
