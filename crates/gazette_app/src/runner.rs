use anyhow::{Context, Result};
use engine_logging::engine_info;
use gazette_core::{GazetteDatabase, GazetteRecord};
use gazette_engine::backends::{DirectoryIndex, FsObjectStorage, JsonFileDatabase};
use gazette_engine::{
    ensure_dir, ExtractionPipeline, HtmlTextExtractor, PipelineSettings, PlainTextExtractor,
    RunSummary, ScratchSpace, SniffingExtractor, TextExtractor,
};

use crate::config::{AppConfig, ExtractorKind};

/// Wires the local backends from `config` and runs one extraction pass.
pub fn run(config: &AppConfig) -> Result<RunSummary> {
    if let Some(dir) = &config.work_dir {
        ensure_dir(dir).with_context(|| format!("preparing work dir {}", dir.display()))?;
    }

    let mut database = JsonFileDatabase::open(config.database_path.clone())?;
    let storage = FsObjectStorage::new(config.storage_root.clone());
    let mut index = DirectoryIndex::new(config.index_dir.clone());
    let extractor = build_extractor(config);
    engine_info!(
        "Using {:?} extractor, storage at {:?}, index at {:?}",
        config.extractor,
        storage.root(),
        index.dir()
    );

    let pipeline = ExtractionPipeline::new(PipelineSettings {
        work_dir: config.work_dir.clone(),
    });
    pipeline
        .run(&mut database, &storage, &mut index, extractor.as_ref())
        .context("text extraction run aborted")
}

pub fn pending(config: &AppConfig) -> Result<Vec<GazetteRecord>> {
    let mut database = JsonFileDatabase::open(config.database_path.clone())?;
    let pending = database
        .pending_gazettes()
        .with_context(|| format!("reading {}", database.path().display()))?;
    Ok(pending)
}

fn build_extractor(config: &AppConfig) -> Box<dyn TextExtractor> {
    let output = ScratchSpace::new(config.work_dir.clone());
    match config.extractor {
        ExtractorKind::PlainText => Box::new(PlainTextExtractor::new(output)),
        ExtractorKind::Html => Box::new(HtmlTextExtractor::new(output)),
        ExtractorKind::Sniffing => Box::new(SniffingExtractor::new(output)),
    }
}
