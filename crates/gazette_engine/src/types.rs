use std::fmt;

use gazette_core::GazetteId;

/// What happened to one gazette during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Indexed and flagged as processed.
    Processed,
    /// Text extraction failed; nothing was written for this gazette.
    Skipped { reason: String },
}

impl fmt::Display for RecordOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordOutcome::Processed => write!(f, "processed"),
            RecordOutcome::Skipped { reason } => write!(f, "skipped ({reason})"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Size of the pending snapshot taken at the start of the run.
    pub pending: usize,
    pub processed: usize,
    pub skipped: Vec<GazetteId>,
}

impl RunSummary {
    pub(crate) fn record(&mut self, id: GazetteId, outcome: &RecordOutcome) {
        match outcome {
            RecordOutcome::Processed => self.processed += 1,
            RecordOutcome::Skipped { .. } => self.skipped.push(id),
        }
    }

    pub fn attempted(&self) -> usize {
        self.processed + self.skipped.len()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pending, {} processed, {} skipped",
            self.pending,
            self.processed,
            self.skipped.len()
        )
    }
}
