//! The aggregated count breakdown.

use serde::Serialize;

use super::ImageReport;

/// Aggregate word count reported by the counting collaborator.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TextCount {
    /// Words in body text, headers, captions and inline equations.
    pub words: u64,
}

/// Displayed-equation tally.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MathCount {
    /// Counted equation lines across all displayed math.
    pub lines: usize,

    /// Word-equivalent contribution (lines x per-line weight).
    pub words: f64,
}

/// Table tally.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TableCount {
    /// Number of tabular environments.
    pub tables: usize,

    /// Counted data rows across all tables.
    pub rows: usize,

    /// Word-equivalent contribution (per-table overhead + per-row weight).
    pub words: f64,
}

/// The full breakdown produced by one pipeline run.
///
/// Built once by [`crate::report::aggregate`] and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Breakdown {
    /// Words in text, headers and equations (counting collaborator).
    pub text_words: u64,

    /// Abstract length in characters; `None` when no abstract was found.
    /// Reported separately, never added to the total.
    pub abstract_chars: Option<usize>,

    /// Displayed-math contribution.
    pub math: MathCount,

    /// Table contribution.
    pub tables: TableCount,

    /// Per-image estimates and their total.
    pub images: ImageReport,

    /// Data-quality warnings accumulated across the pipeline.
    pub warnings: Vec<String>,

    /// Sum of all weighted contributions.
    pub grand_total: f64,

    /// Advisory limit the total is compared against.
    pub word_limit: u32,
}

impl Breakdown {
    /// Whether the estimate exceeds the advisory limit.
    pub fn over_limit(&self) -> bool {
        self.grand_total > f64::from(self.word_limit)
    }
}
