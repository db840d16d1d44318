//! Per-image estimation records.

use serde::Serialize;

/// Column layout of the enclosing figure environment.
///
/// `figure*` spans both columns of a two-column layout; the accounting
/// formula charges it roughly twice as much as a single-column figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnMode {
    /// Plain `figure` environment.
    Single,
    /// Starred `figure*` environment.
    Double,
}

impl ColumnMode {
    /// Short label used in the report table.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnMode::Single => "single",
            ColumnMode::Double => "double",
        }
    }
}

/// One image inclusion and its word-equivalent estimate.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRecord {
    /// Ordinal of the enclosing figure environment, 1-based, in document order.
    pub figure: usize,

    /// Filename argument of the inclusion command.
    pub file: String,

    /// Requested width in points, when matched in the log.
    pub width_pt: Option<f64>,

    /// Requested height in points, when matched in the log.
    pub height_pt: Option<f64>,

    /// Width / height, rounded to three decimals.
    pub aspect_ratio: Option<f64>,

    /// Column layout of the enclosing figure.
    pub mode: ColumnMode,

    /// Word-equivalent contribution; zero when unmatched.
    pub words: u64,

    /// Whether dimensions were recovered from the compilation log.
    pub matched: bool,

    /// Data-quality note for this image (unmatched or ambiguous join).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// All image estimates plus their total.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImageReport {
    /// Per-image records in document order.
    pub records: Vec<ImageRecord>,

    /// Sum of all per-image contributions.
    pub words: u64,

    /// Estimator-level warnings (for example a log/source list mismatch).
    pub warnings: Vec<String>,
}

impl ImageReport {
    /// True when the document contains no image inclusions.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
