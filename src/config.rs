//! Estimation options and publisher accounting constants.
//!
//! The accounting weights have varied across published revisions of the
//! length guidelines (12 vs 16 word-equivalents per displayed-equation
//! line, 3500 vs 3750 words for the advisory limit), so every weight is
//! an explicit option with a documented default rather than a literal
//! buried in an extractor.

use std::time::Duration;

/// Word-equivalents charged per displayed-equation line.
pub const DEFAULT_MATH_WORDS_PER_LINE: u32 = 16;

/// Fixed word-equivalent overhead charged per table.
pub const DEFAULT_TABLE_WORDS_BASE: f64 = 13.0;

/// Word-equivalents charged per counted table row.
pub const DEFAULT_TABLE_WORDS_PER_ROW: f64 = 6.5;

/// Advisory limit printed alongside the grand total.
pub const DEFAULT_WORD_LIMIT: u32 = 3500;

/// Upper bound on a single compiler invocation.
pub const DEFAULT_COMPILE_TIMEOUT: Duration = Duration::from_secs(120);

/// Options controlling the estimation pipeline.
#[derive(Debug, Clone)]
pub struct EstimateOptions {
    /// Word-equivalents per displayed-equation line.
    pub math_words_per_line: u32,

    /// Fixed word-equivalent overhead per table.
    pub table_words_base: f64,

    /// Word-equivalents per counted table row.
    pub table_words_per_row: f64,

    /// Advisory total-length limit reported with the estimate.
    pub word_limit: u32,

    /// Time limit for the compiler collaborator.
    pub compile_timeout: Duration,

    /// Section names zeroed out by the counting collaborator.
    pub excluded_sections: Vec<String>,
}

impl EstimateOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-line weight for displayed equations.
    pub fn with_math_words_per_line(mut self, words: u32) -> Self {
        self.math_words_per_line = words;
        self
    }

    /// Set the fixed per-table overhead.
    pub fn with_table_words_base(mut self, words: f64) -> Self {
        self.table_words_base = words;
        self
    }

    /// Set the per-row table weight.
    pub fn with_table_words_per_row(mut self, words: f64) -> Self {
        self.table_words_per_row = words;
        self
    }

    /// Set the advisory word limit.
    pub fn with_word_limit(mut self, limit: u32) -> Self {
        self.word_limit = limit;
        self
    }

    /// Set the compiler time limit.
    pub fn with_compile_timeout(mut self, timeout: Duration) -> Self {
        self.compile_timeout = timeout;
        self
    }

    /// Replace the list of sections excluded from the text count.
    pub fn with_excluded_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_sections = sections.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for EstimateOptions {
    fn default() -> Self {
        Self {
            math_words_per_line: DEFAULT_MATH_WORDS_PER_LINE,
            table_words_base: DEFAULT_TABLE_WORDS_BASE,
            table_words_per_row: DEFAULT_TABLE_WORDS_PER_ROW,
            word_limit: DEFAULT_WORD_LIMIT,
            compile_timeout: DEFAULT_COMPILE_TIMEOUT,
            excluded_sections: vec!["abstract".to_string(), "acknowledgments".to_string()],
        }
    }
}
