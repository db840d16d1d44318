//! Aggregation and report rendering.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::to_text;

use crate::config::EstimateOptions;
use crate::model::{Breakdown, ImageReport, MathCount, TableCount, TextCount};

/// Sum all weighted contributions into one breakdown.
///
/// This is the single place totals are computed; the extractors only
/// report their own structured counts. Abstract characters are carried
/// for reporting but never added.
pub fn aggregate(
    text: TextCount,
    abstract_chars: Option<usize>,
    math: MathCount,
    tables: TableCount,
    images: ImageReport,
    warnings: Vec<String>,
    options: &EstimateOptions,
) -> Breakdown {
    let grand_total = text.words as f64 + math.words + tables.words + images.words as f64;

    Breakdown {
        text_words: text.words,
        abstract_chars,
        math,
        tables,
        images,
        warnings,
        grand_total,
        word_limit: options.word_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Breakdown {
        aggregate(
            TextCount { words: 3000 },
            Some(600),
            MathCount {
                lines: 3,
                words: 48.0,
            },
            TableCount {
                tables: 1,
                rows: 3,
                words: 32.5,
            },
            ImageReport {
                records: vec![],
                words: 95,
                warnings: vec![],
            },
            vec![],
            &EstimateOptions::default(),
        )
    }

    #[test]
    fn test_grand_total_sums_weighted_contributions() {
        let breakdown = sample();
        assert_eq!(breakdown.grand_total, 3000.0 + 48.0 + 32.5 + 95.0);
    }

    #[test]
    fn test_abstract_not_added() {
        let with_abstract = sample();
        let without = aggregate(
            TextCount { words: 3000 },
            None,
            with_abstract.math,
            with_abstract.tables,
            with_abstract.images.clone(),
            vec![],
            &EstimateOptions::default(),
        );
        assert_eq!(with_abstract.grand_total, without.grand_total);
    }

    #[test]
    fn test_over_limit() {
        let mut breakdown = sample();
        assert!(!breakdown.over_limit());
        breakdown.grand_total = 3500.5;
        assert!(breakdown.over_limit());
    }
}
