//! Plain-text breakdown rendering.

use std::fmt::Write;

use crate::model::Breakdown;

/// Render the breakdown in the fixed report order: text and equations,
/// abstract, displayed math, tables, images, grand total.
pub fn to_text(breakdown: &Breakdown) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Words in text, headers and equations: {}",
        breakdown.text_words
    );

    match breakdown.abstract_chars {
        Some(chars) => {
            let _ = writeln!(
                out,
                "Abstract: {} characters (not counted toward the total)",
                chars
            );
        }
        None => {
            let _ = writeln!(out, "Abstract: not found");
        }
    }

    let _ = writeln!(
        out,
        "Displayed math: {} lines, {} word-equivalents",
        breakdown.math.lines,
        fmt_words(breakdown.math.words)
    );

    let _ = writeln!(
        out,
        "Tables: {} tables, {} rows, {} word-equivalents",
        breakdown.tables.tables,
        breakdown.tables.rows,
        fmt_words(breakdown.tables.words)
    );

    out.push('\n');
    out.push_str("Images\n");
    render_images(breakdown, &mut out);

    for warning in &breakdown.warnings {
        let _ = writeln!(out, "warning: {}", warning);
    }

    let over = if breakdown.over_limit() {
        " -- over the limit"
    } else {
        ""
    };
    let _ = writeln!(
        out,
        "\nTotal estimated length: {} word-equivalents (advisory limit: {}){}",
        fmt_words(breakdown.grand_total),
        breakdown.word_limit,
        over
    );

    out
}

fn render_images(breakdown: &Breakdown, out: &mut String) {
    let images = &breakdown.images;

    if images.is_empty() {
        out.push_str("  no images found\n");
    } else {
        // Column width follows the longest filename so the table stays
        // aligned no matter what the manuscript calls its figures.
        let file_width = images
            .records
            .iter()
            .map(|r| r.file.len())
            .max()
            .unwrap_or(0)
            .max("file".len());

        let _ = writeln!(
            out,
            "  {:>3}  {:<width$}  {:>7}  {:<6}  {:>5}",
            "fig",
            "file",
            "aspect",
            "mode",
            "words",
            width = file_width
        );
        for record in &images.records {
            let aspect = match record.aspect_ratio {
                Some(a) => format!("{:.3}", a),
                None => "-".to_string(),
            };
            let _ = writeln!(
                out,
                "  {:>3}  {:<width$}  {:>7}  {:<6}  {:>5}",
                record.figure,
                record.file,
                aspect,
                record.mode.label(),
                record.words,
                width = file_width
            );
            if let Some(note) = &record.note {
                let _ = writeln!(out, "       ({})", note);
            }
        }
    }

    for warning in &images.warnings {
        let _ = writeln!(out, "  warning: {}", warning);
    }
    let _ = writeln!(out, "  image total: {} word-equivalents", images.words);
}

/// Totals carry halves from the per-row table weight; whole numbers are
/// printed without a decimal point.
fn fmt_words(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EstimateOptions;
    use crate::model::{ColumnMode, ImageRecord, ImageReport, MathCount, TableCount, TextCount};
    use crate::report::aggregate;

    fn breakdown_with_images(images: ImageReport) -> Breakdown {
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
            images,
            vec![],
            &EstimateOptions::default(),
        )
    }

    fn record(file: &str, words: u64) -> ImageRecord {
        ImageRecord {
            figure: 1,
            file: file.to_string(),
            width_pt: Some(200.0),
            height_pt: Some(100.0),
            aspect_ratio: Some(2.0),
            mode: ColumnMode::Single,
            words,
            matched: true,
            note: None,
        }
    }

    #[test]
    fn test_fixed_section_order() {
        let report = to_text(&breakdown_with_images(ImageReport::default()));
        let text_pos = report.find("Words in text, headers and equations").unwrap();
        let abstract_pos = report.find("Abstract:").unwrap();
        let math_pos = report.find("Displayed math:").unwrap();
        let tables_pos = report.find("Tables:").unwrap();
        let images_pos = report.find("Images").unwrap();
        let total_pos = report.find("Total estimated length:").unwrap();
        assert!(text_pos < abstract_pos);
        assert!(abstract_pos < math_pos);
        assert!(math_pos < tables_pos);
        assert!(tables_pos < images_pos);
        assert!(images_pos < total_pos);
    }

    #[test]
    fn test_no_images_stated_explicitly() {
        let report = to_text(&breakdown_with_images(ImageReport::default()));
        assert!(report.contains("no images found"));
        assert!(report.contains("image total: 0 word-equivalents"));
    }

    #[test]
    fn test_image_rows_and_total() {
        let images = ImageReport {
            records: vec![record("plot.pdf", 95), record("wide-figure.pdf", 190)],
            words: 285,
            warnings: vec![],
        };
        let report = to_text(&breakdown_with_images(images));
        assert!(report.contains("plot.pdf"));
        assert!(report.contains("2.000"));
        assert!(report.contains("image total: 285 word-equivalents"));
    }

    #[test]
    fn test_column_width_follows_longest_filename() {
        let images = ImageReport {
            records: vec![record("a.pdf", 95), record("a-much-longer-name.pdf", 95)],
            words: 190,
            warnings: vec![],
        };
        let report = to_text(&breakdown_with_images(images));
        // Every image row is padded to the same aspect-column position.
        let rows: Vec<&str> = report
            .lines()
            .filter(|l| l.contains(".pdf"))
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].find("2.000").unwrap(),
            rows[1].find("2.000").unwrap()
        );
    }

    #[test]
    fn test_missing_abstract_reported() {
        let mut breakdown = breakdown_with_images(ImageReport::default());
        breakdown.abstract_chars = None;
        let report = to_text(&breakdown);
        assert!(report.contains("Abstract: not found"));
    }

    #[test]
    fn test_fractional_total_keeps_one_decimal() {
        let breakdown = breakdown_with_images(ImageReport::default());
        // 3000 + 48 + 32.5 + 0
        let report = to_text(&breakdown);
        assert!(report.contains("Total estimated length: 3080.5 word-equivalents"));
    }

    #[test]
    fn test_over_limit_flagged() {
        let mut breakdown = breakdown_with_images(ImageReport::default());
        breakdown.grand_total = 4000.0;
        let report = to_text(&breakdown);
        assert!(report.contains("-- over the limit"));
    }
}
