//! Image word-equivalent estimation.
//!
//! The source tells us which images a figure includes and whether the
//! figure spans one or two columns; only the compilation log knows the
//! physical size each inclusion requested. The two are joined by
//! searching the log's `<use ...>` tokens for the inclusion filename,
//! not by ordinal position, so a reordered or partial log degrades to
//! per-image warnings instead of silently mispairing.

use regex::Regex;

use crate::model::{ColumnMode, CompilationLog, DocumentSource, ImageRecord, ImageReport};

use super::envs::find_environments;

/// An image entry recovered from the compilation log.
#[derive(Debug, Clone)]
struct LogImage {
    token: String,
    width_pt: f64,
    height_pt: f64,
}

/// Estimate the word-equivalent of every included image.
pub fn estimate_images(source: &DocumentSource, log: &CompilationLog) -> ImageReport {
    let mut report = ImageReport::default();
    let log_images = parse_log_images(log, &mut report.warnings);

    let include = Regex::new(r"\\includegraphics\s*(?:\[[^\]]*\])?\s*\{([^}]+)\}").unwrap();
    let figures = find_environments(source.text(), &["figure"]);

    for (index, figure) in figures.iter().enumerate() {
        let mode = if figure.starred {
            ColumnMode::Double
        } else {
            ColumnMode::Single
        };
        for caps in include.captures_iter(figure.body) {
            let file = caps[1].trim().to_string();
            let record = estimate_one(index + 1, file, mode, &log_images);
            report.words += record.words;
            report.records.push(record);
        }
    }

    log::debug!(
        "images: {} figures, {} inclusions, {} word-equivalents",
        figures.len(),
        report.records.len(),
        report.words
    );

    report
}

fn estimate_one(
    figure: usize,
    file: String,
    mode: ColumnMode,
    log_images: &[LogImage],
) -> ImageRecord {
    let mut hits = log_images.iter().filter(|img| img.token.contains(&file));

    let Some(matched) = hits.next() else {
        log::warn!("no <use> entry for '{}' in compilation log", file);
        return ImageRecord {
            figure,
            file,
            width_pt: None,
            height_pt: None,
            aspect_ratio: None,
            mode,
            words: 0,
            matched: false,
            note: Some("not found in compilation log".to_string()),
        };
    };

    let ambiguous = hits.count();
    let note = if ambiguous > 0 {
        log::warn!(
            "'{}' matches {} log entries; using the first",
            file,
            ambiguous + 1
        );
        Some(format!(
            "ambiguous: matches {} log entries, first used",
            ambiguous + 1
        ))
    } else {
        None
    };

    if matched.height_pt <= 0.0 || matched.width_pt <= 0.0 {
        return ImageRecord {
            figure,
            file,
            width_pt: Some(matched.width_pt),
            height_pt: Some(matched.height_pt),
            aspect_ratio: None,
            mode,
            words: 0,
            matched: false,
            note: Some("degenerate requested size in compilation log".to_string()),
        };
    }

    let aspect = round3(matched.width_pt / matched.height_pt);
    ImageRecord {
        figure,
        file,
        width_pt: Some(matched.width_pt),
        height_pt: Some(matched.height_pt),
        aspect_ratio: Some(aspect),
        mode,
        words: image_words(aspect, mode),
        matched: true,
        note,
    }
}

/// The publisher's size-to-words formula.
///
/// A double-column figure is charged as if it were half as wide-per-column
/// and carries a larger fixed overhead.
fn image_words(aspect: f64, mode: ColumnMode) -> u64 {
    let raw = match mode {
        ColumnMode::Single => 150.0 / aspect + 20.0,
        ColumnMode::Double => 150.0 / (0.5 * aspect) + 40.0,
    };
    raw.ceil() as u64
}

/// Rounds to three decimals, half away from zero.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Collects `<use ...>` tokens and `Requested size` pairs, in log order.
///
/// The two lists are emitted by the compiler in the same order, so they
/// are zipped positionally; a length mismatch is reported and the excess
/// entries are dropped rather than guessed at.
fn parse_log_images(log: &CompilationLog, warnings: &mut Vec<String>) -> Vec<LogImage> {
    let use_re = Regex::new(r"<use ([^>]+)>").unwrap();
    let size_re = Regex::new(r"Requested size:\s*([0-9.]+)pt x ([0-9.]+)pt").unwrap();

    let tokens: Vec<String> = use_re
        .captures_iter(log.text())
        .map(|c| c[1].trim().to_string())
        .collect();
    let sizes: Vec<(f64, f64)> = size_re
        .captures_iter(log.text())
        .filter_map(|c| Some((c[1].parse().ok()?, c[2].parse().ok()?)))
        .collect();

    if tokens.len() != sizes.len() {
        warnings.push(format!(
            "compilation log lists {} <use> entries but {} requested sizes; \
             pairing the first {}",
            tokens.len(),
            sizes.len(),
            tokens.len().min(sizes.len())
        ));
    }

    tokens
        .into_iter()
        .zip(sizes)
        .map(|(token, (width_pt, height_pt))| LogImage {
            token,
            width_pt,
            height_pt,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str, log: &str) -> ImageReport {
        estimate_images(
            &DocumentSource::from_raw(source),
            &CompilationLog::new(log.to_string()),
        )
    }

    const SINGLE_FIGURE: &str =
        "\\begin{figure}\n\\includegraphics{plot.pdf}\n\\caption{A plot.}\n\\end{figure}";

    #[test]
    fn test_single_column_estimate() {
        // 200pt x 100pt: aspect 2.000, ceil(150/2 + 20) = 95.
        let report = run(
            SINGLE_FIGURE,
            "<use plot.pdf>\nRequested size: 200.0pt x 100.0pt.",
        );
        assert_eq!(report.records.len(), 1);
        let record = &report.records[0];
        assert_eq!(record.aspect_ratio, Some(2.0));
        assert_eq!(record.mode, ColumnMode::Single);
        assert_eq!(record.words, 95);
        assert_eq!(report.words, 95);
    }

    #[test]
    fn test_double_column_estimate() {
        // Same image in figure*: ceil(150/(0.5 x 2) + 40) = 190.
        let source =
            "\\begin{figure*}\n\\includegraphics{plot.pdf}\n\\end{figure*}";
        let report = run(source, "<use plot.pdf>\nRequested size: 200.0pt x 100.0pt.");
        assert_eq!(report.records[0].mode, ColumnMode::Double);
        assert_eq!(report.records[0].words, 190);
    }

    #[test]
    fn test_aspect_rounding_half_up() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(1.2344999), 1.234);
        assert_eq!(round3(2.0), 2.0);
    }

    #[test]
    fn test_zero_images() {
        let report = run("no figures here", "");
        assert!(report.is_empty());
        assert_eq!(report.words, 0);
    }

    #[test]
    fn test_unmatched_image_is_zero_with_note() {
        let report = run(SINGLE_FIGURE, "<use other.pdf>\nRequested size: 10.0pt x 10.0pt.");
        let record = &report.records[0];
        assert!(!record.matched);
        assert_eq!(record.words, 0);
        assert!(record.note.as_deref().unwrap().contains("not found"));
        assert_eq!(report.words, 0);
    }

    #[test]
    fn test_match_by_substring() {
        // The inclusion omits the extension; the log token carries it.
        let source = "\\begin{figure}\\includegraphics[width=\\linewidth]{plot}\\end{figure}";
        let report = run(source, "<use ./figs/plot.pdf>\nRequested size: 150.0pt x 150.0pt.");
        let record = &report.records[0];
        assert!(record.matched);
        assert_eq!(record.aspect_ratio, Some(1.0));
        // ceil(150/1 + 20)
        assert_eq!(record.words, 170);
    }

    #[test]
    fn test_ambiguous_match_warns_and_uses_first() {
        let log = "<use plot.pdf>\nRequested size: 200.0pt x 100.0pt.\n\
                   <use plot.pdf>\nRequested size: 100.0pt x 100.0pt.";
        let report = run(SINGLE_FIGURE, log);
        let record = &report.records[0];
        assert!(record.matched);
        assert_eq!(record.aspect_ratio, Some(2.0));
        assert!(record.note.as_deref().unwrap().contains("ambiguous"));
    }

    #[test]
    fn test_list_length_mismatch_warns() {
        let log = "<use a.pdf>\n<use b.pdf>\nRequested size: 100.0pt x 100.0pt.";
        let source = "\\begin{figure}\\includegraphics{a.pdf}\\end{figure}";
        let report = run(source, log);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("2 <use> entries but 1"));
        // a.pdf still pairs with the only size present.
        assert!(report.records[0].matched);
    }

    #[test]
    fn test_degenerate_size_skipped() {
        let report = run(SINGLE_FIGURE, "<use plot.pdf>\nRequested size: 200.0pt x 0.0pt.");
        let record = &report.records[0];
        assert!(!record.matched);
        assert_eq!(record.words, 0);
    }

    #[test]
    fn test_figure_ordinals() {
        let source = "\\begin{figure}\\includegraphics{a.pdf}\\end{figure}\n\
                      \\begin{figure}\\includegraphics{b.pdf}\\includegraphics{c.pdf}\\end{figure}";
        let log = "<use a.pdf>\nRequested size: 100.0pt x 100.0pt.\n\
                   <use b.pdf>\nRequested size: 100.0pt x 100.0pt.\n\
                   <use c.pdf>\nRequested size: 100.0pt x 100.0pt.";
        let report = run(source, log);
        let ordinals: Vec<usize> = report.records.iter().map(|r| r.figure).collect();
        assert_eq!(ordinals, [1, 2, 2]);
    }
}
