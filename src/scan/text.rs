//! Text word counting through the external collaborator.

use std::io::Write;

use regex::Regex;

use crate::config::EstimateOptions;
use crate::error::{Error, Result};
use crate::external::{CounterOptions, SumWeights, WordCounter};
use crate::model::{DocumentSource, TextCount};

/// Words in body text, headers, captions and inline equations.
///
/// The comment-stripped source is written to a scratch file and handed
/// to the collaborator; displayed equations and the excluded sections
/// contribute nothing here (they are weighted elsewhere or dropped).
pub fn count_text_words(
    source: &DocumentSource,
    counter: &dyn WordCounter,
    options: &EstimateOptions,
) -> Result<TextCount> {
    let mut scratch = tempfile::Builder::new()
        .prefix("texlength-")
        .suffix(".tex")
        .tempfile()?;
    scratch.write_all(source.text().as_bytes())?;
    scratch.flush()?;

    let counter_options = CounterOptions {
        utf8: true,
        excluded_sections: options.excluded_sections.clone(),
        weights: SumWeights::publisher_default(),
    };
    let summary = counter.count(scratch.path(), &counter_options)?;
    parse_sum(&summary)
}

/// Pulls the aggregate figure out of the collaborator's summary.
fn parse_sum(summary: &str) -> Result<TextCount> {
    let re = Regex::new(r"Sum count:\s*(\d+)").unwrap();
    let caps = re.captures(summary).ok_or_else(|| {
        Error::UnparseableOutput("missing \"Sum count:\" line in summary".to_string())
    })?;
    let words = caps[1]
        .parse::<u64>()
        .map_err(|e| Error::UnparseableOutput(format!("bad sum figure: {}", e)))?;
    Ok(TextCount { words })
}
