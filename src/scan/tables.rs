//! Table row counting.

use regex::Regex;

use crate::config::EstimateOptions;
use crate::model::{DocumentSource, TableCount};

use super::envs::{count_breaks, find_environments};

/// Tally tabular environments and their data rows.
///
/// Row terminators are `\\` and `\tabularnewline`. A `\hline` closing a
/// line marks a rule, not a row, and a terminator at the very end of
/// the body closes the last row instead of opening a new one; both are
/// corrected for. The first row has no terminator of its own, hence
/// the final `+ 1`.
pub fn count_tables(source: &DocumentSource, options: &EstimateOptions) -> TableCount {
    let envs = find_environments(source.text(), &["tabular"]);

    let mut rows = 0usize;
    for env in &envs {
        rows += count_rows(env.body);
    }

    log::debug!("tables: {} environments, {} rows", envs.len(), rows);

    let tables = envs.len();
    TableCount {
        tables,
        rows,
        words: tables as f64 * options.table_words_base + rows as f64 * options.table_words_per_row,
    }
}

fn count_rows(body: &str) -> usize {
    let terminators = count_breaks(body) + body.matches(r"\tabularnewline").count();

    let rule_at_eol = Regex::new(r"(?m)\\hline[ \t]*$").unwrap();
    let rules = rule_at_eol.find_iter(body).count();

    let trimmed = body.trim_end();
    let trailing = usize::from(
        trimmed.ends_with(r"\\") || trimmed.ends_with(r"\tabularnewline"),
    );

    (terminators + 1).saturating_sub(rules + trailing)
}
