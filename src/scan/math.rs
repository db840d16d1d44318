//! Displayed-equation counting.

use crate::config::EstimateOptions;
use crate::model::{DocumentSource, MathCount};

use super::envs::{count_breaks, find_environments};

/// Block math environments recognized by the scanner: the equation
/// family, the alignment family and the array family, plus their
/// starred variants.
pub const MATH_ENVIRONMENTS: &[&str] = &[
    "equation", "align", "alignat", "flalign", "eqnarray", "gather", "multline", "array",
];

/// Tally displayed math: environment lines plus standalone displays.
///
/// An environment with no internal `\\` is one line; each break adds a
/// line. A `$$ ... $$` pair or a `\[ ... \]` display counts as exactly
/// one line regardless of its content. Malformed break patterns are
/// counted on the markers present, with no validation of the math.
pub fn count_displayed_math(source: &DocumentSource, options: &EstimateOptions) -> MathCount {
    let text = source.text();

    let mut lines = 0usize;
    let envs = find_environments(text, MATH_ENVIRONMENTS);
    for env in &envs {
        lines += count_breaks(env.body) + 1;
    }

    let standalone = text.matches("$$").count() / 2 + count_bracket_displays(text);
    lines += standalone;

    log::debug!(
        "displayed math: {} environments, {} standalone displays, {} lines",
        envs.len(),
        standalone,
        lines
    );

    MathCount {
        lines,
        words: f64::from(options.math_words_per_line) * lines as f64,
    }
}

/// Counts `\[` display openers.
///
/// A `[` opens a display only behind an odd run of backslashes:
/// `\[` does, the spacing argument in `\\[4pt]` does not.
fn count_bracket_displays(text: &str) -> usize {
    let mut run = 0usize;
    let mut opens = 0usize;
    for b in text.bytes() {
        match b {
            b'\\' => run += 1,
            b'[' => {
                if run % 2 == 1 {
                    opens += 1;
                }
                run = 0;
            }
            _ => run = 0,
        }
    }
    opens
}
