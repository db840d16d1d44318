//! Counting collaborator: aggregate word counts for the manuscript text.

use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Category weights for the collaborator's aggregate sum, in its
/// text / headers / captions / header-count / float-count /
/// inline-math / displayed-math order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumWeights(pub [u32; 7]);

impl SumWeights {
    /// The publisher accounting selection: text, headers, captions and
    /// inline equations count; displayed equations are weighted
    /// separately by the math scanner and excluded here.
    pub fn publisher_default() -> Self {
        SumWeights([1, 1, 1, 0, 0, 1, 0])
    }

    fn to_arg(self) -> String {
        self.0
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Options passed to the counting collaborator.
#[derive(Debug, Clone)]
pub struct CounterOptions {
    /// Treat the source as UTF-8.
    pub utf8: bool,

    /// Section names zeroed out through a generated rule file.
    pub excluded_sections: Vec<String>,

    /// Category weights for the aggregate sum.
    pub weights: SumWeights,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            utf8: true,
            excluded_sections: vec!["abstract".to_string(), "acknowledgments".to_string()],
            weights: SumWeights::publisher_default(),
        }
    }
}

/// A word counter that can tally a manuscript.
pub trait WordCounter {
    /// Run the collaborator over `source` and return its raw summary
    /// output. Parsing the summary is the caller's job.
    fn count(&self, source: &Path, options: &CounterOptions) -> Result<String>;
}

/// Counter backed by a `texcount`-compatible executable on `PATH`.
pub struct TexcountRunner {
    program: String,
}

impl TexcountRunner {
    /// Use `texcount`.
    pub fn new() -> Self {
        Self::with_program("texcount")
    }

    /// Use a specific executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn write_rule_file(options: &CounterOptions) -> io::Result<NamedTempFile> {
        let mut rules = NamedTempFile::new()?;
        for section in &options.excluded_sections {
            writeln!(rules, "%TC:envir {} [] ignore", section)?;
        }
        rules.flush()?;
        Ok(rules)
    }
}

impl Default for TexcountRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl WordCounter for TexcountRunner {
    fn count(&self, source: &Path, options: &CounterOptions) -> Result<String> {
        // The rule file must outlive the child process; it is removed
        // when `rules` drops at the end of this call.
        let rules = Self::write_rule_file(options)?;

        let mut cmd = Command::new(&self.program);
        if options.utf8 {
            cmd.arg("-utf8");
        }
        cmd.arg(format!("-sum={}", options.weights.to_arg()))
            .arg("-total")
            .arg(format!("-opt={}", rules.path().display()))
            .arg(source);

        log::debug!("running {} on {}", self.program, source.display());

        let output = cmd.output().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::CounterUnavailable(self.program.clone()),
            _ => Error::Io(e),
        })?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
