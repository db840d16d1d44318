//! # texlength
//!
//! Estimate the effective length of a LaTeX manuscript under a
//! publisher's length-accounting rules.
//!
//! The estimate combines five contributions: literal words in text,
//! headers, captions and inline equations (counted by an external
//! `texcount`-compatible tool), displayed-equation lines, table overhead
//! and row penalties, and per-image word-equivalents derived from each
//! figure's aspect ratio as recorded in the compilation log. The
//! abstract is measured but excluded from the total.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> texlength::Result<()> {
//!     // Uses pdflatex and texcount from PATH when needed.
//!     let breakdown = texlength::estimate_file("paper")?;
//!     print!("{}", texlength::to_text(&breakdown));
//!     Ok(())
//! }
//! ```
//!
//! ## Custom weights and collaborators
//!
//! ```no_run
//! use texlength::{EstimateOptions, Texlength};
//!
//! let options = EstimateOptions::new()
//!     .with_math_words_per_line(12)
//!     .with_word_limit(3750);
//! let breakdown = Texlength::new()
//!     .with_options(options)
//!     .estimate("paper.tex")?;
//! # Ok::<(), texlength::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod loader;
pub mod model;
pub mod report;
pub mod scan;

// Re-export commonly used types
pub use config::EstimateOptions;
pub use error::{Error, Result};
pub use external::{
    CompileOutput, Compiler, CounterOptions, LatexRunner, SumWeights, TexcountRunner, WordCounter,
};
pub use model::{
    Breakdown, ColumnMode, CompilationLog, DocumentSource, ImageRecord, ImageReport, MathCount,
    TableCount, TextCount,
};
pub use report::{to_json, to_text, JsonFormat};

/// Estimate a manuscript with default options and the subprocess-backed
/// collaborators.
///
/// # Arguments
///
/// * `id` - Document identifier, with or without the `.tex` suffix
pub fn estimate_file(id: &str) -> Result<Breakdown> {
    Texlength::new().estimate(id)
}

/// Estimate a manuscript with custom options.
pub fn estimate_file_with_options(id: &str, options: EstimateOptions) -> Result<Breakdown> {
    Texlength::new().with_options(options).estimate(id)
}

/// Builder for configuring and running the estimation pipeline.
///
/// # Example
///
/// ```no_run
/// use texlength::{EstimateOptions, Texlength};
///
/// let breakdown = Texlength::new()
///     .with_options(EstimateOptions::new().with_word_limit(3750))
///     .estimate("paper")?;
/// # Ok::<(), texlength::Error>(())
/// ```
pub struct Texlength {
    options: EstimateOptions,
    compiler: Option<Box<dyn Compiler>>,
    counter: Option<Box<dyn WordCounter>>,
}

impl Texlength {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: EstimateOptions::default(),
            compiler: None,
            counter: None,
        }
    }

    /// Replace the estimation options.
    pub fn with_options(mut self, options: EstimateOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a custom compiler collaborator instead of `pdflatex`.
    pub fn with_compiler(mut self, compiler: impl Compiler + 'static) -> Self {
        self.compiler = Some(Box::new(compiler));
        self
    }

    /// Use a custom counting collaborator instead of `texcount`.
    pub fn with_counter(mut self, counter: impl WordCounter + 'static) -> Self {
        self.counter = Some(Box::new(counter));
        self
    }

    /// Run the pipeline against a document identifier.
    pub fn estimate(&self, id: &str) -> Result<Breakdown> {
        let default_compiler;
        let compiler: &dyn Compiler = match &self.compiler {
            Some(compiler) => compiler.as_ref(),
            None => {
                default_compiler = LatexRunner::new(self.options.compile_timeout);
                &default_compiler
            }
        };

        let default_counter;
        let counter: &dyn WordCounter = match &self.counter {
            Some(counter) => counter.as_ref(),
            None => {
                default_counter = TexcountRunner::new();
                &default_counter
            }
        };

        run_pipeline(id, compiler, counter, &self.options)
    }
}

impl Default for Texlength {
    fn default() -> Self {
        Self::new()
    }
}

/// The sequential pipeline: load, extract, aggregate.
///
/// A missing abstract degrades to a warning; everything else an
/// extractor raises is fatal, since the remaining contributions could
/// not make up for a missing text count or source.
fn run_pipeline(
    id: &str,
    compiler: &dyn Compiler,
    counter: &dyn WordCounter,
    options: &EstimateOptions,
) -> Result<Breakdown> {
    let (source, log) = loader::load(id, compiler)?;

    let mut warnings = Vec::new();
    let abstract_chars = match scan::abstract_length(&source) {
        Ok(chars) => Some(chars),
        Err(Error::SectionNotFound(name)) => {
            log::warn!("no {} section found", name);
            warnings.push(format!("no {} section found", name));
            None
        }
        Err(e) => return Err(e),
    };

    let text = scan::count_text_words(&source, counter, options)?;
    let math = scan::count_displayed_math(&source, options);
    let tables = scan::count_tables(&source, options);
    let images = scan::estimate_images(&source, &log);

    Ok(report::aggregate(
        text,
        abstract_chars,
        math,
        tables,
        images,
        warnings,
        options,
    ))
}
