//! Error types for the texlength library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for texlength operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while estimating manuscript length.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The manuscript source could not be located.
    #[error("Source file not found: {0}")]
    NotFound(PathBuf),

    /// The compiler collaborator exited with a non-zero status and no
    /// usable metadata log was produced.
    #[error("LaTeX compilation failed")]
    CompilationFailed {
        /// The compiler's own diagnostic output, surfaced verbatim.
        log: String,
    },

    /// The compiler collaborator ran past the configured time limit.
    #[error("LaTeX compilation timed out after {0} seconds")]
    CompilationTimeout(u64),

    /// A named document section is absent from the source.
    ///
    /// Non-fatal at the pipeline level: the section's contribution is
    /// reported as missing and estimation continues.
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// The counting collaborator could not be invoked.
    #[error("Word counter unavailable: {0}")]
    CounterUnavailable(String),

    /// The counting collaborator ran but its summary output lacked the
    /// expected aggregate figure.
    #[error("Unparseable counter output: {0}")]
    UnparseableOutput(String),

    /// Error rendering the breakdown report.
    #[error("Rendering error: {0}")]
    Render(String),
}
