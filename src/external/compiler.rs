//! Compiler collaborator: produces the metadata log for a manuscript.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::error::{Error, Result};

/// Outcome of a compiler invocation.
///
/// A non-zero exit is not an `Err` here: the caller inspects `success`
/// and decides what to surface, since the log text is wanted either way.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// Whether the compiler exited with status zero.
    pub success: bool,

    /// The compiler's log output (its own `.log` file when present,
    /// captured console output otherwise).
    pub log: String,
}

/// A document compiler that can produce a metadata log.
pub trait Compiler {
    /// Compile `source`, routing all outputs into `out_dir`, and return
    /// the exit status together with the produced log text.
    fn compile(&self, source: &Path, out_dir: &Path) -> Result<CompileOutput>;
}

/// Compiler backed by a LaTeX executable on `PATH`.
pub struct LatexRunner {
    program: String,
    timeout: Duration,
}

impl LatexRunner {
    /// Use `pdflatex` with the given time limit.
    pub fn new(timeout: Duration) -> Self {
        Self::with_program("pdflatex", timeout)
    }

    /// Use a specific executable (for example `latex` or `lualatex`).
    pub fn with_program(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

impl Compiler for LatexRunner {
    fn compile(&self, source: &Path, out_dir: &Path) -> Result<CompileOutput> {
        // Console output goes to a file: LaTeX chatter can outgrow a pipe
        // buffer, and the child must never block on us draining it.
        let console_path = out_dir.join("console.out");
        let console = fs::File::create(&console_path)?;

        log::debug!(
            "compiling {} with {} (limit {:?})",
            source.display(),
            self.program,
            self.timeout
        );

        let mut child = Command::new(&self.program)
            .arg("-interaction=nonstopmode")
            .arg("-halt-on-error")
            .arg(format!("-output-directory={}", out_dir.display()))
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::from(console))
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::CompilationFailed {
                log: format!("failed to invoke {}: {}", self.program, e),
            })?;

        let status = match child.wait_timeout(self.timeout)? {
            Some(status) => status,
            None => {
                child.kill()?;
                child.wait()?;
                return Err(Error::CompilationTimeout(self.timeout.as_secs()));
            }
        };

        let stem = source.file_stem().unwrap_or_default();
        let log_path = out_dir.join(stem).with_extension("log");
        let log = fs::read_to_string(&log_path)
            .or_else(|_| fs::read_to_string(&console_path))
            .unwrap_or_default();

        Ok(CompileOutput {
            success: status.success(),
            log,
        })
    }
}
