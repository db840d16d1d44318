//! Source and compilation-log loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::external::Compiler;
use crate::model::{CompilationLog, DocumentSource};

/// Resolve a document identifier and load its source and metadata log.
///
/// A log sitting next to the source is preferred; otherwise the
/// compiler collaborator is run against a scratch directory that is
/// removed again on every exit path, including failures.
pub fn load(id: &str, compiler: &dyn Compiler) -> Result<(DocumentSource, CompilationLog)> {
    let source_path = resolve_source(id)?;
    let raw = fs::read_to_string(&source_path)?;
    let source = DocumentSource::from_raw(&raw);
    let log = load_or_compile_log(&source_path, compiler)?;
    Ok((source, log))
}

/// Resolve an identifier to the manuscript source path.
///
/// The identifier may carry the `.tex` suffix or omit it.
pub fn resolve_source(id: &str) -> Result<PathBuf> {
    let direct = PathBuf::from(id);
    if direct.is_file() {
        return Ok(direct);
    }
    if direct.extension().map_or(true, |ext| ext != "tex") {
        let with_suffix = PathBuf::from(format!("{}.tex", id));
        if with_suffix.is_file() {
            return Ok(with_suffix);
        }
    }
    Err(Error::NotFound(direct))
}

fn load_or_compile_log(source: &Path, compiler: &dyn Compiler) -> Result<CompilationLog> {
    let sibling = source.with_extension("log");
    if sibling.is_file() {
        log::debug!("using existing compilation log {}", sibling.display());
        return Ok(CompilationLog::new(fs::read_to_string(&sibling)?));
    }

    // Scratch directory lives exactly as long as this call.
    let scratch = tempfile::tempdir()?;
    log::debug!(
        "no log next to {}, compiling into {}",
        source.display(),
        scratch.path().display()
    );

    let output = compiler.compile(source, scratch.path())?;
    if !output.success {
        return Err(Error::CompilationFailed { log: output.log });
    }
    Ok(CompilationLog::new(output.log))
}
