//! Loaded document inputs.

/// Comment-stripped manuscript source text.
///
/// Everything from an unescaped `%` to the end of its line is removed at
/// construction; `\%` survives. Line structure is preserved so that
/// line-anchored scans (trailing `\hline` detection) keep working.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    text: String,
}

impl DocumentSource {
    /// Build a source from raw manuscript text, stripping comments.
    pub fn from_raw(raw: &str) -> Self {
        let text = raw
            .lines()
            .map(strip_comment)
            .collect::<Vec<_>>()
            .join("\n");
        Self { text }
    }

    /// The comment-stripped text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Metadata log produced by the compiler collaborator.
#[derive(Debug, Clone)]
pub struct CompilationLog {
    text: String,
}

impl CompilationLog {
    /// Wrap raw log text.
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// The full log text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Truncates `line` at the first `%` that is not escaped by a backslash.
///
/// A `%` is escaped only when preceded by an odd run of backslashes:
/// `\%` is a literal percent, `\\%` is a line break followed by a comment.
fn strip_comment(line: &str) -> &str {
    let mut backslashes = 0usize;
    for (i, b) in line.bytes().enumerate() {
        match b {
            b'\\' => backslashes += 1,
            b'%' if backslashes % 2 == 0 => return &line[..i],
            _ => backslashes = 0,
        }
    }
    line
}
