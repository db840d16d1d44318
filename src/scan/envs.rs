//! Shared scanner for paired `\begin{...}` / `\end{...}` environments.

use regex::Regex;

/// One environment occurrence in the source.
#[derive(Debug, Clone)]
pub struct Environment<'a> {
    /// Environment name without the star.
    pub name: &'a str,

    /// Whether the starred variant was used.
    pub starred: bool,

    /// Text between the begin and end markers.
    pub body: &'a str,
}

/// Finds every occurrence of the named environments, in document order.
///
/// A begin marker is paired with the nearest following end marker of the
/// same name (and star). Environments nested inside themselves are not
/// handled; an unterminated begin is skipped with a warning.
pub fn find_environments<'a>(text: &'a str, names: &[&str]) -> Vec<Environment<'a>> {
    let alternation = names
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");
    let begin = Regex::new(&format!(r"\\begin\{{({})(\*?)\}}", alternation)).unwrap();

    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(caps) = begin.captures(&text[pos..]) {
        let marker = caps.get(0).unwrap();
        let name_match = caps.get(1).unwrap();
        let starred = !caps[2].is_empty();
        let body_start = pos + marker.end();

        let end_marker = format!(
            "\\end{{{}{}}}",
            name_match.as_str(),
            if starred { "*" } else { "" }
        );
        match text[body_start..].find(&end_marker) {
            Some(offset) => {
                // Re-borrow the name from the full text so the slice is
                // tied to `text`, not to the per-iteration subslice.
                let name_start = pos + name_match.start();
                found.push(Environment {
                    name: &text[name_start..name_start + name_match.len()],
                    starred,
                    body: &text[body_start..body_start + offset],
                });
                pos = body_start + offset + end_marker.len();
            }
            None => {
                log::warn!("unterminated {} environment", name_match.as_str());
                pos = body_start;
            }
        }
    }
    found
}

/// Counts `\\` line/row breaks in `text`.
///
/// Breaks are backslash pairs, so longer runs are counted pairwise and a
/// control word like `\alpha` never contributes.
pub(crate) fn count_breaks(text: &str) -> usize {
    let mut run = 0usize;
    let mut breaks = 0usize;
    for b in text.bytes() {
        if b == b'\\' {
            run += 1;
        } else {
            breaks += run / 2;
            run = 0;
        }
    }
    breaks + run / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_single_environment() {
        let text = r"\begin{equation} e = mc^2 \end{equation}";
        let envs = find_environments(text, &["equation"]);
        assert_eq!(envs.len(), 1);
        assert_eq!(envs[0].name, "equation");
        assert!(!envs[0].starred);
        assert_eq!(envs[0].body.trim(), "e = mc^2");
    }

    #[test]
    fn test_starred_variant() {
        let text = r"\begin{figure*}wide\end{figure*}\begin{figure}narrow\end{figure}";
        let envs = find_environments(text, &["figure"]);
        assert_eq!(envs.len(), 2);
        assert!(envs[0].starred);
        assert_eq!(envs[0].body, "wide");
        assert!(!envs[1].starred);
        assert_eq!(envs[1].body, "narrow");
    }

    #[test]
    fn test_document_order_across_names() {
        let text = r"\begin{align}a\end{align}\begin{equation}b\end{equation}\begin{align}c\end{align}";
        let envs = find_environments(text, &["equation", "align"]);
        let names: Vec<&str> = envs.iter().map(|e| e.name).collect();
        assert_eq!(names, ["align", "equation", "align"]);
    }

    #[test]
    fn test_unterminated_environment_skipped() {
        let text = r"\begin{equation} lost \begin{align}a\end{align}";
        let envs = find_environments(text, &["equation", "align"]);
        assert_eq!(envs.len(), 1);
        assert_eq!(envs[0].name, "align");
    }

    #[test]
    fn test_star_mismatch_not_paired() {
        // `\end{align}` does not close `\begin{align*}`.
        let text = r"\begin{align*}a\end{align}";
        let envs = find_environments(text, &["align"]);
        assert!(envs.is_empty());
    }

    #[test]
    fn test_count_breaks() {
        assert_eq!(count_breaks(r"a \\ b \\ c"), 2);
        assert_eq!(count_breaks(r"no breaks \alpha \beta"), 0);
        assert_eq!(count_breaks(r"a \\"), 1);
        assert_eq!(count_breaks(""), 0);
    }

    #[test]
    fn test_count_breaks_with_spacing_arg() {
        // `\\[4pt]` is still one break.
        assert_eq!(count_breaks(r"a \\[4pt] b"), 1);
    }
}
