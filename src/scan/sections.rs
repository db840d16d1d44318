//! Abstract section extraction.

use crate::error::{Error, Result};
use crate::model::DocumentSource;

use super::envs::find_environments;

/// Character length of the first abstract region.
///
/// Internal line breaks are removed before counting, and the region is
/// trimmed, so the figure reflects the abstract's visible text. The
/// abstract is reported separately and never enters the total.
pub fn abstract_length(source: &DocumentSource) -> Result<usize> {
    let envs = find_environments(source.text(), &["abstract"]);
    let body = envs
        .first()
        .ok_or_else(|| Error::SectionNotFound("abstract".to_string()))?
        .body;

    let joined: String = body.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    Ok(joined.trim().chars().count())
}
