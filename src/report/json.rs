//! JSON breakdown rendering.

use crate::error::{Error, Result};
use crate::model::Breakdown;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a breakdown to JSON.
pub fn to_json(breakdown: &Breakdown, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(breakdown),
        JsonFormat::Compact => serde_json::to_string(breakdown),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
