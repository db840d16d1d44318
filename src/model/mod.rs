//! Data model for the estimation pipeline.
//!
//! These types carry the loaded inputs (source text and compiler log)
//! and the structured counts each extractor reports. Everything here is
//! immutable once built; the extractors only read.

mod breakdown;
mod image;
mod source;

pub use breakdown::{Breakdown, MathCount, TableCount, TextCount};
pub use image::{ColumnMode, ImageRecord, ImageReport};
pub use source::{CompilationLog, DocumentSource};
