//! Source and log extractors.
//!
//! Each extractor reads the shared [`crate::model::DocumentSource`] /
//! [`crate::model::CompilationLog`] pair and returns its own structured
//! contribution; nothing here mutates shared state. The aggregation step
//! in [`crate::report`] sums the results.

mod envs;
mod images;
mod math;
mod sections;
mod tables;
mod text;

pub use envs::{find_environments, Environment};
pub use images::estimate_images;
pub use math::count_displayed_math;
pub use sections::abstract_length;
pub use tables::count_tables;
pub use text::count_text_words;
