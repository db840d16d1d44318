//! External collaborator interfaces.
//!
//! The pipeline treats the LaTeX compiler and the word-counting tool as
//! black boxes behind traits so tests can substitute canned
//! implementations. The default implementations shell out to executables
//! found on `PATH`.

mod compiler;
mod counter;

pub use compiler::{CompileOutput, Compiler, LatexRunner};
pub use counter::{CounterOptions, SumWeights, TexcountRunner, WordCounter};
