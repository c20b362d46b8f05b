//! Report data structures for commands.
//!
//! Operations build reports; commands render them to an [`Output`].

mod batch;
mod check;
mod generate;
mod output;

pub use batch::{BatchFailure, BatchReport};
pub use check::{CheckReport, CheckedInterface};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};
#[cfg(test)]
pub use output::RecordingOutput;
