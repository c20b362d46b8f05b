//! TypeScript file generators.

mod api_ts;
mod types_ts;

pub use api_ts::{ApiTs, RequestArg};
pub use types_ts::TypesTs;

/// Banner written at the top of every generated file.
pub const GENERATED_HEADER: &str = "// Generated by yapit - DO NOT EDIT";
