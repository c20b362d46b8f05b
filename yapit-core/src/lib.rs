//! Core utilities and types for the yapit generator.
//!
//! This crate provides fundamental helpers used across the yapit
//! crates: identifier case conversion and generated-file writing.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// String utilities
pub use utils::{
    capitalize_first, capitalize_words, is_ident_char, is_identifier, lowercase_first, to_camel_case,
    to_pascal_case,
};
