//! Core operations.
//!
//! This module contains the business logic for yapit commands,
//! separated from CLI argument parsing and output rendering.

pub mod batch;
pub mod check;
pub mod generate;

pub use batch::batch;
pub use check::check;
pub use generate::{WriteMode, generate};
