//! Language-agnostic code generation for yapit.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (TypeMapper, NamingConvention)
//! - [`synth`] - Declaration synthesis (resolver, allocator, walker, emitter)
//! - [`diagnostic`] - Issues recovered from during synthesis

pub mod builder;
pub mod diagnostic;
pub mod language;
pub mod synth;

pub use diagnostic::{Diagnostic, Phase, Severity};
