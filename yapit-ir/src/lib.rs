//! Intermediate representation types for the yapit generator.
//!
//! This crate provides the data model shared across the yapit pipeline.
//!
//! # Architecture
//!
//! ```text
//! YApi document (JSON) → yapit-manifest (lowering) → yapit-ir → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no TypeScript-specific concerns)
//! - Lenient (every schema attribute is optional)
//! - Self-contained (no wire-format dependencies)

mod endpoint;
mod schema;
mod types;

pub use endpoint::{Endpoint, HttpMethod, Parameter, Payload};
pub use schema::{Example, SchemaKind, SchemaNode};
pub use types::{Field, ScalarKind, TypeDeclaration, TypeRef};
