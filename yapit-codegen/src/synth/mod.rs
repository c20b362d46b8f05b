//! Schema-to-declaration synthesis.
//!
//! - [`resolver`] maps one property to a [`TypeRef`](yapit_ir::TypeRef)
//! - [`NameAllocator`] derives and issues names for one run
//! - [`walker`] turns a payload into a [`DeclarationTree`]
//! - [`emitter`] renders the tree nested-first
//!
//! The walker drives the resolver and the allocator; the emitter consumes
//! the walker's output. The allocator is passed explicitly through every
//! call and is never shared between runs.

mod allocator;
pub mod emitter;
pub mod resolver;
pub mod walker;

pub use allocator::{NameAllocator, NamingError, PLACEHOLDER_FUNCTION};
pub use emitter::{DeclarationRenderer, emission_order, emit};
pub use resolver::{PropertySpec, Resolution, Tier, resolve};
pub use walker::{DeclarationTree, walk_parameters, walk_payload, walk_schema};
