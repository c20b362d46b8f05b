//! Language-specific abstractions.
//!
//! - [`TypeMapper`] - Trait for mapping [`TypeRef`](yapit_ir::TypeRef)s to language types
//! - [`NamingConvention`] - Language-specific naming rules

mod naming;
mod type_mapper;

pub use naming::NamingConvention;
pub use type_mapper::TypeMapper;
