//! Inputs of a yapit run.
//!
//! - [`InterfaceResponse`]: the schema source's interface document, lowered to
//!   [`yapit_ir::Endpoint`] with [`InterfaceDetail::to_endpoint`]
//! - [`Config`]: `yapit.toml`, resolved into [`Invocation`]s
//! - [`NamingConfig`]: the run's role-suffix and collision policies

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod interface;
mod lower;
mod naming;

pub use config::{
    Config, DEFAULT_RETRIES, DEFAULT_TIMEOUT_SECS, InterfaceEntry, Invocation, InvocationBuilder,
    SourceConfig, SourceSettings,
};
pub use error::{Error, Result, SourceContext, UpstreamError};
pub use interface::{InterfaceDetail, InterfaceResponse, RawParameter};
pub use lower::schema_from_value;
pub use naming::{CollisionPolicy, NamingConfig, Role, RoleSuffix};
