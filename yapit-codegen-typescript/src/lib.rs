//! TypeScript code generator for yapit.
//!
//! Turns one [`Endpoint`](yapit_ir::Endpoint) into two documents:
//!
//! - `types.ts` - request and response declarations as exported interfaces,
//!   nested types ahead of their containers
//! - `api.ts` - an axios request function typed with those declarations
//!
//! # Usage
//!
//! ```
//! use yapit_codegen_typescript::{GenerateOptions, Generator};
//! use yapit_ir::{Endpoint, HttpMethod, Payload};
//!
//! let endpoint = Endpoint {
//!     title: "Ping".to_string(),
//!     path: "/health/ping".to_string(),
//!     method: HttpMethod::Get,
//!     request: Payload::None,
//!     response: Payload::None,
//! };
//!
//! let artifacts = Generator::new(GenerateOptions::default()).generate(&endpoint)?;
//! assert_eq!(artifacts.function_name, "ping");
//! assert_eq!(artifacts.response_type, "HealthPingGETRes");
//! # Ok::<(), eyre::Report>(())
//! ```

mod code_file;
mod generator;
mod naming;
mod renderer;
mod type_mapper;

pub mod ast;
pub mod files;

pub use code_file::CodeFile;
pub use generator::{Artifacts, GenerateOptions, Generator};
pub use naming::TS_NAMING;
pub use renderer::InterfaceRenderer;
pub use type_mapper::TypeScriptTypeMapper;
