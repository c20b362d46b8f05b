//! Async client for the schema source.
//!
//! Looks up an interface by id with a bounded per-request timeout and retries
//! transient failures (connect errors, timeouts, HTTP 5xx) a configured number
//! of times. A nonzero `errcode` is never retried.

mod client;
mod error;

pub use client::SchemaClient;
pub use error::SourceError;
