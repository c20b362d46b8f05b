use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for yapit-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `needle` if it occurs in the source.
    pub fn validation_error(&self, message: impl Into<String>, needle: &str) -> Box<Error> {
        let span = self
            .src
            .find(needle)
            .map(|offset| SourceSpan::from((offset, needle.len())));
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

/// Configuration errors.
///
/// All of these are fatal: generation never starts with an incomplete
/// invocation.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass --config or create a yapit.toml in the current directory"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse yapit.toml")]
    #[diagnostic(code(yapit::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(yapit::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("missing required setting '{field}'")]
    #[diagnostic(code(yapit::missing_config), help("{hint}"))]
    Missing { field: &'static str, hint: String },

    #[error("invalid value for '{field}': {reason}")]
    #[diagnostic(code(yapit::invalid_config))]
    Invalid { field: &'static str, reason: String },
}

impl Error {
    /// Create a missing-setting error.
    pub fn missing(field: &'static str, hint: impl Into<String>) -> Box<Self> {
        Box::new(Error::Missing {
            field,
            hint: hint.into(),
        })
    }

    /// Create an invalid-setting error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::Invalid {
            field,
            reason: reason.into(),
        })
    }
}

/// The schema source answered with a nonzero error code.
///
/// Displays the upstream message unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UpstreamError {
    pub code: i64,
    pub message: String,
}
