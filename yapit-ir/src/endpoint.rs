//! Endpoint description as consumed by code generation.

use crate::schema::{Example, SchemaNode};

/// A query-string or form parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub required: bool,
    /// Declared type, lowercased, if the documentation gave one.
    pub declared_type: Option<String>,
    pub example: Option<Example>,
    pub description: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.declared_type = Some(ty.into());
        self
    }

    pub fn with_example(mut self, example: Example) -> Self {
        self.example = Some(example);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Where a request or response payload shape comes from.
///
/// The shape is decided once while lowering the upstream document, so code
/// generation never has to re-detect it.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The endpoint carries no payload in this direction.
    None,
    /// A JSON body described by a schema.
    Schema(SchemaNode),
    /// Query-string parameters.
    Query(Vec<Parameter>),
    /// Form body parameters.
    Form(Vec<Parameter>),
    /// A JSON body was declared but its schema could not be parsed.
    Malformed { reason: String },
}

impl Payload {
    /// Returns true if there is something to send or receive.
    pub fn is_present(&self) -> bool {
        !matches!(self, Payload::None)
    }

    /// Returns true when the payload travels in the query string.
    pub fn is_query(&self) -> bool {
        matches!(self, Payload::Query(_))
    }

    /// The parameter list of a query or form payload.
    pub fn parameters(&self) -> Option<&[Parameter]> {
        match self {
            Payload::Query(params) | Payload::Form(params) => Some(params),
            _ => None,
        }
    }
}

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    /// Parse a method name case-insensitively; unknown names fall back to GET.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "PATCH" => HttpMethod::Patch,
            "HEAD" => HttpMethod::Head,
            "OPTIONS" => HttpMethod::Options,
            _ => HttpMethod::Get,
        }
    }

    /// Uppercase method name, as used in type names.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// Lowercase method name, as used for client calls (`axios.post`).
    pub fn as_lower(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A documented API endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub title: String,
    pub path: String,
    pub method: HttpMethod,
    pub request: Payload,
    pub response: Payload,
}
