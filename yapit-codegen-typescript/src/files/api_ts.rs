//! api.ts generator.

use yapit_ir::HttpMethod;

use crate::{
    ast::{Fn, Import, Param, string_literal},
    code_file::CodeFile,
};

/// How the request payload is passed to the client call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestArg {
    /// No request payload; the function takes no arguments.
    None,
    /// Sent as the request body (JSON schema or form parameters).
    Body(String),
    /// Sent as query-string parameters.
    Query(String),
}

impl RequestArg {
    pub fn type_name(&self) -> Option<&str> {
        match self {
            RequestArg::None => None,
            RequestArg::Body(name) | RequestArg::Query(name) => Some(name),
        }
    }
}

/// The request-function document for one endpoint.
pub struct ApiTs<'a> {
    pub title: &'a str,
    pub path: &'a str,
    pub method: HttpMethod,
    pub function_name: &'a str,
    /// URL passed to the client; usually `path` with a service prefix.
    pub url: &'a str,
    pub request: RequestArg,
    pub response_type: &'a str,
}

impl ApiTs<'_> {
    pub const FILE_NAME: &'static str = "api.ts";

    /// axios only takes a body argument for these methods.
    fn method_takes_body(&self) -> bool {
        matches!(
            self.method,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch
        )
    }

    fn call(&self) -> String {
        let url = string_literal(self.url);
        let args = match &self.request {
            RequestArg::None => url,
            RequestArg::Body(_) if self.method_takes_body() => format!("{url}, data"),
            RequestArg::Body(_) => format!("{url}, {{ data }}"),
            RequestArg::Query(_) => format!("{url}, {{ params }}"),
        };
        format!(
            "const response = await axios.{}<{}>({});",
            self.method.as_lower(),
            self.response_type,
            args
        )
    }

    fn function(&self) -> Fn {
        let mut function = Fn::new(self.function_name).async_();
        if !self.title.trim().is_empty() {
            function = function.doc(self.title.trim());
        }
        function = function
            .doc(format!("@description {}", self.path))
            .doc(format!("@method {}", self.method));

        function = match &self.request {
            RequestArg::None => function,
            RequestArg::Body(ty) => function.param(Param::new("data", ty)),
            RequestArg::Query(ty) => function.param(Param::new("params", ty)),
        };

        function
            .body_line(self.call())
            .body_line("return response.data;")
    }

    pub fn render(&self) -> String {
        let mut types = Import::new("./types").type_only();
        if let Some(request) = self.request.type_name() {
            types = types.named(request);
        }
        types = types.named(self.response_type);

        CodeFile::new()
            .import(Import::new("axios").default("axios"))
            .import(types)
            .add(self.function())
            .render()
    }
}
