//! TypeScript function builder.

use yapit_codegen::builder::{CodeFragment, Renderable};

/// A parameter in a TypeScript function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for exported TypeScript functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Vec<String>,
    is_async: bool,
    params: Vec<Param>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            is_async: false,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add a line to the JSDoc block above the function.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    fn format_signature(&self) -> String {
        let async_kw = if self.is_async { "async " } else { "" };

        let params_str = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");

        format!("export {}function {}({}) {{", async_kw, self.name, params_str)
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        match self.doc.as_slice() {
            [] => {}
            [single] => fragments.push(CodeFragment::jsdoc(single.clone())),
            lines => fragments.push(CodeFragment::jsdoc_block(lines.iter().cloned())),
        }

        fragments.push(CodeFragment::block(
            self.format_signature(),
            self.body.iter().cloned().map(CodeFragment::line).collect(),
            Some("}".to_string()),
        ));

        fragments
    }
}
