//! types.ts generator.

use yapit_codegen::{
    builder::CodeBuilder,
    synth::{DeclarationTree, emit},
};
use yapit_ir::HttpMethod;

use crate::renderer::InterfaceRenderer;

/// The type-declaration document for one endpoint.
pub struct TypesTs<'a> {
    pub title: &'a str,
    pub path: &'a str,
    pub method: HttpMethod,
    /// Request declarations (if any) then response declarations.
    pub sections: Vec<&'a DeclarationTree>,
}

impl TypesTs<'_> {
    pub const FILE_NAME: &'static str = "types.ts";

    fn header(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3);
        if !self.title.trim().is_empty() {
            lines.push(self.title.trim().to_string());
        }
        lines.push(format!("@path {}", self.path));
        lines.push(format!("@method {}", self.method));
        lines
    }

    pub fn render(&self) -> String {
        let renderer = InterfaceRenderer::new();
        let mut builder = CodeBuilder::typescript();
        builder.push_jsdoc_block(&self.header());

        for tree in &self.sections {
            builder.push_blank();
            emit(tree, &renderer, &mut builder);
        }

        builder.build()
    }
}
