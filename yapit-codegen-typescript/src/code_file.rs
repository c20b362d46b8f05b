//! CodeFile abstraction for structured TypeScript file generation.

use yapit_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::Import;

/// A structured representation of a TypeScript file.
///
/// Imports come first, then body elements separated by blank lines.
///
/// # Example
///
/// ```
/// use yapit_codegen_typescript::{CodeFile, ast::{Fn, Import}};
///
/// let code = CodeFile::new()
///     .import(Import::new("axios").default("axios"))
///     .add(Fn::new("ping").async_())
///     .render();
///
/// assert_eq!(
///     code,
///     "import axios from 'axios';\n\nexport async function ping() {\n}\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Fn, Interface};

    #[test]
    fn test_empty_file() {
        assert_eq!(CodeFile::new().render(), "");
    }

    #[test]
    fn test_body_elements_are_separated() {
        let code = CodeFile::new()
            .add(Interface::new("A"))
            .add(Interface::new("B"))
            .render();
        assert_eq!(code, "export interface A {}\n\nexport interface B {}\n");
    }

    #[test]
    fn test_imports_then_body() {
        let code = CodeFile::new()
            .import(Import::new("./types").named("A").type_only())
            .add(Fn::new("a").body_line("return 1;"))
            .render();
        assert_eq!(
            code,
            "import type { A } from './types';\n\nexport function a() {\n  return 1;\n}\n"
        );
    }
}
