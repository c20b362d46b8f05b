//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Indentation-aware text buffer that AST nodes render into.
///
/// # Example
///
/// ```
/// use yapit_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("export interface Foo {")
///     .push_indent()
///     .push_line("id: string;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "export interface Foo {\n  id: string;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a single-line JSDoc comment (mutable).
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(&escape_comment(text));
        self.buffer.push_str(" */\n");
        self
    }

    /// Add a multi-line JSDoc comment (mutable).
    pub fn push_jsdoc_block(&mut self, lines: &[String]) -> &mut Self {
        self.push_line("/**");
        for line in lines {
            let line = escape_comment(line);
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {line}"));
            }
        }
        self.push_line(" */")
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(&text);
            }
            CodeFragment::JsDocBlock(lines) => {
                self.push_jsdoc_block(&lines);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

/// Keep free text from closing the surrounding comment early.
fn escape_comment(text: &str) -> String {
    text.trim_end().replace("*/", "*\\/")
}
