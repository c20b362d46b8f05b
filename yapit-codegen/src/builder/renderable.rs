//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes produce fragments; [`CodeBuilder`](super::CodeBuilder) turns
//! them into text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A single-line JSDoc comment (`/** text */`).
    JsDoc(String),
    /// A multi-line JSDoc comment, one entry per line.
    JsDocBlock(Vec<String>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create a JSDoc fragment, using the block form when `s` spans lines.
    pub fn jsdoc(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.contains('\n') {
            Self::JsDocBlock(s.lines().map(str::to_string).collect())
        } else {
            Self::JsDoc(s)
        }
    }

    pub fn jsdoc_block(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::JsDocBlock(lines.into_iter().map(Into::into).collect())
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
    }

    #[test]
    fn test_jsdoc_picks_block_for_multiline() {
        assert_eq!(
            CodeFragment::jsdoc("one line"),
            CodeFragment::JsDoc("one line".to_string())
        );
        assert_eq!(
            CodeFragment::jsdoc("first\nsecond"),
            CodeFragment::JsDocBlock(vec!["first".to_string(), "second".to_string()])
        );
    }
}
