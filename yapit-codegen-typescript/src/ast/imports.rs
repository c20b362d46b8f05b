//! TypeScript import builder.

use yapit_codegen::builder::{CodeFragment, Renderable};

/// Builder for TypeScript import statements.
///
/// Module specifiers are single-quoted.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export. Repeated names are ignored.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.named.contains(&name) {
            self.named.push(name);
        }
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };

        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {}{} from '{}';", type_kw, def, self.from),
            (Some(def), false) => format!(
                "import {}{}, {{ {} }} from '{}';",
                type_kw,
                def,
                self.named.join(", "),
                self.from
            ),
            (None, false) => format!(
                "import {}{{ {} }} from '{}';",
                type_kw,
                self.named.join(", "),
                self.from
            ),
            (None, true) => format!("import '{}';", self.from),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}
