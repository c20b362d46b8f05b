//! TypeScript interface builder.

use yapit_codegen::builder::{CodeFragment, Renderable};
use yapit_core::is_identifier;

/// Render a single-quoted string literal.
pub fn string_literal(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Render an object key, quoting it when it is not a plain identifier.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// A field in a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub doc: Option<String>,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            doc: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let optional = if self.optional { "?" } else { "" };
        let mut fragments = Vec::with_capacity(2);
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.as_str()));
        }
        fragments.push(CodeFragment::line(format!(
            "{}{}: {};",
            property_key(&self.name),
            optional,
            self.ty
        )));
        fragments
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a field with full configuration.
    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.as_str()));
        }

        if self.fields.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "export interface {} {{}}",
                self.name
            )));
        } else {
            fragments.push(CodeFragment::block(
                format!("export interface {} {{", self.name),
                self.fields
                    .iter()
                    .flat_map(InterfaceField::to_fragments)
                    .collect(),
                Some("}".to_string()),
            ));
        }
        fragments
    }
}
