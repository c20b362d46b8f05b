//! Synthesized declaration types.

/// Scalar kinds a leaf can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Number,
    /// A 64-bit integer; may lose precision as a plain number.
    WideInteger,
    Boolean,
    /// Identifier-like values that are sent as either strings or numbers.
    StringOrNumber,
}

impl ScalarKind {
    /// Get the canonical name of this scalar.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Number => "number",
            ScalarKind::WideInteger => "int64",
            ScalarKind::Boolean => "boolean",
            ScalarKind::StringOrNumber => "string|number",
        }
    }
}

/// A language-agnostic reference to a field's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Scalar(ScalarKind),
    /// Reference to another declaration in the same run.
    Named(String),
    Array(Box<TypeRef>),
    /// An object with no declared properties.
    OpenMap,
    /// Nothing could be inferred.
    Unknown,
}

impl TypeRef {
    pub fn string() -> Self {
        Self::Scalar(ScalarKind::String)
    }

    pub fn number() -> Self {
        Self::Scalar(ScalarKind::Number)
    }

    pub fn boolean() -> Self {
        Self::Scalar(ScalarKind::Boolean)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Check whether this type (or its element type) is unknown.
    pub fn is_unknown(&self) -> bool {
        match self {
            Self::Unknown => true,
            Self::Array(inner) => inner.is_unknown(),
            _ => false,
        }
    }
}

/// A field in a [`TypeDeclaration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
    pub optional: bool,
    pub doc: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            doc: None,
        }
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc.filter(|d| !d.trim().is_empty());
        self
    }
}

/// A named structural type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub doc: Option<String>,
    pub fields: Vec<Field>,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            fields: Vec::new(),
        }
    }

    pub fn with_doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc.filter(|d| !d.trim().is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_kind_as_str() {
        assert_eq!(ScalarKind::String.as_str(), "string");
        assert_eq!(ScalarKind::WideInteger.as_str(), "int64");
    }

    #[test]
    fn test_type_ref_predicates() {
        assert!(TypeRef::Unknown.is_unknown());
        assert!(TypeRef::array(TypeRef::Unknown).is_unknown());
        assert!(!TypeRef::OpenMap.is_unknown());
    }

    #[test]
    fn test_field_doc_drops_blank() {
        let field = Field::new("id", TypeRef::string()).doc(Some("  ".to_string()));
        assert!(field.doc.is_none());
    }

    #[test]
    fn test_declaration_doc_drops_blank() {
        assert!(TypeDeclaration::new("Foo").with_doc(Some(" ".to_string())).doc.is_none());
        let decl = TypeDeclaration::new("Foo").with_doc(Some("订单".to_string()));
        assert_eq!(decl.doc.as_deref(), Some("订单"));
    }
}
