//! Payload shape descriptions.

use indexmap::IndexMap;

/// Structural kind of a [`SchemaNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Object,
    Array,
    Scalar,
    Unknown,
}

impl SchemaKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Object => "object",
            SchemaKind::Array => "array",
            SchemaKind::Scalar => "scalar",
            SchemaKind::Unknown => "unknown",
        }
    }
}

/// Scalar type names recognized in the `type` keyword.
const SCALAR_TYPES: &[&str] = &["string", "text", "文本", "integer", "number", "boolean"];

/// An example value attached to a schema node or parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Example {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Example>),
    Object,
}

/// A recursively nested description of a payload's shape.
///
/// Produced leniently from JSON-Schema-like documents: every field is
/// optional and nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    /// The declared `type`, lowercased. For type lists, the first non-null entry.
    pub declared_type: Option<String>,
    /// The declared `format` (e.g. `int64`).
    pub format: Option<String>,
    /// Object properties in source order.
    pub properties: IndexMap<String, SchemaNode>,
    /// Names listed in the object's `required` array.
    pub required: Vec<String>,
    /// Array element shape.
    pub items: Option<Box<SchemaNode>>,
    pub description: Option<String>,
    pub example: Option<Example>,
}

impl SchemaNode {
    /// Create a node with only a declared type.
    pub fn typed(ty: impl Into<String>) -> Self {
        Self {
            declared_type: Some(ty.into()),
            ..Self::default()
        }
    }

    /// Create an object node with the given properties.
    pub fn object(properties: impl IntoIterator<Item = (String, SchemaNode)>) -> Self {
        Self {
            declared_type: Some("object".to_string()),
            properties: properties.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Create an array node with the given element shape.
    pub fn array(items: SchemaNode) -> Self {
        Self {
            declared_type: Some("array".to_string()),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    /// Mark properties as required.
    pub fn with_required(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.required.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_example(mut self, example: Example) -> Self {
        self.example = Some(example);
        self
    }

    /// Classify this node.
    ///
    /// A missing `type` is inferred from structure: `properties` implies an
    /// object and `items` implies an array.
    pub fn kind(&self) -> SchemaKind {
        match self.declared_type.as_deref() {
            Some("object") => SchemaKind::Object,
            Some("array") => SchemaKind::Array,
            Some(ty) if SCALAR_TYPES.contains(&ty) => SchemaKind::Scalar,
            Some(_) => SchemaKind::Unknown,
            None if !self.properties.is_empty() => SchemaKind::Object,
            None if self.items.is_some() => SchemaKind::Array,
            None => SchemaKind::Unknown,
        }
    }

    /// True for an object that carries at least one property.
    pub fn is_composite(&self) -> bool {
        self.kind() == SchemaKind::Object && !self.properties.is_empty()
    }

    /// Whether `name` appears in this node's required set.
    pub fn requires(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}
