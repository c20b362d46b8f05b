use yapit_ir::{ScalarKind, TypeRef};

/// Trait for mapping [`TypeRef`]s to language-specific type strings.
///
/// Implement this trait for each target language; [`render_type`] composes
/// the pieces.
///
/// [`render_type`]: TypeMapper::render_type
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a scalar kind to a type string
    fn map_scalar(&self, kind: ScalarKind) -> &'static str;

    /// Wrap a rendered element type as an array type
    fn map_array(&self, element: &str) -> String;

    /// Type for objects with unknown keys
    fn open_map(&self) -> &'static str;

    /// Type for values nothing could be inferred about
    fn unknown(&self) -> &'static str;

    /// Render a full type reference.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Scalar(kind) => self.map_scalar(*kind).to_string(),
            TypeRef::Named(name) => name.clone(),
            TypeRef::Array(inner) => self.map_array(&self.render_type(inner)),
            TypeRef::OpenMap => self.open_map().to_string(),
            TypeRef::Unknown => self.unknown().to_string(),
        }
    }
}
