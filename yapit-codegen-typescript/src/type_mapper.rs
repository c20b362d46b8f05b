//! TypeScript type mapper implementation.

use yapit_codegen::language::TypeMapper;
use yapit_ir::ScalarKind;

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_scalar(&self, kind: ScalarKind) -> &'static str {
        match kind {
            ScalarKind::String => "string",
            ScalarKind::Number => "number",
            // JSON numbers decode to doubles
            ScalarKind::WideInteger => "number",
            ScalarKind::Boolean => "boolean",
            ScalarKind::StringOrNumber => "string | number",
        }
    }

    fn map_array(&self, element: &str) -> String {
        if element.contains('|') {
            format!("({})[]", element)
        } else {
            format!("{}[]", element)
        }
    }

    fn open_map(&self) -> &'static str {
        "Record<string, any>"
    }

    fn unknown(&self) -> &'static str {
        "unknown"
    }
}
