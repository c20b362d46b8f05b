//! TypeScript-specific naming conventions.

use yapit_codegen::language::NamingConvention;
use yapit_core::{capitalize_words, to_camel_case, to_pascal_case};

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// TypeScript naming conventions.
///
/// Only words that cannot name a function declaration are reserved;
/// contextual keywords such as `type` or `get` are valid identifiers.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Path segments become PascalCase words
    segment_to_type: to_pascal_case,
    // Property keys keep their own casing after the first letter
    key_to_type: capitalize_words,
    // Functions use camelCase
    segment_to_function: to_camel_case,
    reserved_words: &[
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        // Reserved in strict mode, which ES modules always are
        "await",
        "implements",
        "interface",
        "let",
        "package",
        "private",
        "protected",
        "public",
        "static",
        "yield",
    ],
    escape_reserved: escape_ts_reserved,
};
