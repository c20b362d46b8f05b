//! Naming conventions for different target languages.

/// Language-specific naming conventions.
///
/// Defines how path segments and property keys become identifiers, and how
/// reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a path segment into type-name words (e.g., "bill_file" -> "BillFile")
    pub segment_to_type: fn(&str) -> String,
    /// Transform a property key into a type-name word (e.g., "user-info" -> "UserInfo")
    pub key_to_type: fn(&str) -> String,
    /// Transform a path segment into a function name (e.g., "get-order" -> "getOrder")
    pub segment_to_function: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "delete" -> "_delete")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform a path segment for use inside a type name.
    pub fn type_words(&self, segment: &str) -> String {
        (self.segment_to_type)(segment)
    }

    /// Transform a property key for use inside a nested type name.
    pub fn key_word(&self, key: &str) -> String {
        (self.key_to_type)(key)
    }

    /// Transform and make safe for use as a function name.
    pub fn function_name(&self, segment: &str) -> String {
        let transformed = (self.segment_to_function)(segment);
        self.safe_name(&transformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_NAMING: NamingConvention = NamingConvention {
        segment_to_type: yapit_core::to_pascal_case,
        key_to_type: yapit_core::capitalize_first,
        segment_to_function: yapit_core::to_camel_case,
        reserved_words: &["delete"],
        escape_reserved: underscore,
    };

    fn underscore(name: &str) -> String {
        format!("_{name}")
    }

    #[test]
    fn test_function_name_escapes_reserved() {
        assert_eq!(TEST_NAMING.function_name("delete"), "_delete");
        assert_eq!(TEST_NAMING.function_name("get-list"), "getList");
    }

    #[test]
    fn test_type_words() {
        assert_eq!(TEST_NAMING.type_words("bill_file"), "BillFile");
        assert_eq!(TEST_NAMING.key_word("meta"), "Meta");
    }
}
