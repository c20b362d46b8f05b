//! Shared string utilities for identifier derivation.

/// Uppercase the first character, leaving the rest untouched (e.g., "billFile" -> "BillFile")
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character, leaving the rest untouched (e.g., "GetOrder" -> "getOrder")
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase, splitting on '-', '_' and any character
/// that cannot appear in an identifier (e.g., "bill_file-task" -> "BillFileTask")
///
/// Only the first character of each fragment is changed, so existing
/// camel humps survive: "afterSales" -> "AfterSales".
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '-' || c == '_' || !is_ident_char(c))
        .map(capitalize_first)
        .collect()
}

/// Capitalize each identifier word, dropping characters that cannot appear in
/// an identifier (e.g., "user-info" -> "UserInfo", "user_info" -> "User_info")
pub fn capitalize_words(s: &str) -> String {
    s.split(|c: char| !is_ident_char(c))
        .map(capitalize_first)
        .collect()
}

/// Convert a string to camelCase, splitting on any non-alphanumeric character
/// (e.g., "bill-file.task" -> "billFileTask")
///
/// Humps inside a word are kept: "GetOrderList" -> "getOrderList".
pub fn to_camel_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                lowercase_first(word)
            } else {
                capitalize_first(word)
            }
        })
        .collect()
}

/// Returns true if `c` may appear in a JavaScript identifier (ASCII subset).
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Returns true if `s` is a valid JavaScript identifier (ASCII subset).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_ident_char(c) && !c.is_ascii_digit() => chars.all(is_ident_char),
        _ => false,
    }
}
