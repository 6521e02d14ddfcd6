//! Turns arbitrary path segments into Dart identifiers.
//!
//! Every function here is total: the worst case is a positional placeholder.

use heck::{ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

/// Escape marker prepended to names that would start with a digit or hit a
/// reserved word. `$` is a legal identifier character in Dart.
pub const ESCAPE_MARKER: char = '$';

/// Dart reserved words, built-in identifiers and contextual keywords.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "assert", "async", "await", "base", "break", "case", "catch", "class",
    "const", "continue", "covariant", "default", "deferred", "do", "dynamic", "else", "enum",
    "export", "extends", "extension", "external", "factory", "false", "final", "finally", "for",
    "Function", "get", "hide", "if", "implements", "import", "in", "interface", "is", "late",
    "library", "mixin", "new", "null", "of", "on", "operator", "part", "required", "rethrow",
    "return", "sealed", "set", "show", "static", "super", "switch", "sync", "this", "throw",
    "true", "try", "type", "typedef", "var", "void", "when", "while", "with", "yield",
];

/// Members inherited from `Object`; a generated getter with one of these
/// names would be an invalid override.
const OBJECT_MEMBERS: &[&str] = &["hashCode", "noSuchMethod", "runtimeType", "toString"];

/// Letter case applied to the words of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentCase {
    /// `myIcon`, used for members in the robust and camel-case styles.
    LowerCamel,
    /// `my_icon`, used for members in the snake-case style.
    Snake,
    /// `MyIcon`, used for class-name fragments.
    UpperCamel,
}

pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word) || OBJECT_MEMBERS.contains(&word)
}

/// Whether `name` can be used verbatim as a Dart identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let head_ok = first.is_ascii_alphabetic() || first == '_' || first == ESCAPE_MARKER;
    head_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ESCAPE_MARKER)
        && !is_reserved(name)
}

/// Sanitizes `raw` into an identifier fragment, or `None` when no ASCII
/// letter or digit survives.
pub fn sanitize(raw: &str, case: IdentCase) -> Option<String> {
    let words: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();

    let cased = match case {
        IdentCase::LowerCamel => words.to_lower_camel_case(),
        IdentCase::Snake => words.to_snake_case(),
        IdentCase::UpperCamel => words.to_upper_camel_case(),
    };
    if cased.is_empty() {
        return None;
    }

    let starts_with_digit = cased.starts_with(|c: char| c.is_ascii_digit());
    if starts_with_digit || is_reserved(&cased) {
        Some(format!("{ESCAPE_MARKER}{cased}"))
    } else {
        Some(cased)
    }
}

/// Like [`sanitize`], falling back to `asset<position>` (or `Asset<position>`
/// for class fragments) when nothing usable is left.
pub fn sanitize_or_placeholder(raw: &str, case: IdentCase, position: usize) -> String {
    sanitize(raw, case).unwrap_or_else(|| placeholder(case, position))
}

pub fn placeholder(case: IdentCase, position: usize) -> String {
    match case {
        IdentCase::UpperCamel => format!("Asset{position}"),
        IdentCase::LowerCamel | IdentCase::Snake => format!("asset{position}"),
    }
}
