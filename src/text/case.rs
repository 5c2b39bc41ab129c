//! Identifier-aware text shaping.
//!
//! Translation providers handle natural phrases far better than identifiers,
//! so `getUserName` is sent as `get user name`. In the other direction an
//! English translation can be reshaped into a naming convention.

use crate::config::CaseFormat;
use regex::Regex;
use std::sync::OnceLock;

fn mixed_case_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // camelCase, or a capital followed by another capital after an optional lowercase run.
    // Acronym-only words such as `XML` count as mixed-case.
    RE.get_or_init(|| Regex::new(r"^(?:[a-z]+[A-Z]|[A-Z][a-z]*[A-Z])").expect("Invalid regex"))
}

fn lower_upper_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z])([A-Z])").expect("Invalid regex"))
}

fn acronym_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("Invalid regex"))
}

fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s\-_]+").expect("Invalid regex"))
}

/// Whether the text looks like a camelCase or PascalCase identifier.
pub fn is_mixed_case(text: &str) -> bool {
    mixed_case_re().is_match(text)
}

/// Split an identifier at case boundaries, keeping acronyms together.
///
/// `XMLHttpRequest` becomes `["XML", "Http", "Request"]`. Original casing is kept.
pub fn split_mixed_case(text: &str) -> Vec<String> {
    let spaced = lower_upper_re().replace_all(text, "$1 $2");
    let spaced = acronym_re().replace_all(&spaced, "$1 $2");
    spaced.split_whitespace().map(str::to_string).collect()
}

/// Turn a mixed-case identifier into lowercase space-separated words.
///
/// Text that is not mixed-case comes back unchanged.
pub fn normalize_for_translation(text: &str) -> String {
    if !is_mixed_case(text) {
        return text.to_string();
    }

    split_mixed_case(text)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn tokenize(text: &str) -> Vec<String> {
    separator_re()
        .split(text)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Reshape an English phrase into the requested naming convention.
pub fn format_case(text: &str, format: CaseFormat) -> String {
    if format == CaseFormat::None {
        return text.to_string();
    }

    let words = tokenize(text);
    if words.is_empty() {
        return text.to_string();
    }

    match format {
        CaseFormat::Pascal => words.iter().map(|w| capitalize(w)).collect(),
        CaseFormat::Camel => words
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.clone() } else { capitalize(w) })
            .collect(),
        CaseFormat::Snake => words.join("_"),
        CaseFormat::Space => words
            .iter()
            .map(|w| capitalize(w))
            .collect::<Vec<_>>()
            .join(" "),
        CaseFormat::None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_mixed_case() {
        assert!(is_mixed_case("getUserName"));
        assert!(is_mixed_case("UserName"));
        assert!(is_mixed_case("XMLHttpRequest"));
        assert!(is_mixed_case("iPhone"));
        assert!(is_mixed_case("XML"));
        assert!(is_mixed_case("HELLO"));

        assert!(!is_mixed_case("User"));
        assert!(!is_mixed_case("username"));
        assert!(!is_mixed_case("get user name"));
        assert!(!is_mixed_case("user_name"));
        assert!(!is_mixed_case("user-name"));
        assert!(!is_mixed_case("Hello World"));
        assert!(!is_mixed_case(""));
    }

    #[test]
    fn test_split_mixed_case() {
        assert_eq!(split_mixed_case("XMLHttpRequest"), vec!["XML", "Http", "Request"]);
        assert_eq!(split_mixed_case("getUserName"), vec!["get", "User", "Name"]);
        assert_eq!(split_mixed_case("parseHTMLDocument"), vec!["parse", "HTML", "Document"]);
        assert_eq!(split_mixed_case("  spaced  outWords "), vec!["spaced", "out", "Words"]);
        assert!(split_mixed_case("").is_empty());
    }

    #[test]
    fn test_normalize_for_translation() {
        assert_eq!(normalize_for_translation("getUserName"), "get user name");
        assert_eq!(normalize_for_translation("XMLHttpRequest"), "xml http request");
        assert_eq!(normalize_for_translation("Hello"), "Hello");
        assert_eq!(normalize_for_translation("user_name"), "user_name");
    }

    #[test]
    fn test_normalize_acronyms() {
        assert_eq!(normalize_for_translation("XML"), "xml");
        assert_eq!(normalize_for_translation("HTTP"), "http");
        assert_eq!(split_mixed_case("HTTP"), vec!["HTTP"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["getUserName", "XMLHttpRequest", "XML", "already plain", "snake_case"] {
            let once = normalize_for_translation(input);
            assert_eq!(normalize_for_translation(&once), once);
        }
    }

    #[test]
    fn test_format_examples() {
        assert_eq!(format_case("hello world", CaseFormat::Pascal), "HelloWorld");
        assert_eq!(format_case("hello world", CaseFormat::Camel), "helloWorld");
        assert_eq!(format_case("Hello-World", CaseFormat::Snake), "hello_world");
        assert_eq!(format_case("hello_world", CaseFormat::Space), "Hello World");
    }

    #[test]
    fn test_format_lowercases_tokens() {
        assert_eq!(format_case("Get USER name", CaseFormat::Camel), "getUserName");
        assert_eq!(format_case("Get USER name", CaseFormat::Pascal), "GetUserName");
        assert_eq!(format_case("a  -_ b", CaseFormat::Snake), "a_b");
    }

    #[test]
    fn test_format_none_is_identity() {
        for input in ["Hello World", "  padded ", "", "--", "获取用户名", "a_b-c"] {
            assert_eq!(format_case(input, CaseFormat::None), input);
        }
    }

    #[test]
    fn test_format_unsplittable_input_unchanged() {
        assert_eq!(format_case("", CaseFormat::Pascal), "");
        assert_eq!(format_case(" - _ ", CaseFormat::Snake), " - _ ");
    }

    #[test]
    fn test_format_single_word() {
        assert_eq!(format_case("Hello", CaseFormat::Pascal), "Hello");
        assert_eq!(format_case("Hello", CaseFormat::Camel), "hello");
        assert_eq!(format_case("Hello", CaseFormat::Snake), "hello");
        assert_eq!(format_case("hello", CaseFormat::Space), "Hello");
    }
}
