//! Lexical case styles and their classifiers.
//!
//! Each style is an anchored pattern matched against the whole identifier.
//! The empty string matches no style.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

/// Lowercase start, then lowercase letters, digits and underscores.
const SNAKE_CASE_PATTERN: &str = r"^[a-z][a-z0-9_]*$";
/// Lowercase start, then letters and digits.
const CAMEL_CASE_PATTERN: &str = r"^[a-z][a-zA-Z0-9]*$";
/// Uppercase start, then letters and digits.
const PASCAL_CASE_PATTERN: &str = r"^[A-Z][a-zA-Z0-9]*$";

lazy_static! {
    static ref SNAKE_CASE: Regex = Regex::new(SNAKE_CASE_PATTERN).unwrap();
    static ref CAMEL_CASE: Regex = Regex::new(CAMEL_CASE_PATTERN).unwrap();
    static ref PASCAL_CASE: Regex = Regex::new(PASCAL_CASE_PATTERN).unwrap();
}

/// A lexical naming style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    SnakeCase,
    CamelCase,
    PascalCase,
}

impl CaseStyle {
    /// Whether `name` is written in this style.
    pub fn matches(self, name: &str) -> bool {
        match self {
            Self::SnakeCase => is_snake_case(name),
            Self::CamelCase => is_camel_case(name),
            Self::PascalCase => is_pascal_case(name),
        }
    }

    /// The conventional spelling of the style's own name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SnakeCase => "snake_case",
            Self::CamelCase => "camelCase",
            Self::PascalCase => "PascalCase",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn is_snake_case(name: &str) -> bool {
    SNAKE_CASE.is_match(name)
}

pub fn is_camel_case(name: &str) -> bool {
    CAMEL_CASE.is_match(name)
}

pub fn is_pascal_case(name: &str) -> bool {
    PASCAL_CASE.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL_STYLES: [CaseStyle; 3] = [
        CaseStyle::SnakeCase,
        CaseStyle::CamelCase,
        CaseStyle::PascalCase,
    ];

    /// Character-level restatement of the three patterns.
    fn oracle(style: CaseStyle, name: &str) -> bool {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        match style {
            CaseStyle::SnakeCase => {
                first.is_ascii_lowercase()
                    && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            }
            CaseStyle::CamelCase => {
                first.is_ascii_lowercase() && chars.all(|c| c.is_ascii_alphanumeric())
            }
            CaseStyle::PascalCase => {
                first.is_ascii_uppercase() && chars.all(|c| c.is_ascii_alphanumeric())
            }
        }
    }

    #[test]
    fn test_empty_string_matches_nothing() {
        for style in ALL_STYLES {
            assert!(!style.matches(""), "{style} should reject the empty string");
        }
    }

    #[test]
    fn test_snake_case() {
        assert!(is_snake_case("do_work"));
        assert!(is_snake_case("main"));
        assert!(is_snake_case("a1_b2_"));
        assert!(!is_snake_case("doWork"));
        assert!(!is_snake_case("_private"));
        assert!(!is_snake_case("1st"));
        assert!(!is_snake_case("Main"));
    }

    #[test]
    fn test_camel_case() {
        assert!(is_camel_case("count"));
        assert!(is_camel_case("itemCount2"));
        assert!(is_camel_case("xMLParser"));
        assert!(!is_camel_case("item_count"));
        assert!(!is_camel_case("_x"));
        assert!(!is_camel_case("Count"));
        assert!(!is_camel_case("MAX_SIZE"));
    }

    #[test]
    fn test_pascal_case() {
        assert!(is_pascal_case("Foo"));
        assert!(is_pascal_case("HTTPClient"));
        assert!(is_pascal_case("V2"));
        assert!(!is_pascal_case("foo"));
        assert!(!is_pascal_case("Foo_Bar"));
        assert!(!is_pascal_case("$Proxy"));
    }

    #[test]
    fn test_matches_whole_string_only() {
        assert!(!is_snake_case("ok name"));
        assert!(!is_camel_case("value\n"));
        assert!(!is_pascal_case("Foo-"));
    }

    #[test]
    fn test_non_ascii_letters_rejected() {
        assert!(!is_camel_case("café"));
        assert!(!is_pascal_case("Éclair"));
        assert!(!is_snake_case("über"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(CaseStyle::SnakeCase.to_string(), "snake_case");
        assert_eq!(CaseStyle::CamelCase.to_string(), "camelCase");
        assert_eq!(CaseStyle::PascalCase.to_string(), "PascalCase");
    }

    proptest! {
        #[test]
        fn prop_generated_snake_case_matches(name in "[a-z][a-z0-9_]{0,24}") {
            prop_assert!(is_snake_case(&name));
        }

        #[test]
        fn prop_generated_camel_case_matches(name in "[a-z][a-zA-Z0-9]{0,24}") {
            prop_assert!(is_camel_case(&name));
        }

        #[test]
        fn prop_generated_pascal_case_matches(name in "[A-Z][a-zA-Z0-9]{0,24}") {
            prop_assert!(is_pascal_case(&name));
        }

        #[test]
        fn prop_classifiers_agree_with_oracle_on_identifier_alphabet(
            name in "[a-zA-Z0-9_$é]{0,10}"
        ) {
            for style in ALL_STYLES {
                prop_assert_eq!(style.matches(&name), oracle(style, &name), "style {}", style);
            }
        }

        #[test]
        fn prop_classifiers_agree_with_oracle_on_any_text(name in "\\PC{0,10}") {
            for style in ALL_STYLES {
                prop_assert_eq!(style.matches(&name), oracle(style, &name), "style {}", style);
            }
        }
    }
}
