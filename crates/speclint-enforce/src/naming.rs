use std::sync::LazyLock;

use regex::Regex;

static PASCAL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z0-9]+(?:[A-Z][a-z0-9]+)*$").expect("valid regex"));
static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]+(?:[A-Z0-9]+[a-z0-9]*)*$").expect("valid regex"));
static SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(?:_[a-z0-9]+)*$").expect("valid regex"));
static KEBAB_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(?:-[a-z0-9]+)*$").expect("valid regex"));

/// `UserAccount`, `Http2Client`.
pub fn is_pascal_case(input: &str) -> bool {
    PASCAL_CASE.is_match(input)
}

/// `userAccount`, `getV2Item`.
pub fn is_camel_case(input: &str) -> bool {
    CAMEL_CASE.is_match(input)
}

pub fn is_snake_case(input: &str) -> bool {
    SNAKE_CASE.is_match(input)
}

pub fn is_kebab_case(input: &str) -> bool {
    KEBAB_CASE.is_match(input)
}

/// A lexical naming convention names are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingConvention {
    PascalCase,
    CamelCase,
    SnakeCase,
    KebabCase,
}

impl NamingConvention {
    pub const ALL: [NamingConvention; 4] = [
        NamingConvention::PascalCase,
        NamingConvention::CamelCase,
        NamingConvention::SnakeCase,
        NamingConvention::KebabCase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NamingConvention::PascalCase => "PascalCase",
            NamingConvention::CamelCase => "camelCase",
            NamingConvention::SnakeCase => "snake_case",
            NamingConvention::KebabCase => "kebab-case",
        }
    }

    /// Parse a configured convention name. Case, `_`, `-`, spaces and a
    /// trailing `case` are ignored, so `PascalCase`, `pascal` and
    /// `Pascal_Case` are all accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let stem = normalized.strip_suffix("case").unwrap_or(&normalized);
        match stem {
            "pascal" => Some(NamingConvention::PascalCase),
            "camel" => Some(NamingConvention::CamelCase),
            "snake" => Some(NamingConvention::SnakeCase),
            "kebab" => Some(NamingConvention::KebabCase),
            _ => None,
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        match self {
            NamingConvention::PascalCase => is_pascal_case(input),
            NamingConvention::CamelCase => is_camel_case(input),
            NamingConvention::SnakeCase => is_snake_case(input),
            NamingConvention::KebabCase => is_kebab_case(input),
        }
    }

    /// Comma-separated list of canonical names, for error messages.
    pub fn expected_names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
