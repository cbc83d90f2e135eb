use once_cell::sync::Lazy;
use regex::Regex;

/// Matches any `## [<token>]` heading and captures the bracketed token.
pub static VERSION_HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*##\s*\[([^\]]+)\]").expect("Failed to compile version heading regex")
});

/// Matches a category heading at any depth, case-insensitively.
pub static CATEGORY_HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*#+\s*(Added|Changed|Deprecated|Removed|Fixed|Security)")
        .expect("Failed to compile category heading regex")
});

/// Matches backtick-wrapped spans (inline code and identifiers).
pub static BACKTICK_SPAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("`[^`]*`").expect("Failed to compile backtick span regex"));

/// Matches version-shaped substrings such as `1.26.0` or `v2.3`.
pub static EMBEDDED_VERSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"v?\d+\.\d+(?:\.\d+)?").expect("Failed to compile version regex"));

/// Matches a bullet line carrying actual content, not a bare dash.
pub static BULLET_ENTRY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*-\s*[^ ]+").expect("Failed to compile bullet entry regex"));

/// An exact `## [Unreleased]` heading, modulo surrounding whitespace.
pub fn is_unreleased_heading(line: &str) -> bool {
    line.trim() == "## [Unreleased]"
}

/// Any `## [...]` heading, released or not.
pub fn is_version_heading(line: &str) -> bool {
    VERSION_HEADING_PATTERN.is_match(line)
}

/// A category heading in canonical or non-canonical form.
pub fn is_category_heading(line: &str) -> bool {
    CATEGORY_HEADING_PATTERN.is_match(line)
}

/// Loose membership test used by the document state machine: the document
/// processor enters the unreleased state on a substring match, not an
/// anchored one.
pub fn mentions_unreleased(line: &str) -> bool {
    line.contains("[Unreleased]")
}
