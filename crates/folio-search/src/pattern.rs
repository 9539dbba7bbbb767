//! Compiling search terms into match patterns.

use regex::{Regex, RegexBuilder};

/// Compiles a search term into a matching pattern.
///
/// - In literal mode the term is escaped so every character matches
///   itself.
/// - `case_sensitive` toggles the regex case-insensitivity flag.
/// - A term that fails to compile as a pattern (only reachable in regex
///   mode with malformed syntax) silently falls back to the escaped
///   literal form; search keeps working, it just stops interpreting the
///   input as a pattern for that cycle.
/// - An empty or whitespace-only term yields `None`: no search is
///   active and the caller must clear all match state.
pub fn build_pattern(term: &str, literal: bool, case_sensitive: bool) -> Option<Regex> {
    if term.trim().is_empty() {
        return None;
    }

    let source = if literal {
        regex::escape(term)
    } else {
        term.to_string()
    };

    match compile(&source, case_sensitive) {
        Some(re) => Some(re),
        // Malformed pattern: degrade to matching the literal text.
        None => compile(&regex::escape(term), case_sensitive),
    }
}

/// Compiles a pattern source with the shared builder settings.
fn compile(source: &str, case_sensitive: bool) -> Option<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(!case_sensitive)
        .unicode(true)
        .build()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_term_yields_none() {
        assert!(build_pattern("", true, false).is_none());
        assert!(build_pattern("   \t", true, false).is_none());
    }

    #[test]
    fn literal_mode_escapes_metacharacters() {
        let re = build_pattern("a.b", true, true).unwrap();
        assert!(re.is_match("a.b"));
        assert!(!re.is_match("axb"));
    }

    #[test]
    fn regex_mode_interprets_pattern() {
        let re = build_pattern("a.b", false, true).unwrap();
        assert!(re.is_match("axb"));
    }

    #[test]
    fn case_insensitive_by_default_flag() {
        let re = build_pattern("Foo", true, false).unwrap();
        assert!(re.is_match("FOO"));
        assert!(re.is_match("foo"));

        let re = build_pattern("Foo", true, true).unwrap();
        assert!(!re.is_match("foo"));
        assert!(re.is_match("Foo"));
    }

    #[test]
    fn malformed_regex_falls_back_to_literal() {
        // "a(" is invalid as a pattern but fine as literal text.
        let re = build_pattern("a(", false, true).unwrap();
        assert!(re.is_match("a("));
        assert!(!re.is_match("a"));
    }

    #[test]
    fn unicode_matching() {
        let re = build_pattern("CAFÉ", true, false).unwrap();
        assert!(re.is_match("café"));
    }
}
