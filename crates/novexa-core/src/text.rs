//! Whole-word matching for query tokens.
//!
//! A token matches a haystack when it occurs as a complete word, with the
//! same boundary semantics as `\btoken\b`: "red" matches "dark red" but not
//! "credible" or "bored". Matching is case-insensitive.

use regex::{Regex, RegexBuilder};

/// A compiled whole-word matcher for a single lowercase token.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    token: String,
    regex: Option<Regex>,
}

impl WordMatcher {
    /// Compile a matcher for `token`. The token is lowercased and escaped, so
    /// any input is accepted.
    #[must_use]
    pub fn new(token: &str) -> Self {
        let token = token.to_lowercase();
        let pattern = format!(r"\b{}\b", regex::escape(&token));
        let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => Some(regex),
            Err(e) => {
                log::warn!("Falling back to manual word matching for {:?}: {}", token, e);
                None
            }
        };
        Self { token, regex }
    }

    /// The lowercase token this matcher looks for.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether the token occurs in `haystack` as a whole word.
    ///
    /// An empty haystack or an empty token never matches.
    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        if haystack.is_empty() || self.token.is_empty() {
            return false;
        }
        match &self.regex {
            Some(regex) => regex.is_match(haystack),
            None => find_word(&haystack.to_lowercase(), &self.token),
        }
    }

    /// Whether a short categorical field equals the token or contains it as a
    /// whole word. Empty fields never match.
    #[must_use]
    pub fn matches_field(&self, field: &str) -> bool {
        if field.is_empty() || self.token.is_empty() {
            return false;
        }
        field.to_lowercase() == self.token || self.is_match(field)
    }

    /// Plain substring check. `haystack_lower` must already be lowercase.
    #[must_use]
    pub fn contains(&self, haystack_lower: &str) -> bool {
        !self.token.is_empty() && haystack_lower.contains(&self.token)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn find_word(haystack: &str, token: &str) -> bool {
    let starts_word = token.chars().next().is_some_and(is_word_char);
    let ends_word = token.chars().next_back().is_some_and(is_word_char);

    haystack.match_indices(token).any(|(start, _)| {
        let end = start + token.len();
        let before = haystack[..start].chars().next_back().is_some_and(is_word_char);
        let after = haystack[end..].chars().next().is_some_and(is_word_char);
        // \b before a word char needs a non-word char (or start) ahead of it,
        // and the inverse for a leading non-word char.
        let left_ok = if starts_word { !before } else { before };
        let right_ok = if ends_word { !after } else { after };
        left_ok && right_ok
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_match() {
        let matcher = WordMatcher::new("red");
        assert!(matcher.is_match("red"));
        assert!(matcher.is_match("dark red suede"));
        assert!(matcher.is_match("red/white"));
        assert!(!matcher.is_match("credible"));
        assert!(!matcher.is_match("bored"));
        assert!(!matcher.is_match("reddish"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let matcher = WordMatcher::new("Black");
        assert_eq!(matcher.token(), "black");
        assert!(matcher.is_match("BLACK leather"));
        assert!(matcher.matches_field("Black"));
    }

    #[test]
    fn test_empty_inputs_never_match() {
        let matcher = WordMatcher::new("red");
        assert!(!matcher.is_match(""));
        assert!(!matcher.matches_field(""));

        let empty = WordMatcher::new("");
        assert!(!empty.is_match("anything"));
        assert!(!empty.matches_field("anything"));
        assert!(!empty.contains("anything"));
    }

    #[test]
    fn test_metacharacters_are_escaped() {
        let matcher = WordMatcher::new("c++");
        assert!(!matcher.is_match("cxx"));
        assert!(matcher.matches_field("c++"));
    }

    #[test]
    fn test_substring_fallback() {
        let matcher = WordMatcher::new("red");
        assert!(matcher.contains("bored"));
        assert!(!matcher.contains("blue"));
    }

    #[test]
    fn test_manual_word_scan_agrees_with_regex() {
        for (haystack, token, expected) in [
            ("dark red", "red", true),
            ("bored", "red", false),
            ("red-carpet", "red", true),
            ("hi-top", "-top", true),
            ("hitop", "top", false),
        ] {
            assert_eq!(find_word(haystack, token), expected, "{haystack} / {token}");
            assert_eq!(WordMatcher::new(token).is_match(haystack), expected);
        }
    }
}
