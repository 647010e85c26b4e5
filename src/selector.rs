//! Locator candidates and text matching.
//!
//! A [`Query`] is a deferred element query, re-resolved against the live
//! DOM on every use. Fallback chains are ordered `&[Query]` slices; the
//! first candidate with a visible match wins.

/// A single way of finding elements on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// CSS selector.
    Css(&'static str),
    /// XPath expression.
    XPath(&'static str),
    /// CSS selector filtered by inner text, compared case- and
    /// whitespace-insensitively.
    Text {
        css: &'static str,
        needle: &'static str,
    },
}

/// True when `haystack` contains `needle`, ignoring case and whitespace,
/// so "Log out", "Logout", and "LOG OUT" all match "logout".
pub fn text_matches(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_ignoring_case_and_whitespace() {
        assert!(text_matches("  Log  Out ", "logout"));
        assert!(text_matches("Sign out", "sign out"));
        assert!(text_matches("LOG OUT", "Log out"));
        assert!(!text_matches("Settings", "logout"));
    }

    #[test]
    fn test_needle_is_normalized_too() {
        assert!(text_matches("Logout", "Log out"));
    }

    #[test]
    fn test_substring_match() {
        assert!(text_matches("Invalid email or password", "invalid"));
    }
}
