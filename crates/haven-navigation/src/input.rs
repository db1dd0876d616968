//! Input resolution for the address bar
//!
//! Typed input is either an address or a search query:
//! 1. Empty input → nothing (submission is a no-op)
//! 2. Explicit http/https scheme, or a dotted host with no whitespace → address
//! 3. Everything else → search query

use url::Url;

/// What the address bar should do with a piece of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResolution {
    /// Navigate to the address exactly as typed.
    Navigate(String),
    /// Hand the raw query to the search provider.
    Search(String),
}

/// Resolve trimmed user input into an action. `None` means the input was
/// empty and the submission should be ignored.
pub fn resolve(input: &str) -> Option<InputResolution> {
    let input = input.trim();

    if input.is_empty() {
        return None;
    }

    if looks_like_address(input) {
        return Some(InputResolution::Navigate(input.to_string()));
    }

    Some(InputResolution::Search(input.to_string()))
}

/// Heuristic address check. Addresses are never classified by host lookup
/// here; the safety classifier sees the raw text later.
fn looks_like_address(input: &str) -> bool {
    if input.contains(char::is_whitespace) {
        return false;
    }

    // Explicit scheme wins when it parses as a URL
    if (input.starts_with("http://") || input.starts_with("https://")) && Url::parse(input).is_ok()
    {
        return true;
    }

    input.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_ignored() {
        assert!(resolve("").is_none());
        assert!(resolve("   ").is_none());
        assert!(resolve("\t\n").is_none());
    }

    #[test]
    fn test_full_url_navigates() {
        match resolve("https://github.com") {
            Some(InputResolution::Navigate(url)) => assert_eq!(url, "https://github.com"),
            other => panic!("Expected Navigate, got {other:?}"),
        }
    }

    #[test]
    fn test_dotted_host_navigates_verbatim() {
        match resolve("example.com") {
            Some(InputResolution::Navigate(url)) => assert_eq!(url, "example.com"),
            other => panic!("Expected Navigate, got {other:?}"),
        }
    }

    #[test]
    fn test_bare_word_searches() {
        match resolve("cats") {
            Some(InputResolution::Search(query)) => assert_eq!(query, "cats"),
            other => panic!("Expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_forces_search() {
        match resolve("rust 1.0 release") {
            Some(InputResolution::Search(query)) => assert_eq!(query, "rust 1.0 release"),
            other => panic!("Expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_input_is_trimmed() {
        match resolve("  cats  ") {
            Some(InputResolution::Search(query)) => assert_eq!(query, "cats"),
            other => panic!("Expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_bare_scheme_falls_back_to_search() {
        // "https://" alone does not parse as a URL and has no dot
        match resolve("https://") {
            Some(InputResolution::Search(_)) => {}
            other => panic!("Expected Search, got {other:?}"),
        }
    }
}
