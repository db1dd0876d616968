//! Haven Mock Search Provider
//!
//! Nothing is fetched. A query deterministically fabricates one page of
//! results by interpolating the text into fixed templates: a web search,
//! an encyclopedia article, a video listing, a news feed and an image
//! search. Every fabricated result is served over https.

use serde::{Deserialize, Serialize};

/// Number of results fabricated per query.
pub const RESULTS_PER_QUERY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: usize,
    pub title: String,
    pub url: String,
    pub description: String,
    pub is_secure: bool,
}

/// Fabricate the fixed result page for a query.
pub fn search(query: &str) -> Vec<SearchResult> {
    let query = query.trim();
    let encoded = urlencoding::encode(query);
    let slug = slugify(query);

    let templates = [
        (
            format!("{query} - Web Search"),
            format!("https://search.example.com/results?q={encoded}"),
            format!("All web results for \"{query}\". Pages, answers and places from across the simulated web."),
        ),
        (
            format!("{query} - Encyclopedia"),
            format!("https://encyclopedia.example.org/wiki/{slug}"),
            format!("Reference article covering the history, usage and notable mentions of {query}."),
        ),
        (
            format!("{query} - Videos"),
            format!("https://videos.example.com/results?search={encoded}"),
            format!("Watch the most viewed videos about {query}, updated daily."),
        ),
        (
            format!("{query} - Latest News"),
            format!("https://news.example.net/topics/{slug}"),
            format!("Breaking stories and analysis mentioning {query} from simulated newsrooms."),
        ),
        (
            format!("{query} - Image Search"),
            format!("https://images.example.com/search?q={encoded}&tab=images"),
            format!("Browse thousands of pictures related to {query}."),
        ),
    ];

    templates
        .into_iter()
        .enumerate()
        .map(|(i, (title, url, description))| SearchResult {
            id: i + 1,
            title,
            url,
            description,
            is_secure: true,
        })
        .collect()
}

/// Lowercased path segment for templated urls: runs of anything that is not
/// alphanumeric collapse to a single dash.
fn slugify(query: &str) -> String {
    let mut slug = String::with_capacity(query.len());
    let mut pending_dash = false;

    for ch in query.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }

    slug
}

// Minimal percent-encoder for query strings
mod urlencoding {
    pub fn encode(input: &str) -> String {
        let mut result = String::with_capacity(input.len() * 3);
        for byte in input.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    result.push(byte as char);
                }
                _ => {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_five_results() {
        let results = search("cats");
        assert_eq!(results.len(), RESULTS_PER_QUERY);
    }

    #[test]
    fn test_results_are_secure_and_interpolated() {
        let results = search("rust programming");

        for result in &results {
            assert!(result.is_secure);
            assert!(result.url.starts_with("https://"));
            assert!(
                result.title.contains("rust programming"),
                "title: {}",
                result.title
            );
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let ids: Vec<usize> = search("anything").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(search("cats"), search("cats"));
    }

    #[test]
    fn test_query_is_encoded_in_urls() {
        let results = search("rust programming");
        assert!(results[0].url.ends_with("?q=rust%20programming"));
        assert!(results[1].url.ends_with("/wiki/rust-programming"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Rust Programming"), "rust-programming");
        assert_eq!(slugify("  a  b  "), "a-b");
        assert_eq!(slugify("C++"), "c");
    }
}
