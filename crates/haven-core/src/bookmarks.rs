//! Bookmark store

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub folder: Option<String>,
}

impl Bookmark {
    fn new(title: &str, url: &str, folder: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            url: url.to_string(),
            folder: normalize_folder(folder),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two defaults every new profile starts with.
    pub fn seeded() -> Self {
        Self {
            bookmarks: vec![
                Bookmark::new("GitHub", "https://github.com", Some("Development".to_string())),
                Bookmark::new(
                    "Wikipedia",
                    "https://wikipedia.org",
                    Some("Reference".to_string()),
                ),
            ],
        }
    }

    pub fn list(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn get(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b.url == url)
    }

    /// Add a bookmark, updating the existing entry when the url is already
    /// starred.
    pub fn add(&mut self, title: &str, url: &str, folder: Option<String>) -> &Bookmark {
        if let Some(index) = self.bookmarks.iter().position(|b| b.url == url) {
            let folder = normalize_folder(folder);
            let existing = &mut self.bookmarks[index];
            existing.title = title.to_string();
            if folder.is_some() {
                existing.folder = folder;
            }
            return &self.bookmarks[index];
        }

        tracing::info!(url = %url, "Added bookmark");
        self.bookmarks.push(Bookmark::new(title, url, folder));
        &self.bookmarks[self.bookmarks.len() - 1]
    }

    /// Remove by id.
    pub fn remove(&mut self, id: &str) -> Option<Bookmark> {
        let index = self.bookmarks.iter().position(|b| b.id == id)?;
        Some(self.bookmarks.remove(index))
    }

    /// Star or unstar a url. Returns true when the url is bookmarked
    /// afterward.
    pub fn toggle(&mut self, url: &str, title: &str) -> bool {
        if let Some(index) = self.bookmarks.iter().position(|b| b.url == url) {
            self.bookmarks.remove(index);
            return false;
        }

        self.add(title, url, None);
        true
    }

    /// Sorted, deduplicated folder labels in use.
    pub fn folders(&self) -> Vec<String> {
        let mut set = BTreeSet::new();
        for bookmark in &self.bookmarks {
            if let Some(folder) = bookmark.folder.as_deref() {
                let folder = folder.trim();
                if !folder.is_empty() {
                    set.insert(folder.to_string());
                }
            }
        }
        set.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}

fn normalize_folder(folder: Option<String>) -> Option<String> {
    folder
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_two_defaults() {
        let store = BookmarkStore::seeded();
        assert_eq!(store.len(), 2);
        assert!(store.contains_url("https://github.com"));
        assert!(store.contains_url("https://wikipedia.org"));
    }

    #[test]
    fn test_add_dedups_by_url() {
        let mut store = BookmarkStore::new();
        store.add("Example", "https://example.com", None);
        store.add(
            "Example (new title)",
            "https://example.com",
            Some("Stuff".to_string()),
        );

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].title, "Example (new title)");
        assert_eq!(store.list()[0].folder.as_deref(), Some("Stuff"));
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut store = BookmarkStore::new();

        assert!(store.toggle("https://example.com", "Example"));
        assert!(store.contains_url("https://example.com"));

        assert!(!store.toggle("https://example.com", "Example"));
        assert!(!store.contains_url("https://example.com"));
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = BookmarkStore::seeded();
        let id = store.list()[0].id.clone();

        let removed = store.remove(&id).unwrap();

        assert_eq!(removed.id, id);
        assert_eq!(store.len(), 1);
        assert!(store.remove(&id).is_none());
    }

    #[test]
    fn test_folders_are_sorted_and_deduped() {
        let mut store = BookmarkStore::new();
        store.add("A", "https://a.com", Some("Work".to_string()));
        store.add("B", "https://b.com", Some("  Personal ".to_string()));
        store.add("C", "https://c.com", Some("Work".to_string()));
        store.add("D", "https://d.com", None);

        assert_eq!(store.folders(), vec!["Personal", "Work"]);
    }
}
