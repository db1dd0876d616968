//! Visit history log
//!
//! In-memory, newest first. An entry is recorded for every navigation and
//! every opened search result; back/forward cursor moves do not record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::NavigationError;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub url: String,
    pub title: String,
    pub visited_at: DateTime<Utc>,
    pub is_secure: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a visit.
    pub fn record(&mut self, url: &str, title: &str, is_secure: bool) -> &HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            title: title.to_string(),
            visited_at: Utc::now(),
            is_secure,
        };

        tracing::debug!(url = %entry.url, "Recorded visit");
        self.entries.insert(0, entry);
        &self.entries[0]
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Delete a single entry.
    pub fn remove(&mut self, id: &str) -> Result<HistoryEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| NavigationError::EntryNotFound(id.to_string()))?;

        Ok(self.entries.remove(index))
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        tracing::info!(count = self.entries.len(), "Cleared history");
        self.entries.clear();
    }

    /// Case-insensitive match on url or title.
    pub fn search(&self, query: &str) -> Vec<&HistoryEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                entry.url.to_lowercase().contains(&needle)
                    || entry.title.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_prepends() {
        let mut log = HistoryLog::new();
        log.record("https://a.com", "A", true);
        log.record("https://b.com", "B", true);

        assert_eq!(log.entries()[0].url, "https://b.com");
        assert_eq!(log.entries()[1].url, "https://a.com");
    }

    #[test]
    fn test_remove_deletes_one() {
        let mut log = HistoryLog::new();
        log.record("https://a.com", "A", true);
        let id = log.record("https://b.com", "B", false).id.clone();

        let removed = log.remove(&id).unwrap();

        assert_eq!(removed.url, "https://b.com");
        assert_eq!(log.len(), 1);
        assert!(matches!(
            log.remove(&id),
            Err(NavigationError::EntryNotFound(_))
        ));
    }

    #[test]
    fn test_clear_empties() {
        let mut log = HistoryLog::new();
        log.record("https://a.com", "A", true);
        log.record("https://b.com", "B", true);

        log.clear();

        assert!(log.is_empty());
    }

    #[test]
    fn test_search_matches_url_and_title() {
        let mut log = HistoryLog::new();
        log.record("https://rust-lang.org", "Rust", true);
        log.record("https://example.com", "Crab facts", true);

        assert_eq!(log.search("rust").len(), 1);
        assert_eq!(log.search("CRAB").len(), 1);
        assert!(log.search("python").is_empty());
    }
}
