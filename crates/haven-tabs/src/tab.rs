//! Tab data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title shown for a tab that has not navigated anywhere yet.
pub const NEW_TAB_TITLE: &str = "New Tab";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier
    pub id: String,
    /// Display title (falls back to the address)
    pub title: String,
    /// Current address; empty for a blank tab
    pub url: String,
    /// Verdict of the last safety classification
    pub is_secure: bool,
    /// Favicon identifier if the simulated page supplied one
    pub favicon: Option<String>,
    /// User chose to view a flagged page anyway; reset on navigation
    pub risk_acknowledged: bool,
    /// When the tab was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Tab {
    /// A fresh blank tab.
    pub fn blank() -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            title: NEW_TAB_TITLE.to_string(),
            url: String::new(),
            is_secure: true,
            favicon: None,
            risk_acknowledged: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Point the tab at a new address. Per-page state (favicon, risk
    /// acknowledgement) does not survive navigation.
    pub fn navigate(&mut self, url: String, title: String, is_secure: bool) {
        self.url = url;
        self.title = title;
        self.is_secure = is_secure;
        self.favicon = None;
        self.risk_acknowledged = false;
        self.updated_at = Utc::now();
    }

    /// Re-assign the current address. The simulated shell has nothing to
    /// refetch, so only the modification time moves.
    pub fn reload(&mut self) {
        self.updated_at = Utc::now();
    }

    /// A tab that has not navigated anywhere.
    pub fn is_blank(&self) -> bool {
        self.url.is_empty()
    }

    /// Display title with fallback to the address.
    pub fn display_title(&self) -> &str {
        if !self.title.is_empty() {
            &self.title
        } else if !self.url.is_empty() {
            &self.url
        } else {
            NEW_TAB_TITLE
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_tab() {
        let tab = Tab::blank();
        assert!(tab.is_blank());
        assert!(tab.is_secure);
        assert_eq!(tab.display_title(), NEW_TAB_TITLE);
    }

    #[test]
    fn test_navigate_resets_page_state() {
        let mut tab = Tab::blank();
        tab.risk_acknowledged = true;
        tab.favicon = Some("globe".to_string());

        tab.navigate(
            "https://example.com".to_string(),
            "Example".to_string(),
            true,
        );

        assert_eq!(tab.url, "https://example.com");
        assert_eq!(tab.title, "Example");
        assert!(!tab.risk_acknowledged);
        assert!(tab.favicon.is_none());
        assert!(!tab.is_blank());
    }

    #[test]
    fn test_display_title_falls_back_to_url() {
        let mut tab = Tab::blank();
        tab.navigate("example.com".to_string(), String::new(), true);
        assert_eq!(tab.display_title(), "example.com");
    }

    #[test]
    fn test_serializes_with_plain_field_names() {
        let tab = Tab::blank();
        let json = serde_json::to_value(&tab).unwrap();
        assert!(json.get("is_secure").is_some());
        assert!(json.get("risk_acknowledged").is_some());
    }
}
