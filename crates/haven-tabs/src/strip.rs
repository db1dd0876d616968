//! Tab strip: the ordered open tabs plus the active cursor
//!
//! Invariants: tab ids are unique, the strip is never empty, and the active
//! id always names a tab in the strip. Closing the last tab immediately
//! creates a blank replacement.

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::tab::Tab;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabStrip {
    tabs: Vec<Tab>,
    active_id: String,
}

impl TabStrip {
    /// A strip with a single blank tab.
    pub fn new() -> Self {
        let tab = Tab::blank();
        Self {
            active_id: tab.id.clone(),
            tabs: vec![tab],
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    /// The active tab. The strip is never empty, so this always resolves.
    pub fn active(&self) -> &Tab {
        self.tabs
            .iter()
            .find(|tab| tab.id == self.active_id)
            .unwrap_or(&self.tabs[0])
    }

    pub fn active_mut(&mut self) -> &mut Tab {
        let index = self
            .tabs
            .iter()
            .position(|tab| tab.id == self.active_id)
            .unwrap_or(0);
        &mut self.tabs[index]
    }

    pub fn get(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    /// Make a tab active.
    pub fn activate(&mut self, id: &str) -> Result<&Tab> {
        let index = self
            .position(id)
            .ok_or_else(|| TabError::NotFound(id.to_string()))?;

        self.active_id = self.tabs[index].id.clone();
        tracing::debug!(tab_id = %self.active_id, "Activated tab");

        Ok(&self.tabs[index])
    }

    /// Activate the tab after the active one, wrapping around.
    pub fn activate_next(&mut self) {
        if let Some(index) = self.position(&self.active_id.clone()) {
            let next = (index + 1) % self.tabs.len();
            self.active_id = self.tabs[next].id.clone();
        }
    }

    /// Activate the tab before the active one, wrapping around.
    pub fn activate_previous(&mut self) {
        if let Some(index) = self.position(&self.active_id.clone()) {
            let prev = (index + self.tabs.len() - 1) % self.tabs.len();
            self.active_id = self.tabs[prev].id.clone();
        }
    }

    /// Open a fresh blank tab and make it active.
    pub fn add(&mut self) -> &Tab {
        let tab = Tab::blank();
        tracing::info!(tab_id = %tab.id, "Opened new tab");

        self.active_id = tab.id.clone();
        self.tabs.push(tab);
        &self.tabs[self.tabs.len() - 1]
    }

    /// Re-insert a previously open tab at a position and make it active.
    pub fn insert_at(&mut self, index: usize, tab: Tab) {
        let index = index.min(self.tabs.len());
        self.active_id = tab.id.clone();
        self.tabs.insert(index, tab);
    }

    /// Close a tab and return it. Closing the active tab selects its
    /// neighbor (the tab that slid into its slot, else the new last tab).
    /// Closing the only tab leaves a fresh blank one behind.
    pub fn close(&mut self, id: &str) -> Result<Tab> {
        let index = self
            .position(id)
            .ok_or_else(|| TabError::NotFound(id.to_string()))?;

        let removed = self.tabs.remove(index);
        tracing::info!(tab_id = %removed.id, "Closed tab");

        if self.tabs.is_empty() {
            let replacement = Tab::blank();
            self.active_id = replacement.id.clone();
            self.tabs.push(replacement);
        } else if removed.id == self.active_id {
            let neighbor = index.min(self.tabs.len() - 1);
            self.active_id = self.tabs[neighbor].id.clone();
        }

        Ok(removed)
    }
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strip_has_one_blank_tab() {
        let strip = TabStrip::new();
        assert_eq!(strip.len(), 1);
        assert!(strip.active().is_blank());
    }

    #[test]
    fn test_add_activates_new_tab() {
        let mut strip = TabStrip::new();
        let first = strip.active_id().to_string();

        strip.add();

        assert_eq!(strip.len(), 2);
        assert_ne!(strip.active_id(), first);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut strip = TabStrip::new();
        for _ in 0..10 {
            strip.add();
        }

        let mut ids: Vec<&str> = strip.tabs().iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 11);
    }

    #[test]
    fn test_close_only_tab_leaves_a_fresh_one() {
        let mut strip = TabStrip::new();
        let original = strip.active_id().to_string();

        strip.close(&original).unwrap();

        assert_eq!(strip.len(), 1);
        assert_ne!(strip.active_id(), original);
        assert!(strip.active().is_blank());
    }

    #[test]
    fn test_close_active_selects_neighbor() {
        let mut strip = TabStrip::new();
        strip.add();
        strip.add();

        // Activate the middle tab, then close it; the tab that slid into
        // its slot becomes active.
        let middle = strip.tabs()[1].id.clone();
        let third = strip.tabs()[2].id.clone();
        strip.activate(&middle).unwrap();

        strip.close(&middle).unwrap();

        assert_eq!(strip.active_id(), third);
    }

    #[test]
    fn test_close_last_active_selects_previous() {
        let mut strip = TabStrip::new();
        let first = strip.active_id().to_string();
        strip.add();
        let second = strip.active_id().to_string();

        strip.close(&second).unwrap();

        assert_eq!(strip.active_id(), first);
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut strip = TabStrip::new();
        let first = strip.active_id().to_string();
        strip.add();
        let second = strip.active_id().to_string();

        strip.close(&first).unwrap();

        assert_eq!(strip.active_id(), second);
    }

    #[test]
    fn test_close_unknown_tab_errors() {
        let mut strip = TabStrip::new();
        assert!(matches!(strip.close("nope"), Err(TabError::NotFound(_))));
        assert_eq!(strip.len(), 1);
    }

    #[test]
    fn test_activate_cycling_wraps() {
        let mut strip = TabStrip::new();
        let first = strip.active_id().to_string();
        strip.add();

        strip.activate_next();
        assert_eq!(strip.active_id(), first);

        strip.activate_previous();
        assert_ne!(strip.active_id(), first);
    }
}
