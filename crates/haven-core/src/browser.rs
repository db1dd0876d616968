//! Main browser state container
//!
//! One struct owns all state; every user action is a synchronous, total
//! transition. The presentation layer never mutates anything directly.

use haven_downloads::DownloadShelf;
use haven_extensions::ExtensionRegistry;
use haven_navigation::{resolve, HistoryLog, InputResolution, NavStack};
use haven_safety::{classify, Verdict};
use haven_search::search;
use haven_tabs::{Tab, TabStrip};

use crate::bookmarks::{Bookmark, BookmarkStore};
use crate::error::CoreError;
use crate::prefs::{PrefToggle, Preferences, Profile};
use crate::view::{PanelSection, SearchSession, ViewState};
use crate::Result;

/// How many closed tabs can be brought back.
const MAX_RECENTLY_CLOSED: usize = 20;

/// What the content area should currently render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    /// A side-panel section fills the content area
    Panel(PanelSection),
    /// Mock search results
    SearchResults,
    /// Welcome banner, popular sites and feature cards
    HomePage,
    /// Dangerous-site interstitial for the active tab
    Warning,
    /// The simulated page of the active tab
    Page,
}

#[derive(Debug, Clone)]
struct ClosedTab {
    tab: Tab,
    index: usize,
}

/// Main browser instance: the single application state tree.
pub struct Browser {
    tabs: TabStrip,
    nav: NavStack,
    history: HistoryLog,
    bookmarks: BookmarkStore,
    downloads: DownloadShelf,
    extensions: ExtensionRegistry,
    profile: Profile,
    preferences: Preferences,
    view: ViewState,
    search: Option<SearchSession>,
    recently_closed: Vec<ClosedTab>,
}

impl Browser {
    /// A fresh shell: one blank tab, seeded bookmarks, downloads and
    /// extensions, everything else empty.
    pub fn new() -> Self {
        tracing::info!("Initializing browser state");

        Self {
            tabs: TabStrip::new(),
            nav: NavStack::new(),
            history: HistoryLog::new(),
            bookmarks: BookmarkStore::seeded(),
            downloads: DownloadShelf::seeded(),
            extensions: ExtensionRegistry::seeded(),
            profile: Profile::default(),
            preferences: Preferences::default(),
            view: ViewState::default(),
            search: None,
            recently_closed: Vec::new(),
        }
    }

    // === Read access for the presentation layer ===

    pub fn tabs(&self) -> &TabStrip {
        &self.tabs
    }

    pub fn nav(&self) -> &NavStack {
        &self.nav
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn bookmarks(&self) -> &BookmarkStore {
        &self.bookmarks
    }

    pub fn downloads(&self) -> &DownloadShelf {
        &self.downloads
    }

    pub fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn search_session(&self) -> Option<&SearchSession> {
        self.search.as_ref()
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    pub fn has_recently_closed(&self) -> bool {
        !self.recently_closed.is_empty()
    }

    /// Verdict for the address text as typed; `None` while the bar is empty.
    pub fn current_verdict(&self) -> Option<Verdict> {
        let text = self.view.address_text.trim();
        if text.is_empty() {
            None
        } else {
            Some(classify(text))
        }
    }

    /// The active tab carries a flagged page the user has not waved through.
    pub fn interstitial_visible(&self) -> bool {
        let tab = self.tabs.active();
        !tab.is_blank() && !tab.is_secure && !tab.risk_acknowledged
    }

    /// What the content area should render right now.
    pub fn content_mode(&self) -> ContentMode {
        if self.view.panel_open {
            return ContentMode::Panel(self.view.active_section);
        }
        if self.search.is_some() {
            return ContentMode::SearchResults;
        }
        if self.interstitial_visible() {
            return ContentMode::Warning;
        }

        let tab = self.tabs.active();
        if tab.is_blank() || (self.view.show_home_page && self.view.address_text.is_empty()) {
            return ContentMode::HomePage;
        }

        ContentMode::Page
    }

    // === Address bar ===

    pub fn address_text(&self) -> &str {
        &self.view.address_text
    }

    pub fn set_address_text(&mut self, text: String) {
        self.view.address_text = text;
    }

    /// Submit whatever is in the address bar. Empty input is a no-op;
    /// query-looking input goes to the mock search provider; everything
    /// else navigates the active tab.
    pub fn submit_address(&mut self) {
        let Some(resolution) = resolve(&self.view.address_text) else {
            return;
        };

        match resolution {
            InputResolution::Navigate(address) => {
                tracing::info!(address = %address, "Navigating");
                self.apply_address(&address, None, true);
                self.nav.push(address);
            }
            InputResolution::Search(query) => {
                tracing::info!(query = %query, "Searching");
                let results = search(&query);
                self.search = Some(SearchSession { query, results });
                self.view.show_home_page = false;
                self.view.panel_open = false;
            }
        }
    }

    /// Classify an address and apply it to the active tab. The nav stack is
    /// the caller's business: only direct submissions belong there.
    fn apply_address(&mut self, address: &str, title: Option<&str>, record_history: bool) {
        let verdict = classify(address);
        let title = title.unwrap_or(address).to_string();

        self.tabs
            .active_mut()
            .navigate(address.to_string(), title.clone(), verdict.is_safe());

        if record_history {
            self.history.record(address, &title, verdict.is_safe());
        }

        self.view.address_text = address.to_string();
        self.view.show_home_page = false;
        self.view.panel_open = false;
        self.search = None;
    }

    // === Navigation ===

    pub fn can_go_back(&self) -> bool {
        self.nav.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.nav.can_go_forward()
    }

    /// Step back in the stack and re-apply that address. No-op at the start.
    pub fn go_back(&mut self) {
        if let Some(address) = self.nav.back().map(str::to_string) {
            self.apply_address(&address, None, false);
        }
    }

    /// Step forward in the stack and re-apply that address. No-op at the end.
    pub fn go_forward(&mut self) {
        if let Some(address) = self.nav.forward().map(str::to_string) {
            self.apply_address(&address, None, false);
        }
    }

    /// Re-assign the current address. Nothing is fetched.
    pub fn reload(&mut self) {
        let tab = self.tabs.active_mut();
        if tab.is_blank() {
            return;
        }
        tracing::debug!(url = %tab.url, "Reloading tab");
        tab.reload();
    }

    /// Clear the address bar and show the home page. Tab contents stay.
    pub fn go_home(&mut self) {
        self.view.address_text.clear();
        self.view.show_home_page = true;
        self.view.panel_open = false;
        self.search = None;
    }

    // === Tabs ===

    pub fn add_tab(&mut self) {
        self.tabs.add();
        self.go_home();
    }

    pub fn activate_tab(&mut self, id: &str) -> Result<()> {
        self.tabs.activate(id)?;
        Ok(())
    }

    pub fn next_tab(&mut self) {
        self.tabs.activate_next();
    }

    pub fn previous_tab(&mut self) {
        self.tabs.activate_previous();
    }

    /// Close a tab, remembering it for restore unless it was blank.
    pub fn close_tab(&mut self, id: &str) -> Result<()> {
        let index = self
            .tabs
            .position(id)
            .ok_or_else(|| haven_tabs::TabError::NotFound(id.to_string()))?;

        let removed = self.tabs.close(id)?;

        if !removed.is_blank() {
            self.recently_closed.push(ClosedTab {
                tab: removed,
                index,
            });
            if self.recently_closed.len() > MAX_RECENTLY_CLOSED {
                let overflow = self.recently_closed.len() - MAX_RECENTLY_CLOSED;
                self.recently_closed.drain(0..overflow);
            }
        }

        Ok(())
    }

    pub fn close_active_tab(&mut self) -> Result<()> {
        let id = self.tabs.active_id().to_string();
        self.close_tab(&id)
    }

    /// Bring back the most recently closed tab at its old position.
    pub fn restore_last_closed_tab(&mut self) -> Result<()> {
        let closed = self
            .recently_closed
            .pop()
            .ok_or_else(|| CoreError::Config("No recently closed tabs".to_string()))?;

        tracing::info!(url = %closed.tab.url, "Restoring closed tab");
        self.tabs.insert_at(closed.index, closed.tab);

        Ok(())
    }

    // === Bookmarks ===

    pub fn is_current_bookmarked(&self) -> bool {
        let tab = self.tabs.active();
        !tab.is_blank() && self.bookmarks.contains_url(&tab.url)
    }

    /// Star or unstar the active tab's address. Blank tabs have nothing to
    /// bookmark.
    pub fn toggle_bookmark(&mut self) {
        let tab = self.tabs.active();
        if tab.is_blank() {
            return;
        }

        let url = tab.url.clone();
        let title = tab.display_title().to_string();
        self.bookmarks.toggle(&url, &title);
    }

    pub fn remove_bookmark(&mut self, id: &str) -> Result<()> {
        self.bookmarks
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CoreError::Config("Bookmark not found".to_string()))
    }

    /// Navigate the active tab to a bookmark (home-page tile or panel row).
    /// Recorded in history; not on the nav stack.
    pub fn open_bookmark(&mut self, id: &str) -> Result<()> {
        let Bookmark { url, title, .. } = self
            .bookmarks
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::Config("Bookmark not found".to_string()))?;

        self.apply_address(&url, Some(&title), true);
        Ok(())
    }

    // === Search results ===

    /// Open one fabricated result: the tab takes the result's own security
    /// flag, a history entry is recorded and search mode ends.
    pub fn open_search_result(&mut self, result_id: usize) -> Result<()> {
        let result = self
            .search
            .as_ref()
            .and_then(|session| session.results.iter().find(|r| r.id == result_id))
            .cloned()
            .ok_or_else(|| CoreError::Config("Search result not found".to_string()))?;

        tracing::info!(url = %result.url, "Opening search result");

        self.tabs
            .active_mut()
            .navigate(result.url.clone(), result.title.clone(), result.is_secure);
        self.history
            .record(&result.url, &result.title, result.is_secure);

        self.view.address_text = result.url;
        self.view.show_home_page = false;
        self.view.panel_open = false;
        self.search = None;

        Ok(())
    }

    // === History ===

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn remove_history_entry(&mut self, id: &str) -> Result<()> {
        self.history.remove(id)?;
        Ok(())
    }

    // === Side panel & chrome ===

    pub fn set_section(&mut self, section: PanelSection) {
        self.view.active_section = section;
        self.view.panel_open = true;
    }

    pub fn close_panel(&mut self) {
        self.view.panel_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.view.sidebar_open = !self.view.sidebar_open;
    }

    // === Extensions, downloads, settings, profile ===

    pub fn toggle_extension(&mut self, id: &str) -> Result<bool> {
        Ok(self.extensions.toggle(id)?)
    }

    /// Pause a running download or resume a paused one.
    pub fn toggle_download(&mut self, id: &str) -> Result<()> {
        let download = self.downloads.get(id)?;

        if download.can_pause() {
            self.downloads.pause(id)?;
        } else if download.can_resume() {
            self.downloads.resume(id)?;
        }

        Ok(())
    }

    pub fn toggle_preference(&mut self, toggle: PrefToggle) -> bool {
        self.preferences.toggle(toggle)
    }

    pub fn set_profile(&mut self, name: Option<String>, email: Option<String>) {
        self.profile.update(name, email);
    }

    /// The user chose to view a flagged page anyway. Cleared by the tab's
    /// next navigation.
    pub fn acknowledge_risk(&mut self) {
        let tab = self.tabs.active_mut();
        if !tab.is_secure {
            tracing::warn!(url = %tab.url, "User dismissed safety warning");
            tab.risk_acknowledged = true;
        }
    }
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}
