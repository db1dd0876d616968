//! Event handling
//!
//! The app wraps the [`Browser`] state container with the little bit of
//! state the terminal itself needs: an input mode, a list cursor and the
//! quit flag. Every key event maps to one controller call; rendering reads
//! the state back out and never mutates it.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use haven_core::{Browser, ContentMode, PanelSection, PrefToggle};

use crate::ui;

/// What keystrokes currently mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Keys are commands
    Browse,
    /// Keys type into the address bar
    EditAddress,
    /// Keys type into a profile field
    EditProfile(ProfileField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
}

pub struct App {
    pub(crate) browser: Browser,
    pub(crate) mode: Mode,
    /// Buffer for profile editing; address editing goes straight to state
    pub(crate) input: String,
    pub(crate) list_cursor: usize,
    pub(crate) should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            browser: Browser::new(),
            mode: Mode::Browse,
            input: String::new(),
            list_cursor: 0,
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> anyhow::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, &self))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Length of whatever list the cursor currently moves through.
    pub(crate) fn cursor_list_len(&self) -> usize {
        match self.browser.content_mode() {
            ContentMode::SearchResults => self
                .browser
                .search_session()
                .map(|s| s.results.len())
                .unwrap_or(0),
            ContentMode::HomePage => self.browser.bookmarks().len(),
            ContentMode::Panel(section) => match section {
                PanelSection::Extensions => self.browser.extensions().len(),
                PanelSection::Settings => PrefToggle::ALL.len(),
                PanelSection::History => self.browser.history().len(),
                PanelSection::Bookmarks => self.browser.bookmarks().len(),
                PanelSection::Downloads => self.browser.downloads().len(),
                PanelSection::Profile => 2,
            },
            _ => 0,
        }
    }

    /// Cursor clamped to the current list; lists shrink under it.
    pub(crate) fn selection(&self) -> usize {
        let len = self.cursor_list_len();
        if len == 0 {
            0
        } else {
            self.list_cursor.min(len - 1)
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::EditAddress => self.handle_address_key(key),
            Mode::EditProfile(field) => self.handle_profile_key(key, field),
            Mode::Browse => self.handle_browse_key(key),
        }
    }

    fn handle_address_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Enter => {
                self.browser.submit_address();
                self.mode = Mode::Browse;
                self.list_cursor = 0;
            }
            KeyCode::Backspace => {
                let mut text = self.browser.address_text().to_string();
                text.pop();
                self.browser.set_address_text(text);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut text = self.browser.address_text().to_string();
                text.push(c);
                self.browser.set_address_text(text);
            }
            _ => {}
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent, field: ProfileField) {
        match key.code {
            KeyCode::Esc => {
                self.input.clear();
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => {
                let value = Some(std::mem::take(&mut self.input));
                match field {
                    ProfileField::Name => self.browser.set_profile(value, None),
                    ProfileField::Email => self.browser.set_profile(None, value),
                }
                self.mode = Mode::Browse;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        // Warning interstitial captures its two answers first
        if self.browser.content_mode() == ContentMode::Warning {
            match key.code {
                KeyCode::Esc | KeyCode::Char('g') => {
                    self.browser.go_home();
                    return;
                }
                KeyCode::Char('p') => {
                    self.browser.acknowledge_risk();
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }

            KeyCode::Char('/') | KeyCode::Char('l') => {
                // Start a fresh entry; the old address stays on the tab
                self.browser.set_address_text(String::new());
                self.mode = Mode::EditAddress;
            }

            // Navigation
            KeyCode::Left => self.browser.go_back(),
            KeyCode::Right => self.browser.go_forward(),
            KeyCode::Char('r') => self.browser.reload(),
            KeyCode::Char('g') => self.browser.go_home(),

            // Tabs
            KeyCode::Char('t') => {
                self.browser.add_tab();
                self.mode = Mode::EditAddress;
            }
            KeyCode::Char('w') => {
                let _ = self.browser.close_active_tab();
            }
            KeyCode::Char('u') => {
                let _ = self.browser.restore_last_closed_tab();
            }
            KeyCode::Tab => self.browser.next_tab(),
            KeyCode::BackTab => self.browser.previous_tab(),

            // Chrome
            KeyCode::Char('m') => self.browser.toggle_sidebar(),
            KeyCode::Char('f') => self.browser.toggle_bookmark(),
            KeyCode::Esc => self.browser.close_panel(),

            // Side-panel sections
            KeyCode::Char('1') => self.open_section(PanelSection::Extensions),
            KeyCode::Char('2') => self.open_section(PanelSection::Settings),
            KeyCode::Char('3') => self.open_section(PanelSection::History),
            KeyCode::Char('4') => self.open_section(PanelSection::Bookmarks),
            KeyCode::Char('5') => self.open_section(PanelSection::Downloads),
            KeyCode::Char('6') => self.open_section(PanelSection::Profile),

            // List movement
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_cursor = self.selection().saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.cursor_list_len();
                if len > 0 {
                    self.list_cursor = (self.selection() + 1).min(len - 1);
                }
            }

            KeyCode::Enter | KeyCode::Char(' ') => self.activate_selection(),
            KeyCode::Delete | KeyCode::Char('x') => self.remove_selection(),
            KeyCode::Char('c') => self.clear_history_if_open(),

            _ => {}
        }
    }

    fn open_section(&mut self, section: PanelSection) {
        self.browser.set_section(section);
        self.list_cursor = 0;
    }

    /// Enter/space on the item under the cursor.
    fn activate_selection(&mut self) {
        let index = self.selection();

        match self.browser.content_mode() {
            ContentMode::SearchResults => {
                if let Some(id) = self
                    .browser
                    .search_session()
                    .and_then(|s| s.results.get(index))
                    .map(|r| r.id)
                {
                    let _ = self.browser.open_search_result(id);
                    self.list_cursor = 0;
                }
            }
            ContentMode::HomePage => {
                if let Some(id) = self
                    .browser
                    .bookmarks()
                    .list()
                    .get(index)
                    .map(|b| b.id.clone())
                {
                    let _ = self.browser.open_bookmark(&id);
                }
            }
            ContentMode::Panel(PanelSection::Extensions) => {
                if let Some(id) = self
                    .browser
                    .extensions()
                    .list()
                    .get(index)
                    .map(|e| e.id.clone())
                {
                    let _ = self.browser.toggle_extension(&id);
                }
            }
            ContentMode::Panel(PanelSection::Settings) => {
                if let Some(toggle) = PrefToggle::ALL.get(index).copied() {
                    self.browser.toggle_preference(toggle);
                }
            }
            ContentMode::Panel(PanelSection::History) => {
                if let Some(url) = self
                    .browser
                    .history()
                    .entries()
                    .get(index)
                    .map(|e| e.url.clone())
                {
                    self.browser.set_address_text(url);
                    self.browser.submit_address();
                }
            }
            ContentMode::Panel(PanelSection::Bookmarks) => {
                if let Some(id) = self
                    .browser
                    .bookmarks()
                    .list()
                    .get(index)
                    .map(|b| b.id.clone())
                {
                    let _ = self.browser.open_bookmark(&id);
                }
            }
            ContentMode::Panel(PanelSection::Downloads) => {
                if let Some(id) = self
                    .browser
                    .downloads()
                    .list()
                    .get(index)
                    .map(|d| d.id.clone())
                {
                    let _ = self.browser.toggle_download(&id);
                }
            }
            ContentMode::Panel(PanelSection::Profile) => {
                let field = if index == 0 {
                    ProfileField::Name
                } else {
                    ProfileField::Email
                };
                self.input = match field {
                    ProfileField::Name => self.browser.profile().name.clone(),
                    ProfileField::Email => self.browser.profile().email.clone(),
                };
                self.mode = Mode::EditProfile(field);
            }
            _ => {}
        }
    }

    /// Delete/x on the item under the cursor (history and bookmarks only).
    fn remove_selection(&mut self) {
        let index = self.selection();

        match self.browser.content_mode() {
            ContentMode::Panel(PanelSection::History) => {
                if let Some(id) = self
                    .browser
                    .history()
                    .entries()
                    .get(index)
                    .map(|e| e.id.clone())
                {
                    let _ = self.browser.remove_history_entry(&id);
                }
            }
            ContentMode::Panel(PanelSection::Bookmarks) => {
                if let Some(id) = self
                    .browser
                    .bookmarks()
                    .list()
                    .get(index)
                    .map(|b| b.id.clone())
                {
                    let _ = self.browser.remove_bookmark(&id);
                }
            }
            _ => {}
        }
    }

    fn clear_history_if_open(&mut self) {
        if self.browser.content_mode() == ContentMode::Panel(PanelSection::History) {
            self.browser.clear_history();
            self.list_cursor = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_address(app: &mut App, text: &str) {
        app.handle_key(key(KeyCode::Char('/')));
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn test_typing_an_address_navigates() {
        let mut app = App::new();
        type_address(&mut app, "https://github.com");

        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.browser.tabs().active().url, "https://github.com");
        assert_eq!(app.browser.content_mode(), ContentMode::Page);
    }

    #[test]
    fn test_typing_a_query_opens_results_and_enter_opens_one() {
        let mut app = App::new();
        type_address(&mut app, "cats");
        assert_eq!(app.browser.content_mode(), ContentMode::SearchResults);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.browser.content_mode(), ContentMode::Page);
        assert!(!app.browser.tabs().active().is_blank());
    }

    #[test]
    fn test_dangerous_page_warning_keys() {
        let mut app = App::new();
        type_address(&mut app, "free-malware.com");
        assert_eq!(app.browser.content_mode(), ContentMode::Warning);

        // Proceed anyway
        app.handle_key(key(KeyCode::Char('p')));
        assert_eq!(app.browser.content_mode(), ContentMode::Page);
    }

    #[test]
    fn test_tab_keys() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.browser.tabs().len(), 2);
        // New tab drops into the address bar
        assert_eq!(app.mode, Mode::EditAddress);

        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('w')));
        assert_eq!(app.browser.tabs().len(), 1);
    }

    #[test]
    fn test_section_digit_opens_panel_and_space_toggles() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(
            app.browser.content_mode(),
            ContentMode::Panel(PanelSection::Extensions)
        );

        let before = app.browser.extensions().list()[0].enabled;
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.browser.extensions().list()[0].enabled, !before);
    }

    #[test]
    fn test_history_remove_and_clear_keys() {
        let mut app = App::new();
        type_address(&mut app, "https://a.com");
        type_address(&mut app, "https://b.com");

        app.handle_key(key(KeyCode::Char('3')));
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.browser.history().len(), 1);

        app.handle_key(key(KeyCode::Char('c')));
        assert!(app.browser.history().is_empty());
    }

    #[test]
    fn test_cursor_clamps_to_shrinking_lists() {
        let mut app = App::new();
        type_address(&mut app, "https://a.com");
        type_address(&mut app, "https://b.com");
        app.handle_key(key(KeyCode::Char('3')));

        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selection(), 1);

        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.selection(), 0);
    }

    #[test]
    fn test_profile_editing() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('6')));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::EditProfile(ProfileField::Name));

        for _ in 0..app.input.len() {
            app.handle_key(key(KeyCode::Backspace));
        }
        for c in "Ada".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.browser.profile().name, "Ada");
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
