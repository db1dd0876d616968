//! View state: sidebar sections and display-mode flags

use serde::{Deserialize, Serialize};

use haven_search::SearchResult;

/// The six side-panel sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelSection {
    Extensions,
    Settings,
    History,
    Bookmarks,
    Downloads,
    Profile,
}

impl PanelSection {
    pub const ALL: [PanelSection; 6] = [
        PanelSection::Extensions,
        PanelSection::Settings,
        PanelSection::History,
        PanelSection::Bookmarks,
        PanelSection::Downloads,
        PanelSection::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PanelSection::Extensions => "Extensions",
            PanelSection::Settings => "Settings",
            PanelSection::History => "History",
            PanelSection::Bookmarks => "Bookmarks",
            PanelSection::Downloads => "Downloads",
            PanelSection::Profile => "Profile",
        }
    }
}

/// UI flags and the address bar text. The address text is state, not a
/// widget buffer: the safety badge classifies it as the user types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewState {
    /// Which section the sidebar highlights
    pub active_section: PanelSection,
    /// Whether the main area shows the section instead of page content
    pub panel_open: bool,
    pub sidebar_open: bool,
    pub show_home_page: bool,
    pub address_text: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_section: PanelSection::Extensions,
            panel_open: false,
            sidebar_open: true,
            show_home_page: true,
            address_text: String::new(),
        }
    }
}

/// An in-flight mock search: the query plus its fabricated results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSession {
    pub query: String,
    pub results: Vec<SearchResult>,
}
