//! Haven Core
//!
//! Central coordination layer for the Haven shell. One explicit state
//! container ([`Browser`]) owns every store, and every user action is a
//! synchronous, total transition on it. The presentation layer is a pure
//! reader of this state.

mod bookmarks;
mod browser;
mod error;
mod prefs;
mod view;

pub use bookmarks::{Bookmark, BookmarkStore};
pub use browser::{Browser, ContentMode};
pub use error::CoreError;
pub use prefs::{PrefToggle, Preferences, Profile};
pub use view::{PanelSection, SearchSession, ViewState};

// Re-export core components
pub use haven_downloads::{format_size, Download, DownloadError, DownloadShelf, DownloadState};
pub use haven_extensions::{Extension, ExtensionError, ExtensionRegistry};
pub use haven_navigation::{
    resolve, HistoryEntry, HistoryLog, InputResolution, NavStack, NavigationError,
};
pub use haven_safety::{classify, SafetyLevel, Verdict};
pub use haven_search::{search, SearchResult, RESULTS_PER_QUERY};
pub use haven_tabs::{Tab, TabError, TabStrip, NEW_TAB_TITLE};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
