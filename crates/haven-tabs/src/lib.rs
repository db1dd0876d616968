//! Haven Tab Management
//!
//! Tabs are simulated pages: a title, an address and a security flag. The
//! [`TabStrip`] owns the open tabs and the active cursor and enforces the
//! strip invariants (unique ids, at least one tab, closing the last tab
//! replaces it with a blank one).

mod error;
mod strip;
mod tab;

pub use error::TabError;
pub use strip::TabStrip;
pub use tab::{Tab, NEW_TAB_TITLE};

pub type Result<T> = std::result::Result<T, TabError>;
