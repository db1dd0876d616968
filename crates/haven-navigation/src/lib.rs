//! Haven Navigation System
//!
//! Address bar input resolution plus the two navigation records:
//! - the back/forward stack of directly submitted addresses, and
//! - the visit history log shown in the history panel.

mod error;
mod history;
mod input;
mod stack;

pub use error::NavigationError;
pub use history::{HistoryEntry, HistoryLog};
pub use input::{resolve, InputResolution};
pub use stack::NavStack;

pub type Result<T> = std::result::Result<T, NavigationError>;
