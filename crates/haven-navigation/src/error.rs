//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("History entry not found: {0}")]
    EntryNotFound(String),
}
