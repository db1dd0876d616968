//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] haven_tabs::TabError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] haven_navigation::NavigationError),

    #[error("Download error: {0}")]
    Download(#[from] haven_downloads::DownloadError),

    #[error("Extension error: {0}")]
    Extension(#[from] haven_extensions::ExtensionError),

    #[error("Configuration error: {0}")]
    Config(String),
}
