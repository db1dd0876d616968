//! Haven Download Shelf
//!
//! Downloads are simulated: the shelf starts from seeded records and no
//! navigation ever touches them. The only mutations are user-driven pause
//! and resume transitions.

mod download;
mod error;
mod shelf;

pub use download::{format_size, Download, DownloadState};
pub use error::DownloadError;
pub use shelf::DownloadShelf;

pub type Result<T> = std::result::Result<T, DownloadError>;
