//! Download shelf

use serde::{Deserialize, Serialize};

use crate::download::{Download, DownloadState};
use crate::error::DownloadError;
use crate::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadShelf {
    downloads: Vec<Download>,
}

impl DownloadShelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shelf every new profile starts with. Navigation never writes
    /// here; the records only move between paused and downloading when the
    /// user asks.
    pub fn seeded() -> Self {
        Self {
            downloads: vec![
                Download::new(
                    "quarterly-report.pdf",
                    "https://files.example.com/quarterly-report.pdf",
                    2_457_600,
                    100,
                    DownloadState::Completed,
                ),
                Download::new(
                    "vacation-photos.zip",
                    "https://photos.example.com/export/vacation-photos.zip",
                    148_897_792,
                    45,
                    DownloadState::Downloading,
                ),
                Download::new(
                    "conference-talk.mp4",
                    "https://media.example.org/talks/conference-talk.mp4",
                    734_003_200,
                    62,
                    DownloadState::Paused,
                ),
            ],
        }
    }

    pub fn list(&self) -> &[Download] {
        &self.downloads
    }

    pub fn get(&self, id: &str) -> Result<&Download> {
        self.downloads
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| DownloadError::NotFound(id.to_string()))
    }

    /// Downloads still moving (or able to move) bytes.
    pub fn active(&self) -> Vec<&Download> {
        self.downloads
            .iter()
            .filter(|d| d.state != DownloadState::Completed)
            .collect()
    }

    /// Pause an in-progress download.
    pub fn pause(&mut self, id: &str) -> Result<&Download> {
        self.transition(id, DownloadState::Downloading, DownloadState::Paused)
    }

    /// Resume a paused download.
    pub fn resume(&mut self, id: &str) -> Result<&Download> {
        self.transition(id, DownloadState::Paused, DownloadState::Downloading)
    }

    fn transition(
        &mut self,
        id: &str,
        expected: DownloadState,
        target: DownloadState,
    ) -> Result<&Download> {
        let index = self
            .downloads
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| DownloadError::NotFound(id.to_string()))?;

        let download = &mut self.downloads[index];
        if download.state != expected {
            return Err(DownloadError::InvalidTransition {
                from: download.state.to_string(),
                to: target.to_string(),
            });
        }

        download.state = target;
        tracing::info!(download_id = %download.id, state = %target, "Download state changed");

        Ok(&self.downloads[index])
    }

    pub fn len(&self) -> usize {
        self.downloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.downloads.is_empty()
    }
}
