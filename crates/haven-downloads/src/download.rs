//! Download data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadState {
    /// Transfer finished
    Completed,
    /// Transfer in progress
    Downloading,
    /// Transfer paused by the user
    Paused,
}

impl DownloadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadState::Completed => "completed",
            DownloadState::Downloading => "downloading",
            DownloadState::Paused => "paused",
        }
    }
}

impl std::fmt::Display for DownloadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DownloadState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(DownloadState::Completed),
            "downloading" => Ok(DownloadState::Downloading),
            "paused" => Ok(DownloadState::Paused),
            _ => Err(format!("Unknown download state: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Download {
    pub id: String,
    pub file_name: String,
    pub url: String,
    pub total_bytes: u64,
    /// Percentage 0-100
    pub progress: u8,
    pub state: DownloadState,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Download {
    pub fn new(
        file_name: impl Into<String>,
        url: impl Into<String>,
        total_bytes: u64,
        progress: u8,
        state: DownloadState,
    ) -> Self {
        let now = Utc::now();
        let progress = progress.min(100);

        Self {
            id: Uuid::new_v4().to_string(),
            file_name: file_name.into(),
            url: url.into(),
            total_bytes,
            progress,
            state,
            created_at: now,
            completed_at: (state == DownloadState::Completed).then_some(now),
        }
    }

    pub fn can_pause(&self) -> bool {
        self.state == DownloadState::Downloading
    }

    pub fn can_resume(&self) -> bool {
        self.state == DownloadState::Paused
    }

    /// Human-readable size of the full file.
    pub fn size_display(&self) -> String {
        format_size(self.total_bytes)
    }
}

/// Format a byte count the way the shelf displays it.
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_download_clamps_progress() {
        let download = Download::new(
            "file.zip",
            "https://files.example.com/file.zip",
            1000,
            250,
            DownloadState::Downloading,
        );
        assert_eq!(download.progress, 100);
    }

    #[test]
    fn test_completed_gets_completion_time() {
        let done = Download::new("a.pdf", "https://x.com/a.pdf", 10, 100, DownloadState::Completed);
        assert!(done.completed_at.is_some());

        let running = Download::new("b.pdf", "https://x.com/b.pdf", 10, 5, DownloadState::Downloading);
        assert!(running.completed_at.is_none());
    }

    #[test]
    fn test_pause_resume_guards() {
        let running = Download::new("a", "https://x.com/a", 10, 5, DownloadState::Downloading);
        assert!(running.can_pause());
        assert!(!running.can_resume());

        let paused = Download::new("b", "https://x.com/b", 10, 5, DownloadState::Paused);
        assert!(!paused.can_pause());
        assert!(paused.can_resume());

        let done = Download::new("c", "https://x.com/c", 10, 100, DownloadState::Completed);
        assert!(!done.can_pause());
        assert!(!done.can_resume());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2_457_600), "2.3 MB");
        assert_eq!(format_size(1_073_741_824), "1.0 GB");
    }

    #[test]
    fn test_state_serializes_lowercase() {
        let json = serde_json::to_string(&DownloadState::Downloading).unwrap();
        assert_eq!(json, "\"downloading\"");
        assert_eq!(
            "paused".parse::<DownloadState>().unwrap(),
            DownloadState::Paused
        );
    }
}
