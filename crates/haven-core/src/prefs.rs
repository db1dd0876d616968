//! User preferences and the local profile
//!
//! The toggles mirror the settings panel. They are advisory in a simulated
//! shell: nothing fetches, so "HTTPS only" and friends only change what the
//! panel displays.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub safe_browsing: bool,
    pub block_trackers: bool,
    pub https_only: bool,
    pub do_not_track: bool,
    pub clear_cookies_on_exit: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            safe_browsing: true,
            block_trackers: true,
            https_only: false,
            do_not_track: true,
            clear_cookies_on_exit: false,
        }
    }
}

/// One switch in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrefToggle {
    SafeBrowsing,
    BlockTrackers,
    HttpsOnly,
    DoNotTrack,
    ClearCookiesOnExit,
}

impl PrefToggle {
    pub const ALL: [PrefToggle; 5] = [
        PrefToggle::SafeBrowsing,
        PrefToggle::BlockTrackers,
        PrefToggle::HttpsOnly,
        PrefToggle::DoNotTrack,
        PrefToggle::ClearCookiesOnExit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PrefToggle::SafeBrowsing => "Safe browsing",
            PrefToggle::BlockTrackers => "Block trackers",
            PrefToggle::HttpsOnly => "HTTPS only",
            PrefToggle::DoNotTrack => "Do Not Track",
            PrefToggle::ClearCookiesOnExit => "Clear cookies on exit",
        }
    }

    /// Which settings group the switch renders under.
    pub fn group(&self) -> &'static str {
        match self {
            PrefToggle::SafeBrowsing | PrefToggle::BlockTrackers | PrefToggle::HttpsOnly => {
                "Security"
            }
            PrefToggle::DoNotTrack | PrefToggle::ClearCookiesOnExit => "Privacy",
        }
    }
}

impl Preferences {
    pub fn get(&self, toggle: PrefToggle) -> bool {
        match toggle {
            PrefToggle::SafeBrowsing => self.safe_browsing,
            PrefToggle::BlockTrackers => self.block_trackers,
            PrefToggle::HttpsOnly => self.https_only,
            PrefToggle::DoNotTrack => self.do_not_track,
            PrefToggle::ClearCookiesOnExit => self.clear_cookies_on_exit,
        }
    }

    /// Flip a switch and return the new value.
    pub fn toggle(&mut self, toggle: PrefToggle) -> bool {
        let slot = match toggle {
            PrefToggle::SafeBrowsing => &mut self.safe_browsing,
            PrefToggle::BlockTrackers => &mut self.block_trackers,
            PrefToggle::HttpsOnly => &mut self.https_only,
            PrefToggle::DoNotTrack => &mut self.do_not_track,
            PrefToggle::ClearCookiesOnExit => &mut self.clear_cookies_on_exit,
        };

        *slot = !*slot;
        tracing::info!(setting = toggle.label(), enabled = *slot, "Toggled setting");
        *slot
    }
}

/// Local profile shown in the profile panel. Purely cosmetic; nothing syncs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            email: "user@haven.example".to_string(),
        }
    }
}

impl Profile {
    /// Update the profile, ignoring blank values.
    pub fn update(&mut self, name: Option<String>, email: Option<String>) {
        if let Some(name) = name {
            let name = name.trim();
            if !name.is_empty() {
                self.name = name.to_string();
            }
        }
        if let Some(email) = email {
            let email = email.trim();
            if !email.is_empty() {
                self.email = email.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_settings_panel() {
        let prefs = Preferences::default();
        assert!(prefs.safe_browsing);
        assert!(prefs.block_trackers);
        assert!(!prefs.https_only);
        assert!(prefs.do_not_track);
        assert!(!prefs.clear_cookies_on_exit);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut prefs = Preferences::default();

        assert!(prefs.toggle(PrefToggle::HttpsOnly));
        assert!(prefs.get(PrefToggle::HttpsOnly));

        assert!(!prefs.toggle(PrefToggle::HttpsOnly));
        assert!(!prefs.get(PrefToggle::HttpsOnly));
    }

    #[test]
    fn test_toggle_leaves_other_switches() {
        let mut prefs = Preferences::default();
        prefs.toggle(PrefToggle::DoNotTrack);

        assert!(prefs.safe_browsing);
        assert!(prefs.block_trackers);
        assert!(!prefs.https_only);
        assert!(!prefs.clear_cookies_on_exit);
    }

    #[test]
    fn test_profile_update_ignores_blank() {
        let mut profile = Profile::default();
        profile.update(Some("  ".to_string()), Some("me@example.com".to_string()));

        assert_eq!(profile.name, "User");
        assert_eq!(profile.email, "me@example.com");
    }
}
