//! Haven Safety Classifier
//!
//! Maps a typed address to a safety verdict. The check is deliberately
//! naive: a case-insensitive substring match against a fixed keyword list,
//! then an https prefix check. An address with no danger keyword is treated
//! as safe even over plain http; the verdict only downgrades the message.

use serde::{Deserialize, Serialize};

/// Keywords that flag an address as dangerous wherever they appear.
const DANGER_KEYWORDS: &[&str] = &[
    "phishing",
    "malware",
    "virus",
    "hack",
    "scam",
    "fraud",
    "suspicious",
    "dangerous",
];

/// Scheme prefix that counts as an encrypted connection.
pub const SECURE_SCHEME: &str = "https://";

pub const DANGER_MESSAGE: &str = "Warning! This site may be dangerous";
pub const SECURE_MESSAGE: &str = "Secure connection";
pub const UNENCRYPTED_MESSAGE: &str = "Unsecured connection";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    /// A danger keyword matched somewhere in the address.
    Dangerous,
    /// No keyword matched and the address uses the secure scheme.
    Secure,
    /// No keyword matched but the connection is not encrypted.
    Unencrypted,
}

impl SafetyLevel {
    /// Collapse to the boolean verdict the shell displays.
    pub fn is_safe(&self) -> bool {
        !matches!(self, SafetyLevel::Dangerous)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyLevel::Dangerous => "dangerous",
            SafetyLevel::Secure => "secure",
            SafetyLevel::Unencrypted => "unencrypted",
        }
    }
}

impl std::fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification result for one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub level: SafetyLevel,
    pub message: &'static str,
}

impl Verdict {
    pub fn is_safe(&self) -> bool {
        self.level.is_safe()
    }
}

/// Classify an address.
pub fn classify(address: &str) -> Verdict {
    let lowered = address.to_lowercase();

    if DANGER_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return Verdict {
            level: SafetyLevel::Dangerous,
            message: DANGER_MESSAGE,
        };
    }

    if address.starts_with(SECURE_SCHEME) {
        return Verdict {
            level: SafetyLevel::Secure,
            message: SECURE_MESSAGE,
        };
    }

    Verdict {
        level: SafetyLevel::Unencrypted,
        message: UNENCRYPTED_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_is_dangerous() {
        let verdict = classify("paypal-phishing.com");
        assert!(!verdict.is_safe());
        assert_eq!(verdict.message, DANGER_MESSAGE);
    }

    #[test]
    fn test_keywords_match_any_case() {
        for address in [
            "http://MALWARE-host.net",
            "https://example.com/ViRuS",
            "totally-a-SCAM.org",
            "Suspicious.site",
        ] {
            assert_eq!(classify(address).level, SafetyLevel::Dangerous, "{address}");
        }
    }

    #[test]
    fn test_every_listed_keyword_flags() {
        for kw in DANGER_KEYWORDS {
            let address = format!("https://{kw}.example.com");
            assert!(!classify(&address).is_safe(), "{kw}");
        }
    }

    #[test]
    fn test_https_is_secure() {
        let verdict = classify("https://github.com");
        assert!(verdict.is_safe());
        assert_eq!(verdict.level, SafetyLevel::Secure);
        assert_eq!(verdict.message, SECURE_MESSAGE);
    }

    #[test]
    fn test_plain_http_is_unencrypted_but_safe() {
        let verdict = classify("http://example.com");
        assert!(verdict.is_safe());
        assert_eq!(verdict.level, SafetyLevel::Unencrypted);
        assert_eq!(verdict.message, UNENCRYPTED_MESSAGE);
    }

    #[test]
    fn test_bare_domain_is_unencrypted() {
        assert_eq!(classify("example.com").level, SafetyLevel::Unencrypted);
    }

    #[test]
    fn test_keyword_beats_secure_scheme() {
        let verdict = classify("https://legit-hack.com");
        assert_eq!(verdict.level, SafetyLevel::Dangerous);
    }
}
