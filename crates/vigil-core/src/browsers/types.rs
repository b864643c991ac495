//! Browser kind definitions.

use serde::{Deserialize, Serialize};

/// Supported desktop browsers.
///
/// Each variant represents a browser the reload loop knows how to launch
/// on at least one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    Chrome,
    Edge,
    Firefox,
    Safari,
}

impl BrowserKind {
    /// Get the canonical string name for this browser kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chrome => "chrome",
            BrowserKind::Edge => "edge",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Safari => "safari",
        }
    }

    /// Parse a browser kind from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chrome" => Some(BrowserKind::Chrome),
            "edge" => Some(BrowserKind::Edge),
            "firefox" => Some(BrowserKind::Firefox),
            "safari" => Some(BrowserKind::Safari),
            _ => None,
        }
    }

    /// Get all supported browser kinds.
    pub fn all() -> &'static [BrowserKind] {
        &[
            BrowserKind::Chrome,
            BrowserKind::Edge,
            BrowserKind::Firefox,
            BrowserKind::Safari,
        ]
    }
}

impl std::fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BrowserKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Unknown browser '{}'. Supported: {}",
                s,
                BrowserKind::all()
                    .iter()
                    .map(|b| b.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}
