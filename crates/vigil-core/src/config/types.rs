//! Configuration type definitions for the vigil CLI.
//!
//! These types are deserialized from TOML config files and merged with CLI
//! flags by the command layer.
//!
//! # Example Configuration
//!
//! ```toml
//! [browser]
//! preferred = "chrome"
//!
//! [reload]
//! cycles = 24
//! sleep_secs = 1800.0
//! url = "https://colab.research.google.com/drive/..."
//!
//! [automation]
//! template = "~/.vigil/challenge.png"
//! confidence = 0.8
//!
//! [deadline]
//! session_secs = 43200.0
//! margin_secs = 600.0
//! utc_offset = "+09:00"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from `~/.vigil/config.toml` (user) then `./.vigil/config.toml`
/// (project); project values override user values, and CLI flags override
/// both.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VigilConfig {
    /// Browser preference
    #[serde(default)]
    pub browser: BrowserConfig,

    /// Reload loop settings
    #[serde(default)]
    pub reload: ReloadConfig,

    /// GUI automation settings
    #[serde(default)]
    pub automation: AutomationConfig,

    /// Deadline calculator settings
    #[serde(default)]
    pub deadline: DeadlineConfig,
}

/// Browser preference.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BrowserConfig {
    /// Preferred browser name (chrome, edge, firefox, safari).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred: Option<String>,
}

/// Reload loop settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReloadConfig {
    /// Number of reload cycles. Default: 24.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycles: Option<u32>,

    /// Sleep time per cycle in seconds. Default: 1800.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_secs: Option<f64>,

    /// Target URL to reload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Power the host off after the last cycle.
    #[serde(default)]
    pub shutdown: bool,
}

/// GUI automation settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AutomationConfig {
    /// Whether the polling/clicking branch is enabled. Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Polling interval in seconds. Default: 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_interval_secs: Option<f64>,

    /// Path to the challenge template image.
    /// Default: `~/.vigil/challenge.png`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    /// Match confidence threshold in (0, 1]. Default: 0.8.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    /// Click offset from the match's top-left corner, x component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_offset_x: Option<i32>,

    /// Click offset from the match's top-left corner, y component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_offset_y: Option<i32>,

    /// Screen lookup attempts per poll. Default: 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_attempts: Option<u32>,

    /// Delay between lookup attempts in seconds. Default: 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_retry_delay_secs: Option<f64>,

    /// Pause after each synthetic input operation in seconds. Default: 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_secs: Option<f64>,
}

/// Deadline calculator settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeadlineConfig {
    /// Maximum session time in seconds. Default: 43200 (12 h).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_secs: Option<f64>,

    /// Safety margin in seconds. Default: 600 (10 min).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_secs: Option<f64>,

    /// UTC offset the deadline is rendered in, e.g. "+09:00".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parses() {
        let config: VigilConfig = toml::from_str("").unwrap();
        assert!(config.browser.preferred.is_none());
        assert!(config.reload.cycles.is_none());
        assert!(!config.reload.shutdown);
        assert!(config.automation.enabled.is_none());
        assert!(config.deadline.session_secs.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let toml = r#"
            [browser]
            preferred = "firefox"

            [reload]
            cycles = 6
            sleep_secs = 300.0
            url = "https://example.com"
            shutdown = true

            [automation]
            enabled = false
            poll_interval_secs = 2.5
            template = "/tmp/challenge.png"
            confidence = 0.9
            click_offset_x = 100
            click_offset_y = 120
            match_attempts = 3
            match_retry_delay_secs = 0.5
            pause_secs = 0.2

            [deadline]
            session_secs = 21600.0
            margin_secs = 300.0
            utc_offset = "+00:00"
        "#;

        let config: VigilConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.browser.preferred.as_deref(), Some("firefox"));
        assert_eq!(config.reload.cycles, Some(6));
        assert_eq!(config.reload.sleep_secs, Some(300.0));
        assert!(config.reload.shutdown);
        assert_eq!(config.automation.enabled, Some(false));
        assert_eq!(config.automation.match_attempts, Some(3));
        assert_eq!(
            config.automation.template,
            Some(PathBuf::from("/tmp/challenge.png"))
        );
        assert_eq!(config.deadline.utc_offset.as_deref(), Some("+00:00"));
    }

    #[test]
    fn test_partial_section_parses() {
        let config: VigilConfig = toml::from_str("[reload]\ncycles = 2\n").unwrap();
        assert_eq!(config.reload.cycles, Some(2));
        assert!(config.reload.url.is_none());
    }
}
