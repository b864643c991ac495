//! Configuration validation.

use crate::browsers::registry;
use crate::config::types::VigilConfig;
use crate::deadline::types::parse_utc_offset;
use crate::errors::ConfigError;

/// Validate a merged configuration before it is used.
pub fn validate_config(config: &VigilConfig) -> Result<(), ConfigError> {
    if let Some(browser) = &config.browser.preferred {
        if !registry::is_valid_browser(browser) {
            return Err(ConfigError::InvalidBrowser {
                browser: browser.clone(),
            });
        }
    }

    if let Some(sleep_secs) = config.reload.sleep_secs {
        if sleep_secs < 0.0 || !sleep_secs.is_finite() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("reload.sleep_secs must be non-negative, got {}", sleep_secs),
            });
        }
    }

    if let Some(poll_interval) = config.automation.poll_interval_secs {
        if poll_interval <= 0.0 || !poll_interval.is_finite() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "automation.poll_interval_secs must be positive, got {}",
                    poll_interval
                ),
            });
        }
    }

    if let Some(confidence) = config.automation.confidence {
        if !(confidence > 0.0 && confidence <= 1.0) {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "automation.confidence must be in (0, 1], got {}",
                    confidence
                ),
            });
        }
    }

    if let Some(delay) = config.automation.match_retry_delay_secs {
        if delay < 0.0 || !delay.is_finite() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "automation.match_retry_delay_secs must be non-negative, got {}",
                    delay
                ),
            });
        }
    }

    if let Some(pause) = config.automation.pause_secs {
        if pause < 0.0 || !pause.is_finite() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("automation.pause_secs must be non-negative, got {}", pause),
            });
        }
    }

    if let Some(attempts) = config.automation.match_attempts {
        if attempts == 0 {
            return Err(ConfigError::InvalidConfiguration {
                message: "automation.match_attempts must be at least 1".to_string(),
            });
        }
    }

    if let Some(session_secs) = config.deadline.session_secs {
        if session_secs <= 0.0 || !session_secs.is_finite() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "deadline.session_secs must be positive, got {}",
                    session_secs
                ),
            });
        }
    }

    if let Some(margin_secs) = config.deadline.margin_secs {
        if margin_secs < 0.0 || !margin_secs.is_finite() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "deadline.margin_secs must be non-negative, got {}",
                    margin_secs
                ),
            });
        }
    }

    if let Some(offset) = &config.deadline.utc_offset {
        if parse_utc_offset(offset).is_none() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "deadline.utc_offset '{}' is not a valid offset (expected e.g. '+09:00')",
                    offset
                ),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_valid() {
        assert!(validate_config(&VigilConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_browser_rejected() {
        let mut config = VigilConfig::default();
        config.browser.preferred = Some("netscape".to_string());

        let error = validate_config(&config).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidBrowser { .. }));
    }

    #[test]
    fn test_valid_browser_accepted() {
        let mut config = VigilConfig::default();
        config.browser.preferred = Some("Firefox".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_negative_sleep_rejected() {
        let mut config = VigilConfig::default();
        config.reload.sleep_secs = Some(-1.0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut config = VigilConfig::default();
        config.automation.poll_interval_secs = Some(0.0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_confidence_out_of_range_rejected() {
        let mut config = VigilConfig::default();
        config.automation.confidence = Some(1.5);
        assert!(validate_config(&config).is_err());

        config.automation.confidence = Some(0.0);
        assert!(validate_config(&config).is_err());

        config.automation.confidence = Some(0.8);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_negative_match_retry_delay_rejected() {
        let mut config = VigilConfig::default();
        config.automation.match_retry_delay_secs = Some(-0.5);
        assert!(validate_config(&config).is_err());

        config.automation.match_retry_delay_secs = Some(0.0);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_negative_pause_rejected() {
        let mut config = VigilConfig::default();
        config.automation.pause_secs = Some(-1.0);
        assert!(validate_config(&config).is_err());

        config.automation.pause_secs = Some(0.2);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_match_attempts_rejected() {
        let mut config = VigilConfig::default();
        config.automation.match_attempts = Some(0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_offset_rejected() {
        let mut config = VigilConfig::default();
        config.deadline.utc_offset = Some("Asia/Tokyo".to_string());
        assert!(validate_config(&config).is_err());

        config.deadline.utc_offset = Some("+09:00".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_session_rejected() {
        let mut config = VigilConfig::default();
        config.deadline.session_secs = Some(0.0);
        assert!(validate_config(&config).is_err());
    }
}
