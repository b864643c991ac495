//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.vigil/config.toml`
//! 3. **Project config** - `./.vigil/config.toml`
//! 4. **CLI arguments** - Command-line flags (applied by the command layer)

use std::fs;
use std::path::PathBuf;

use crate::config::defaults::vigil_dir;
use crate::config::types::{
    AutomationConfig, BrowserConfig, DeadlineConfig, ReloadConfig, VigilConfig,
};
use crate::config::validation::validate_config;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a present file fails to parse or the merged result
/// fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<VigilConfig, Box<dyn std::error::Error>> {
    let mut config = VigilConfig::default();

    // Load user config (file not found is expected, parse errors fail)
    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    // Load project config (file not found is expected, parse errors fail)
    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.vigil/config.toml.
fn load_user_config() -> Result<VigilConfig, Box<dyn std::error::Error>> {
    load_config_file(&vigil_dir().join("config.toml"))
}

/// Load the project configuration from ./.vigil/config.toml.
fn load_project_config() -> Result<VigilConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?.join(".vigil").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &PathBuf) -> Result<VigilConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: VigilConfig = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional values replace base values only if present.
pub fn merge_configs(base: VigilConfig, override_config: VigilConfig) -> VigilConfig {
    VigilConfig {
        browser: BrowserConfig {
            preferred: override_config
                .browser
                .preferred
                .or(base.browser.preferred),
        },
        reload: ReloadConfig {
            cycles: override_config.reload.cycles.or(base.reload.cycles),
            sleep_secs: override_config.reload.sleep_secs.or(base.reload.sleep_secs),
            url: override_config.reload.url.or(base.reload.url),
            shutdown: override_config.reload.shutdown || base.reload.shutdown,
        },
        automation: AutomationConfig {
            enabled: override_config.automation.enabled.or(base.automation.enabled),
            poll_interval_secs: override_config
                .automation
                .poll_interval_secs
                .or(base.automation.poll_interval_secs),
            template: override_config.automation.template.or(base.automation.template),
            confidence: override_config
                .automation
                .confidence
                .or(base.automation.confidence),
            click_offset_x: override_config
                .automation
                .click_offset_x
                .or(base.automation.click_offset_x),
            click_offset_y: override_config
                .automation
                .click_offset_y
                .or(base.automation.click_offset_y),
            match_attempts: override_config
                .automation
                .match_attempts
                .or(base.automation.match_attempts),
            match_retry_delay_secs: override_config
                .automation
                .match_retry_delay_secs
                .or(base.automation.match_retry_delay_secs),
            pause_secs: override_config.automation.pause_secs.or(base.automation.pause_secs),
        },
        deadline: DeadlineConfig {
            session_secs: override_config
                .deadline
                .session_secs
                .or(base.deadline.session_secs),
            margin_secs: override_config
                .deadline
                .margin_secs
                .or(base.deadline.margin_secs),
            utc_offset: override_config
                .deadline
                .utc_offset
                .or(base.deadline.utc_offset),
        },
    }
}
