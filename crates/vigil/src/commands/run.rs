use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::Local;
use clap::ArgMatches;
use tracing::{error, info};

use vigil_core::BrowserKind;
use vigil_core::browsers::registry;
use vigil_core::config::{VigilConfig, defaults};
use vigil_core::logging;
use vigil_core::input::types::InputSettings;
use vigil_core::reload::types::{
    AutomationPlan, DEFAULT_CONFIDENCE, DEFAULT_CYCLES, DEFAULT_POLL_INTERVAL_SECS,
    DEFAULT_SLEEP_SECS, DEFAULT_URL, ReloadPlan,
};
use vigil_core::reload_ops;
use vigil_core::vision::types::RetryPolicy;

use super::helpers::load_config_with_warning;

/// How long the final "press Enter" prompt waits before exiting on its own.
const ACK_TIMEOUT: Duration = Duration::from_secs(60 * 60);

pub(crate) fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();

    let plan = build_plan(matches, &config)?;
    let automation = build_automation(matches, &config)?;

    info!(
        event = "cli.run_started",
        browser = plan.browser().as_str(),
        cycles = plan.cycles(),
        sleep_secs = plan.sleep().as_secs_f64(),
        gui_auto = automation.is_some()
    );

    if registry::is_browser_available(plan.browser().as_str()) == Some(false) {
        eprintln!(
            "Warning: {} does not look installed on this machine; launching may fail.",
            plan.browser()
        );
    }

    let started_at = Local::now();
    println!("Browser:        {}", plan.browser());
    println!(
        "Cycles:         {} x {:.0}s",
        plan.cycles(),
        plan.sleep().as_secs_f64()
    );
    println!("URL:            {}", plan.url());
    println!(
        "GUI automation: {}",
        if automation.is_some() {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!("Started:        {}", started_at.format("%Y-%m-%d %H:%M:%S"));
    println!(
        "Planned end:    {}",
        plan.planned_end(started_at).format("%Y-%m-%d %H:%M:%S")
    );

    let result = reload_ops::run(&plan, automation.as_ref(), |cycle, cycles| {
        println!(
            "Cycle {}/{} at {}",
            cycle,
            cycles,
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
    });

    match result {
        Ok(summary) => {
            info!(
                event = "cli.run_completed",
                cycles = summary.cycles_completed,
                challenges_dismissed = summary.challenges_dismissed
            );
            println!(
                "Completed {} cycles ({} challenges dismissed).",
                summary.cycles_completed, summary.challenges_dismissed
            );

            // The shutdown path never reaches an interactive terminal in
            // time to answer a prompt.
            if !plan.shutdown() {
                wait_for_ack();
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Reload loop failed: {}", e);
            error!(event = "cli.run_failed", error = %e);
            logging::log_failure(&e);
            Err(e.into())
        }
    }
}

/// Resolve the reload plan from CLI flags, config, and built-in defaults,
/// in that order of precedence.
fn build_plan(
    matches: &ArgMatches,
    config: &VigilConfig,
) -> Result<ReloadPlan, Box<dyn std::error::Error>> {
    let browser_name = matches
        .get_one::<String>("browser")
        .cloned()
        .or_else(|| config.browser.preferred.clone())
        .unwrap_or_else(|| registry::default_browser_name().to_string());

    let browser = BrowserKind::parse(&browser_name).ok_or_else(|| {
        format!(
            "Unknown browser '{}' (supported: {})",
            browser_name,
            registry::valid_browser_names().join(", ")
        )
    })?;

    let cycles = matches
        .get_one::<u32>("cycles")
        .copied()
        .or(config.reload.cycles)
        .unwrap_or(DEFAULT_CYCLES);

    let sleep_secs = matches
        .get_one::<f64>("sleep")
        .copied()
        .or(config.reload.sleep_secs)
        .unwrap_or(DEFAULT_SLEEP_SECS);
    if !sleep_secs.is_finite() || sleep_secs < 0.0 {
        return Err(format!("Sleep time must be a non-negative number, got {}", sleep_secs).into());
    }

    let url = matches
        .get_one::<String>("url")
        .cloned()
        .or_else(|| config.reload.url.clone())
        .unwrap_or_else(|| DEFAULT_URL.to_string());

    let shutdown = matches.get_flag("shutdown") || config.reload.shutdown;

    Ok(ReloadPlan::new(
        browser,
        cycles,
        Duration::from_secs_f64(sleep_secs),
        url,
        shutdown,
    ))
}

/// Resolve the automation plan, or `None` when GUI automation is off.
fn build_automation(
    matches: &ArgMatches,
    config: &VigilConfig,
) -> Result<Option<AutomationPlan>, Box<dyn std::error::Error>> {
    if matches.get_flag("no-gui") || config.automation.enabled == Some(false) {
        return Ok(None);
    }

    let template = matches
        .get_one::<String>("template")
        .map(PathBuf::from)
        .or_else(|| config.automation.template.clone())
        .unwrap_or_else(defaults::default_template_path);

    let poll_interval_secs = matches
        .get_one::<f64>("interval")
        .copied()
        .or(config.automation.poll_interval_secs)
        .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);
    if !poll_interval_secs.is_finite() || poll_interval_secs <= 0.0 {
        return Err(format!(
            "Polling interval must be a positive number, got {}",
            poll_interval_secs
        )
        .into());
    }

    let retry = RetryPolicy::new(
        config.automation.match_attempts.unwrap_or(1),
        Duration::from_secs_f64(config.automation.match_retry_delay_secs.unwrap_or(1.0)),
    );

    let input = match config.automation.pause_secs {
        Some(pause) => InputSettings::new(
            Duration::from_secs_f64(pause),
            InputSettings::default().step_interval(),
        ),
        None => InputSettings::default(),
    };

    let mut plan = AutomationPlan::new(template)
        .with_confidence(config.automation.confidence.unwrap_or(DEFAULT_CONFIDENCE))
        .with_poll_interval(Duration::from_secs_f64(poll_interval_secs))
        .with_retry(retry)
        .with_input(input);

    if let (Some(x), Some(y)) = (
        config.automation.click_offset_x,
        config.automation.click_offset_y,
    ) {
        plan = plan.with_click_offset((x, y));
    }

    Ok(Some(plan))
}

/// Hold the terminal open until the user presses Enter, or until the
/// timeout passes for unattended runs.
fn wait_for_ack() {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut line = String::new();
        let _ = std::io::stdin().read_line(&mut line);
        let _ = tx.send(());
    });

    println!("Press Enter to exit (closes automatically after 60 minutes).");
    let _ = rx.recv_timeout(ACK_TIMEOUT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_cli;

    fn matches_for(args: &[&str]) -> ArgMatches {
        let matches = build_cli().try_get_matches_from(args).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        sub.clone()
    }

    #[test]
    fn test_build_plan_defaults() {
        let sub = matches_for(&["vigil", "run"]);
        let plan = build_plan(&sub, &VigilConfig::default()).unwrap();
        assert_eq!(plan.browser(), BrowserKind::Chrome);
        assert_eq!(plan.cycles(), DEFAULT_CYCLES);
        assert_eq!(plan.sleep(), Duration::from_secs_f64(DEFAULT_SLEEP_SECS));
        assert_eq!(plan.url(), DEFAULT_URL);
        assert!(!plan.shutdown());
    }

    #[test]
    fn test_build_plan_flags_override_config() {
        let sub = matches_for(&["vigil", "run", "-a", "firefox", "-c", "2", "-t", "60"]);
        let mut config = VigilConfig::default();
        config.browser.preferred = Some("edge".to_string());
        config.reload.cycles = Some(99);
        config.reload.sleep_secs = Some(5.0);

        let plan = build_plan(&sub, &config).unwrap();
        assert_eq!(plan.browser(), BrowserKind::Firefox);
        assert_eq!(plan.cycles(), 2);
        assert_eq!(plan.sleep(), Duration::from_secs(60));
    }

    #[test]
    fn test_build_plan_config_fills_gaps() {
        let sub = matches_for(&["vigil", "run"]);
        let mut config = VigilConfig::default();
        config.browser.preferred = Some("edge".to_string());
        config.reload.url = Some("https://example.com".to_string());
        config.reload.shutdown = true;

        let plan = build_plan(&sub, &config).unwrap();
        assert_eq!(plan.browser(), BrowserKind::Edge);
        assert_eq!(plan.url(), "https://example.com");
        assert!(plan.shutdown());
    }

    #[test]
    fn test_build_plan_rejects_negative_sleep() {
        let sub = matches_for(&["vigil", "run", "-t", "-5"]);
        assert!(build_plan(&sub, &VigilConfig::default()).is_err());
    }

    #[test]
    fn test_build_plan_rejects_bad_config_browser() {
        let sub = matches_for(&["vigil", "run"]);
        let mut config = VigilConfig::default();
        config.browser.preferred = Some("netscape".to_string());
        assert!(build_plan(&sub, &config).is_err());
    }

    #[test]
    fn test_build_automation_no_gui_flag() {
        let sub = matches_for(&["vigil", "run", "--no-gui"]);
        assert!(build_automation(&sub, &VigilConfig::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_build_automation_config_disabled() {
        let sub = matches_for(&["vigil", "run"]);
        let mut config = VigilConfig::default();
        config.automation.enabled = Some(false);
        assert!(build_automation(&sub, &config).unwrap().is_none());
    }

    #[test]
    fn test_build_automation_defaults() {
        let sub = matches_for(&["vigil", "run"]);
        let auto = build_automation(&sub, &VigilConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(auto.confidence(), DEFAULT_CONFIDENCE);
        assert_eq!(auto.poll_interval(), Duration::from_secs(5));
        assert_eq!(auto.retry().attempts(), 1);
    }

    #[test]
    fn test_build_automation_interval_flag_wins() {
        let sub = matches_for(&["vigil", "run", "-i", "2"]);
        let mut config = VigilConfig::default();
        config.automation.poll_interval_secs = Some(10.0);
        let auto = build_automation(&sub, &config).unwrap().unwrap();
        assert_eq!(auto.poll_interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_build_automation_rejects_negative_interval() {
        // A negative interval must become an error, not a Duration panic
        let sub = matches_for(&["vigil", "run", "--interval=-5"]);
        assert!(build_automation(&sub, &VigilConfig::default()).is_err());
    }

    #[test]
    fn test_build_automation_rejects_zero_interval() {
        let sub = matches_for(&["vigil", "run", "-i", "0"]);
        assert!(build_automation(&sub, &VigilConfig::default()).is_err());
    }

    #[test]
    fn test_build_automation_config_offsets() {
        let sub = matches_for(&["vigil", "run"]);
        let mut config = VigilConfig::default();
        config.automation.click_offset_x = Some(10);
        config.automation.click_offset_y = Some(20);
        let auto = build_automation(&sub, &config).unwrap().unwrap();
        assert_eq!(auto.click_offset(), (10, 20));
    }
}
