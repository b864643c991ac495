use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use vigil_core::DeadlineRequest;
use vigil_core::config::VigilConfig;
use vigil_core::deadline::types::{
    DEFAULT_MARGIN_SECS, DEFAULT_SESSION_SECS, DEFAULT_UTC_OFFSET, parse_utc_offset,
};
use vigil_core::deadline_ops;
use vigil_core::logging;

use super::helpers::load_config_with_warning;

#[derive(Serialize)]
struct DeadlineOutput {
    deadline: String,
    remaining_secs: f64,
    margin_secs: f64,
}

pub(crate) fn handle_deadline_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let json_output = matches.get_flag("json");

    let request = build_request(matches, &config)?;

    info!(
        event = "cli.deadline_started",
        session_secs = request.session_secs(),
        margin_secs = request.margin_secs()
    );

    match deadline_ops::session_deadline(&request) {
        Ok(deadline) => {
            info!(
                event = "cli.deadline_completed",
                deadline = %deadline.at(),
                remaining_secs = deadline.remaining_secs()
            );

            if json_output {
                let output = DeadlineOutput {
                    deadline: deadline.at().to_rfc3339(),
                    remaining_secs: deadline.remaining_secs(),
                    margin_secs: deadline.margin_secs(),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!(
                    "Deadline:  {}",
                    deadline.at().format("%Y-%m-%d %H:%M:%S %:z")
                );
                println!(
                    "Remaining: {:.0} min ({:.0} min margin included)",
                    deadline.remaining_secs() / 60.0,
                    deadline.margin_secs() / 60.0
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Could not compute deadline: {}", e);
            error!(event = "cli.deadline_failed", error = %e);
            logging::log_failure(&e);
            Err(e.into())
        }
    }
}

/// Resolve the deadline request from CLI flags, config, and defaults.
fn build_request(
    matches: &ArgMatches,
    config: &VigilConfig,
) -> Result<DeadlineRequest, Box<dyn std::error::Error>> {
    let session_secs = matches
        .get_one::<f64>("session")
        .copied()
        .or(config.deadline.session_secs)
        .unwrap_or(DEFAULT_SESSION_SECS);
    if !session_secs.is_finite() || session_secs <= 0.0 {
        return Err(format!("Session time must be positive, got {}", session_secs).into());
    }

    let margin_secs = matches
        .get_one::<f64>("margin")
        .copied()
        .or(config.deadline.margin_secs)
        .unwrap_or(DEFAULT_MARGIN_SECS);
    if !margin_secs.is_finite() || margin_secs < 0.0 {
        return Err(format!("Margin must be non-negative, got {}", margin_secs).into());
    }

    let offset_str = matches
        .get_one::<String>("offset")
        .cloned()
        .or_else(|| config.deadline.utc_offset.clone())
        .unwrap_or_else(|| DEFAULT_UTC_OFFSET.to_string());
    let offset = parse_utc_offset(&offset_str)
        .ok_or_else(|| format!("Invalid UTC offset '{}' (expected e.g. '+09:00')", offset_str))?;

    Ok(DeadlineRequest::new(session_secs, margin_secs, offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_cli;
    use chrono::FixedOffset;

    fn matches_for(args: &[&str]) -> ArgMatches {
        let matches = build_cli().try_get_matches_from(args).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        sub.clone()
    }

    #[test]
    fn test_build_request_defaults() {
        let sub = matches_for(&["vigil", "deadline"]);
        let request = build_request(&sub, &VigilConfig::default()).unwrap();
        assert_eq!(request.session_secs(), 43200.0);
        assert_eq!(request.margin_secs(), 600.0);
        assert_eq!(request.offset(), FixedOffset::east_opt(9 * 3600).unwrap());
    }

    #[test]
    fn test_build_request_flags_override_config() {
        let sub = matches_for(&[
            "vigil", "deadline", "--session", "21600", "--margin", "300", "--offset", "+00:00",
        ]);
        let mut config = VigilConfig::default();
        config.deadline.session_secs = Some(99.0);
        config.deadline.utc_offset = Some("-05:00".to_string());

        let request = build_request(&sub, &config).unwrap();
        assert_eq!(request.session_secs(), 21600.0);
        assert_eq!(request.margin_secs(), 300.0);
        assert_eq!(request.offset(), FixedOffset::east_opt(0).unwrap());
    }

    #[test]
    fn test_build_request_config_offset() {
        let sub = matches_for(&["vigil", "deadline"]);
        let mut config = VigilConfig::default();
        config.deadline.utc_offset = Some("-05:00".to_string());
        let request = build_request(&sub, &config).unwrap();
        assert_eq!(request.offset(), FixedOffset::east_opt(-5 * 3600).unwrap());
    }

    #[test]
    fn test_build_request_rejects_bad_offset() {
        let sub = matches_for(&["vigil", "deadline", "--offset", "Asia/Tokyo"]);
        assert!(build_request(&sub, &VigilConfig::default()).is_err());
    }

    #[test]
    fn test_build_request_rejects_zero_session() {
        let sub = matches_for(&["vigil", "deadline", "--session", "0"]);
        assert!(build_request(&sub, &VigilConfig::default()).is_err());
    }

    #[test]
    fn test_build_request_rejects_negative_margin() {
        let sub = matches_for(&["vigil", "deadline", "--margin", "-1"]);
        assert!(build_request(&sub, &VigilConfig::default()).is_err());
    }
}
