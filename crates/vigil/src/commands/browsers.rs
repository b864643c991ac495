use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use vigil_core::BrowserKind;
use vigil_core::browsers::registry;

#[derive(Serialize)]
struct BrowserEntry {
    name: &'static str,
    display_name: &'static str,
    available: bool,
    default: bool,
}

pub(crate) fn handle_browsers_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.browsers_started", json_output);

    let default_name = registry::default_browser_name();
    let entries: Vec<BrowserEntry> = BrowserKind::all()
        .iter()
        .filter_map(|kind| registry::get_browser_by_kind(*kind))
        .map(|backend| BrowserEntry {
            name: backend.name(),
            display_name: backend.display_name(),
            available: backend.is_available(),
            default: backend.name() == default_name,
        })
        .collect();

    info!(event = "cli.browsers_completed", count = entries.len());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Supported browsers:");
    for entry in &entries {
        let availability = if entry.available {
            "available"
        } else {
            "not found"
        };
        let marker = if entry.default { " (default)" } else { "" };
        println!(
            "  {:<10} {} - {}{}",
            entry.name, entry.display_name, availability, marker
        );
    }

    Ok(())
}
