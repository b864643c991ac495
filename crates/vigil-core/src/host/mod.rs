//! Host-level queries and power control.

pub mod errors;

pub use errors::HostError;

use tracing::info;

/// Seconds since the host booted.
///
/// The remote notebook session starts at boot, so uptime doubles as the
/// session's elapsed time.
pub fn uptime_secs() -> u64 {
    sysinfo::System::uptime()
}

/// Ask the OS to power the machine off.
///
/// Uses the platform `shutdown` command; on Unix this typically needs
/// elevated privileges, and a refusal surfaces as `PowerOffFailed`.
pub fn power_off() -> Result<(), HostError> {
    let args: &[&str] = if cfg!(target_os = "windows") {
        &["/s", "/t", "0"]
    } else if cfg!(any(target_os = "linux", target_os = "macos")) {
        &["-h", "now"]
    } else {
        return Err(HostError::PowerOffUnsupported {
            os: std::env::consts::OS,
        });
    };

    info!(event = "core.host.power_off_requested", args = ?args);

    let output = std::process::Command::new("shutdown")
        .args(args)
        .output()
        .map_err(|e| HostError::PowerOffFailed {
            reason: format!("failed to execute shutdown: {}", e),
        })?;

    if !output.status.success() {
        return Err(HostError::PowerOffFailed {
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}
