//! Shared launch plumbing for browser backends.
//!
//! Each backend declares a [`LaunchTable`] naming how the browser is reached
//! on every platform we know about. An empty entry means the (OS, browser)
//! pair is unsupported and resolves to an explicit error, never to a blank
//! executable path.

use std::path::{Path, PathBuf};

use super::super::errors::BrowserError;

/// Per-platform launch capability table for one browser.
pub(crate) struct LaunchTable {
    /// macOS application bundle name for `open -a` (None: unsupported).
    pub macos_app: Option<&'static str>,
    /// Linux executable names to try on PATH, in preference order.
    pub linux_commands: &'static [&'static str],
    /// Windows well-known install paths, in preference order.
    pub windows_paths: &'static [&'static str],
}

/// Check if a macOS application exists in /Applications.
///
/// Uses a filesystem check instead of spawning processes.
#[cfg(target_os = "macos")]
pub(crate) fn app_exists_macos(app_name: &str) -> bool {
    Path::new(&format!("/Applications/{}.app", app_name)).exists()
}

/// Resolve the first Linux executable candidate present on PATH.
pub(crate) fn find_linux_executable(candidates: &[&str]) -> Option<PathBuf> {
    candidates.iter().find_map(|c| which::which(c).ok())
}

/// Resolve the first existing Windows install path.
pub(crate) fn find_windows_executable(candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}

/// Check whether the table resolves to a launchable browser on this host.
pub(crate) fn is_available(table: &LaunchTable) -> bool {
    #[cfg(target_os = "macos")]
    {
        table.macos_app.is_some_and(app_exists_macos)
    }
    #[cfg(target_os = "linux")]
    {
        find_linux_executable(table.linux_commands).is_some()
    }
    #[cfg(target_os = "windows")]
    {
        find_windows_executable(table.windows_paths).is_some()
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = table;
        false
    }
}

/// Open a URL using the table's entry for the current OS.
pub(crate) fn open_url(
    table: &LaunchTable,
    browser: &'static str,
    url: &str,
) -> Result<(), BrowserError> {
    #[cfg(target_os = "macos")]
    {
        let app = table.macos_app.ok_or(BrowserError::UnsupportedPlatform {
            browser: browser.to_string(),
            os: std::env::consts::OS,
        })?;
        launch_macos_app(app, browser, url)
    }
    #[cfg(target_os = "linux")]
    {
        if table.linux_commands.is_empty() {
            return Err(BrowserError::UnsupportedPlatform {
                browser: browser.to_string(),
                os: std::env::consts::OS,
            });
        }
        let exe = find_linux_executable(table.linux_commands).ok_or_else(|| {
            BrowserError::NotInstalled {
                browser: browser.to_string(),
            }
        })?;
        launch_executable(&exe, browser, url)
    }
    #[cfg(target_os = "windows")]
    {
        if table.windows_paths.is_empty() {
            return Err(BrowserError::UnsupportedPlatform {
                browser: browser.to_string(),
                os: std::env::consts::OS,
            });
        }
        let exe = find_windows_executable(table.windows_paths).ok_or_else(|| {
            BrowserError::NotInstalled {
                browser: browser.to_string(),
            }
        })?;
        launch_executable(&exe, browser, url)
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = (table, url);
        Err(BrowserError::UnsupportedPlatform {
            browser: browser.to_string(),
            os: std::env::consts::OS,
        })
    }
}

/// Launch a macOS app bundle with `open -a <app> <url>`.
///
/// `open` returns promptly; the browser process is adopted by launchd, so no
/// child handle needs to be reaped.
#[cfg(target_os = "macos")]
fn launch_macos_app(app: &str, browser: &'static str, url: &str) -> Result<(), BrowserError> {
    use tracing::{debug, warn};

    debug!(event = "core.browsers.launch_started", browser, app, url);

    let output = std::process::Command::new("open")
        .arg("-a")
        .arg(app)
        .arg(url)
        .output()
        .map_err(|e| BrowserError::LaunchFailed {
            browser: browser.to_string(),
            url: url.to_string(),
            source: e,
        })?;

    if !output.status.success() {
        warn!(
            event = "core.browsers.launch_failed",
            browser,
            stderr = %String::from_utf8_lossy(&output.stderr)
        );
        return Err(BrowserError::LaunchCommandFailed {
            browser: browser.to_string(),
            status: output.status.code().unwrap_or(-1),
        });
    }

    debug!(event = "core.browsers.launch_completed", browser, url);
    Ok(())
}

/// Spawn a browser executable directly with the URL as its only argument.
///
/// The child is detached; browsers hand the URL to an existing instance and
/// exit, so waiting on it would block on browser internals.
#[cfg(any(target_os = "linux", target_os = "windows"))]
pub(crate) fn launch_executable(
    exe: &Path,
    browser: &'static str,
    url: &str,
) -> Result<(), BrowserError> {
    use tracing::debug;

    debug!(event = "core.browsers.launch_started", browser, exe = %exe.display(), url);

    std::process::Command::new(exe)
        .arg(url)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .map_err(|e| BrowserError::LaunchFailed {
            browser: browser.to_string(),
            url: url.to_string(),
            source: e,
        })?;

    debug!(event = "core.browsers.launch_completed", browser, url);
    Ok(())
}
