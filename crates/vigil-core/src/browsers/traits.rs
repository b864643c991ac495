//! Browser backend trait definition.

use super::errors::BrowserError;

/// Trait defining the interface for browser backends.
///
/// Each supported browser (Chrome, Edge, Firefox, Safari) implements this
/// trait to provide browser-specific launch behavior per platform.
pub trait BrowserBackend: Send + Sync {
    /// The canonical name of this browser (e.g., "chrome", "edge").
    fn name(&self) -> &'static str;

    /// The display name for this browser (e.g., "Google Chrome").
    fn display_name(&self) -> &'static str;

    /// Check if this browser is installed and launchable on the current OS.
    ///
    /// Returns false both for missing installations and for platforms the
    /// backend does not support at all.
    fn is_available(&self) -> bool;

    /// Open (or reload, if the browser deduplicates tabs) the given URL.
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::UnsupportedPlatform` when this browser cannot
    /// be driven on the current OS, `BrowserError::NotInstalled` when the
    /// executable cannot be found, and launch errors otherwise.
    fn open_url(&self, url: &str) -> Result<(), BrowserError>;
}
