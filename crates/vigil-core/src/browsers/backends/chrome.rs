//! Google Chrome backend implementation.

use super::common::{self, LaunchTable};
use crate::browsers::errors::BrowserError;
use crate::browsers::traits::BrowserBackend;

const TABLE: LaunchTable = LaunchTable {
    macos_app: Some("Google Chrome"),
    linux_commands: &["google-chrome", "google-chrome-stable", "chromium", "chromium-browser"],
    windows_paths: &[
        "C:/Program Files/Google/Chrome/Application/chrome.exe",
        "C:/Program Files (x86)/Google/Chrome/Application/chrome.exe",
    ],
};

pub struct ChromeBackend;

impl BrowserBackend for ChromeBackend {
    fn name(&self) -> &'static str {
        "chrome"
    }

    fn display_name(&self) -> &'static str {
        "Google Chrome"
    }

    fn is_available(&self) -> bool {
        common::is_available(&TABLE)
    }

    fn open_url(&self, url: &str) -> Result<(), BrowserError> {
        common::open_url(&TABLE, self.name(), url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_backend_names() {
        let backend = ChromeBackend;
        assert_eq!(backend.name(), "chrome");
        assert_eq!(backend.display_name(), "Google Chrome");
    }

    #[test]
    fn test_chrome_table_covers_all_platforms() {
        assert!(TABLE.macos_app.is_some());
        assert!(!TABLE.linux_commands.is_empty());
        assert!(!TABLE.windows_paths.is_empty());
    }

    #[test]
    fn test_chrome_availability_does_not_panic() {
        // The actual result depends on what's installed on the host
        let _ = ChromeBackend.is_available();
    }
}
