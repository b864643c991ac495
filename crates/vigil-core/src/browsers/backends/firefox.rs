//! Mozilla Firefox backend implementation.

use super::common::{self, LaunchTable};
use crate::browsers::errors::BrowserError;
use crate::browsers::traits::BrowserBackend;

const TABLE: LaunchTable = LaunchTable {
    macos_app: Some("Firefox"),
    linux_commands: &["firefox", "firefox-esr"],
    windows_paths: &[
        "C:/Program Files/Mozilla Firefox/firefox.exe",
        "C:/Program Files (x86)/Mozilla Firefox/firefox.exe",
    ],
};

pub struct FirefoxBackend;

impl BrowserBackend for FirefoxBackend {
    fn name(&self) -> &'static str {
        "firefox"
    }

    fn display_name(&self) -> &'static str {
        "Mozilla Firefox"
    }

    fn is_available(&self) -> bool {
        common::is_available(&TABLE)
    }

    fn open_url(&self, url: &str) -> Result<(), BrowserError> {
        common::open_url(&TABLE, self.name(), url)
    }
}
