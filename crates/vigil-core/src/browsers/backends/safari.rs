//! Safari backend implementation.
//!
//! Safari only exists on macOS; on every other platform the table is empty
//! and lookups resolve to an explicit unsupported-platform error.

use super::common::{self, LaunchTable};
use crate::browsers::errors::BrowserError;
use crate::browsers::traits::BrowserBackend;

const TABLE: LaunchTable = LaunchTable {
    macos_app: Some("Safari"),
    linux_commands: &[],
    windows_paths: &[],
};

pub struct SafariBackend;

impl BrowserBackend for SafariBackend {
    fn name(&self) -> &'static str {
        "safari"
    }

    fn display_name(&self) -> &'static str {
        "Safari"
    }

    fn is_available(&self) -> bool {
        common::is_available(&TABLE)
    }

    fn open_url(&self, url: &str) -> Result<(), BrowserError> {
        common::open_url(&TABLE, self.name(), url)
    }
}
