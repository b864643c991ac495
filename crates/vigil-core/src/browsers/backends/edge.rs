//! Microsoft Edge backend implementation.

use super::common::{self, LaunchTable};
use crate::browsers::errors::BrowserError;
use crate::browsers::traits::BrowserBackend;

const TABLE: LaunchTable = LaunchTable {
    macos_app: Some("Microsoft Edge"),
    linux_commands: &["microsoft-edge", "microsoft-edge-stable"],
    windows_paths: &[
        "C:/Program Files (x86)/Microsoft/Edge/Application/msedge.exe",
        "C:/Program Files/Microsoft/Edge/Application/msedge.exe",
    ],
};

pub struct EdgeBackend;

impl BrowserBackend for EdgeBackend {
    fn name(&self) -> &'static str {
        "edge"
    }

    fn display_name(&self) -> &'static str {
        "Microsoft Edge"
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
    fn test_edge_backend_names() {
        let backend = EdgeBackend;
        assert_eq!(backend.name(), "edge");
        assert_eq!(backend.display_name(), "Microsoft Edge");
    }

    #[test]
    fn test_edge_table_covers_all_platforms() {
        assert!(TABLE.macos_app.is_some());
        assert!(!TABLE.linux_commands.is_empty());
        assert!(!TABLE.windows_paths.is_empty());
    }
}
