//! Browser registry for managing and looking up browser backends.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::backends::{ChromeBackend, EdgeBackend, FirefoxBackend, SafariBackend};
use super::traits::BrowserBackend;
use super::types::BrowserKind;

/// Global registry of all supported browser backends.
static REGISTRY: LazyLock<BrowserRegistry> = LazyLock::new(BrowserRegistry::new);

/// Registry that manages all browser backend implementations.
///
/// Uses `BrowserKind` as the internal key, with string-based lookup
/// functions layered on top for CLI and config input.
struct BrowserRegistry {
    backends: HashMap<BrowserKind, Box<dyn BrowserBackend>>,
}

impl BrowserRegistry {
    fn new() -> Self {
        let mut backends: HashMap<BrowserKind, Box<dyn BrowserBackend>> = HashMap::new();
        backends.insert(BrowserKind::Chrome, Box::new(ChromeBackend));
        backends.insert(BrowserKind::Edge, Box::new(EdgeBackend));
        backends.insert(BrowserKind::Firefox, Box::new(FirefoxBackend));
        backends.insert(BrowserKind::Safari, Box::new(SafariBackend));
        Self { backends }
    }

    /// Get a reference to a browser backend by kind.
    fn get_by_kind(&self, kind: BrowserKind) -> Option<&dyn BrowserBackend> {
        self.backends.get(&kind).map(|b| b.as_ref())
    }

    /// Get a reference to a browser backend by name (case-insensitive).
    fn get(&self, name: &str) -> Option<&dyn BrowserBackend> {
        BrowserKind::parse(name).and_then(|k| self.get_by_kind(k))
    }

    /// Get the default browser kind.
    fn default_browser(&self) -> BrowserKind {
        BrowserKind::Chrome
    }
}

/// Get a reference to a browser backend by name (case-insensitive).
pub fn get_browser(name: &str) -> Option<&'static dyn BrowserBackend> {
    REGISTRY.get(name)
}

/// Get a reference to a browser backend by kind.
pub fn get_browser_by_kind(kind: BrowserKind) -> Option<&'static dyn BrowserBackend> {
    REGISTRY.get_by_kind(kind)
}

/// Check if a browser name is valid/supported (case-insensitive).
pub fn is_valid_browser(name: &str) -> bool {
    BrowserKind::parse(name).is_some()
}

/// Get all valid browser names (lowercase).
pub fn valid_browser_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BrowserKind::all().iter().map(|k| k.as_str()).collect();
    names.sort();
    names
}

/// Get the default browser name.
pub fn default_browser_name() -> &'static str {
    REGISTRY.default_browser().as_str()
}

/// Check if a browser is launchable on this host (case-insensitive).
pub fn is_browser_available(name: &str) -> Option<bool> {
    get_browser(name).map(|backend| backend.is_available())
}
