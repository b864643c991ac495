//! Browser backend implementations.

mod chrome;
mod common;
mod edge;
mod firefox;
mod safari;

pub use chrome::ChromeBackend;
pub use edge::EdgeBackend;
pub use firefox::FirefoxBackend;
pub use safari::SafariBackend;
