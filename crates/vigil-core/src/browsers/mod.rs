//! Browser selection and launching.
//!
//! Browsers are an enumerated capability table: every (OS, browser) pair
//! either resolves to a concrete launch method or to an explicit
//! unsupported-platform error.

pub mod backends;
pub mod errors;
pub mod registry;
pub mod traits;
pub mod types;

pub use errors::BrowserError;
pub use registry::{
    default_browser_name, get_browser, get_browser_by_kind, is_browser_available,
    is_valid_browser, valid_browser_names,
};
pub use traits::BrowserBackend;
pub use types::BrowserKind;
