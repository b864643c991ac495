//! On-screen image matching.
//!
//! Captures the primary monitor, grayscales it, and searches for a
//! reference template with normalized cross-correlation. Lookups retry per
//! an explicit [`types::RetryPolicy`]; "not found" is a value, not an error.

pub mod capture;
pub mod errors;
pub mod handler;
pub mod matching;
pub mod types;

pub use errors::VisionError;
pub use types::{MatchRegion, RetryPolicy};
