//! The reload loop: open the URL, wait or poll, dismiss the challenge
//! prompt, repeat; optionally power the host off when done.

pub mod errors;
pub mod handler;
pub mod types;

pub use errors::ReloadError;
pub use types::{AutomationPlan, ReloadPlan, ReloadSummary};
