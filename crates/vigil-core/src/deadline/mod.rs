//! Session deadline calculation from host uptime.

pub mod errors;
pub mod handler;
pub mod types;

pub use errors::DeadlineError;
pub use types::{Deadline, DeadlineRequest, parse_utc_offset};
