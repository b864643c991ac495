//! Synthetic pointer input.

pub mod errors;
pub mod handler;
pub mod types;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;

pub use errors::InputError;
pub use handler::Pointer;
pub use types::InputSettings;
