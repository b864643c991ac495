//! vigil-core: Core library for keeping a browser session alive
//!
//! This library provides the business logic for vigil: reloading a URL in a
//! desktop browser on a fixed cadence, watching the screen for a challenge
//! prompt and dismissing it with synthetic pointer input, and computing the
//! deadline of the hosting session from system uptime.
//!
//! # Main Entry Points
//!
//! - [`reload`] - The reload/poll/click loop
//! - [`deadline`] - Session deadline calculation
//! - [`browsers`] - Browser backend registry
//! - [`vision`] - On-screen template matching
//! - [`config`] - Configuration management

pub mod browsers;
pub mod config;
pub mod deadline;
pub mod errors;
pub mod host;
pub mod input;
pub mod logging;
pub mod reload;
pub mod vision;

// Re-export commonly used types at crate root for convenience
pub use browsers::types::BrowserKind;
pub use config::VigilConfig;
pub use deadline::types::{Deadline, DeadlineRequest};
pub use reload::types::{ReloadPlan, ReloadSummary};
pub use vision::types::{MatchRegion, RetryPolicy};

// Re-export handler modules as the primary API
pub use deadline::handler as deadline_ops;
pub use reload::handler as reload_ops;
pub use vision::handler as vision_ops;

// Re-export logging initialization
pub use logging::init_logging;
