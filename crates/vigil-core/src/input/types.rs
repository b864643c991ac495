use std::time::Duration;

/// Explicit safety settings for synthetic input.
///
/// Passed into [`super::handler::Pointer`] at construction instead of living
/// as ambient library globals: the pause applied after every posted event
/// and the step rate used when gliding the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSettings {
    pause: Duration,
    step_interval: Duration,
}

impl InputSettings {
    pub fn new(pause: Duration, step_interval: Duration) -> Self {
        Self {
            pause,
            step_interval,
        }
    }

    /// Pause inserted after each completed input operation.
    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Interval between intermediate pointer positions during a glide.
    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            pause: Duration::from_secs(1),
            step_interval: Duration::from_millis(16),
        }
    }
}
