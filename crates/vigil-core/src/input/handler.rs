//! Pointer movement and clicking.

use std::thread;
use std::time::Duration;

use tracing::info;

use super::errors::InputError;
use super::types::InputSettings;

/// Synthetic pointer bound to explicit [`InputSettings`].
pub struct Pointer {
    settings: InputSettings,
}

impl Pointer {
    pub fn new(settings: InputSettings) -> Self {
        Self { settings }
    }

    /// Current pointer position in screen coordinates.
    pub fn position(&self) -> Result<(f64, f64), InputError> {
        platform_pointer_position()
    }

    /// Glide the pointer to (x, y) over `duration`.
    ///
    /// Interpolates linearly from the current position in steps of the
    /// configured step interval, so the motion reads as a drag rather than
    /// a teleport. Applies the configured pause once the target is reached.
    pub fn glide_to(&self, x: i32, y: i32, duration: Duration) -> Result<(), InputError> {
        let (start_x, start_y) = self.position()?;
        let (target_x, target_y) = (x as f64, y as f64);

        let step_interval = self.settings.step_interval().max(Duration::from_millis(1));
        let steps = (duration.as_millis() / step_interval.as_millis()).max(1) as u32;

        info!(
            event = "core.input.glide_started",
            x,
            y,
            duration_ms = duration.as_millis() as u64,
            steps
        );

        for step in 1..=steps {
            let t = step as f64 / steps as f64;
            let next_x = start_x + (target_x - start_x) * t;
            let next_y = start_y + (target_y - start_y) * t;
            platform_move_to(next_x, next_y)?;
            if step < steps {
                thread::sleep(step_interval);
            }
        }

        thread::sleep(self.settings.pause());
        Ok(())
    }

    /// Issue a left click at the current pointer position.
    pub fn left_click(&self) -> Result<(), InputError> {
        platform_left_click()?;
        info!(event = "core.input.click_completed");
        thread::sleep(self.settings.pause());
        Ok(())
    }
}

fn platform_pointer_position() -> Result<(f64, f64), InputError> {
    #[cfg(target_os = "macos")]
    {
        super::macos::pointer_position()
    }
    #[cfg(target_os = "linux")]
    {
        super::linux::pointer_position()
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        Err(InputError::UnsupportedPlatform {
            os: std::env::consts::OS,
        })
    }
}

fn platform_move_to(x: f64, y: f64) -> Result<(), InputError> {
    #[cfg(target_os = "macos")]
    {
        super::macos::move_to(x, y)
    }
    #[cfg(target_os = "linux")]
    {
        super::linux::move_to(x, y)
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        let _ = (x, y);
        Err(InputError::UnsupportedPlatform {
            os: std::env::consts::OS,
        })
    }
}

fn platform_left_click() -> Result<(), InputError> {
    #[cfg(target_os = "macos")]
    {
        super::macos::left_click()
    }
    #[cfg(target_os = "linux")]
    {
        super::linux::left_click()
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        Err(InputError::UnsupportedPlatform {
            os: std::env::consts::OS,
        })
    }
}
