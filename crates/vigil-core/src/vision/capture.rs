//! Primary-monitor screen capture via xcap.

use image::RgbaImage;
use tracing::debug;

use super::errors::VisionError;

/// Capture the primary monitor as an RGBA image.
///
/// Falls back to the first enumerated monitor when none reports itself as
/// primary (some X11 setups).
pub fn capture_primary_monitor() -> Result<RgbaImage, VisionError> {
    let monitors =
        xcap::Monitor::all().map_err(|e| VisionError::MonitorEnumerationFailed {
            reason: e.to_string(),
        })?;

    let monitor = monitors
        .iter()
        .find(|m| m.is_primary().unwrap_or(false))
        .or_else(|| monitors.first())
        .ok_or(VisionError::NoMonitorAvailable)?;

    let image = monitor
        .capture_image()
        .map_err(|e| VisionError::CaptureFailed {
            reason: e.to_string(),
        })?;

    debug!(
        event = "core.vision.capture_completed",
        width = image.width(),
        height = image.height()
    );

    Ok(image)
}
