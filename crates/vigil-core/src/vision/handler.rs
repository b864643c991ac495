//! On-screen template lookup with a bounded retry policy.

use std::path::Path;
use std::thread;

use image::GrayImage;
use tracing::{info, warn};

use super::capture;
use super::errors::VisionError;
use super::matching;
use super::types::{MatchRegion, RetryPolicy};

/// Load a template image from disk and convert it to grayscale.
///
/// Template problems are configuration problems and are surfaced as errors
/// before any polling starts, unlike capture failures which are retried.
pub fn load_template(path: &Path) -> Result<GrayImage, VisionError> {
    let image = image::open(path).map_err(|e| VisionError::TemplateLoadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let template = image.to_luma8();
    info!(
        event = "core.vision.template_loaded",
        path = %path.display(),
        width = template.width(),
        height = template.height()
    );
    Ok(template)
}

/// Search the primary monitor for the template.
///
/// Runs up to `retry.attempts()` capture-and-match rounds with
/// `retry.delay()` between them. A failed capture counts as "not found yet"
/// and is retried; exhausting all attempts returns None rather than an
/// error.
pub fn locate_on_screen(
    template: &GrayImage,
    confidence: f32,
    retry: &RetryPolicy,
) -> Option<MatchRegion> {
    for attempt in 1..=retry.attempts() {
        match capture::capture_primary_monitor() {
            Ok(screen) => {
                let screen = image::DynamicImage::ImageRgba8(screen).to_luma8();
                if let Some(region) = matching::find_template(&screen, template, confidence) {
                    info!(
                        event = "core.vision.match_found",
                        attempt,
                        left = region.left(),
                        top = region.top(),
                        width = region.width(),
                        height = region.height()
                    );
                    return Some(region);
                }
            }
            Err(e) => {
                warn!(
                    event = "core.vision.capture_attempt_failed",
                    attempt,
                    attempts = retry.attempts(),
                    error = %e
                );
            }
        }

        if attempt < retry.attempts() {
            thread::sleep(retry.delay());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_template_missing_file() {
        let error = load_template(Path::new("/nonexistent/challenge.png")).unwrap_err();
        assert!(matches!(error, VisionError::TemplateLoadFailed { .. }));
        assert!(error.to_string().contains("/nonexistent/challenge.png"));
    }

    #[test]
    fn test_load_template_invalid_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_an_image.png");
        std::fs::write(&path, b"this is not a png").unwrap();

        let error = load_template(&path).unwrap_err();
        assert!(matches!(error, VisionError::TemplateLoadFailed { .. }));
    }

    #[test]
    fn test_load_template_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("challenge.png");
        let template = image::GrayImage::from_pixel(6, 4, image::Luma([200u8]));
        template.save(&path).unwrap();

        let loaded = load_template(&path).unwrap();
        assert_eq!(loaded.width(), 6);
        assert_eq!(loaded.height(), 4);
    }
}
