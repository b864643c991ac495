//! Grayscale template matching.

use image::GrayImage;
use imageproc::template_matching::{MatchTemplateMethod, find_extremes, match_template};
use tracing::debug;

use super::types::MatchRegion;

/// Find the best placement of `template` inside `screen`.
///
/// Uses normalized cross-correlation; the best score is compared against
/// `confidence` (0.0..=1.0). Returns None when the template does not fit in
/// the screen image or the best score is below the threshold.
pub fn find_template(
    screen: &GrayImage,
    template: &GrayImage,
    confidence: f32,
) -> Option<MatchRegion> {
    if template.width() > screen.width()
        || template.height() > screen.height()
        || template.width() == 0
        || template.height() == 0
    {
        debug!(
            event = "core.vision.template_does_not_fit",
            screen_width = screen.width(),
            screen_height = screen.height(),
            template_width = template.width(),
            template_height = template.height()
        );
        return None;
    }

    let scores = match_template(
        screen,
        template,
        MatchTemplateMethod::CrossCorrelationNormalized,
    );
    let extremes = find_extremes(&scores);

    debug!(
        event = "core.vision.match_scored",
        best_score = extremes.max_value,
        x = extremes.max_value_location.0,
        y = extremes.max_value_location.1
    );

    if extremes.max_value < confidence {
        return None;
    }

    let (x, y) = extremes.max_value_location;
    Some(MatchRegion::from_origin_size(
        x as i32,
        y as i32,
        template.width(),
        template.height(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    /// Build a flat gray screen with a checkerboard patch pasted at (x, y)
    fn screen_with_patch(x: u32, y: u32, patch: &GrayImage) -> GrayImage {
        let mut screen = GrayImage::from_pixel(64, 48, Luma([128u8]));
        for (px, py, pixel) in patch.enumerate_pixels() {
            screen.put_pixel(x + px, y + py, *pixel);
        }
        screen
    }

    /// 8x8 checkerboard: strongly non-uniform so the correlation peak is unique
    fn checkerboard() -> GrayImage {
        GrayImage::from_fn(8, 8, |x, y| {
            if (x + y) % 2 == 0 {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        })
    }

    #[test]
    fn test_find_template_locates_patch() {
        let patch = checkerboard();
        let screen = screen_with_patch(12, 9, &patch);

        let region = find_template(&screen, &patch, 0.95).expect("patch should be found");
        assert_eq!(region.left(), 12);
        assert_eq!(region.top(), 9);
        assert_eq!(region.width(), 8);
        assert_eq!(region.height(), 8);
    }

    #[test]
    fn test_find_template_region_invariants() {
        let patch = checkerboard();
        let screen = screen_with_patch(4, 4, &patch);

        let region = find_template(&screen, &patch, 0.95).unwrap();
        assert_eq!(region.width() as i32, region.right() - region.left());
        assert_eq!(region.height() as i32, region.bottom() - region.top());
    }

    #[test]
    fn test_find_template_absent_patch() {
        let patch = checkerboard();
        // Flat screen without the patch: correlation stays below threshold
        let screen = GrayImage::from_pixel(64, 48, Luma([128u8]));

        assert!(find_template(&screen, &patch, 0.95).is_none());
    }

    #[test]
    fn test_find_template_template_larger_than_screen() {
        let patch = checkerboard();
        let screen = GrayImage::from_pixel(4, 4, Luma([128u8]));

        assert!(find_template(&screen, &patch, 0.5).is_none());
    }

    #[test]
    fn test_find_template_empty_template() {
        let template = GrayImage::new(0, 0);
        let screen = GrayImage::from_pixel(16, 16, Luma([128u8]));

        assert!(find_template(&screen, &template, 0.5).is_none());
    }
}
