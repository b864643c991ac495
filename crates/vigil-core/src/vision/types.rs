use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Rectangle describing a located on-screen image.
///
/// Constructed from an origin and a size, so `right >= left` and
/// `bottom >= top` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRegion {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl MatchRegion {
    /// Create a region from a top-left origin and a size in pixels.
    pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width as i32,
            bottom: y + height as i32,
        }
    }

    pub fn left(&self) -> i32 {
        self.left
    }
    pub fn top(&self) -> i32 {
        self.top
    }
    pub fn right(&self) -> i32 {
        self.right
    }
    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top) as u32
    }

    /// Center point of the region.
    pub fn center(&self) -> (i32, i32) {
        (
            self.left + (self.width() / 2) as i32,
            self.top + (self.height() / 2) as i32,
        )
    }
}

/// Bounded retry policy for on-screen template lookups.
///
/// A lookup runs at most `attempts` times with a fixed `delay` between
/// attempts; exhausting all attempts means "no match", not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: u32, delay: Duration) -> Self {
        debug_assert!(attempts >= 1, "A retry policy needs at least one attempt");
        Self {
            attempts: attempts.max(1),
            delay,
        }
    }

    /// Policy that looks exactly once and never sleeps.
    pub fn single_attempt() -> Self {
        Self::new(1, Duration::ZERO)
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(10, Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_region_dimensions() {
        let region = MatchRegion::from_origin_size(100, 50, 300, 120);
        assert_eq!(region.left(), 100);
        assert_eq!(region.top(), 50);
        assert_eq!(region.right(), 400);
        assert_eq!(region.bottom(), 170);
        assert_eq!(region.width(), 300);
        assert_eq!(region.height(), 120);
    }

    #[test]
    fn test_match_region_invariants() {
        let region = MatchRegion::from_origin_size(7, 3, 10, 20);
        assert_eq!(region.width() as i32, region.right() - region.left());
        assert_eq!(region.height() as i32, region.bottom() - region.top());
    }

    #[test]
    fn test_match_region_zero_size() {
        let region = MatchRegion::from_origin_size(5, 5, 0, 0);
        assert_eq!(region.width(), 0);
        assert_eq!(region.height(), 0);
        assert_eq!(region.center(), (5, 5));
    }

    #[test]
    fn test_match_region_center() {
        let region = MatchRegion::from_origin_size(10, 20, 100, 40);
        assert_eq!(region.center(), (60, 40));
    }

    #[test]
    fn test_match_region_serialization() {
        let region = MatchRegion::from_origin_size(1, 2, 3, 4);
        let json = serde_json::to_string(&region).unwrap();
        assert!(json.contains("\"left\":1"));
        assert!(json.contains("\"bottom\":6"));
    }

    #[test]
    fn test_retry_policy_new() {
        let policy = RetryPolicy::new(5, Duration::from_millis(250));
        assert_eq!(policy.attempts(), 5);
        assert_eq!(policy.delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_retry_policy_single_attempt() {
        let policy = RetryPolicy::single_attempt();
        assert_eq!(policy.attempts(), 1);
        assert_eq!(policy.delay(), Duration::ZERO);
    }

    #[test]
    fn test_retry_policy_default() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.attempts(), 10);
        assert_eq!(policy.delay(), Duration::from_secs(1));
    }
}
