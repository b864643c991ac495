use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Default maximum session time: 12 hours.
pub const DEFAULT_SESSION_SECS: f64 = 12.0 * 60.0 * 60.0;

/// Default safety margin subtracted from the session ceiling: 10 minutes.
pub const DEFAULT_MARGIN_SECS: f64 = 10.0 * 60.0;

/// Default rendering offset for the deadline timestamp (UTC+9).
pub const DEFAULT_UTC_OFFSET: &str = "+09:00";

/// Inputs for a deadline calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadlineRequest {
    session_secs: f64,
    margin_secs: f64,
    offset: FixedOffset,
}

impl DeadlineRequest {
    pub fn new(session_secs: f64, margin_secs: f64, offset: FixedOffset) -> Self {
        Self {
            session_secs,
            margin_secs,
            offset,
        }
    }

    /// Maximum session duration in seconds.
    pub fn session_secs(&self) -> f64 {
        self.session_secs
    }

    /// Safety margin in seconds.
    pub fn margin_secs(&self) -> f64 {
        self.margin_secs
    }

    /// UTC offset the deadline is rendered in.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for DeadlineRequest {
    fn default() -> Self {
        Self {
            session_secs: DEFAULT_SESSION_SECS,
            margin_secs: DEFAULT_MARGIN_SECS,
            offset: parse_utc_offset(DEFAULT_UTC_OFFSET)
                .expect("default UTC offset must be valid"),
        }
    }
}

/// A computed session deadline. Read-only once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Deadline {
    at: DateTime<FixedOffset>,
    remaining_secs: f64,
    margin_secs: f64,
}

impl Deadline {
    pub(crate) fn new(at: DateTime<FixedOffset>, remaining_secs: f64, margin_secs: f64) -> Self {
        Self {
            at,
            remaining_secs,
            margin_secs,
        }
    }

    /// Absolute timestamp the session is expected to end by.
    pub fn at(&self) -> DateTime<FixedOffset> {
        self.at
    }

    /// Seconds left until the deadline at the time of calculation.
    pub fn remaining_secs(&self) -> f64 {
        self.remaining_secs
    }

    pub fn margin_secs(&self) -> f64 {
        self.margin_secs
    }
}

/// Parse a UTC offset string like "+09:00", "-05:30" or "+0900".
pub fn parse_utc_offset(s: &str) -> Option<FixedOffset> {
    let s = s.trim();
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => (1, s),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
