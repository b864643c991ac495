//! Session deadline calculation.

use chrono::{DateTime, Duration, FixedOffset};
use tracing::info;

use super::errors::DeadlineError;
use super::types::{Deadline, DeadlineRequest};
use crate::host;

/// Compute the deadline from an already-known elapsed time.
///
/// Pure: `deadline = now + (session - elapsed - margin)`. Fails when the
/// elapsed time already meets or exceeds the session ceiling, which should
/// never happen in a live session.
pub fn compute_deadline(
    now: DateTime<FixedOffset>,
    elapsed_secs: f64,
    request: &DeadlineRequest,
) -> Result<Deadline, DeadlineError> {
    if elapsed_secs >= request.session_secs() {
        return Err(DeadlineError::SessionExpired {
            elapsed_secs,
            session_secs: request.session_secs(),
        });
    }

    let remaining_secs = request.session_secs() - elapsed_secs - request.margin_secs();
    let at = now + Duration::milliseconds((remaining_secs * 1000.0) as i64);

    Ok(Deadline::new(at, remaining_secs, request.margin_secs()))
}

/// Compute the deadline of the current host session.
///
/// The single external read: host uptime stands in for the session's
/// elapsed time. No retries, no caching.
pub fn session_deadline(request: &DeadlineRequest) -> Result<Deadline, DeadlineError> {
    let elapsed_secs = host::uptime_secs() as f64;
    let now = chrono::Utc::now().with_timezone(&request.offset());

    let deadline = compute_deadline(now, elapsed_secs, request)?;

    info!(
        event = "core.deadline.computed",
        elapsed_secs,
        remaining_secs = deadline.remaining_secs(),
        deadline = %deadline.at()
    );

    Ok(deadline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deadline::types::parse_utc_offset;

    fn request() -> DeadlineRequest {
        DeadlineRequest::new(43200.0, 600.0, parse_utc_offset("+09:00").unwrap())
    }

    fn now() -> DateTime<FixedOffset> {
        chrono::Utc::now().with_timezone(&parse_utc_offset("+09:00").unwrap())
    }

    #[test]
    fn test_compute_deadline_remaining() {
        let now = now();
        let deadline = compute_deadline(now, 100.0, &request()).unwrap();
        assert_eq!(deadline.remaining_secs(), 42500.0);
        assert_eq!(deadline.at(), now + Duration::seconds(42500));
    }

    #[test]
    fn test_compute_deadline_expired() {
        let error = compute_deadline(now(), 50000.0, &request()).unwrap_err();
        match error {
            DeadlineError::SessionExpired {
                elapsed_secs,
                session_secs,
            } => {
                assert_eq!(elapsed_secs, 50000.0);
                assert_eq!(session_secs, 43200.0);
            }
            other => panic!("Expected SessionExpired, got {:?}", other),
        }
    }

    #[test]
    fn test_compute_deadline_expired_at_boundary() {
        // elapsed == session is already expired
        let error = compute_deadline(now(), 43200.0, &request());
        assert!(error.is_err());
    }

    #[test]
    fn test_compute_deadline_fractional_elapsed() {
        let now = now();
        let deadline = compute_deadline(now, 0.5, &request()).unwrap();
        assert_eq!(deadline.remaining_secs(), 43200.0 - 0.5 - 600.0);
        assert_eq!(deadline.at(), now + Duration::milliseconds(42_599_500));
    }

    #[test]
    fn test_compute_deadline_preserves_offset() {
        let offset = parse_utc_offset("-05:00").unwrap();
        let request = DeadlineRequest::new(1000.0, 0.0, offset);
        let now = chrono::Utc::now().with_timezone(&offset);
        let deadline = compute_deadline(now, 1.0, &request).unwrap();
        assert_eq!(deadline.at().offset(), &offset);
    }
}
