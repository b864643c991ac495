use crate::errors::VigilError;

#[derive(Debug, thiserror::Error)]
pub enum DeadlineError {
    #[error(
        "Elapsed time meets or exceeds the session time ({elapsed_secs} >= {session_secs}); \
         this indicates a misconfigured session ceiling or a clock anomaly"
    )]
    SessionExpired {
        elapsed_secs: f64,
        session_secs: f64,
    },

    #[error("Invalid UTC offset '{value}' (expected e.g. '+09:00')")]
    InvalidOffset { value: String },
}

impl VigilError for DeadlineError {
    fn error_code(&self) -> &'static str {
        match self {
            DeadlineError::SessionExpired { .. } => "DEADLINE_SESSION_EXPIRED",
            DeadlineError::InvalidOffset { .. } => "DEADLINE_INVALID_OFFSET",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, DeadlineError::InvalidOffset { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_expired_error() {
        let error = DeadlineError::SessionExpired {
            elapsed_secs: 50000.0,
            session_secs: 43200.0,
        };
        assert!(error.to_string().contains("50000 >= 43200"));
        assert_eq!(error.error_code(), "DEADLINE_SESSION_EXPIRED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_invalid_offset_error() {
        let error = DeadlineError::InvalidOffset {
            value: "Asia/Tokyo".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid UTC offset 'Asia/Tokyo' (expected e.g. '+09:00')"
        );
        assert_eq!(error.error_code(), "DEADLINE_INVALID_OFFSET");
        assert!(error.is_user_error());
    }
}
