use crate::errors::VigilError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Power-off is not supported on {os}")]
    PowerOffUnsupported { os: &'static str },

    #[error("Failed to request power-off: {reason}")]
    PowerOffFailed { reason: String },
}

impl VigilError for HostError {
    fn error_code(&self) -> &'static str {
        match self {
            HostError::PowerOffUnsupported { .. } => "HOST_POWER_OFF_UNSUPPORTED",
            HostError::PowerOffFailed { .. } => "HOST_POWER_OFF_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, HostError::PowerOffUnsupported { .. })
    }
}
