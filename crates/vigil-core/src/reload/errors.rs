use crate::browsers::errors::BrowserError;
use crate::errors::VigilError;
use crate::host::errors::HostError;
use crate::input::errors::InputError;
use crate::vision::errors::VisionError;

#[derive(Debug, thiserror::Error)]
pub enum ReloadError {
    #[error(transparent)]
    Browser(#[from] BrowserError),

    #[error(transparent)]
    Vision(#[from] VisionError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Host(#[from] HostError),
}

impl VigilError for ReloadError {
    fn error_code(&self) -> &'static str {
        match self {
            ReloadError::Browser(e) => e.error_code(),
            ReloadError::Vision(e) => e.error_code(),
            ReloadError::Input(e) => e.error_code(),
            ReloadError::Host(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ReloadError::Browser(e) => e.is_user_error(),
            ReloadError::Vision(e) => e.is_user_error(),
            ReloadError::Input(e) => e.is_user_error(),
            ReloadError::Host(e) => e.is_user_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_error_delegates_code() {
        let error = ReloadError::from(BrowserError::NotInstalled {
            browser: "edge".to_string(),
        });
        assert_eq!(error.error_code(), "BROWSER_NOT_INSTALLED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_reload_error_transparent_display() {
        let error = ReloadError::from(VisionError::NoMonitorAvailable);
        assert_eq!(error.to_string(), "No monitor available for screen capture");
        assert!(!error.is_user_error());
    }
}
