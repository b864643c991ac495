use crate::errors::VigilError;

#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("Browser '{browser}' is not supported on {os}")]
    UnsupportedPlatform {
        browser: String,
        os: &'static str,
    },

    #[error("Browser '{browser}' is not installed or not on PATH")]
    NotInstalled { browser: String },

    #[error("Failed to launch '{browser}' for '{url}': {source}")]
    LaunchFailed {
        browser: String,
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Browser launch command for '{browser}' exited with status {status}")]
    LaunchCommandFailed { browser: String, status: i32 },
}

impl VigilError for BrowserError {
    fn error_code(&self) -> &'static str {
        match self {
            BrowserError::UnsupportedPlatform { .. } => "BROWSER_UNSUPPORTED_PLATFORM",
            BrowserError::NotInstalled { .. } => "BROWSER_NOT_INSTALLED",
            BrowserError::LaunchFailed { .. } => "BROWSER_LAUNCH_FAILED",
            BrowserError::LaunchCommandFailed { .. } => "BROWSER_LAUNCH_COMMAND_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            BrowserError::UnsupportedPlatform { .. } | BrowserError::NotInstalled { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_error() {
        let error = BrowserError::UnsupportedPlatform {
            browser: "safari".to_string(),
            os: "linux",
        };
        assert_eq!(
            error.to_string(),
            "Browser 'safari' is not supported on linux"
        );
        assert_eq!(error.error_code(), "BROWSER_UNSUPPORTED_PLATFORM");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_not_installed_error() {
        let error = BrowserError::NotInstalled {
            browser: "edge".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Browser 'edge' is not installed or not on PATH"
        );
        assert_eq!(error.error_code(), "BROWSER_NOT_INSTALLED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_launch_failed_error() {
        let error = BrowserError::LaunchFailed {
            browser: "chrome".to_string(),
            url: "https://example.com".to_string(),
            source: std::io::Error::other("spawn failed"),
        };
        assert!(error.to_string().contains("chrome"));
        assert!(error.to_string().contains("https://example.com"));
        assert_eq!(error.error_code(), "BROWSER_LAUNCH_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_launch_command_failed_error() {
        let error = BrowserError::LaunchCommandFailed {
            browser: "chrome".to_string(),
            status: 1,
        };
        assert_eq!(
            error.to_string(),
            "Browser launch command for 'chrome' exited with status 1"
        );
        assert_eq!(error.error_code(), "BROWSER_LAUNCH_COMMAND_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BrowserError>();
    }
}
