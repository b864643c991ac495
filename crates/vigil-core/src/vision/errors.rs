use crate::errors::VigilError;

#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("Failed to load template image '{path}': {reason}")]
    TemplateLoadFailed { path: String, reason: String },

    #[error("No monitor available for screen capture")]
    NoMonitorAvailable,

    #[error("Monitor enumeration failed: {reason}")]
    MonitorEnumerationFailed { reason: String },

    #[error("Screen capture failed: {reason}")]
    CaptureFailed { reason: String },
}

impl VigilError for VisionError {
    fn error_code(&self) -> &'static str {
        match self {
            VisionError::TemplateLoadFailed { .. } => "VISION_TEMPLATE_LOAD_FAILED",
            VisionError::NoMonitorAvailable => "VISION_NO_MONITOR",
            VisionError::MonitorEnumerationFailed { .. } => "VISION_MONITOR_ENUMERATION_FAILED",
            VisionError::CaptureFailed { .. } => "VISION_CAPTURE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, VisionError::TemplateLoadFailed { .. })
    }
}
