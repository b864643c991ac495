use crate::errors::VigilError;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Synthetic input is not supported on {os}")]
    UnsupportedPlatform { os: &'static str },

    #[error("Failed to create event source")]
    EventSourceFailed,

    #[error("Failed to query the pointer position")]
    PointerQueryFailed,

    #[error("Failed to create mouse event at ({x}, {y})")]
    MouseEventFailed { x: f64, y: f64 },

    #[error("Input command '{tool}' failed: {reason}")]
    CommandFailed { tool: &'static str, reason: String },
}

impl VigilError for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            InputError::UnsupportedPlatform { .. } => "INPUT_UNSUPPORTED_PLATFORM",
            InputError::EventSourceFailed => "INPUT_EVENT_SOURCE_FAILED",
            InputError::PointerQueryFailed => "INPUT_POINTER_QUERY_FAILED",
            InputError::MouseEventFailed { .. } => "INPUT_MOUSE_EVENT_FAILED",
            InputError::CommandFailed { .. } => "INPUT_COMMAND_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, InputError::UnsupportedPlatform { .. })
    }
}
