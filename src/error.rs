//! Error handling module for Dwamee
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The registration and checkout domain itself is infallible (unknown ids and
//! coupons degrade to defaults), so these errors cover the terminal and the
//! guarded wizard transitions.

use crate::wizard::WizardTransitionError;
use thiserror::Error;

/// Main error type for Dwamee
#[derive(Error, Debug)]
pub enum DwameeError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Registration wizard transition errors
    #[error("Wizard transition error: {0}")]
    WizardTransition(#[from] WizardTransitionError),
}

/// Result type alias for Dwamee operations
pub type Result<T> = std::result::Result<T, DwameeError>;

impl DwameeError {
    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardStep;

    #[test]
    fn test_error_display() {
        let err = DwameeError::terminal("raw mode unavailable");
        assert_eq!(err.to_string(), "Terminal error: raw mode unavailable");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DwameeError = io_err.into();
        assert!(matches!(err, DwameeError::Io(_)));
    }

    #[test]
    fn test_wizard_error_conversion() {
        let err: DwameeError = WizardTransitionError::SubmitBeforeFinalStep {
            step: WizardStep::Personal,
        }
        .into();
        assert!(matches!(err, DwameeError::WizardTransition(_)));
        assert!(err.to_string().contains("Personal Info"));
    }
}
