use std::fmt;

use booking_form::FormError;
use telegram_webapp::BridgeError;

/// Central error types for the booking mini-app
#[derive(Debug)]
pub enum AppError {
    /// Host bridge rejected a call
    Bridge(BridgeError),
    /// Form input rejected (date format, photo limit)
    Form(FormError),
    /// Payload could not be serialized
    Serialization(serde_json::Error),
    /// Embedded configuration is invalid
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Bridge(e) => write!(f, "Bridge error: {}", e),
            AppError::Form(e) => write!(f, "Form error: {}", e),
            AppError::Serialization(e) => write!(f, "Serialization error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<BridgeError> for AppError {
    fn from(e: BridgeError) -> Self {
        AppError::Bridge(e)
    }
}

impl From<FormError> for AppError {
    fn from(e: FormError) -> Self {
        AppError::Form(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// Fluent message id shown to the user for this error
impl AppError {
    pub fn message_key(&self) -> &'static str {
        match self {
            AppError::Bridge(_) | AppError::Serialization(_) => "error-submit-failed",
            AppError::Form(FormError::InvalidDate(_)) => "error-date-format",
            AppError::Form(FormError::PhotoLimit { .. }) => "error-photo-limit",
            AppError::Config(_) => "error-generic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_keys() {
        assert_eq!(
            AppError::from(BridgeError::Unavailable).message_key(),
            "error-submit-failed"
        );
        assert_eq!(
            AppError::from(FormError::InvalidDate("x".to_string())).message_key(),
            "error-date-format"
        );
        assert_eq!(
            AppError::from(FormError::PhotoLimit {
                max: 5,
                current: 4,
                requested: 2
            })
            .message_key(),
            "error-photo-limit"
        );
    }

    #[test]
    fn test_display_wraps_source() {
        let err = AppError::from(BridgeError::Script("WebAppDataInvalid".to_string()));
        assert_eq!(
            err.to_string(),
            "Bridge error: Host bridge error: WebAppDataInvalid"
        );
    }
}
