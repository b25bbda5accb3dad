//! Structural checks on generated or customized messages

use crate::models::ValidationResult;
use crate::placeholders::PlaceholderEngine;

/// Messages shorter than this (in characters) get a warning
pub const MIN_MESSAGE_LENGTH: usize = 10;

/// Messages longer than this (in characters) get a warning
pub const MAX_MESSAGE_LENGTH: usize = 500;

pub(crate) const EMPTY_MESSAGE_ERROR: &str = "Message cannot be empty";
pub(crate) const TOO_SHORT_WARNING: &str = "Message seems too short";
pub(crate) const TOO_LONG_WARNING: &str = "Message might be too long for some channels";
pub(crate) const NO_PLACEHOLDERS_WARNING: &str = "Consider adding personalization placeholders";

/// Message validator
pub struct MessageValidator;

impl MessageValidator {
    /// Validate a message
    ///
    /// An empty or absent message is the only invalid input; every other
    /// finding is a warning and leaves the message valid.
    pub fn validate(message: Option<&str>) -> ValidationResult {
        let message = match message {
            Some(m) if !m.is_empty() => m,
            _ => {
                return ValidationResult {
                    is_valid: false,
                    errors: vec![EMPTY_MESSAGE_ERROR.to_string()],
                    warnings: Vec::new(),
                }
            }
        };

        let mut warnings = Vec::new();
        let length = message.chars().count();

        if length < MIN_MESSAGE_LENGTH {
            warnings.push(TOO_SHORT_WARNING.to_string());
        }

        if length > MAX_MESSAGE_LENGTH {
            warnings.push(TOO_LONG_WARNING.to_string());
        }

        if PlaceholderEngine::extract(message).is_empty() {
            warnings.push(NO_PLACEHOLDERS_WARNING.to_string());
        }

        ValidationResult {
            is_valid: true,
            errors: Vec::new(),
            warnings,
        }
    }
}
