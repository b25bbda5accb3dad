// CLI error types and user-facing messages

use missive_config::ConfigError;
use missive_history::HistoryError;
use missive_templates::TemplateError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Message is not valid: {0}")]
    InvalidMessage(String),
}

impl CliError {
    /// Shorthand for [`CliError::InvalidArgument`]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'missive help' for usage information.",
                    message
                )
            }
            CliError::Io(e) => {
                format!("File operation failed: {}", e)
            }
            CliError::Config(e) => {
                format!(
                    "Configuration error: {}\n\nCheck your config file or MISSIVE_* environment variables.",
                    e
                )
            }
            CliError::Template(e) => {
                format!(
                    "Template catalog error: {}\n\nCheck the catalog file configured in catalog.path.",
                    e
                )
            }
            CliError::History(HistoryError::NotFound(id)) => {
                format!(
                    "No history entry with id '{}'.\n\nRun 'missive history list' to see stored entries.",
                    id
                )
            }
            CliError::History(e) => {
                format!("History error: {}", e)
            }
            CliError::Serialization(e) => {
                format!("Could not produce JSON output: {}", e)
            }
            CliError::Generation(msg) => {
                format!("Message generation failed: {}", msg)
            }
            CliError::InvalidMessage(msg) => {
                format!("Message is not valid: {}", msg)
            }
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message_points_to_help() {
        let err = CliError::invalid_argument("prompt too short");
        assert!(err.user_message().contains("prompt too short"));
        assert!(err.user_message().contains("missive help"));
    }

    #[test]
    fn test_history_not_found_message() {
        let err = CliError::from(HistoryError::NotFound("abc".to_string()));
        let message = err.user_message();
        assert!(message.contains("'abc'"));
        assert!(message.contains("missive history list"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: CliError = ConfigError::Validation("bad level".to_string()).into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.user_message().contains("bad level"));
    }
}
