//! Validate command - advisory checks on a final message

use missive_templates::ValidationResult;

use super::Command;
use crate::context::AppContext;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

/// Validate command handler
pub struct ValidateCommand {
    message: String,
}

impl ValidateCommand {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Format a validation result
    pub fn report(validation: &ValidationResult, style: &OutputStyle) -> String {
        let mut lines = Vec::new();
        if validation.is_valid {
            lines.push(style.success("Message is valid"));
        }
        for error in &validation.errors {
            lines.push(style.error(error));
        }
        for warning in &validation.warnings {
            lines.push(style.warning(warning));
        }
        lines.join("\n")
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        let validation = ctx.generator.validate(self.message.as_str());
        println!("{}", Self::report(&validation, &OutputStyle::default()));

        if validation.is_valid {
            Ok(())
        } else {
            Err(CliError::InvalidMessage(validation.errors.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_support::context_in;
    use tempfile::TempDir;

    #[test]
    fn test_report_lists_warnings() {
        let validation = ValidationResult {
            is_valid: true,
            errors: vec![],
            warnings: vec!["Message seems too short".to_string()],
        };
        assert_eq!(
            ValidateCommand::report(&validation, &OutputStyle::plain()),
            "✓ Message is valid\n⚠ Message seems too short"
        );
    }

    #[test]
    fn test_empty_message_fails() {
        let dir = TempDir::new().unwrap();
        let ctx = context_in(&dir, true);

        let err = ValidateCommand::new("").execute(&ctx).unwrap_err();
        assert!(matches!(err, CliError::InvalidMessage(_)));
        assert!(ValidateCommand::new("Dear {name}, thanks for visiting")
            .execute(&ctx)
            .is_ok());
    }
}
