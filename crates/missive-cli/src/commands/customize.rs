//! Customize command - fill placeholders in a template body

use super::{values_from_pairs, Command};
use crate::context::AppContext;
use crate::error::CliResult;
use crate::output::print_warning;

/// Customize command handler
pub struct CustomizeCommand {
    template: String,
    values: Vec<(String, String)>,
}

impl CustomizeCommand {
    /// Create a customize command
    pub fn new(template: impl Into<String>, values: Vec<(String, String)>) -> Self {
        Self {
            template: template.into(),
            values,
        }
    }

    /// Apply the values, returning the text and the placeholders left over
    pub fn apply(&self, ctx: &AppContext) -> CliResult<(String, Vec<String>)> {
        let values = values_from_pairs(&self.values);
        let text = ctx
            .generator
            .customize(self.template.as_str(), Some(&values))?;
        let remaining = ctx.generator.extract_placeholders(text.as_str());
        Ok((text, remaining))
    }
}

impl Command for CustomizeCommand {
    fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        let (text, remaining) = self.apply(ctx)?;
        println!("{}", text);

        if !remaining.is_empty() {
            print_warning(&format!("Unfilled placeholders: {}", remaining.join(", ")));
        }
        Ok(())
    }
}
