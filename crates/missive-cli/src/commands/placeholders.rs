//! Placeholders command - list the `{name}` fields of a text

use missive_templates::PlaceholderEngine;

use super::Command;
use crate::context::AppContext;
use crate::error::CliResult;
use crate::output::{print_info, OutputStyle};

/// Placeholders command handler
pub struct PlaceholdersCommand {
    text: String,
}

impl PlaceholdersCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// One line per placeholder occurrence: token and its form label
    pub fn lines(&self, ctx: &AppContext) -> Vec<String> {
        ctx.generator
            .extract_placeholders(self.text.as_str())
            .into_iter()
            .map(|name| format!("{{{}}}  {}", name, PlaceholderEngine::label(&name)))
            .collect()
    }
}

impl Command for PlaceholdersCommand {
    fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        let lines = self.lines(ctx);
        if lines.is_empty() {
            print_info("No placeholders found");
            return Ok(());
        }

        let style = OutputStyle::default();
        for line in lines {
            println!("{}", style.list_item(&line));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_support::context_in;
    use tempfile::TempDir;

    #[test]
    fn test_lines_keep_duplicates_in_order() {
        let dir = TempDir::new().unwrap();
        let ctx = context_in(&dir, true);
        let cmd = PlaceholdersCommand::new("{firstName} and {b} and {firstName}");

        assert_eq!(
            cmd.lines(&ctx),
            vec!["{firstName}  First Name", "{b}  B", "{firstName}  First Name"]
        );
    }

    #[test]
    fn test_no_placeholders() {
        let dir = TempDir::new().unwrap();
        let ctx = context_in(&dir, true);
        assert!(PlaceholdersCommand::new("plain text").lines(&ctx).is_empty());
    }
}
