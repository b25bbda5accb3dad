//! Stats command - catalog size summary

use super::Command;
use crate::context::AppContext;
use crate::error::CliResult;
use crate::output::OutputStyle;

/// Stats command handler
pub struct StatsCommand;

impl StatsCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn render(ctx: &AppContext, style: &OutputStyle) -> String {
        let stats = ctx.generator.stats();
        [
            style.header("Catalog statistics"),
            style.key_value("Categories", &stats.total_categories.to_string()),
            style.key_value("Templates", &stats.total_templates.to_string()),
            style.key_value(
                "Categories with templates",
                &stats.categories_with_templates.to_string(),
            ),
            style.key_value(
                "Average templates per category",
                &stats.average_templates_per_category.to_string(),
            ),
        ]
        .join("\n")
    }
}

impl Default for StatsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for StatsCommand {
    fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        println!("{}", Self::render(ctx, &OutputStyle::default()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_support::context_in;
    use tempfile::TempDir;

    #[test]
    fn test_render_builtin_stats() {
        let dir = TempDir::new().unwrap();
        let rendered = StatsCommand::render(&context_in(&dir, true), &OutputStyle::plain());

        assert!(rendered.contains("  Categories: 8"));
        assert!(rendered.contains("  Templates: 17"));
        assert!(rendered.contains("  Categories with templates: 8"));
        assert!(rendered.contains("  Average templates per category: 2"));
    }
}
