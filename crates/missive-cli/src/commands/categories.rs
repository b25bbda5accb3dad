//! Categories command - list catalog categories

use super::Command;
use crate::context::AppContext;
use crate::error::CliResult;
use crate::output::OutputStyle;

/// Categories command handler
pub struct CategoriesCommand {
    verbose: bool,
}

impl CategoriesCommand {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Category listing, with every template when verbose
    pub fn render(&self, ctx: &AppContext, style: &OutputStyle) -> String {
        let mut lines = vec![style.header("Categories")];

        for name in ctx.generator.list_categories() {
            let templates = ctx.generator.category_templates(&name).unwrap_or_default();
            let mut line = format!("{} ({} templates)", name, templates.len());
            if name == ctx.generator.catalog().default_category() {
                line.push_str(" [default]");
            }
            lines.push(style.list_item(&line));

            if self.verbose {
                for template in templates {
                    lines.push(format!(
                        "      {}  {}",
                        style.confidence(template.confidence),
                        template.body
                    ));
                }
            }
        }

        lines.join("\n")
    }
}

impl Command for CategoriesCommand {
    fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        println!("{}", self.render(ctx, &OutputStyle::default()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_support::context_in;
    use tempfile::TempDir;

    #[test]
    fn test_render_lists_categories_in_order() {
        let dir = TempDir::new().unwrap();
        let ctx = context_in(&dir, true);
        let rendered = CategoriesCommand::new(false).render(&ctx, &OutputStyle::plain());

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Categories");
        assert_eq!(lines[1], "  • diwali (3 templates)");
        assert!(rendered.contains("  • business (2 templates) [default]"));
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_verbose_includes_templates() {
        let dir = TempDir::new().unwrap();
        let ctx = context_in(&dir, true);
        let rendered = CategoriesCommand::new(true).render(&ctx, &OutputStyle::plain());

        assert!(rendered.contains("90% (high)  Hello {name}, Diwali greetings!"));
        assert_eq!(rendered.lines().count(), 1 + 8 + 17);
    }
}
