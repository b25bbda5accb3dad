// Display version information

use super::Command;
use crate::context::AppContext;
use crate::error::CliResult;
use crate::output::OutputStyle;

/// Display version information
pub struct VersionCommand;

impl VersionCommand {
    pub fn new() -> Self {
        Self
    }

    /// Get version information
    pub fn version_info(ctx: &AppContext) -> String {
        let stats = ctx.generator.stats();
        format!(
            "Missive v{}\n\nBuild Information:\n  Profile: {}\n  Catalog: {} categories, {} templates",
            env!("CARGO_PKG_VERSION"),
            if cfg!(debug_assertions) { "debug" } else { "release" },
            stats.total_categories,
            stats.total_templates
        )
    }
}

impl Default for VersionCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for VersionCommand {
    fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        let style = OutputStyle::default();
        println!("{}", style.header(&Self::version_info(ctx)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_support::context_in;
    use tempfile::TempDir;

    #[test]
    fn test_version_info_mentions_catalog() {
        let dir = TempDir::new().unwrap();
        let info = VersionCommand::version_info(&context_in(&dir, true));
        assert!(info.starts_with(&format!("Missive v{}", env!("CARGO_PKG_VERSION"))));
        assert!(info.contains("8 categories, 17 templates"));
    }
}
