// Command handlers for the missive CLI

pub mod categories;
pub mod customize;
pub mod generate;
pub mod history;
pub mod placeholders;
pub mod stats;
pub mod validate;
pub mod version;

pub use categories::CategoriesCommand;
pub use customize::CustomizeCommand;
pub use generate::GenerateCommand;
pub use history::{HistoryAction, HistoryCommand};
pub use placeholders::PlaceholdersCommand;
pub use stats::StatsCommand;
pub use validate::ValidateCommand;
pub use version::VersionCommand;

use crate::context::AppContext;
use crate::error::CliResult;
use missive_templates::PlaceholderValues;

/// Trait for command handlers
pub trait Command {
    /// Execute the command
    fn execute(&self, ctx: &AppContext) -> CliResult<()>;
}

/// Collect `--set name=value` pairs, later pairs winning
pub(crate) fn values_from_pairs(pairs: &[(String, String)]) -> PlaceholderValues {
    pairs.iter().cloned().collect()
}
