//! History command - browse and manage generated messages

use std::path::PathBuf;

use chrono::{Local, Utc};
use missive_history::{relative_time, HistoryEntry, HistoryError, HistoryManager, HistoryStore};

use super::{Command, GenerateCommand};
use crate::context::AppContext;
use crate::error::{CliError, CliResult};
use crate::output::{print_info, print_success, OutputStyle};

const PREVIEW_CHARS: usize = 60;
const SHORT_ID_CHARS: usize = 8;

/// History command action
#[derive(Debug, Clone)]
pub enum HistoryAction {
    /// List recent entries
    List { limit: Option<usize> },
    /// Generate again from a stored prompt
    Reuse { id: String },
    /// Delete one entry
    Delete { id: String },
    /// Delete every entry
    Clear,
    /// Show aggregate figures
    Analytics,
    /// Write a JSON export
    Export { output: Option<PathBuf> },
}

/// History command handler
pub struct HistoryCommand {
    action: HistoryAction,
}

impl HistoryCommand {
    /// Create a new history command
    pub fn new(action: HistoryAction) -> Self {
        Self { action }
    }

    /// Find an entry by full id or by a unique id prefix
    pub fn find<'a>(history: &'a HistoryManager, id: &str) -> CliResult<&'a HistoryEntry> {
        if let Some(entry) = history.get(id) {
            return Ok(entry);
        }

        let mut matches = history.entries().iter().filter(|e| e.id.starts_with(id));
        match (matches.next(), matches.next()) {
            (Some(entry), None) if !id.is_empty() => Ok(entry),
            (Some(_), Some(_)) => Err(CliError::invalid_argument(format!(
                "Id prefix '{}' matches more than one entry",
                id
            ))),
            _ => Err(HistoryError::NotFound(id.to_string()).into()),
        }
    }

    /// One line per entry: short id, age, category, confidence and preview
    pub fn render_list(history: &HistoryManager, limit: Option<usize>, style: &OutputStyle) -> String {
        let now = Utc::now();
        history
            .entries()
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|entry| {
                let short_id: String = entry.id.chars().take(SHORT_ID_CHARS).collect();
                format!(
                    "{}  {:<12}  {:<12}  {}\n    {}",
                    style.header(&short_id),
                    relative_time(entry.timestamp, now),
                    entry.category,
                    style.confidence(entry.confidence),
                    entry.message_preview(PREVIEW_CHARS)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Analytics summary
    pub fn render_analytics(history: &HistoryManager, style: &OutputStyle) -> String {
        let analytics = history.analytics(Utc::now());
        [
            style.header("History analytics"),
            style.key_value("Total messages", &analytics.total.to_string()),
            style.key_value("Generated today", &analytics.today.to_string()),
            style.key_value("Categories used", &analytics.categories.to_string()),
            style.key_value("Average confidence", &format!("{}%", analytics.avg_confidence)),
        ]
        .join("\n")
    }

    /// Default export file name
    pub fn export_file_name() -> PathBuf {
        PathBuf::from(format!(
            "missive_history_{}.json",
            Local::now().date_naive().format("%Y-%m-%d")
        ))
    }
}

impl Command for HistoryCommand {
    fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        let mut history = ctx.load_history()?;
        let style = OutputStyle::default();

        match &self.action {
            HistoryAction::List { limit } => {
                if history.is_empty() {
                    print_info("No messages in history yet");
                } else {
                    println!("{}", Self::render_list(&history, *limit, &style));
                }
            }
            HistoryAction::Reuse { id } => {
                let prompt = Self::find(&history, id)?.prompt.clone();
                GenerateCommand::new(prompt).execute(ctx)?;
            }
            HistoryAction::Delete { id } => {
                let full_id = Self::find(&history, id)?.id.clone();
                history.delete(&full_id);
                ctx.save_history(&history)?;
                print_success(&format!("Deleted history entry {}", full_id));
            }
            HistoryAction::Clear => {
                history.clear();
                ctx.save_history(&history)?;
                print_success("History cleared");
            }
            HistoryAction::Analytics => {
                println!("{}", Self::render_analytics(&history, &style));
            }
            HistoryAction::Export { output } => {
                let path = output.clone().unwrap_or_else(Self::export_file_name);
                HistoryStore::write_export(&history.export(Utc::now()), &path)?;
                print_success(&format!("Exported {} entries to {}", history.len(), path.display()));
            }
        }
        Ok(())
    }
}
