//! Generate command - turn a prompt into a ready-to-customize message

use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use missive_templates::{GenerationResult, PlaceholderEngine, ValidationResult};
use serde::Serialize;
use tracing::{debug, warn};

use super::{values_from_pairs, Command};
use crate::context::AppContext;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

/// Shortest accepted prompt, in characters after trimming
pub const MIN_PROMPT_LENGTH: usize = 5;

/// Longest accepted prompt, in characters after trimming
pub const MAX_PROMPT_LENGTH: usize = 500;

/// Check prompt length and return it trimmed
pub fn check_prompt(prompt: &str) -> CliResult<&str> {
    let trimmed = prompt.trim();
    let length = trimmed.chars().count();

    if length < MIN_PROMPT_LENGTH {
        return Err(CliError::invalid_argument(format!(
            "Prompt must be at least {} characters",
            MIN_PROMPT_LENGTH
        )));
    }
    if length > MAX_PROMPT_LENGTH {
        return Err(CliError::invalid_argument(format!(
            "Prompt must be at most {} characters (got {})",
            MAX_PROMPT_LENGTH, length
        )));
    }
    Ok(trimmed)
}

/// File name used by `--download`
pub fn download_file_name(date: NaiveDate) -> String {
    format!("message_{}.txt", date.format("%Y-%m-%d"))
}

/// A generation result together with the text the user ends up with
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMessage {
    /// Raw generation result
    #[serde(flatten)]
    pub result: GenerationResult,
    /// Chosen body with the supplied values filled in
    pub text: String,
    /// Placeholders still present in `text`
    pub remaining_placeholders: Vec<String>,
    /// Validation of `text`
    pub validation: ValidationResult,
}

/// Generate command handler
pub struct GenerateCommand {
    prompt: String,
    values: Vec<(String, String)>,
    alternative: Option<usize>,
    json: bool,
    output: Option<PathBuf>,
    download: bool,
}

impl GenerateCommand {
    /// Create a generate command for a prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            values: Vec::new(),
            alternative: None,
            json: false,
            output: None,
            download: false,
        }
    }

    /// Placeholder values to fill in
    pub fn with_values(mut self, values: Vec<(String, String)>) -> Self {
        self.values = values;
        self
    }

    /// Use the N-th alternative (1-based) instead of the best template
    pub fn with_alternative(mut self, alternative: Option<usize>) -> Self {
        self.alternative = alternative;
        self
    }

    /// Print JSON instead of formatted text
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Also write the final text to this file
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Also write the final text to `message_<date>.txt`
    pub fn with_download(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    /// Run the generator and apply the alternative choice and values
    pub fn build(&self, ctx: &AppContext) -> CliResult<GeneratedMessage> {
        let prompt = check_prompt(&self.prompt)?;
        let result = ctx.generator.generate(prompt);
        if let Some(error) = &result.error {
            return Err(CliError::Generation(error.clone()));
        }

        let body = match self.alternative {
            None => result.message.clone(),
            Some(n) => n
                .checked_sub(1)
                .and_then(|index| result.alternatives.get(index))
                .cloned()
                .ok_or_else(|| {
                    CliError::invalid_argument(format!(
                        "Alternative {} does not exist; '{}' has {} alternative(s)",
                        n,
                        result.category,
                        result.alternatives.len()
                    ))
                })?,
        };

        let values = values_from_pairs(&self.values);
        let text = ctx.generator.customize(body.as_str(), Some(&values))?;
        let mut remaining_placeholders = ctx.generator.extract_placeholders(text.as_str());
        dedup_in_order(&mut remaining_placeholders);
        let validation = ctx.generator.validate(text.as_str());

        Ok(GeneratedMessage {
            result,
            text,
            remaining_placeholders,
            validation,
        })
    }

    /// Format a generated message for the terminal
    pub fn render(generated: &GeneratedMessage, style: &OutputStyle) -> String {
        let result = &generated.result;
        let mut lines = vec![
            style.header("Generated message"),
            style.key_value("Category", &result.category),
            style.key_value("Confidence", &style.confidence(result.confidence)),
            String::new(),
            style.message(&generated.text),
        ];

        if generated.remaining_placeholders.is_empty() {
            lines.push(String::new());
            lines.push(style.success("All placeholders filled"));
        } else {
            lines.push(style.section("Fields to fill"));
            for name in &generated.remaining_placeholders {
                lines.push(style.list_item(&format!(
                    "{{{}}}  {}",
                    name,
                    PlaceholderEngine::label(name)
                )));
            }
            lines.push(style.tip("Fill them with --set name=value"));
        }

        if !result.alternatives.is_empty() {
            lines.push(style.section("Alternatives"));
            for (i, alternative) in result.alternatives.iter().enumerate() {
                lines.push(style.numbered_item(i + 1, alternative));
            }
            lines.push(style.tip("Use one with --alternative N"));
        }

        if !result.suggestions.is_empty() {
            lines.push(style.section("Suggestions"));
            for suggestion in &result.suggestions {
                lines.push(style.list_item(suggestion));
            }
        }

        if !generated.validation.warnings.is_empty() {
            lines.push(String::new());
            for warning in &generated.validation.warnings {
                lines.push(style.warning(warning));
            }
        }

        lines.join("\n")
    }

    fn write_files(&self, text: &str) -> CliResult<Vec<PathBuf>> {
        let mut written = Vec::new();
        if let Some(path) = &self.output {
            fs::write(path, text)?;
            written.push(path.clone());
        }
        if self.download {
            let path = PathBuf::from(download_file_name(Local::now().date_naive()));
            fs::write(&path, text)?;
            written.push(path);
        }
        Ok(written)
    }
}

impl Command for GenerateCommand {
    fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        let generated = self.build(ctx)?;
        let written = self.write_files(&generated.text)?;

        // A failed history write never costs the user the message
        match ctx.record(self.prompt.trim(), &generated.result) {
            Ok(Some(entry)) => debug!("Recorded history entry {}", entry.id),
            Ok(None) => {}
            Err(e) => warn!("Failed to save history: {}", e),
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&generated)?);
            return Ok(());
        }

        let style = OutputStyle::default();
        println!("{}", Self::render(&generated, &style));
        for path in written {
            println!("{}", style.success(&format!("Saved to {}", path.display())));
        }
        Ok(())
    }
}

fn dedup_in_order(names: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    names.retain(|name| seen.insert(name.clone()));
}
