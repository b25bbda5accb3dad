// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::context::AppContext;
use crate::error::CliResult;

/// Missive - ready-to-customize messages from a short prompt
#[derive(Parser, Debug)]
#[command(name = "missive")]
#[command(bin_name = "missive")]
#[command(about = "Generate greeting, promotional and business messages from a short prompt")]
#[command(
    long_about = "Missive picks a pre-written message that matches what you describe and leaves {placeholders} for you to fill in.\n\nQuick Start:\n  • missive generate \"Diwali wishes for customers\"\n  • missive generate \"birthday wishes\" --set name=Sam\n  • missive categories --verbose\n  • missive history list"
)]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (default: <config dir>/missive/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not record generated messages in history
    #[arg(long, global = true)]
    pub no_history: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate a message from a prompt
    #[command(about = "Generate a message from a short description")]
    Generate {
        /// What the message is for, e.g. "Diwali offer for our customers"
        #[arg(value_name = "PROMPT")]
        prompt: String,

        /// Fill a placeholder (repeatable)
        #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_key_val)]
        set: Vec<(String, String)>,

        /// Use the N-th alternative instead of the best match
        #[arg(short, long, value_name = "N")]
        alternative: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Write the final message to a file
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Write the final message to message_<date>.txt
        #[arg(long)]
        download: bool,
    },

    /// Fill placeholders in a template
    #[command(about = "Fill {placeholders} in a template body")]
    Customize {
        /// Template body
        #[arg(value_name = "TEMPLATE")]
        template: String,

        /// Fill a placeholder (repeatable)
        #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_key_val)]
        set: Vec<(String, String)>,
    },

    /// List placeholders in a text
    #[command(about = "List the {placeholders} found in a text")]
    Placeholders {
        /// Text to inspect
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Check a message before sending it
    #[command(about = "Validate a final message")]
    Validate {
        /// Message to check
        #[arg(value_name = "MESSAGE")]
        message: String,
    },

    /// List message categories
    #[command(about = "List message categories in the catalog")]
    Categories {
        /// Show every template
        #[arg(long = "templates")]
        templates: bool,
    },

    /// Show catalog statistics
    #[command(about = "Show template catalog statistics")]
    Stats,

    /// Manage generation history
    #[command(about = "Browse and manage previously generated messages")]
    History {
        #[command(subcommand)]
        action: Option<HistorySubcommand>,
    },

    /// Show version information
    #[command(about = "Show version information")]
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum HistorySubcommand {
    /// List recent messages
    #[command(about = "List recent messages, newest first")]
    List {
        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Generate again from a stored prompt
    #[command(about = "Generate a fresh message from a stored prompt")]
    Reuse {
        /// Entry id or unique prefix
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Delete a stored message
    #[command(about = "Delete a stored message")]
    Delete {
        /// Entry id or unique prefix
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Delete all stored messages
    #[command(about = "Delete all stored messages")]
    Clear,

    /// Show history analytics
    #[command(about = "Show totals, today's count and average confidence")]
    Analytics,

    /// Export history as JSON
    #[command(about = "Export history and analytics to a JSON file")]
    Export {
        /// Output file (default: missive_history_<date>.json)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

/// Parse a `name=value` pair
///
/// The name is trimmed and must not be empty. The value is kept as given and
/// may itself contain `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing placeholder name in '{}'", s));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub fn route() -> CliResult<()> {
        let cli = Cli::parse();

        let config = AppContext::load_config(cli.config.as_deref())?;

        // Initialize logging based on CLI flags and the configured level
        crate::logging::init_logging(cli.verbose, cli.quiet, &config.logging.level);

        let ctx = AppContext::new(config, cli.no_history)?;
        Self::execute(&cli, &ctx)
    }

    /// Execute a command
    pub fn execute(cli: &Cli, ctx: &AppContext) -> CliResult<()> {
        let command = cli.command.clone().unwrap_or(Commands::Version);

        match command {
            Commands::Generate {
                prompt,
                set,
                alternative,
                json,
                output,
                download,
            } => GenerateCommand::new(prompt)
                .with_values(set)
                .with_alternative(alternative)
                .with_json(json)
                .with_output(output)
                .with_download(download)
                .execute(ctx),
            Commands::Customize { template, set } => {
                CustomizeCommand::new(template, set).execute(ctx)
            }
            Commands::Placeholders { text } => PlaceholdersCommand::new(text).execute(ctx),
            Commands::Validate { message } => ValidateCommand::new(message).execute(ctx),
            Commands::Categories { templates } => {
                CategoriesCommand::new(templates || cli.verbose).execute(ctx)
            }
            Commands::Stats => StatsCommand::new().execute(ctx),
            Commands::History { action } => {
                let action = match action {
                    None => HistoryAction::List { limit: None },
                    Some(HistorySubcommand::List { limit }) => HistoryAction::List { limit },
                    Some(HistorySubcommand::Reuse { id }) => HistoryAction::Reuse { id },
                    Some(HistorySubcommand::Delete { id }) => HistoryAction::Delete { id },
                    Some(HistorySubcommand::Clear) => HistoryAction::Clear,
                    Some(HistorySubcommand::Analytics) => HistoryAction::Analytics,
                    Some(HistorySubcommand::Export { output }) => HistoryAction::Export { output },
                };
                HistoryCommand::new(action).execute(ctx)
            }
            Commands::Version => VersionCommand::new().execute(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("name=Sam").unwrap(),
            ("name".to_string(), "Sam".to_string())
        );
        assert_eq!(
            parse_key_val(" url =a=b").unwrap(),
            ("url".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_key_val("name=").unwrap(),
            ("name".to_string(), String::new())
        );
        assert!(parse_key_val("name").is_err());
        assert!(parse_key_val("=Sam").is_err());
    }

    #[test]
    fn test_parse_generate_with_options() {
        let cli = Cli::try_parse_from([
            "missive",
            "--no-history",
            "generate",
            "Diwali wishes",
            "--set",
            "name=Sam",
            "-s",
            "company=Acme",
            "--alternative",
            "2",
            "--json",
        ])
        .unwrap();

        assert!(cli.no_history);
        match cli.command {
            Some(Commands::Generate {
                prompt,
                set,
                alternative,
                json,
                output,
                download,
            }) => {
                assert_eq!(prompt, "Diwali wishes");
                assert_eq!(set.len(), 2);
                assert_eq!(set[1], ("company".to_string(), "Acme".to_string()));
                assert_eq!(alternative, Some(2));
                assert!(json);
                assert!(output.is_none());
                assert!(!download);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_pair() {
        assert!(Cli::try_parse_from(["missive", "customize", "Hi {name}", "--set", "name"]).is_err());
    }

    #[test]
    fn test_parse_history_subcommands() {
        let cli = Cli::try_parse_from(["missive", "history", "list", "--limit", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::History {
                action: Some(HistorySubcommand::List { limit: Some(3) })
            })
        ));

        let cli = Cli::try_parse_from(["missive", "history", "export", "-o", "out.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::History {
                action: Some(HistorySubcommand::Export { output: Some(_) })
            })
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "missive",
            "categories",
            "--verbose",
            "--config",
            "/tmp/missive.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/missive.toml")));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
