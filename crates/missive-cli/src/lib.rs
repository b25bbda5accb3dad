// Missive CLI library
// Command-line presentation layer over the template engine, history and config crates.

pub mod commands;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;
pub mod router;

pub use context::AppContext;
pub use error::{CliError, CliResult};
pub use router::{Cli, CommandRouter};
