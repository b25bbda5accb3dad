// Missive CLI entry point

use missive_cli::{output, router::CommandRouter};

fn main() {
    // Route and execute command
    if let Err(e) = CommandRouter::route() {
        output::print_error(&e.user_message());
        tracing::debug!("{}", e.technical_details());
        std::process::exit(1);
    }
}
