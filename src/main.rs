mod aggregates;
mod amounts;
mod category;
mod cli;
mod clock;
mod errors;
mod ledger;
mod period;
mod store;
mod tracker;
mod vault;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr, stdout only carries command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spent=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::run()
}
