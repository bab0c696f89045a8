//! Swarmed - load mounted secret files into environment variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use swarmed::cli::output;
use swarmed::cli::{execute, Cli};
use swarmed::core::constants::LOG_FILTER_VAR;
use swarmed::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("swarmed=debug")
        } else {
            EnvFilter::new("swarmed=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::DirectoryAccess { .. } => Some("use --dir or SWARMED_SECRETS_DIR"),
            Error::EnvironmentWrite { .. } => {
                Some("rename the secret file or adjust --prefix / --remove-version-suffix")
            }
            Error::NoCommand => Some("usage: swarmed run -- <command> [args...]"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
