//! marvel - look up Marvel characters from the terminal.
//!
//! This is a thin shell over `marvel-core` and `marvel-http`: it resolves
//! keys and search filters from flags, the environment or prompts, runs one
//! request at a time and prints every field of every returned character.

mod cli;
mod commands;
mod config;
mod output;
mod prompt;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{interactive, list, search};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let config = Config::from_cli(&cli)?;

    let result = match cli.command {
        None | Some(Commands::Interactive) => interactive::run(&config).await,
        Some(Commands::Search(args)) => search::run(args, &config).await,
        Some(Commands::List(args)) => list::run(args, &config).await,
    };

    if let Err(e) = result {
        output::error(&format!("{:#}", e));
        if commands::is_auth_failure(&e) {
            output::hint(
                "Check your API keys (--pub/--priv or MARVEL_PUBLIC_KEY/MARVEL_PRIVATE_KEY).",
            );
        }
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
