//! CLI argument definitions.

use clap::{Parser, Subcommand};

use marvel_core::types::DEFAULT_API_BASE;

use crate::commands::list::ListArgs;
use crate::commands::search::SearchArgs;

/// Look up Marvel characters from the terminal.
///
/// Without a subcommand, starts an interactive session.
#[derive(Parser, Debug)]
#[command(name = "marvel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Public API key
    #[arg(long = "pub", env = "MARVEL_PUBLIC_KEY", global = true, hide_env_values = true)]
    pub public_key: Option<String>,

    /// Private API key
    #[arg(long = "priv", env = "MARVEL_PRIVATE_KEY", global = true, hide_env_values = true)]
    pub private_key: Option<String>,

    /// API base URL
    #[arg(long, env = "MARVEL_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,

    /// Overall request timeout in seconds
    #[arg(long, env = "MARVEL_TIMEOUT", default_value_t = 30, global = true)]
    pub timeout: u64,

    /// Print records as JSON, one per line
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for keys and searches until told to stop (default)
    Interactive,

    /// Search characters by name prefix
    Search(SearchArgs),

    /// List characters
    List(ListArgs),
}
