//! Interactive session: choose keys, then search until told to stop.

use std::io::{self, BufRead, BufReader, Write};

use anyhow::Result;
use tracing::debug;

use marvel_core::query::DEFAULT_LIST_LIMIT;
use marvel_core::{CharacterSource, Credentials, SearchQuery};

use crate::config::{Config, resolve_credentials};
use crate::prompt::Prompter;

const BANNER: &str = "\
******************************************************************************************
//////////////////////////////////////////////////////////////////////////////////////////
******************************************************************************************";

/// Which keys the user picked at the first prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyChoice {
    /// Keys typed at the prompt.
    Typed(Credentials),
    /// Keys from flags or the environment.
    Configured,
}

pub async fn run(config: &Config) -> Result<()> {
    let mut prompter = Prompter::new(BufReader::new(io::stdin()), io::stdout());

    let Some(choice) = ask_for_keys(&mut prompter, &config.credentials)? else {
        return Ok(());
    };
    let typed = match choice {
        KeyChoice::Typed(credentials) => Some(credentials),
        KeyChoice::Configured => None,
    };
    let credentials = resolve_credentials(typed, &config.credentials);
    debug!(?credentials, "using credentials");

    let source = config.source(credentials)?;
    session(&mut prompter, &source, config.json).await
}

/// Ask whether to type keys in or use the configured ones.
///
/// Declining while nothing is configured re-prompts. Returns `None` at end
/// of input.
pub fn ask_for_keys<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    configured: &Credentials,
) -> Result<Option<KeyChoice>> {
    loop {
        writeln!(prompter.output())?;
        let Some(own_keys) = prompter.confirm("Do you want to enter your own API keys? (y/N): ", false)?
        else {
            return Ok(None);
        };

        if own_keys {
            let Some(private_key) = prompter.ask("Enter your private key: ")? else {
                return Ok(None);
            };
            let Some(public_key) = prompter.ask("Enter your public key: ")? else {
                return Ok(None);
            };
            return Ok(Some(KeyChoice::Typed(Credentials::new(public_key, private_key))));
        }

        if configured.is_configured() {
            return Ok(Some(KeyChoice::Configured));
        }

        writeln!(
            prompter.output(),
            "No API keys configured. Pass --pub/--priv, set MARVEL_PUBLIC_KEY/MARVEL_PRIVATE_KEY, or enter them here."
        )?;
    }
}

/// Ask what to search for. Returns `None` at end of input.
pub fn ask_for_query<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Option<SearchQuery>> {
    loop {
        writeln!(prompter.output())?;
        writeln!(prompter.output(), "1. Search by name")?;
        writeln!(prompter.output(), "2. List")?;
        writeln!(prompter.output())?;

        let Some(option) = prompter.ask("> ")? else {
            return Ok(None);
        };

        match option.trim() {
            "1" => {
                let Some(name) = prompter.ask("Name of your favourite character: ")? else {
                    return Ok(None);
                };
                let name = name.trim();
                if name.is_empty() {
                    writeln!(prompter.output(), "Please enter a name.")?;
                    continue;
                }
                writeln!(prompter.output(), "\n{}\n", BANNER)?;
                return Ok(Some(SearchQuery::by_name(name)));
            }
            "2" => {
                writeln!(
                    prompter.output(),
                    "Listing the first {} characters sorted by name...",
                    DEFAULT_LIST_LIMIT
                )?;
                writeln!(prompter.output(), "\n{}\n", BANNER)?;
                return Ok(Some(SearchQuery::first(DEFAULT_LIST_LIMIT)));
            }
            _ => writeln!(prompter.output(), "Please enter 1 or 2.")?,
        }
    }
}

/// Search, print, and ask whether to go again.
///
/// A failed search ends the session with that error.
pub async fn session<R, W, S>(prompter: &mut Prompter<R, W>, source: &S, as_json: bool) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: CharacterSource,
{
    loop {
        let Some(query) = ask_for_query(prompter)? else {
            return Ok(());
        };

        super::run_query(source, &query, prompter.output(), as_json).await?;

        writeln!(prompter.output())?;
        match prompter.confirm("Do you want to run another search? (Y/n): ", true)? {
            Some(true) => continue,
            Some(false) => {
                writeln!(prompter.output(), "Thanks for trying it out!")?;
                return Ok(());
            }
            None => return Ok(()),
        }
    }
}
