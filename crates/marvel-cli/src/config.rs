//! Runtime configuration resolved once at startup.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::warn;

use marvel_core::{ApiBase, Credentials, RequestSigner};
use marvel_http::HttpCharacterSource;

use crate::cli::Cli;

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: ApiBase,
    /// Keys from `--pub`/`--priv` or the environment; empty when unset.
    pub credentials: Credentials,
    pub timeout: Duration,
    pub json: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_base = ApiBase::new(&cli.api_base).context("Invalid API base URL")?;
        let credentials = Credentials::new(
            cli.public_key.clone().unwrap_or_default(),
            cli.private_key.clone().unwrap_or_default(),
        );

        if !credentials.is_configured() {
            // No keys are built in; they must come from flags, env or the prompt
            warn!("no API keys configured; pass --pub/--priv or set MARVEL_PUBLIC_KEY/MARVEL_PRIVATE_KEY");
        }

        Ok(Self {
            api_base,
            credentials,
            timeout: Duration::from_secs(cli.timeout),
            json: cli.json,
        })
    }

    /// Build an HTTP source signing with `credentials`.
    pub fn source(&self, credentials: Credentials) -> Result<HttpCharacterSource> {
        let signer = RequestSigner::new(self.api_base.clone(), credentials);
        HttpCharacterSource::new(signer, self.timeout).context("Failed to create HTTP client")
    }
}

/// Pick the keys for a run: keys typed at the prompt win over the
/// configured ones.
pub fn resolve_credentials(interactive: Option<Credentials>, configured: &Credentials) -> Credentials {
    interactive.unwrap_or_else(|| configured.clone())
}
