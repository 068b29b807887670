//! List command implementation.

use anyhow::{Result, ensure};
use clap::Args;

use marvel_core::SearchQuery;
use marvel_core::query::DEFAULT_LIST_LIMIT;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Maximum number of results
    #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
    pub limit: u32,

    /// Sort field
    #[arg(long, default_value = "name")]
    pub order_by: String,
}

impl ListArgs {
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new()
            .with_limit(self.limit)
            .with_order_by(&self.order_by)
    }
}

pub async fn run(args: ListArgs, config: &Config) -> Result<()> {
    ensure!(
        config.credentials.is_configured(),
        "No API keys configured. Pass --pub and --priv or set MARVEL_PUBLIC_KEY and MARVEL_PRIVATE_KEY."
    );

    let source = config.source(config.credentials.clone())?;
    let mut stdout = std::io::stdout();
    super::run_query(&source, &args.query(), &mut stdout, config.json).await
}
