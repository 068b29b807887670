//! Search command implementation.

use anyhow::{Result, ensure};
use clap::Args;

use marvel_core::SearchQuery;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Name prefix to look for
    pub name: String,

    /// Maximum number of results
    #[arg(long, default_value_t = 1)]
    pub limit: u32,

    /// Sort field, e.g. name or -modified
    #[arg(long)]
    pub order_by: Option<String>,
}

impl SearchArgs {
    pub fn query(&self) -> SearchQuery {
        let mut query = SearchQuery::by_name(&self.name).with_limit(self.limit);
        if let Some(order_by) = &self.order_by {
            query = query.with_order_by(order_by);
        }
        query
    }
}

pub async fn run(args: SearchArgs, config: &Config) -> Result<()> {
    ensure!(
        config.credentials.is_configured(),
        "No API keys configured. Pass --pub and --priv or set MARVEL_PUBLIC_KEY and MARVEL_PRIVATE_KEY."
    );

    let source = config.source(config.credentials.clone())?;
    let mut stdout = std::io::stdout();
    super::run_query(&source, &args.query(), &mut stdout, config.json).await
}
