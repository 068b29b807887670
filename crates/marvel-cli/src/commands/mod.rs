//! Command implementations.

pub mod interactive;
pub mod list;
pub mod search;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use marvel_core::{ApiError, CharacterSource, SearchQuery};

use crate::output;

/// Run one search and write its records to `out`.
pub async fn run_query<S: CharacterSource>(
    source: &S,
    query: &SearchQuery,
    out: &mut impl Write,
    as_json: bool,
) -> Result<()> {
    info!(?query, "searching characters");
    let envelope = source
        .search(query)
        .await
        .context("Failed to fetch characters")?;

    output::envelope(out, &envelope, as_json)?;
    out.flush()?;
    Ok(())
}

/// True when some error in the chain is the API rejecting the keys.
pub fn is_auth_failure(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<ApiError>())
        .any(ApiError::is_auth_error)
}
