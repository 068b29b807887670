//! Character source trait.

use async_trait::async_trait;

use crate::Result;
use crate::model::ResultEnvelope;
use crate::query::SearchQuery;

/// Something that can answer a character search.
///
/// Each call is one independent request; implementations keep no state
/// between searches beyond their configuration.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Run one search and return the decoded page of results.
    async fn search(&self, query: &SearchQuery) -> Result<ResultEnvelope>;
}

