//! Search filters for the characters endpoint.

use crate::error::{Error, InvalidInputError};
use crate::signer::build_search_parameters;

/// Largest page the API will return.
pub const MAX_LIMIT: u32 = 100;

/// Page size used by the "list" action.
pub const DEFAULT_LIST_LIMIT: u32 = 20;

/// Optional filters for one search.
///
/// Absent filters are left out of the query string entirely.
///
/// # Example
///
/// ```
/// use marvel_core::SearchQuery;
///
/// let query = SearchQuery::by_name("spider man");
/// assert_eq!(query.to_query_fragment(), "&limit=1&nameStartsWith=spider+man");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Only characters whose name starts with this prefix.
    pub name_starts_with: Option<String>,
    /// Sort field, e.g. `name` or `-modified`.
    pub order_by: Option<String>,
}

impl SearchQuery {
    /// A query with no filters; the API applies its own defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// The single best match for a name prefix.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            limit: Some(1),
            name_starts_with: Some(name.into()),
            order_by: None,
        }
    }

    /// The first `limit` characters sorted by name.
    pub fn first(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            name_starts_with: None,
            order_by: Some("name".to_string()),
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Check the filters against what the API accepts.
    ///
    /// # Errors
    ///
    /// Returns an error if the limit is outside `1..=100`.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(limit) = self.limit
            && !(1..=MAX_LIMIT).contains(&limit)
        {
            return Err(InvalidInputError::Limit {
                value: limit.to_string(),
                reason: format!("must be between 1 and {}", MAX_LIMIT),
            }
            .into());
        }
        Ok(())
    }

    /// Render the filters as `&key=value` pairs, in the order
    /// limit, name, sort.
    pub fn to_query_fragment(&self) -> String {
        let limit = self.limit.map(|l| l.to_string()).unwrap_or_default();
        build_search_parameters(
            &limit,
            self.name_starts_with.as_deref().unwrap_or_default(),
            self.order_by.as_deref().unwrap_or_default(),
        )
    }
}
