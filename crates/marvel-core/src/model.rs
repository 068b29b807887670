//! Wire model of the characters endpoint.
//!
//! Every field is optional on the wire: absent keys and explicit `null`s
//! decode to the zero value of the field (empty string, zero, empty list).

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::ModifiedDate;

/// Top-level response wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResultEnvelope {
    /// HTTP status code echoed in the body.
    #[serde(deserialize_with = "nullable")]
    pub code: i64,

    /// Human-readable status, e.g. "Ok".
    #[serde(deserialize_with = "nullable")]
    pub status: String,

    /// Digest of the returned content.
    #[serde(deserialize_with = "nullable")]
    pub etag: String,

    #[serde(deserialize_with = "nullable")]
    pub copyright: String,

    /// Attribution line the API asks clients to display.
    #[serde(deserialize_with = "nullable")]
    pub attribution_text: String,

    #[serde(rename = "attributionHTML", deserialize_with = "nullable")]
    pub attribution_html: String,

    /// The page of results.
    #[serde(deserialize_with = "nullable")]
    pub data: DataContainer,
}

impl ResultEnvelope {
    /// The characters on this page.
    pub fn results(&self) -> &[Character] {
        &self.data.results
    }

    /// Encode the envelope back to JSON using the wire names.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Pagination metadata plus the results themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataContainer {
    #[serde(deserialize_with = "nullable")]
    pub offset: i64,
    #[serde(deserialize_with = "nullable")]
    pub limit: i64,
    /// Total number of matches on the server.
    #[serde(deserialize_with = "nullable")]
    pub total: i64,
    /// Number of results on this page.
    #[serde(deserialize_with = "nullable")]
    pub count: i64,
    #[serde(deserialize_with = "nullable")]
    pub results: Vec<Character>,
}

/// A single character record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,

    #[serde(deserialize_with = "nullable")]
    pub name: String,

    #[serde(deserialize_with = "nullable")]
    pub description: String,

    /// Last modification time, kept verbatim; see [`ModifiedDate::parse`].
    #[serde(deserialize_with = "nullable")]
    pub modified: ModifiedDate,

    /// Canonical URL of this record in the API.
    #[serde(rename = "resourceURI", deserialize_with = "nullable")]
    pub resource_uri: String,

    /// Public web pages about the character.
    #[serde(deserialize_with = "nullable")]
    pub urls: Vec<Link>,

    #[serde(deserialize_with = "nullable")]
    pub comics: ResourceList<Summary>,

    #[serde(deserialize_with = "nullable")]
    pub stories: ResourceList<StorySummary>,

    #[serde(deserialize_with = "nullable")]
    pub events: ResourceList<Summary>,

    #[serde(deserialize_with = "nullable")]
    pub series: ResourceList<Summary>,
}

/// An external link, e.g. `{"type": "wiki", "url": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,

    #[serde(deserialize_with = "nullable")]
    pub url: String,
}

/// A capped list of related entities.
///
/// `available` is the number of entities the server knows about, `returned`
/// the number included in `items` (the API caps it at 20).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>"))]
pub struct ResourceList<T> {
    #[serde(deserialize_with = "nullable")]
    pub available: i64,

    #[serde(deserialize_with = "nullable")]
    pub returned: i64,

    /// URL of the full collection.
    #[serde(rename = "collectionURI", deserialize_with = "nullable")]
    pub collection_uri: String,

    #[serde(deserialize_with = "nullable")]
    pub items: Vec<T>,
}

impl<T> Default for ResourceList<T> {
    fn default() -> Self {
        Self {
            available: 0,
            returned: 0,
            collection_uri: String::new(),
            items: Vec::new(),
        }
    }
}

/// Reference to a related comic, event or series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    #[serde(rename = "resourceURI", deserialize_with = "nullable")]
    pub resource_uri: String,

    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

/// Reference to a related story, tagged with the story type
/// (e.g. "cover", "interiorStory").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorySummary {
    #[serde(rename = "resourceURI", deserialize_with = "nullable")]
    pub resource_uri: String,

    #[serde(deserialize_with = "nullable")]
    pub name: String,

    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
}

/// Treat an explicit `null` like an absent key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
