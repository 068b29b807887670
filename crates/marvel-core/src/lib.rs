//! marvel-core - types, request signing and response decoding for the
//! Marvel characters API.
//!
//! This crate performs no I/O. [`RequestSigner`] turns credentials and a
//! [`SearchQuery`] into an authenticated URL, and [`decode`] turns a
//! response body into a [`ResultEnvelope`]. Transport lives behind the
//! [`CharacterSource`] trait.
//!
//! # Example
//!
//! ```
//! use marvel_core::signer::FixedClock;
//! use marvel_core::{ApiBase, Credentials, RequestSigner, SearchQuery};
//!
//! let signer = RequestSigner::with_clock(
//!     ApiBase::default(),
//!     Credentials::new("pub123", "priv456"),
//!     FixedClock(1000),
//! );
//! let url = signer.signed_url(&SearchQuery::by_name("spider man"));
//! assert!(url.ends_with("&hash=e7f1306514d7c1a55b44669f1502c77a&limit=1&nameStartsWith=spider+man"));
//! ```

pub mod credentials;
pub mod decode;
pub mod error;
pub mod model;
pub mod query;
pub mod signer;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use decode::decode;
pub use error::{
    ApiError, DateParseError, DateParseReason, DecodeError, Error, InvalidInputError, TransportError,
};
pub use model::{Character, DataContainer, Link, ResourceList, ResultEnvelope, StorySummary, Summary};
pub use query::SearchQuery;
pub use signer::{AuthToken, Clock, RequestSigner, SystemClock};
pub use traits::CharacterSource;
pub use types::{ApiBase, ModifiedDate};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
