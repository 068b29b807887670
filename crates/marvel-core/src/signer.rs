//! Request signing and query construction.
//!
//! Every request carries `ts`, `apikey` and `hash` query parameters, where
//! `hash = md5(ts ++ private_key ++ public_key)` in lowercase hex. The server
//! recomputes the digest with the same concatenation order, so nothing here
//! may reorder, re-case or escape those inputs.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use md5::{Digest, Md5};
use tracing::trace;

use crate::credentials::Credentials;
use crate::query::SearchQuery;
use crate::types::ApiBase;

/// Source of request timestamps.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// Wall-clock time that never goes backwards within a process.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let previous = self.last.fetch_max(now, Ordering::Relaxed);
        previous.max(now)
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// The `hash` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the request hash: md5 of `timestamp`, `private_key` and
/// `public_key` concatenated in that order, as 32 lowercase hex characters.
///
/// # Example
///
/// ```
/// use marvel_core::signer::compute_auth_token;
///
/// let token = compute_auth_token("1000", "priv456", "pub123");
/// assert_eq!(token.as_str(), "e7f1306514d7c1a55b44669f1502c77a");
/// ```
pub fn compute_auth_token(timestamp: &str, private_key: &str, public_key: &str) -> AuthToken {
    let mut hasher = Md5::new();
    hasher.update(timestamp.as_bytes());
    hasher.update(private_key.as_bytes());
    hasher.update(public_key.as_bytes());
    AuthToken(hex::encode(hasher.finalize()))
}

/// Render the optional search filters as `&key=value` pairs.
///
/// Empty values are skipped. Spaces in `name` become `+`; nothing else is
/// escaped, so this is not a general-purpose URL encoder.
pub fn build_search_parameters(limit: &str, name: &str, order_by: &str) -> String {
    let mut params = String::new();

    if !limit.is_empty() {
        params.push_str("&limit=");
        params.push_str(limit);
    }

    if !name.is_empty() {
        params.push_str("&nameStartsWith=");
        params.push_str(&name.replace(' ', "+"));
    }

    if !order_by.is_empty() {
        params.push_str("&orderBy=");
        params.push_str(order_by);
    }

    params
}

/// Builds authenticated URLs for the characters endpoint.
///
/// A fresh timestamp, and therefore a fresh hash, is taken for every URL.
#[derive(Debug)]
pub struct RequestSigner<C = SystemClock> {
    base: ApiBase,
    credentials: Credentials,
    clock: C,
}

impl RequestSigner<SystemClock> {
    /// Create a signer backed by the system clock.
    pub fn new(base: ApiBase, credentials: Credentials) -> Self {
        Self::with_clock(base, credentials, SystemClock::new())
    }
}

impl<C: Clock> RequestSigner<C> {
    /// Create a signer with an explicit clock.
    pub fn with_clock(base: ApiBase, credentials: Credentials, clock: C) -> Self {
        Self {
            base,
            credentials,
            clock,
        }
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Current time in milliseconds as a decimal string.
    pub fn current_timestamp(&self) -> String {
        self.clock.now_millis().to_string()
    }

    /// Assemble `base?ts=..&apikey=..&hash=..` followed by `extra_params`
    /// verbatim.
    pub fn build_request_url(&self, public_key: &str, private_key: &str, extra_params: &str) -> String {
        let ts = self.current_timestamp();
        let hash = compute_auth_token(&ts, private_key, public_key);
        trace!(ts = %ts, "signed request");

        format!(
            "{}?ts={}&apikey={}&hash={}{}",
            self.base.characters_url(),
            ts,
            public_key,
            hash,
            extra_params
        )
    }

    /// Signed URL for `query` using the configured credentials.
    pub fn signed_url(&self, query: &SearchQuery) -> String {
        self.build_request_url(
            self.credentials.public_key(),
            self.credentials.private_key(),
            &query.to_query_fragment(),
        )
    }
}
