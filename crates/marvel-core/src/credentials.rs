//! API key pair.

use std::fmt;

/// The public/private key pair issued by the developer portal.
///
/// The private key never leaves the process: requests carry the public key
/// and a digest that includes the private key.
///
/// # Security
///
/// The private key is never exposed in Debug output.
///
/// # Example
///
/// ```
/// use marvel_core::Credentials;
///
/// let creds = Credentials::new("public-key", "private-key");
/// assert_eq!(creds.public_key(), "public-key");
/// assert!(creds.is_configured());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    public_key: String,
    private_key: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Returns the public key.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Returns the private key.
    ///
    /// # Security
    ///
    /// Use this only when computing the request hash. Never log it.
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// True when at least one of the keys is set.
    pub fn is_configured(&self) -> bool {
        !self.public_key.is_empty() || !self.private_key.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
