//! Last-modified timestamp carried on character records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DateParseError, DateParseReason};

/// Layout of the `modified` field, e.g. `2014-04-29T14:18:17-0400`.
pub const MODIFIED_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// The raw `modified` string of a record.
///
/// Decoding never looks inside this value, so a record with a malformed
/// date still decodes. Interpretation happens in [`ModifiedDate::parse`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifiedDate(String);

impl ModifiedDate {
    /// Wrap a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw string as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the API sent no date.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpret the raw string as a calendar timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DateParseError`] if the string does not match
    /// `YYYY-MM-DDThh:mm:ss±hhmm`.
    pub fn parse(&self) -> Result<DateTime<FixedOffset>, DateParseError> {
        let error = |source: DateParseReason| DateParseError {
            value: self.0.clone(),
            source,
        };

        // chrono's %z also takes `-04:00` and a space before the offset
        if !has_strict_offset(&self.0) {
            return Err(error(DateParseReason::Layout));
        }

        DateTime::parse_from_str(&self.0, MODIFIED_LAYOUT).map_err(|e| error(e.into()))
    }
}

/// No whitespace anywhere, and the string ends in `±hhmm`.
fn has_strict_offset(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    match raw.as_bytes() {
        [.., sign, h1, h2, m1, m2] => {
            matches!(*sign, b'+' | b'-') && [h1, h2, m1, m2].iter().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

impl fmt::Display for ModifiedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModifiedDate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
