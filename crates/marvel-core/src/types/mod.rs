//! Validated value types.

mod api_base;
mod modified;

pub use api_base::{ApiBase, CHARACTERS_PATH, DEFAULT_API_BASE};
pub use modified::{MODIFIED_LAYOUT, ModifiedDate};
