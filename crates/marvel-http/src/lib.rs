//! marvel-http - reqwest-backed [`CharacterSource`](marvel_core::CharacterSource).

mod source;

pub use source::{DEFAULT_TIMEOUT, HttpCharacterSource};
