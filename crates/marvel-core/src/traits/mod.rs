//! Core traits for character lookups.

mod source;

pub use source::CharacterSource;
