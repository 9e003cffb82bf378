//! Core data types for query matching.
//!
//! - [`NormalizedQuery`]: Ordered tokens produced from one raw query string
//! - [`StoredRecord`]: A previously answered (query, answer) pair from the store
//! - [`MatchType`]: Classification attached to each match result
//!
//! Tokens are lowercase words without punctuation. They are only produced by the
//! normalizer in [`crate::parsing::normalize`].

pub mod query;
pub mod record;
pub mod types;
