//! Text normalization for incoming and stored queries.
//!
//! Every query passes through [`normalize::normalize`] before it is scored. The
//! pipeline lowercases the text, turns punctuation into word breaks, collapses
//! whitespace, drops stop words (question words and connectors are always kept)
//! and finally drops single-character tokens.
//!
//! ## Example
//!
//! ```rust
//! use memo_match::parsing::normalize::normalize;
//!
//! let query = normalize("Tell me: what's the difference between Rust & C++?");
//! assert_eq!(query.to_string(), "what difference between rust");
//! ```

pub mod normalize;
