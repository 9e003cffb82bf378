//! # memo-match
//!
//! A library for finding previously answered questions that resemble a new one.
//!
//! Given a new query and a small collection of pinned (query, answer) records,
//! `memo-match` scores every record with a hand-tuned blend of text-similarity
//! signals and returns the best matches above a threshold.
//!
//! ## Features
//!
//! - **Normalization**: lowercasing, punctuation removal and stop-word filtering
//!   that keeps question words and connectors
//! - **Synonym lexicon**: a built-in table consulted in both directions
//! - **Blended scoring**: set overlap, best-match word similarity, content-word
//!   similarity and question intent
//! - **Ranking**: threshold, stable sort and truncation
//!
//! ## Example
//!
//! ```rust
//! use memo_match::{Lexicon, MatchingEngine, StoredRecord};
//! use memo_match::matching::scoring::query_similarity;
//!
//! let lexicon = Lexicon::builtin();
//!
//! let score = query_similarity("what is a function", "what is a method", &lexicon);
//! assert!(score > 0.7);
//!
//! let records = vec![StoredRecord::new("1", "what is a function", "A")];
//! let engine = MatchingEngine::new(&lexicon);
//! for m in engine.find_matches("what is a method", &records) {
//!     println!("{}: {:.1}%", m.query, m.similarity * 100.0);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`lexicon`]: Built-in synonym table
//! - [`parsing`]: Text normalization
//! - [`core`](crate::core): Core data types for queries and records
//! - [`matching`]: Word and query similarity, ranking engine
//! - [`store`]: Loading pinned records
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod lexicon;
pub mod matching;
pub mod parsing;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::query::NormalizedQuery;
pub use crate::core::record::StoredRecord;
pub use crate::core::types::*;
pub use lexicon::store::{Lexicon, LexiconEntry};
pub use matching::engine::{MatchResult, MatchingConfig, MatchingEngine, ScoringWeights};
pub use matching::scoring::SimilarityScore;
pub use store::records::RecordStore;
