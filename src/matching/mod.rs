//! Similarity scoring and ranking.
//!
//! - [`word::WordSimilarity`]: Similarity between two single tokens
//! - [`scoring::SimilarityScore`]: Blended similarity between two normalized queries
//! - [`engine::MatchingEngine`]: Ranks stored records against an input query
//!
//! ## Scoring
//!
//! The composite score blends four signals:
//!
//! - **Synonym Jaccard** (30%): overlap of both token sets after each is expanded
//!   with lexicon synonyms and reverse-related words
//! - **Word match** (35%): every token's best similarity against the other
//!   query, averaged over both directions
//! - **Content words** (25%): average similarity over every pair of tokens
//!   longer than three characters
//! - **Intent** (10%): 0.2 if both queries are questions, 0.1 if neither is,
//!   0.0 otherwise
//!
//! Word similarity is 1.0 for identical tokens, 0.8 for a direct lexicon hit and
//! a character sequence-matching ratio otherwise.
//!
//! ## Example
//!
//! ```rust
//! use memo_match::{Lexicon, MatchingEngine, StoredRecord};
//!
//! let lexicon = Lexicon::builtin();
//! let records = vec![
//!     StoredRecord::new("1", "what is a function", "A"),
//!     StoredRecord::new("2", "how do computers work", "B"),
//! ];
//!
//! let engine = MatchingEngine::new(&lexicon);
//! let matches = engine.find_matches("what is a method", &records);
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].id, "1");
//! ```

pub mod engine;
pub mod scoring;
pub mod word;
