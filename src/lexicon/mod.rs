//! Synonym lexicon used to boost similarity between related words.
//!
//! The lexicon is a small, hand-curated table mapping a word to an ordered list
//! of related words. It is compiled into the binary and never loaded from an
//! external file.
//!
//! Lookups work in both directions:
//!
//! - **Forward**: [`Lexicon::synonyms_of`] returns the configured list for a key
//! - **Reverse**: [`Lexicon::related_via`] returns every key listing the word as a
//!   synonym, together with those keys' own synonym lists
//!
//! ## Example
//!
//! ```rust
//! use memo_match::Lexicon;
//!
//! let lexicon = Lexicon::builtin();
//!
//! assert!(lexicon.synonyms_of("learn").iter().any(|s| s == "study"));
//!
//! // "development" is listed under "growth", so the reverse lookup finds it
//! let related = lexicon.related_via("development");
//! assert!(related.contains("growth"));
//! assert!(related.contains("expansion"));
//! ```

pub mod store;
pub mod table;
