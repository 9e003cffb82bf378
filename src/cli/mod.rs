//! Command-line interface for memo-match.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **match**: Rank pinned queries by similarity to a new query
//! - **compare**: Show the per-signal similarity between two queries
//! - **list**: Show everything in the record store
//! - **synonyms**: Look up a word in the built-in lexicon
//!
//! ## Usage
//!
//! ```text
//! # Find pinned queries similar to a new one (JSON on stdout)
//! memo-match match "what is a method"
//!
//! # Use a different store, stricter threshold, human-readable output
//! memo-match match "how do I learn rust" --store notes.json --threshold 0.7 -f text
//!
//! # Inspect how two queries score against each other
//! memo-match compare "what is a function" "what is a method" -f text
//! ```

use clap::{Args, Parser, Subcommand};

use crate::matching::engine::ScoringWeights;
use crate::utils::validation::ValidationError;

pub mod compare;
pub mod list;
pub mod match_query;
pub mod report;
pub mod synonyms;

#[derive(Parser)]
#[command(name = "memo-match")]
#[command(version)]
#[command(about = "Find previously answered questions similar to a new one")]
#[command(
    long_about = "memo-match compares a new question against a collection of pinned (query, answer) records and returns the most similar ones.\n\nSimilarity blends four signals:\n- Overlap of the synonym-expanded word sets\n- Best-match word similarity in both directions\n- Similarity of the longer content words\n- Whether both texts are questions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank pinned queries by similarity to a new query
    Match(match_query::MatchArgs),

    /// Compare two queries signal by signal
    Compare(compare::CompareArgs),

    /// List the pinned records
    List(list::ListArgs),

    /// Show lexicon entries related to a word
    Synonyms(synonyms::SynonymsArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
    Tsv,
}

/// Scoring weight options shared by commands that score queries
#[derive(Args, Debug, Clone)]
pub struct WeightArgs {
    /// Weight for synonym-expanded word overlap (0-100, default 30)
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub weight_jaccard: u32,

    /// Weight for best-match word similarity (0-100, default 35)
    #[arg(long, default_value = "35", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub weight_word: u32,

    /// Weight for content-word similarity (0-100, default 25)
    #[arg(long, default_value = "25", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub weight_important: u32,

    /// Weight for the question/statement intent bonus (0-100, default 10)
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub weight_intent: u32,
}

impl WeightArgs {
    /// Convert percentages to weights scaled by their total
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::AllWeightsZero` if every weight is zero.
    pub fn to_weights(&self) -> Result<ScoringWeights, ValidationError> {
        ScoringWeights::from_percentages(
            self.weight_jaccard,
            self.weight_word,
            self.weight_important,
            self.weight_intent,
        )
        .ok_or(ValidationError::AllWeightsZero)
    }
}
