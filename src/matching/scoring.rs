use serde::Serialize;

use crate::core::query::NormalizedQuery;
use crate::lexicon::store::Lexicon;
use crate::matching::engine::ScoringWeights;
use crate::matching::word::WordSimilarity;
use crate::parsing::normalize::normalize;

/// Intent bonus when both queries are questions
pub const BOTH_QUESTIONS_BONUS: f64 = 0.2;

/// Intent bonus when neither query is a question
pub const BOTH_STATEMENTS_BONUS: f64 = 0.1;

#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Detailed similarity scores between two normalized queries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityScore {
    /// Jaccard similarity of the synonym-expanded token sets
    pub synonym_jaccard: f64,

    /// Average best-match word similarity, taken in both directions
    pub word_match: f64,

    /// Average word similarity over all pairs of content words
    pub important_words: f64,

    /// Flat bonus for matching question/statement intent
    pub intent_bonus: f64,

    /// Weighted composite score in [0, 1]
    pub composite: f64,
}

impl SimilarityScore {
    /// Calculate similarity using the default weights
    #[must_use]
    pub fn calculate(a: &NormalizedQuery, b: &NormalizedQuery, lexicon: &Lexicon) -> Self {
        Self::calculate_with_weights(a, b, lexicon, &ScoringWeights::default())
    }

    /// Calculate similarity with custom weights
    #[must_use]
    pub fn calculate_with_weights(
        a: &NormalizedQuery,
        b: &NormalizedQuery,
        lexicon: &Lexicon,
        weights: &ScoringWeights,
    ) -> Self {
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return Self::uniform(1.0),
            (true, false) | (false, true) => return Self::uniform(0.0),
            (false, false) => {}
        }

        // Fixed operand order keeps floating-point sums identical for (a, b) and (b, a)
        let (a, b) = if a.tokens() <= b.tokens() { (a, b) } else { (b, a) };

        let words = WordSimilarity::new(lexicon);

        let synonym_jaccard = synonym_jaccard(a, b, lexicon);
        let word_match = best_match_average(a, b, &words);
        let important_words = important_word_average(a, b, &words);
        let intent_bonus = intent_bonus(a, b);

        let composite = (synonym_jaccard * weights.synonym_jaccard
            + word_match * weights.word_match
            + important_words * weights.important_words
            + intent_bonus * weights.intent)
            .clamp(0.0, 1.0);

        Self {
            synonym_jaccard,
            word_match,
            important_words,
            intent_bonus,
            composite,
        }
    }

    /// Score used when one or both queries have no tokens
    fn uniform(value: f64) -> Self {
        Self {
            synonym_jaccard: value,
            word_match: value,
            important_words: value,
            intent_bonus: value,
            composite: value,
        }
    }
}

/// Normalize two raw strings and return their composite similarity
#[must_use]
pub fn query_similarity(a: &str, b: &str, lexicon: &Lexicon) -> f64 {
    SimilarityScore::calculate(&normalize(a), &normalize(b), lexicon).composite
}

/// Jaccard similarity of both token sets after synonym expansion.
///
/// Returns 0.0 when the union is empty.
fn synonym_jaccard(a: &NormalizedQuery, b: &NormalizedQuery, lexicon: &Lexicon) -> f64 {
    let expanded_a = lexicon.expand(a.tokens());
    let expanded_b = lexicon.expand(b.tokens());

    let intersection = expanded_a.intersection(&expanded_b).count();
    let union = expanded_a.union(&expanded_b).count();
    if union == 0 {
        0.0
    } else {
        count_to_f64(intersection) / count_to_f64(union)
    }
}

/// For each token on either side take its best score against the other side,
/// then average over all `|a| + |b|` tokens.
fn best_match_average(a: &NormalizedQuery, b: &NormalizedQuery, words: &WordSimilarity) -> f64 {
    let comparisons = a.len() + b.len();
    if comparisons == 0 {
        return 0.0;
    }

    let mut total = 0.0;
    for word in a.tokens() {
        total += words.best_match(word, b.tokens());
    }
    for word in b.tokens() {
        total += words.best_match(word, a.tokens());
    }

    total / count_to_f64(comparisons)
}

/// Average similarity over every pair of content words (the full cross product,
/// duplicates included). 0.0 if either side has no content words.
fn important_word_average(
    a: &NormalizedQuery,
    b: &NormalizedQuery,
    words: &WordSimilarity,
) -> f64 {
    let important_a = a.important_words();
    let important_b = b.important_words();
    if important_a.is_empty() || important_b.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    for word_a in &important_a {
        for word_b in &important_b {
            total += words.score(word_a, word_b);
        }
    }

    total / count_to_f64(important_a.len() * important_b.len())
}

fn intent_bonus(a: &NormalizedQuery, b: &NormalizedQuery) -> f64 {
    match (a.is_question(), b.is_question()) {
        (true, true) => BOTH_QUESTIONS_BONUS,
        (false, false) => BOTH_STATEMENTS_BONUS,
        _ => 0.0,
    }
}
