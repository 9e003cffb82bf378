use serde::Serialize;
use tracing::debug;

use crate::core::query::NormalizedQuery;
use crate::core::record::StoredRecord;
use crate::core::types::MatchType;
use crate::lexicon::store::Lexicon;
use crate::matching::scoring::SimilarityScore;
use crate::parsing::normalize::normalize;

/// Normalized forms of both queries, reported alongside each match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchDebug {
    pub cleaned_input: String,
    pub cleaned_saved: String,
}

/// A stored record that matched the input query
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub id: String,
    pub query: String,
    pub answer: String,

    /// Composite score rounded to three decimal places
    pub similarity: f64,

    #[serde(rename = "pinnedAt")]
    pub pinned_at: String,

    #[serde(rename = "matchType")]
    pub match_type: MatchType,

    pub debug: MatchDebug,

    /// Per-signal breakdown (not part of the serialized payload)
    #[serde(skip)]
    pub score: SimilarityScore,
}

impl MatchResult {
    pub fn new(
        record: &StoredRecord,
        cleaned_input: &NormalizedQuery,
        cleaned_saved: &NormalizedQuery,
        score: SimilarityScore,
    ) -> Self {
        Self {
            id: record.id.clone(),
            query: record.query.clone(),
            answer: record.answer.clone(),
            similarity: round_score(score.composite),
            pinned_at: record.pinned_at.clone(),
            match_type: MatchType::Semantic,
            debug: MatchDebug {
                cleaned_input: cleaned_input.to_string(),
                cleaned_saved: cleaned_saved.to_string(),
            },
            score,
        }
    }
}

/// Round a score to three decimal places for reporting
#[must_use]
pub fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

/// Default minimum similarity for a record to be returned
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Default maximum number of matches returned
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Configuration for the matching engine
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Minimum composite score (inclusive) for including matches in results
    pub threshold: f64,
    /// Maximum number of matches returned
    pub max_results: usize,
    /// Signal weights
    pub scoring_weights: ScoringWeights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
            scoring_weights: ScoringWeights::default(),
        }
    }
}

/// Weights for the four similarity signals
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoringWeights {
    /// Weight for synonym-expanded Jaccard similarity
    pub synonym_jaccard: f64,
    /// Weight for the best-match word similarity average
    pub word_match: f64,
    /// Weight for the content-word cross-product average
    pub important_words: f64,
    /// Weight for the intent bonus
    pub intent: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            synonym_jaccard: 0.30, // 30%
            word_match: 0.35,      // 35%
            important_words: 0.25, // 25%
            intent: 0.10,          // 10%
        }
    }
}

impl ScoringWeights {
    /// Build weights from integer percentages, scaled by their total.
    ///
    /// Returns `None` when every percentage is zero.
    #[must_use]
    pub fn from_percentages(
        synonym_jaccard: u32,
        word_match: u32,
        important_words: u32,
        intent: u32,
    ) -> Option<Self> {
        let total = f64::from(synonym_jaccard)
            + f64::from(word_match)
            + f64::from(important_words)
            + f64::from(intent);
        if total <= 0.0 {
            return None;
        }

        Some(Self {
            synonym_jaccard: f64::from(synonym_jaccard) / total,
            word_match: f64::from(word_match) / total,
            important_words: f64::from(important_words) / total,
            intent: f64::from(intent) / total,
        })
    }
}

/// Ranks stored records against an input query
pub struct MatchingEngine<'a> {
    lexicon: &'a Lexicon,
    /// Configuration including scoring weights and thresholds
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(lexicon: &'a Lexicon, config: MatchingConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Score every record with a non-empty query, keep those at or above the
    /// threshold, and return them best first.
    ///
    /// Equal similarities keep their input order.
    pub fn find_matches(&self, input: &str, records: &[StoredRecord]) -> Vec<MatchResult> {
        let cleaned_input = normalize(input);

        let mut results: Vec<MatchResult> = records
            .iter()
            .filter(|record| !record.query.is_empty())
            .filter_map(|record| {
                let cleaned_saved = normalize(&record.query);
                let score = SimilarityScore::calculate_with_weights(
                    &cleaned_input,
                    &cleaned_saved,
                    self.lexicon,
                    &self.config.scoring_weights,
                );
                debug!(
                    id = %record.id,
                    composite = score.composite,
                    "scored \"{}\" against \"{}\"",
                    cleaned_input,
                    cleaned_saved
                );

                (score.composite >= self.config.threshold)
                    .then(|| MatchResult::new(record, &cleaned_input, &cleaned_saved, score))
            })
            .collect();

        // Sort by reported similarity descending
        results.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        results.truncate(self.config.max_results);
        results
    }

    /// Find the single best match
    #[cfg(test)]
    pub fn find_best_match(&self, input: &str, records: &[StoredRecord]) -> Option<MatchResult> {
        self.find_matches(input, records).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_records() -> Vec<StoredRecord> {
        vec![
            StoredRecord::new("1", "what is a function", "A"),
            StoredRecord::new("2", "how do computers work", "B"),
            StoredRecord::new("3", "what is a procedure", "C"),
            StoredRecord::new("4", "best pizza in town", "D"),
            StoredRecord::new("5", "what is function", "E"),
        ]
    }

    fn engine_with(lexicon: &Lexicon, threshold: f64, max_results: usize) -> MatchingEngine<'_> {
        MatchingEngine::with_config(
            lexicon,
            MatchingConfig {
                threshold,
                max_results,
                ..MatchingConfig::default()
            },
        )
    }

    #[test]
    fn test_find_matches_ranks_related_query_first() {
        let lexicon = Lexicon::builtin();
        let records = make_records();
        let engine = engine_with(&lexicon, 0.0, 10);

        let matches = engine.find_matches("what is a method", &records);
        let position = |id: &str| matches.iter().position(|m| m.id == id).unwrap();

        assert_eq!(matches.len(), 5);
        assert!(position("1") < position("2"));
        assert!(matches[0].similarity >= matches[1].similarity);
    }

    #[test]
    fn test_find_matches_default_threshold() {
        let lexicon = Lexicon::builtin();
        let records = make_records();
        let engine = MatchingEngine::new(&lexicon);

        // function: 0.710, procedure: 0.633; the others are below 0.5
        let matches = engine.find_matches("what is a method", &records);
        let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5", "3"]);
        assert!((matches[0].similarity - 0.71).abs() < 1e-9);
        assert!((matches[2].similarity - 0.633).abs() < 1e-9);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let lexicon = Lexicon::builtin();
        let records = make_records();
        let engine = MatchingEngine::new(&lexicon);

        // Records 1 and 5 normalize identically
        let matches = engine.find_matches("what is a method", &records);
        assert_eq!(matches[0].id, "1");
        assert_eq!(matches[1].id, "5");
        assert_eq!(matches[0].similarity, matches[1].similarity);
    }

    #[test]
    fn test_threshold_filters() {
        let lexicon = Lexicon::builtin();
        let records = make_records();

        let engine = engine_with(&lexicon, 0.7, 10);
        let matches = engine.find_matches("what is a method", &records);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.score.composite >= 0.7));

        let engine = engine_with(&lexicon, 0.95, 10);
        assert!(engine.find_matches("what is a method", &records).is_empty());
    }

    #[test]
    fn test_max_results_truncates() {
        let lexicon = Lexicon::builtin();
        let records = make_records();
        let engine = engine_with(&lexicon, 0.0, 2);

        let matches = engine.find_matches("what is a method", &records);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, "1");
    }

    #[test]
    fn test_empty_queries_are_skipped() {
        let lexicon = Lexicon::builtin();
        let records = vec![
            StoredRecord::new("empty", "", "nothing"),
            StoredRecord::new("1", "what is a function", "A"),
        ];
        let engine = engine_with(&lexicon, 0.0, 10);

        let matches = engine.find_matches("", &records);
        assert!(matches.iter().all(|m| m.id != "empty"));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].similarity, 0.0);
    }

    #[test]
    fn test_match_result_fields() {
        let lexicon = Lexicon::builtin();
        let records =
            vec![StoredRecord::new("42", "What is a Function?", "A").with_pinned_at("2024-05-01")];
        let engine = MatchingEngine::new(&lexicon);

        let best = engine.find_best_match("what is a method", &records).unwrap();
        assert_eq!(best.id, "42");
        assert_eq!(best.query, "What is a Function?");
        assert_eq!(best.answer, "A");
        assert_eq!(best.pinned_at, "2024-05-01");
        assert_eq!(best.match_type, MatchType::Semantic);
        assert_eq!(best.debug.cleaned_input, "what method");
        assert_eq!(best.debug.cleaned_saved, "what function");

        let json = serde_json::to_value(&best).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["answer", "debug", "id", "matchType", "pinnedAt", "query", "similarity"]
        );
        assert_eq!(json["matchType"], "semantic");
    }

    #[test]
    fn test_no_records() {
        let lexicon = Lexicon::builtin();
        let engine = MatchingEngine::new(&lexicon);
        assert!(engine.find_matches("anything", &[]).is_empty());
        assert!(engine.find_best_match("anything", &[]).is_none());
    }

    #[test]
    fn test_round_score() {
        assert!((round_score(0.710_416_666) - 0.71).abs() < 1e-12);
        assert!((round_score(0.633_333_3) - 0.633).abs() < 1e-12);
        assert_eq!(round_score(1.0), 1.0);
    }

    #[test]
    fn test_weights_from_percentages() {
        let weights = ScoringWeights::from_percentages(30, 35, 25, 10).unwrap();
        assert_eq!(weights, ScoringWeights::default());

        let weights = ScoringWeights::from_percentages(1, 1, 0, 0).unwrap();
        assert!((weights.synonym_jaccard - 0.5).abs() < 1e-12);
        assert!((weights.intent - 0.0).abs() < 1e-12);

        assert!(ScoringWeights::from_percentages(0, 0, 0, 0).is_none());
    }
}
