use std::collections::HashMap;

use crate::lexicon::store::Lexicon;

/// Score for a direct lexicon hit between two different words
pub const SYNONYM_SCORE: f64 = 0.8;

/// Sequences at least this long get popular-character pruning
const AUTOJUNK_MIN_LEN: usize = 200;

#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Pairwise similarity between two single tokens
#[derive(Debug, Clone, Copy)]
pub struct WordSimilarity<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> WordSimilarity<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Exact match scores 1.0, a lexicon hit in either direction scores
    /// [`SYNONYM_SCORE`], anything else falls back to [`sequence_ratio`].
    #[must_use]
    pub fn score(&self, a: &str, b: &str) -> f64 {
        if a == b {
            1.0
        } else if self.lexicon.are_synonyms(a, b) {
            SYNONYM_SCORE
        } else {
            sequence_ratio(a, b)
        }
    }

    /// Highest score of `word` against any of `candidates` (0.0 for none)
    pub fn best_match<S: AsRef<str>>(&self, word: &str, candidates: &[S]) -> f64 {
        candidates
            .iter()
            .map(|c| self.score(word, c.as_ref()))
            .fold(0.0, f64::max)
    }
}

/// Character similarity ratio `2 * M / T`.
///
/// `M` is the total size of the matching blocks found by repeatedly taking the
/// longest common block and recursing on both sides of it; `T` is the combined
/// length of both strings. Two empty strings score 1.0.
///
/// The pair is put in lexicographic order first so the result does not depend
/// on argument order.
#[must_use]
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched: usize = BlockMatcher::new(&a, &b)
        .matching_blocks()
        .iter()
        .map(|block| block.size)
        .sum();

    2.0 * count_to_f64(matched) / count_to_f64(total)
}

/// A run of equal characters: `a[a_start..a_start + size] == b[b_start..b_start + size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

/// Greedy longest-block matcher over two character sequences
struct BlockMatcher<'s> {
    a: &'s [char],
    b: &'s [char],
    /// Positions of each character in `b`, excluding popular characters
    b_positions: HashMap<char, Vec<usize>>,
}

impl<'s> BlockMatcher<'s> {
    fn new(a: &'s [char], b: &'s [char]) -> Self {
        let mut b_positions: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b_positions.entry(c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b_positions.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b_positions }
    }

    /// Longest matching block inside `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`.
    fn longest_match(&self, a_lo: usize, a_hi: usize, b_lo: usize, b_hi: usize) -> MatchingBlock {
        let (mut best_i, mut best_j, mut best_size) = (a_lo, b_lo, 0usize);

        // run length of the match ending at (i - 1, j)
        let mut run_ending_at: HashMap<usize, usize> = HashMap::new();
        for i in a_lo..a_hi {
            let mut next_runs = HashMap::new();
            if let Some(positions) = self.b_positions.get(&self.a[i]) {
                for &j in positions {
                    if j < b_lo {
                        continue;
                    }
                    if j >= b_hi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| run_ending_at.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_runs.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            run_ending_at = next_runs;
        }

        // Popular characters never seed a block, so grow across them here
        while best_i > a_lo && best_j > b_lo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < a_hi
            && best_j + best_size < b_hi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        MatchingBlock {
            a_start: best_i,
            b_start: best_j,
            size: best_size,
        }
    }

    fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut blocks = Vec::new();
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
            let block = self.longest_match(a_lo, a_hi, b_lo, b_hi);
            if block.size == 0 {
                continue;
            }
            if a_lo < block.a_start && b_lo < block.b_start {
                pending.push((a_lo, block.a_start, b_lo, block.b_start));
            }
            if block.a_start + block.size < a_hi && block.b_start + block.size < b_hi {
                pending.push((
                    block.a_start + block.size,
                    a_hi,
                    block.b_start + block.size,
                    b_hi,
                ));
            }
            blocks.push(block);
        }

        blocks.sort_by_key(|block| (block.a_start, block.b_start));
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_exact_match() {
        let lexicon = Lexicon::builtin();
        let words = WordSimilarity::new(&lexicon);
        assert_close(words.score("code", "code"), 1.0);
    }

    #[test]
    fn test_synonym_both_directions() {
        let lexicon = Lexicon::builtin();
        let words = WordSimilarity::new(&lexicon);
        assert_close(words.score("learn", "study"), 0.8);
        assert_close(words.score("study", "learn"), 0.8);
    }

    #[test]
    fn test_reverse_only_relation_is_not_a_synonym_hit() {
        let lexicon = Lexicon::builtin();
        let words = WordSimilarity::new(&lexicon);

        // Both are synonyms of "learn" but neither lists the other
        let score = words.score("study", "grasp");
        assert_close(score, sequence_ratio("study", "grasp"));
        assert!(score < 0.8);
    }

    #[test]
    fn test_sequence_ratio_known_values() {
        // "abcd" vs "bcde": one block "bcd" -> 2 * 3 / 8
        assert_close(sequence_ratio("abcd", "bcde"), 0.75);
        // "function" vs "method": two single-character blocks -> 2 * 2 / 14
        assert_close(sequence_ratio("method", "function"), 4.0 / 14.0);
        assert_close(sequence_ratio("abc", "xyz"), 0.0);
        assert_close(sequence_ratio("", ""), 1.0);
        assert_close(sequence_ratio("", "abc"), 0.0);
    }

    #[test]
    fn test_sequence_ratio_is_symmetric() {
        let pairs = [
            ("tide", "diet"),
            ("abcd", "dcba"),
            ("computer", "commute"),
            ("qabxcd", "abycdf"),
        ];
        for (a, b) in pairs {
            assert_close(sequence_ratio(a, b), sequence_ratio(b, a));
        }

        // Greedy block matching alone would give 0.25 for ("tide", "diet")
        assert_close(sequence_ratio("tide", "diet"), 0.5);
    }

    #[test]
    fn test_matching_blocks_recurse_both_sides() {
        let a: Vec<char> = "qabxcd".chars().collect();
        let b: Vec<char> = "abycdf".chars().collect();
        let blocks = BlockMatcher::new(&a, &b).matching_blocks();

        assert_eq!(
            blocks,
            vec![
                MatchingBlock {
                    a_start: 1,
                    b_start: 0,
                    size: 2
                },
                MatchingBlock {
                    a_start: 4,
                    b_start: 3,
                    size: 2
                },
            ]
        );
    }

    #[test]
    fn test_long_sequences_with_popular_characters() {
        let a = "a".repeat(250);
        let b = "a".repeat(250);
        // Popular characters are pruned but identical strings still fully match
        assert_close(sequence_ratio(&a, &b), 1.0);
    }

    #[test]
    fn test_best_match() {
        let lexicon = Lexicon::builtin();
        let words = WordSimilarity::new(&lexicon);
        let candidates = ["method", "code"];
        assert_close(words.best_match("function", &candidates), 0.8);
        assert_close(words.best_match("function", &[] as &[&str]), 0.0);
    }
}
