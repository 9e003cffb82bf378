use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::lexicon::table::BUILTIN_SYNONYMS;

/// A word and its ordered set of synonyms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconEntry {
    pub word: String,
    pub synonyms: Vec<String>,
}

impl LexiconEntry {
    /// Create an entry. Repeated synonyms are dropped, keeping first occurrence.
    pub fn new<I, S>(word: impl Into<String>, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let synonyms = synonyms
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| seen.insert(s.clone()))
            .collect();

        Self {
            word: word.into(),
            synonyms,
        }
    }
}

/// Immutable synonym table with forward and reverse indexes
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// All entries, in table order
    pub entries: Vec<LexiconEntry>,

    /// Index: word -> index in entries vec
    word_to_index: HashMap<String, usize>,

    /// Index: synonym -> indices of entries listing it
    synonym_to_entries: HashMap<String, Vec<usize>>,
}

impl Lexicon {
    /// Build the lexicon compiled into the binary
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_SYNONYMS
                .iter()
                .map(|(word, synonyms)| LexiconEntry::new(*word, synonyms.iter().copied())),
        )
    }

    /// Build a lexicon from arbitrary entries.
    ///
    /// A word appearing twice keeps its first position but takes the later synonym list.
    pub fn from_entries(entries: impl IntoIterator<Item = LexiconEntry>) -> Self {
        let mut lexicon = Self {
            entries: Vec::new(),
            word_to_index: HashMap::new(),
            synonym_to_entries: HashMap::new(),
        };

        for entry in entries {
            if let Some(&idx) = lexicon.word_to_index.get(&entry.word) {
                lexicon.entries[idx] = entry;
            } else {
                lexicon
                    .word_to_index
                    .insert(entry.word.clone(), lexicon.entries.len());
                lexicon.entries.push(entry);
            }
        }

        lexicon.rebuild_indexes();
        lexicon
    }

    fn rebuild_indexes(&mut self) {
        self.synonym_to_entries.clear();
        for (idx, entry) in self.entries.iter().enumerate() {
            for synonym in &entry.synonyms {
                self.synonym_to_entries
                    .entry(synonym.clone())
                    .or_default()
                    .push(idx);
            }
        }
    }

    /// Forward lookup: the configured synonyms of `word`, or an empty slice
    #[must_use]
    pub fn synonyms_of(&self, word: &str) -> &[String] {
        match self.word_to_index.get(word) {
            Some(&idx) => &self.entries[idx].synonyms,
            None => &[],
        }
    }

    /// Reverse lookup: every key listing `word` as a synonym, plus those keys' synonyms
    #[must_use]
    pub fn related_via(&self, word: &str) -> HashSet<&str> {
        let mut related = HashSet::new();
        if let Some(indices) = self.synonym_to_entries.get(word) {
            for &idx in indices {
                let entry = &self.entries[idx];
                related.insert(entry.word.as_str());
                related.extend(entry.synonyms.iter().map(String::as_str));
            }
        }
        related
    }

    /// True when either word lists the other as a forward synonym
    #[must_use]
    pub fn are_synonyms(&self, a: &str, b: &str) -> bool {
        self.synonyms_of(a).iter().any(|s| s == b) || self.synonyms_of(b).iter().any(|s| s == a)
    }

    /// Expand tokens with their forward synonyms and reverse-related words
    pub fn expand<'a>(&'a self, tokens: &'a [String]) -> HashSet<&'a str> {
        let mut expanded: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for token in tokens {
            expanded.extend(self.synonyms_of(token).iter().map(String::as_str));
            expanded.extend(self.related_via(token));
        }
        expanded
    }

    /// Check whether `word` is a key in the table
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.word_to_index.contains_key(word)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the lexicon has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lexicon() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.len(), 26);
        assert!(lexicon.contains("learn"));
        assert!(!lexicon.contains("study"));
    }

    #[test]
    fn test_synonyms_of_keeps_order() {
        let lexicon = Lexicon::builtin();
        assert_eq!(
            lexicon.synonyms_of("learn"),
            ["study", "understand", "master", "grasp", "acquire"]
        );
        assert!(lexicon.synonyms_of("banana").is_empty());
    }

    #[test]
    fn test_related_via_merges_keys_and_synonyms() {
        let lexicon = Lexicon::builtin();

        // "method" is listed under how, function and algorithm
        let related = lexicon.related_via("method");
        for word in ["how", "function", "algorithm", "procedure", "technique", "routine"] {
            assert!(related.contains(word), "missing {word}");
        }
        assert!(related.contains("approach"));
        assert!(!related.contains("data"));

        assert!(lexicon.related_via("banana").is_empty());
    }

    #[test]
    fn test_related_via_for_key_with_own_entry() {
        let lexicon = Lexicon::builtin();

        // "development" has its own entry and is also a synonym of "growth"
        let related = lexicon.related_via("development");
        assert!(related.contains("growth"));
        assert!(related.contains("expansion"));
        assert!(!related.contains("evolution"));
    }

    #[test]
    fn test_are_synonyms_both_directions() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.are_synonyms("learn", "study"));
        assert!(lexicon.are_synonyms("study", "learn"));
        assert!(!lexicon.are_synonyms("study", "understand"));
    }

    #[test]
    fn test_expand() {
        let lexicon = Lexicon::builtin();
        let tokens = vec!["study".to_string(), "rust".to_string()];
        let expanded = lexicon.expand(&tokens);

        assert!(expanded.contains("study"));
        assert!(expanded.contains("rust"));
        assert!(expanded.contains("learn"));
        assert!(expanded.contains("grasp"));
        assert_eq!(expanded.len(), 7);
    }

    #[test]
    fn test_from_entries_dedupes() {
        let lexicon = Lexicon::from_entries([
            LexiconEntry::new("fast", ["quick", "quick", "rapid"]),
            LexiconEntry::new("slow", ["sluggish"]),
            LexiconEntry::new("fast", ["swift"]),
        ]);

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.entries[0].word, "fast");
        assert_eq!(lexicon.synonyms_of("fast"), ["swift"]);
        assert!(lexicon.related_via("quick").is_empty());
    }
}
