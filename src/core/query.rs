use serde::Serialize;

/// Question words used for intent detection
pub const QUESTION_WORDS: &[&str] = &["what", "how", "why", "when", "where", "which"];

/// Tokens longer than this are treated as content words
pub const IMPORTANT_WORD_MIN_LEN: usize = 3;

/// Ordered tokens derived from one raw query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedQuery {
    tokens: Vec<String>,
}

impl NormalizedQuery {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True if any token is a question word
    #[must_use]
    pub fn is_question(&self) -> bool {
        self.tokens
            .iter()
            .any(|t| QUESTION_WORDS.contains(&t.as_str()))
    }

    /// Tokens longer than [`IMPORTANT_WORD_MIN_LEN`] characters, in order
    pub fn important_words(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter(|t| t.chars().count() > IMPORTANT_WORD_MIN_LEN)
            .map(String::as_str)
            .collect()
    }
}

impl std::fmt::Display for NormalizedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(tokens: &[&str]) -> NormalizedQuery {
        NormalizedQuery::new(tokens.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_display_joins_tokens() {
        assert_eq!(query(&["what", "function"]).to_string(), "what function");
        assert_eq!(query(&[]).to_string(), "");
    }

    #[test]
    fn test_is_question() {
        assert!(query(&["where", "keys"]).is_question());
        assert!(!query(&["define", "closure"]).is_question());
        assert!(!query(&[]).is_question());
    }

    #[test]
    fn test_important_words() {
        let q = query(&["how", "do", "rust", "traits", "work"]);
        assert_eq!(q.important_words(), vec!["rust", "traits", "work"]);
    }
}
