use crate::core::query::NormalizedQuery;

/// Words dropped during normalization
pub const STOP_WORDS: &[&str] = &[
    "is", "are", "was", "were", "a", "an", "the", "in", "on", "at", "to", "for", "of", "with",
    "by", "tell", "me", "you", "it", "this", "that",
];

/// Words that survive normalization even if listed in [`STOP_WORDS`]
pub const KEEP_WORDS: &[&str] = &[
    "what", "how", "why", "when", "where", "which", "between", "and", "or",
];

/// Lowercase, replace punctuation with spaces, collapse and trim whitespace.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let spaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize raw text into an ordered token sequence.
#[must_use]
pub fn normalize(text: &str) -> NormalizedQuery {
    let tokens = clean_text(text)
        .split(' ')
        .filter(|word| is_kept(word))
        .map(str::to_string)
        .collect();

    NormalizedQuery::new(tokens)
}

fn is_kept(word: &str) -> bool {
    if !KEEP_WORDS.contains(&word) && STOP_WORDS.contains(&word) {
        return false;
    }
    word.chars().count() > 1
}
