use serde::{Deserialize, Serialize};

/// Type of match found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Scored by the blended synonym/word-level similarity
    Semantic,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Semantic => write!(f, "semantic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_type_serialization() {
        let json = serde_json::to_string(&MatchType::Semantic).unwrap();
        assert_eq!(json, "\"semantic\"");
        assert_eq!(MatchType::Semantic.to_string(), "semantic");
    }
}
