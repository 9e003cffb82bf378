use serde::{Deserialize, Serialize};

/// A previously answered query loaded from the record store.
///
/// Missing fields default to empty strings and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredRecord {
    pub id: String,
    pub query: String,
    pub answer: String,
    #[serde(rename = "pinnedAt")]
    pub pinned_at: String,
}

impl StoredRecord {
    pub fn new(id: impl Into<String>, query: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            query: query.into(),
            answer: answer.into(),
            pinned_at: String::new(),
        }
    }

    /// Builder method to set the pin timestamp
    #[must_use]
    pub fn with_pinned_at(mut self, pinned_at: impl Into<String>) -> Self {
        self.pinned_at = pinned_at.into();
        self
    }

    /// Parse the pin timestamp as RFC 3339, if possible
    #[must_use]
    pub fn pinned_at_time(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        chrono::DateTime::parse_from_rfc3339(&self.pinned_at).ok()
    }
}
