use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::record::StoredRecord;

/// Default store file, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "pinned-memolearn.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read record store: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse record store: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Record store root must be a JSON array")]
    NotAnArray,
}

/// The collection of pinned records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    pub records: Vec<StoredRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<StoredRecord>) -> Self {
        Self { records }
    }

    /// Load records from a JSON file, falling back to an empty store.
    ///
    /// A missing file is expected before anything has been pinned and is only
    /// logged at debug level; any other failure is logged as a warning.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!("Record store {} not found, using empty store", path.display());
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(store) => {
                debug!("Loaded {} records from {}", store.len(), path.display());
                store
            }
            Err(e) => {
                warn!("{e} ({}), using empty store", path.display());
                Self::default()
            }
        }
    }

    /// Load records from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse records from a JSON string.
    ///
    /// The root must be an array. Elements that are not valid records (for
    /// example a `query` that is not a string) are skipped with a warning.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Array(items) = value else {
            return Err(StoreError::NotAnArray);
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<StoredRecord>(item) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping record {index}: {e}"),
            }
        }

        Ok(Self { records })
    }

    /// Get a record by ID
    pub fn get(&self, id: &str) -> Option<&StoredRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"id": "1", "query": "what is a function", "answer": "A", "pinnedAt": "2024-01-01T00:00:00.000Z"},
        {"id": "2", "query": "how do computers work", "answer": "B", "pinnedAt": "2024-01-02T00:00:00.000Z", "tags": ["hw"]}
    ]"#;

    #[test]
    fn test_from_json() {
        let store = RecordStore::from_json(SAMPLE).unwrap();
        assert_eq!(store.len(), 2);

        let record = store.get("2").unwrap();
        assert_eq!(record.query, "how do computers work");
        assert_eq!(record.pinned_at, "2024-01-02T00:00:00.000Z");
        assert!(store.get("3").is_none());
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(matches!(
            RecordStore::from_json(r#"{"id": "1"}"#),
            Err(StoreError::NotAnArray)
        ));
        assert!(matches!(
            RecordStore::from_json("not json"),
            Err(StoreError::ParseError(_))
        ));
    }

    #[test]
    fn test_from_json_skips_invalid_elements() {
        let json = r#"[{"id": "1", "query": "ok"}, {"id": "2", "query": 17}, "junk"]"#;
        let store = RecordStore::from_json(json).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records[0].id, "1");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::load(&dir.path().join("missing.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_invalid_file_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ broken").unwrap();
        assert!(RecordStore::load(file.path()).is_empty());
        assert!(RecordStore::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE}").unwrap();
        assert_eq!(RecordStore::load(file.path()).len(), 2);
    }
}
