use std::collections::HashMap;

use giongo_core::error::DataSourceError;
use giongo_core::language::FrequencyProvider;
use giongo_core::preprocess::{DefaultPreprocessor, Preprocessor};
use serde_json::Value;

/// Word frequency ranks from a corpus, read-only once built
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    frequencies: HashMap<String, u32>,
}

impl FrequencyTable {
    /// Create empty frequency table
    pub fn new() -> Self {
        Self {
            frequencies: HashMap::new(),
        }
    }

    /// Build from a corpus given as a JSON array of arrays.
    ///
    /// Each entry is `[word, _, rank, ...]`. Entries of any other shape are
    /// skipped; only a document that is not an array at all is an error.
    pub fn from_json(json: &str) -> Result<Self, DataSourceError> {
        let entries: Vec<Value> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Same as [`FrequencyTable::from_json`] for a reader
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, DataSourceError> {
        let entries: Vec<Value> = serde_json::from_reader(reader)?;
        Ok(Self::from_entries(entries))
    }

    fn from_entries(entries: Vec<Value>) -> Self {
        let preprocessor = DefaultPreprocessor;
        let mut frequencies = HashMap::new();

        for entry in &entries {
            if let Some((word, rank)) = parse_entry(entry) {
                let word = preprocessor.normalize_form(word);
                if !word.is_empty() {
                    frequencies.insert(word, rank);
                }
            }
        }

        let skipped = entries.len() - frequencies.len();
        if skipped > 0 {
            tracing::debug!("Ignored {skipped} malformed or duplicate frequency entries");
        }

        Self { frequencies }
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Get frequency rank for a word (lower = more common)
    pub fn get_rank(&self, word: &str) -> Option<u32> {
        self.frequencies.get(word).copied()
    }
}

impl FrequencyProvider for FrequencyTable {
    fn frequency(&self, word: &str) -> Option<u32> {
        self.get_rank(word)
    }
}

fn parse_entry(entry: &Value) -> Option<(&str, u32)> {
    let fields = entry.as_array()?;
    if fields.len() < 3 {
        return None;
    }

    let word = fields[0].as_str()?;
    let rank = fields[2].as_f64()?.trunc();
    if !rank.is_finite() || rank < 0.0 || rank > f64::from(u32::MAX) {
        return None;
    }

    Some((word, rank as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_word_and_rank() {
        let table = FrequencyTable::from_json(r#"[["わんわん", 0, 3], ["ワンワン", 0, 4]]"#).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get_rank("わんわん"), Some(3));
        assert_eq!(table.get_rank("ワンワン"), Some(4));
        assert_eq!(table.resolve("わんわん", "ワンワン"), giongo_types::Frequency::Known(3));
    }

    #[test]
    fn test_truncates_fractional_ranks() {
        let table = FrequencyTable::from_json(r#"[["ごろごろ", "freq", 12.9]]"#).unwrap();
        assert_eq!(table.get_rank("ごろごろ"), Some(12));
    }

    #[test]
    fn test_skips_malformed_entries() {
        let json = r#"[
            ["short", 1],
            [1, 2, 3],
            ["text-rank", 0, "7"],
            ["negative", 0, -5],
            {"not": "an array"},
            "plain",
            ["ok", {"reading": "x"}, 42, "extra"]
        ]"#;

        let table = FrequencyTable::from_json(json).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get_rank("ok"), Some(42));
    }

    #[test]
    fn test_rejects_non_array_document() {
        assert!(matches!(
            FrequencyTable::from_json(r#"{"words": []}"#),
            Err(DataSourceError::Parse(_))
        ));
        assert!(FrequencyTable::from_json("not json").is_err());
    }

    #[test]
    fn test_keys_are_normalized() {
        let table = FrequencyTable::from_json(r#"[["ﾜﾝﾜﾝ", 0, 9]]"#).unwrap();
        assert_eq!(table.get_rank("ワンワン"), Some(9));
    }
}
