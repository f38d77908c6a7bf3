use giongo_types::Frequency;

/// Word frequency data
pub trait FrequencyProvider: Send + Sync {
    /// Get frequency rank (lower = more common), None if not in list
    fn frequency(&self, word: &str) -> Option<u32>;

    /// Best rank among two spellings of the same word, `Unknown` if neither is listed
    fn resolve(&self, primary: &str, alternate: &str) -> Frequency {
        let primary = Frequency::from_rank(self.frequency(primary));
        let alternate = Frequency::from_rank(self.frequency(alternate));
        primary.min(alternate)
    }
}

impl FrequencyProvider for std::collections::HashMap<String, u32> {
    fn frequency(&self, word: &str) -> Option<u32> {
        self.get(word).copied()
    }
}
