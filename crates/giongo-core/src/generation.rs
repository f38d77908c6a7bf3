use std::collections::HashSet;

use giongo_types::{InputItem, Record};
use tokio_util::sync::CancellationToken;

use crate::error::GenerationError;

/// Attempts made per input item before it is recorded as failed
pub const MAX_ATTEMPTS: u32 = 3;

/// Produces one record from one input item in a single attempt
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, item: &str) -> Result<Record, GenerationError>;
}

/// Items that exhausted every attempt, in the order they failed
#[derive(Debug, Clone, Default)]
pub struct FailureSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl FailureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the item was already present
    pub fn insert(&mut self, item: &str) -> bool {
        if !self.seen.insert(item.to_string()) {
            return false;
        }
        self.items.push(item.to_string());
        true
    }

    pub fn remove(&mut self, item: &str) -> bool {
        if !self.seen.remove(item) {
            return false;
        }
        self.items.retain(|i| i != item);
        true
    }

    pub fn contains(&self, item: &str) -> bool {
        self.seen.contains(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct GenerationOutcome {
    /// Successful records in input order
    pub records: Vec<Record>,
    pub failed: FailureSet,
    /// First line that was never attempted, set when the run was cancelled
    pub resume_line: Option<usize>,
}

/// Drives a [`Generator`] over a word list with bounded retry
pub struct GenerationDriver<'a, G: ?Sized> {
    generator: &'a G,
    cancel: CancellationToken,
}

impl<'a, G: Generator + ?Sized> GenerationDriver<'a, G> {
    pub fn new(generator: &'a G) -> Self {
        Self {
            generator,
            cancel: CancellationToken::new(),
        }
    }

    /// Stop before the next item once `cancel` fires
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Generate a record for every item, one request at a time.
    ///
    /// A failing item never aborts the run, it ends up in the failure set.
    pub async fn run(&self, items: &[InputItem]) -> GenerationOutcome {
        let mut outcome = GenerationOutcome::default();
        let mut generated: HashSet<String> = HashSet::new();

        for (index, item) in items.iter().enumerate() {
            if self.cancel.is_cancelled() {
                tracing::warn!(
                    "Generation cancelled, resume with start line {}",
                    item.line_number
                );
                outcome.resume_line = Some(item.line_number);
                break;
            }

            match self.generate_with_retry(index + 1, item).await {
                Some(record) => {
                    // A duplicate line may have failed earlier in the list
                    outcome.failed.remove(&record.source_item);
                    generated.insert(record.source_item.clone());
                    outcome.records.push(record);
                }
                None if generated.contains(&item.text) => {
                    tracing::info!("{} already has a record, not marking it failed", item.text);
                }
                None => {
                    outcome.failed.insert(&item.text);
                }
            }
        }

        tracing::info!(
            "Generated {} records, {} items failed",
            outcome.records.len(),
            outcome.failed.len()
        );

        outcome
    }

    async fn generate_with_retry(&self, index: usize, item: &InputItem) -> Option<Record> {
        for attempt in 1..=MAX_ATTEMPTS {
            tracing::info!("{index}.{attempt} (line {}) Raw: {}", item.line_number, item.text);

            match self.generator.generate(&item.text).await {
                Ok(record) => {
                    tracing::info!("Example Sentence: {}", record.main_text);
                    tracing::info!("Hiragana: {}", record.phonetic_text);
                    tracing::info!("Translation: {}", record.translation_text);
                    return Some(record);
                }
                Err(e) => {
                    tracing::warn!(
                        "Attempt {attempt}/{MAX_ATTEMPTS} failed for {}: {e}",
                        item.text
                    );
                }
            }
        }

        tracing::error!("Giving up on {} after {MAX_ATTEMPTS} attempts", item.text);
        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use giongo_completion::CompletionError;

    use super::*;

    /// Fails each item a configured number of times before succeeding
    struct FlakyGenerator {
        failures_before_success: HashMap<String, u32>,
        calls: Mutex<Vec<String>>,
    }

    impl FlakyGenerator {
        fn new(failures: &[(&str, u32)]) -> Self {
            Self {
                failures_before_success: failures
                    .iter()
                    .map(|(item, n)| (item.to_string(), *n))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls_for(&self, item: &str) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.as_str() == item)
                .count()
        }
    }

    #[async_trait::async_trait]
    impl Generator for FlakyGenerator {
        async fn generate(&self, item: &str) -> Result<Record, GenerationError> {
            let attempt = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(item.to_string());
                calls.iter().filter(|c| c.as_str() == item).count() as u32
            };

            let failures = self.failures_before_success.get(item).copied().unwrap_or(0);
            if attempt <= failures {
                return Err(GenerationError::Completion(CompletionError::ApiError(
                    "HTTP 500".to_string(),
                )));
            }

            Ok(Record {
                source_item: item.to_string(),
                main_text: format!("{item} sentence"),
                phonetic_text: format!("{item} reading"),
                translation_text: format!("{item} translation"),
            })
        }
    }

    fn items(texts: &[&str]) -> Vec<InputItem> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| InputItem::new(i + 1, *t))
            .collect()
    }

    #[tokio::test]
    async fn test_two_failures_then_success_yields_record() {
        let generator = FlakyGenerator::new(&[("A", 2)]);
        let outcome = GenerationDriver::new(&generator).run(&items(&["A"])).await;

        assert_eq!(outcome.records.len(), 1);
        assert!(outcome.failed.is_empty());
        assert_eq!(generator.calls_for("A"), 3);
    }

    #[tokio::test]
    async fn test_three_failures_yield_failure_entry() {
        let generator = FlakyGenerator::new(&[("A", 3)]);
        let outcome = GenerationDriver::new(&generator).run(&items(&["A"])).await;

        assert!(outcome.records.is_empty());
        assert!(outcome.failed.contains("A"));
        assert_eq!(generator.calls_for("A"), MAX_ATTEMPTS as usize);
    }

    #[tokio::test]
    async fn test_no_attempts_after_success() {
        let generator = FlakyGenerator::new(&[]);
        GenerationDriver::new(&generator).run(&items(&["A"])).await;

        assert_eq!(generator.calls_for("A"), 1);
    }

    #[tokio::test]
    async fn test_partitions_successes_and_failures_in_order() {
        let generator = FlakyGenerator::new(&[("B", 5), ("C", 1)]);
        let outcome = GenerationDriver::new(&generator)
            .run(&items(&["A", "B", "C"]))
            .await;

        let sources: Vec<&str> = outcome
            .records
            .iter()
            .map(|r| r.source_item.as_str())
            .collect();
        assert_eq!(sources, vec!["A", "C"]);
        assert_eq!(outcome.failed.iter().collect::<Vec<_>>(), vec!["B"]);
        assert_eq!(generator.calls_for("B"), 3);
        assert_eq!(generator.calls_for("C"), 2);
        assert_eq!(outcome.resume_line, None);
    }

    #[tokio::test]
    async fn test_every_item_lands_in_exactly_one_set() {
        let generator = FlakyGenerator::new(&[("B", 3), ("D", 2), ("E", 9)]);
        let input = items(&["A", "B", "C", "D", "E"]);
        let outcome = GenerationDriver::new(&generator).run(&input).await;

        for item in &input {
            let generated = outcome.records.iter().any(|r| r.source_item == item.text);
            let failed = outcome.failed.contains(&item.text);
            assert!(generated ^ failed, "{} must be in exactly one set", item.text);
        }
    }

    #[tokio::test]
    async fn test_cancelled_run_leaves_remaining_items_untouched() {
        let generator = FlakyGenerator::new(&[]);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let outcome = GenerationDriver::new(&generator)
            .with_cancellation(cancel)
            .run(&items(&["A", "B"]))
            .await;

        assert!(outcome.records.is_empty());
        assert!(outcome.failed.is_empty());
        assert_eq!(outcome.resume_line, Some(1));
        assert_eq!(generator.calls_for("A"), 0);
    }

    #[tokio::test]
    async fn test_duplicate_item_recovered_later_is_not_failed() {
        let generator = FlakyGenerator::new(&[("A", 3)]);
        let outcome = GenerationDriver::new(&generator)
            .run(&items(&["A", "A"]))
            .await;

        assert_eq!(outcome.records.len(), 1);
        assert!(!outcome.failed.contains("A"));
    }

    /// Succeeds on the first call only
    struct OneShotGenerator {
        calls: Mutex<u32>,
    }

    #[async_trait::async_trait]
    impl Generator for OneShotGenerator {
        async fn generate(&self, item: &str) -> Result<Record, GenerationError> {
            let call = {
                let mut calls = self.calls.lock().unwrap();
                *calls += 1;
                *calls
            };
            if call > 1 {
                return Err(GenerationError::EmptyItem);
            }
            Ok(Record {
                source_item: item.to_string(),
                main_text: "sentence".to_string(),
                phonetic_text: "reading".to_string(),
                translation_text: "translation".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_duplicate_item_failing_after_success_is_not_failed() {
        let generator = OneShotGenerator {
            calls: Mutex::new(0),
        };
        let outcome = GenerationDriver::new(&generator)
            .run(&items(&["A", "A"]))
            .await;

        assert_eq!(outcome.records.len(), 1);
        assert!(!outcome.failed.contains("A"));
        assert!(outcome.failed.is_empty());
    }

    #[test]
    fn test_failure_set_ignores_duplicates() {
        let mut failed = FailureSet::new();
        assert!(failed.insert("B"));
        assert!(failed.insert("A"));
        assert!(!failed.insert("B"));
        assert_eq!(failed.iter().collect::<Vec<_>>(), vec!["B", "A"]);
        assert!(failed.remove("B"));
        assert_eq!(failed.len(), 1);
    }
}
