use std::time::Duration;

use async_trait::async_trait;
use giongo_completion::{CompletionService, OutputSchema};
use giongo_core::error::GenerationError;
use giongo_core::generation::Generator;
use giongo_types::Record;
use serde::Deserialize;

/// Reply shape requested from the model
#[derive(Debug, Deserialize)]
struct Example {
    example_sentence: String,
    hiragana: String,
    english_translation: String,
}

/// Generates an example sentence card for one word list line
pub struct ExampleGenerator<C> {
    completion: C,
    schema: OutputSchema,
    timeout: Duration,
}

impl<C: CompletionService> ExampleGenerator<C> {
    pub fn new(completion: C, timeout: Duration) -> Self {
        Self {
            completion,
            schema: example_schema(),
            timeout,
        }
    }

    pub fn prompt(item: &str) -> String {
        format!("Give me an example sentence for the following: {item}")
    }
}

pub fn example_schema() -> OutputSchema {
    OutputSchema::string_fields(
        "Example",
        "Japanese example sentence, hiragana and English translation",
        &[
            ("example_sentence", "Japanese example sentence in Kanji."),
            (
                "hiragana",
                "The hiragana version of the example sentence separated by spaces.",
            ),
            (
                "english_translation",
                "The English translation of the example sentence.",
            ),
        ],
    )
}

/// Parse a completion reply into a record for `item`
pub fn parse_example(item: &str, content: &str) -> Result<Record, GenerationError> {
    let example: Example = serde_json::from_str(content)?;

    let fields = [
        ("example_sentence", &example.example_sentence),
        ("hiragana", &example.hiragana),
        ("english_translation", &example.english_translation),
    ];
    if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(GenerationError::EmptyField(*name));
    }

    Ok(Record {
        source_item: item.to_string(),
        main_text: example.example_sentence,
        phonetic_text: example.hiragana,
        translation_text: example.english_translation,
    })
}

#[async_trait]
impl<C: CompletionService> Generator for ExampleGenerator<C> {
    async fn generate(&self, item: &str) -> Result<Record, GenerationError> {
        if item.trim().is_empty() {
            return Err(GenerationError::EmptyItem);
        }

        let prompt = Self::prompt(item);
        let content = tokio::time::timeout(self.timeout, self.completion.complete(&prompt, &self.schema))
            .await
            .map_err(|_| GenerationError::Timeout(self.timeout))??;

        parse_example(item, &content)
    }
}
