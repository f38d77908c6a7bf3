use anyhow::Context;
use giongo_anki::DeckWriter;
use giongo_config::sort::SortConfig;
use giongo_core::classify::{SkipCounts, classify};
use giongo_core::sort::sort_by_frequency;
use giongo_lang_japanese::FrequencyLoader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSummary {
    pub loaded: usize,
    pub saved: usize,
    pub skipped: SkipCounts,
}

/// Filter the generated deck by frequency, sort it and save it tagged
pub async fn sort_deck(config: &SortConfig) -> anyhow::Result<SortSummary> {
    let frequency = FrequencyLoader::load_from_file(&config.frequency_data_path)
        .context("Failed to load frequency data")?;

    let lines = giongo_io::deck::read_deck_lines(&config.input_path).await?;
    tracing::info!("Loaded unsorted anki card data of length {}", lines.len());

    let writer = DeckWriter::create(&config.output_path).context("Failed to open sorted deck output")?;

    let classification = classify(
        lines.iter().map(String::as_str),
        &frequency,
        config.frequency_threshold,
    );
    let skipped = classification.skipped;
    tracing::info!(
        "Extracted {} cards in {} groups",
        classification.groups.card_count(),
        classification.groups.len()
    );

    let sorted = sort_by_frequency(classification.groups);
    let saved = giongo_anki::save_sorted_deck(writer, &sorted).context("Error saving sorted deck")?;

    Ok(SortSummary {
        loaded: lines.len(),
        saved,
        skipped,
    })
}
