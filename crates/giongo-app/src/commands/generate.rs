use anyhow::Context;
use giongo_anki::DeckWriter;
use giongo_config::generate::GenerateConfig;
use giongo_core::generation::{GenerationDriver, Generator};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub generated: usize,
    pub failed: usize,
    pub resume_line: Option<usize>,
}

/// Generate a deck for the configured word list and save it with the failures
pub async fn generate_deck<G: Generator + ?Sized>(
    generator: &G,
    config: &GenerateConfig,
    cancel: CancellationToken,
) -> anyhow::Result<GenerateSummary> {
    let items = giongo_io::wordlist::read_word_list(&config.input_path, config.start_line).await?;

    // Create both outputs before spending any requests
    let deck = DeckWriter::create(&config.output_path).context("Failed to open deck output")?;
    let failed = DeckWriter::create(&config.failed_path).context("Failed to open failure output")?;

    let outcome = GenerationDriver::new(generator)
        .with_cancellation(cancel)
        .run(&items)
        .await;

    // Write both files even if one fails
    let saved_deck = giongo_anki::save_deck(deck, &outcome.records).context("Error saving Anki deck");
    let saved_failed =
        giongo_anki::save_failed(failed, &outcome.failed).context("Error saving failed items");
    if let (Err(_), Err(e)) = (&saved_deck, &saved_failed) {
        tracing::error!("{e:#}");
    }
    saved_deck?;
    saved_failed?;

    let summary = GenerateSummary {
        generated: outcome.records.len(),
        failed: outcome.failed.len(),
        resume_line: outcome.resume_line,
    };

    tracing::info!(
        "Generation finished: {} generated, {} failed",
        summary.generated,
        summary.failed
    );
    if let Some(line) = summary.resume_line {
        tracing::info!("Run stopped early, resume with --start-line {line}");
    }

    Ok(summary)
}
