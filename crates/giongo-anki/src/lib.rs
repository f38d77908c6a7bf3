mod template;
mod writer;

pub use template::{FIELD_SEPARATOR, record_line, tagged_line};
pub use writer::DeckWriter;

use giongo_core::error::OutputWriteError;
use giongo_core::generation::FailureSet;
use giongo_types::{Record, TaggedCard};

/// Write generated records as an importable deck
pub fn save_deck(mut writer: DeckWriter, records: &[Record]) -> Result<usize, OutputWriteError> {
    for record in records {
        writer.write_line(&record_line(record))?;
    }
    let path = writer.path().display().to_string();
    let saved = writer.finish()?;
    tracing::info!("Finished saving Anki deck of {saved} cards to {path}");
    Ok(saved)
}

/// Write sorted, tagged cards as an importable deck
pub fn save_sorted_deck(
    mut writer: DeckWriter,
    cards: &[TaggedCard],
) -> Result<usize, OutputWriteError> {
    for tagged in cards {
        writer.write_line(&tagged_line(tagged))?;
    }
    let path = writer.path().display().to_string();
    let saved = writer.finish()?;
    tracing::info!("Saved importable Anki deck of {saved} cards to {path}");
    Ok(saved)
}

/// Write items that could not be generated, one per line
pub fn save_failed(mut writer: DeckWriter, failed: &FailureSet) -> Result<usize, OutputWriteError> {
    for item in failed.iter() {
        writer.write_line(item)?;
    }
    let path = writer.path().display().to_string();
    let saved = writer.finish()?;
    tracing::info!("Finished saving {saved} failed items to {path}");
    Ok(saved)
}
