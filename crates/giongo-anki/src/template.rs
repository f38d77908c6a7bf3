use giongo_types::{Record, TaggedCard};

/// Anki text import field separator
pub const FIELD_SEPARATOR: &str = ";";

/// Keep generated text inside one field of one line
fn sanitize_field(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace(FIELD_SEPARATOR, "；")
}

/// `mainText;phoneticText;translationText;sourceItem`
///
/// The source item is written as-is; readers take everything after the
/// third separator as the source item.
pub fn record_line(record: &Record) -> String {
    [
        sanitize_field(&record.main_text),
        sanitize_field(&record.phonetic_text),
        sanitize_field(&record.translation_text),
        record.source_item.clone(),
    ]
    .join(FIELD_SEPARATOR)
}

/// `rawRecordLine;frequencyBandTag`
pub fn tagged_line(tagged: &TaggedCard) -> String {
    format!("{}{FIELD_SEPARATOR}{}", tagged.card.raw, tagged.tag)
}
