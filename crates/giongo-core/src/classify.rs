use std::collections::HashMap;

use giongo_types::{Card, Frequency};

use crate::error::MalformedCardError;
use crate::language::FrequencyProvider;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

const FIELD_SEPARATOR: char = ';';
const FORM_SEPARATOR: char = '\t';
/// main text, phonetic text, translation, source item
const DECK_FIELDS: usize = 4;

/// Read a card from a generated deck line.
///
/// The word forms come from the source item, which is everything after the
/// third separator, so a `;` inside a gloss stays part of it.
pub fn parse_card(
    line: &str,
    frequency: &(impl FrequencyProvider + ?Sized),
) -> Result<Card, MalformedCardError> {
    let Some(source) = line.splitn(DECK_FIELDS, FIELD_SEPARATOR).nth(DECK_FIELDS - 1) else {
        return Err(MalformedCardError::MissingSourceField {
            found: line.split(FIELD_SEPARATOR).count(),
        });
    };
    let mut forms = source.split(FORM_SEPARATOR);
    let (Some(hiragana), Some(katakana)) = (forms.next(), forms.next()) else {
        return Err(MalformedCardError::MissingAlternateForm {
            found: source.split(FORM_SEPARATOR).count(),
        });
    };

    let preprocessor = DefaultPreprocessor;
    let hiragana = preprocessor.normalize_form(hiragana);
    let katakana = preprocessor.normalize_form(katakana);
    if hiragana.is_empty() || katakana.is_empty() {
        return Err(MalformedCardError::EmptyForm);
    }

    let frequency = frequency.resolve(&hiragana, &katakana);

    Ok(Card {
        hiragana,
        katakana,
        raw: line.to_string(),
        frequency,
    })
}

/// Cards grouped by hiragana form.
///
/// Groups keep the order their key was first seen in, cards keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct GroupedCards {
    groups: Vec<(String, Vec<Card>)>,
    index: HashMap<String, usize>,
}

impl GroupedCards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, card: Card) {
        match self.index.get(&card.hiragana) {
            Some(&i) => self.groups[i].1.push(card),
            None => {
                self.index.insert(card.hiragana.clone(), self.groups.len());
                self.groups.push((card.hiragana.clone(), vec![card]));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[Card]> {
        self.index.get(key).map(|&i| self.groups[i].1.as_slice())
    }

    /// Keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.groups.iter().map(|(_, cards)| cards.len()).sum()
    }

    pub fn into_groups(self) -> Vec<(String, Vec<Card>)> {
        self.groups
    }
}

/// Why cards were left out of the deck
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub not_found: usize,
    pub too_infrequent: usize,
    pub invalid_rank: usize,
    pub malformed: usize,
}

#[derive(Debug, Default)]
pub struct Classification {
    pub groups: GroupedCards,
    pub skipped: SkipCounts,
}

/// Where a single card ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relevance {
    Retained,
    NotFound,
    TooInfrequent,
    InvalidRank,
}

pub fn relevance(frequency: Frequency, threshold: u32) -> Relevance {
    match frequency {
        Frequency::Unknown => Relevance::NotFound,
        Frequency::Known(0) => Relevance::InvalidRank,
        Frequency::Known(rank) if rank <= threshold => Relevance::Retained,
        Frequency::Known(_) => Relevance::TooInfrequent,
    }
}

/// Turn deck lines into frequency-annotated cards, keeping those ranked
/// within `threshold` and grouping them by hiragana form.
pub fn classify<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    frequency: &(impl FrequencyProvider + ?Sized),
    threshold: u32,
) -> Classification {
    let mut classification = Classification::default();
    let skipped = &mut classification.skipped;

    for (i, line) in lines.into_iter().enumerate() {
        let card = match parse_card(line, frequency) {
            Ok(card) => card,
            Err(e) => {
                tracing::warn!("Skipping malformed line {}: {e}", i + 1);
                skipped.malformed += 1;
                continue;
            }
        };

        match relevance(card.frequency, threshold) {
            Relevance::Retained => classification.groups.insert(card),
            Relevance::NotFound => skipped.not_found += 1,
            Relevance::TooInfrequent => skipped.too_infrequent += 1,
            Relevance::InvalidRank => skipped.invalid_rank += 1,
        }
    }

    tracing::info!(
        "skipped: {} cards due to not being found in the frequency data",
        skipped.not_found
    );
    tracing::info!(
        "skipped: {} cards due to frequency higher than {threshold}",
        skipped.too_infrequent
    );
    if skipped.invalid_rank > 0 {
        tracing::info!("skipped: {} cards with rank 0", skipped.invalid_rank);
    }
    if skipped.malformed > 0 {
        tracing::info!("skipped: {} malformed lines", skipped.malformed);
    }

    classification
}
