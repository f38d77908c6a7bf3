use std::fmt;

use serde::{Deserialize, Serialize};

/// One line of the source word list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputItem {
    /// 1-based line number in the source file
    pub line_number: usize,
    pub text: String,
}

impl InputItem {
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }
}

/// Generated flashcard content for a single input item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub source_item: String,
    pub main_text: String,
    pub phonetic_text: String,
    pub translation_text: String,
}

/// Frequency rank of a word form, lower is more common.
///
/// `Unknown` sorts after every known rank, so `min` over candidate forms
/// picks the best known one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Known(u32),
    Unknown,
}

impl Frequency {
    pub fn from_rank(rank: Option<u32>) -> Self {
        rank.map_or(Frequency::Unknown, Frequency::Known)
    }

    pub fn rank(&self) -> Option<u32> {
        match self {
            Frequency::Known(rank) => Some(*rank),
            Frequency::Unknown => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Known(rank) => write!(f, "{rank}"),
            Frequency::Unknown => write!(f, "unknown"),
        }
    }
}

/// A deck line annotated with the frequency of its source word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Primary form, also the grouping key
    pub hiragana: String,
    /// Alternate form
    pub katakana: String,
    /// The deck line this card was read from
    pub raw: String,
    pub frequency: Frequency,
}

/// A card ready for the sorted deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedCard {
    pub card: Card,
    pub tag: String,
}
