use giongo_types::{Frequency, TaggedCard};

use crate::classify::GroupedCards;

const BAND_WIDTH: u32 = 10_000;
const BAND_LIMIT: u32 = 100_000;

/// Frequency band label for a rank.
///
/// Ranks 1..=100_000 fall into inclusive 10_000-wide bands, anything above
/// (and the invalid rank 0) falls into the open-ended top band.
pub fn frequency_tag(rank: u32) -> String {
    if rank == 0 || rank > BAND_LIMIT {
        return "frequency-100_000+".to_string();
    }

    let band = (rank - 1) / BAND_WIDTH;
    let low = band * BAND_WIDTH + 1;
    let high = (band + 1) * BAND_WIDTH;

    format!(
        "frequency-{:02}_{:03}-{}_{:03}",
        low / 1000,
        low % 1000,
        high / 1000,
        high % 1000
    )
}

/// Flatten groups into export order and tag every card.
///
/// Groups are ordered by the frequency of their first card only, later cards
/// in the same group do not move it. The sort is stable, so equal keys keep
/// first-seen order.
pub fn sort_by_frequency(grouped: GroupedCards) -> Vec<TaggedCard> {
    let mut groups = grouped.into_groups();
    groups.sort_by_key(|(_, cards)| {
        cards
            .first()
            .map(|card| card.frequency)
            .unwrap_or(Frequency::Unknown)
    });

    groups
        .into_iter()
        .flat_map(|(_, cards)| cards)
        .map(|card| {
            // Unknown cards are filtered before sorting
            let tag = frequency_tag(card.frequency.rank().unwrap_or(u32::MAX));
            TaggedCard { card, tag }
        })
        .collect()
}
