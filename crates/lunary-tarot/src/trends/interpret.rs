//! Interpretive text for trend patterns.
//!
//! Significance is measured as the observed rate of a family divided by the
//! rate it makes up in the deck. A ratio of 1.0 is exactly what uniform draws
//! would give.

use crate::deck::{Arcana, CardFamily, Rank};

/// Strong-signal threshold for the major arcana as a suit.
pub const MAJOR_SUIT_THRESHOLD: f64 = 1.4;
/// Strong-signal threshold for a minor suit.
pub const MINOR_SUIT_THRESHOLD: f64 = 1.8;
/// Threshold for an emerging (weaker) signal.
pub const EMERGING_THRESHOLD: f64 = 1.2;

/// Reading for a card that keeps coming back; `None` below three draws.
pub fn card_reading(name: &str, count: usize) -> Option<String> {
    match count {
        4.. => Some(format!(
            "{name} appearing {count} times signals a major theme demanding your attention. \
             This energy is persistently trying to guide you."
        )),
        3 => Some(format!(
            "{name} appearing 3 times indicates this lesson is important for your current \
             journey. Pay attention to its message."
        )),
        _ => None,
    }
}

/// Observed rate over expected rate, or `None` when either is undefined.
pub fn significance(count: usize, total: usize, expected_rate: f64) -> Option<f64> {
    if total == 0 || expected_rate <= 0.0 {
        return None;
    }
    Some((count as f64 / total as f64) / expected_rate)
}

/// Reading for a suit (or the major arcana) drawn more often than expected.
pub fn suit_reading(
    family: CardFamily,
    count: usize,
    total: usize,
    expected_rate: f64,
) -> Option<String> {
    let ratio = significance(count, total, expected_rate)?;
    let strong = match family {
        CardFamily::MajorArcana => MAJOR_SUIT_THRESHOLD,
        _ => MINOR_SUIT_THRESHOLD,
    };
    let text = if ratio >= strong {
        match family {
            CardFamily::Cups => {
                "Cups appearing strongly - Your emotional and relationship life needs major \
                 attention. Heart matters are central to your current journey."
            }
            CardFamily::Wands => {
                "Wands dominating your readings - Creative fire and action energy are \
                 prominent. Time for bold moves and passion projects."
            }
            CardFamily::Swords => {
                "Swords cutting through - Mental challenges and decisions are at the \
                 forefront. Your intellect is being tested and refined."
            }
            CardFamily::Pentacles => {
                "Pentacles grounding you - Material and practical matters require focused \
                 attention. Build solid foundations in the physical world."
            }
            CardFamily::MajorArcana => {
                "Major Arcana guiding strongly - Significant spiritual lessons and karmic \
                 experiences are unfolding in your life."
            }
        }
    } else if ratio >= EMERGING_THRESHOLD {
        match family {
            CardFamily::Cups => {
                "Cups emerging as a theme - Emotional healing and relationships need gentle \
                 attention."
            }
            CardFamily::Wands => {
                "Wands lighting up - Creative energy and enthusiasm are building. Channel this \
                 fire wisely."
            }
            CardFamily::Swords => {
                "Swords present - Mental clarity and communication are key themes in your \
                 current path."
            }
            CardFamily::Pentacles => {
                "Pentacles steady - Practical foundations and material security need \
                 strengthening."
            }
            CardFamily::MajorArcana => {
                "Major Arcana active - Important spiritual lessons are present in your journey."
            }
        }
    } else {
        return None;
    };
    Some(text.to_string())
}

/// Reading for a number that recurs across suits.
pub fn number_reading(rank: Rank, count: usize, timeframe_days: u32) -> String {
    format!(
        "{rank}s appeared {count} times in {timeframe_days} days - highlighting themes of {} \
         in your life right now.",
        rank.meaning()
    )
}

/// Reading for the balance between major and minor arcana.
pub fn arcana_reading(
    arcana: Arcana,
    count: usize,
    total: usize,
    expected_rate: f64,
) -> Option<String> {
    let ratio = significance(count, total, expected_rate)?;
    let above = ((ratio - 1.0) * 100.0).round();
    match arcana {
        Arcana::Major if ratio >= 1.5 => Some(format!(
            "Major Arcana appearing {above}% more than expected - You're in a period of \
             profound spiritual transformation and major life lessons. The universe is guiding \
             significant change."
        )),
        Arcana::Major if ratio >= 1.2 => Some(format!(
            "Major Arcana appearing {above}% above normal frequency - Important karmic lessons \
             and spiritual development are active in your life."
        )),
        Arcana::Major if ratio <= 0.5 => Some(
            "Major Arcana appearing much less than expected - Focus on practical, day-to-day \
             matters. Ground yourself in the material world."
                .to_string(),
        ),
        Arcana::Minor if ratio >= 1.2 => Some(
            "Minor Arcana heavily dominant - Strong focus on daily life, practical matters, and \
             incremental progress. Building foundations is key right now."
                .to_string(),
        ),
        _ => None,
    }
}
