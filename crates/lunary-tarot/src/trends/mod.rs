//! Trend analysis over a person's recent cards.
//!
//! Recomputes the daily cards of the last N days (excluding today) and looks
//! for recurring cards, keywords, suits, numbers, and an imbalance between
//! major and minor arcana.

pub mod interpret;

use chrono::NaiveDate;
use serde::Serialize;

use crate::deck::{Arcana, CardFamily, Rank, TarotCard, TarotDeck};
use crate::labels;
use crate::reading::{Querent, daily_card};

/// Number of top keywords reported as dominant themes.
const THEME_COUNT: usize = 3;
/// Draws needed before a card is reported as frequent.
const FREQUENT_CARD_MIN: usize = 3;
/// Draws needed before a number is reported.
const NUMBER_PATTERN_MIN: usize = 2;

/// Everything found in a window of recent cards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrendAnalysis {
    /// Most frequent keywords, most frequent first.
    pub dominant_themes: Vec<String>,
    /// Cards drawn three or more times.
    pub frequent_cards: Vec<CardFrequency>,
    /// Suits drawn notably more often than the deck's composition predicts.
    pub suit_patterns: Vec<SuitPattern>,
    /// Numbers drawn twice or more.
    pub number_patterns: Vec<NumberPattern>,
    /// Notable imbalance between major and minor arcana.
    pub arcana_patterns: Vec<ArcanaPattern>,
    /// Days the analysis covers.
    pub timeframe_days: u32,
}

/// A card and how often it was drawn, with its interpretation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardFrequency {
    /// Card name.
    pub name: String,
    /// Times drawn.
    pub count: usize,
    /// Interpretation.
    pub reading: String,
}

/// A card name and a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardCount {
    /// Card name.
    pub name: String,
    /// Times drawn.
    pub count: usize,
}

/// A suit (or the major arcana) that stands out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuitPattern {
    /// The suit.
    pub family: CardFamily,
    /// Cards drawn from it.
    pub count: usize,
    /// Interpretation.
    pub reading: String,
    /// Which of its cards were drawn, most frequent first.
    pub cards: Vec<CardCount>,
}

/// A recurring number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberPattern {
    /// The number.
    pub rank: Rank,
    /// Times drawn across all suits.
    pub count: usize,
    /// Interpretation.
    pub reading: String,
    /// Distinct cards carrying the number, in order of first draw.
    pub cards: Vec<String>,
}

/// A notable share of major or minor arcana.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcanaPattern {
    /// Major or minor.
    pub arcana: Arcana,
    /// Cards drawn from it.
    pub count: usize,
    /// Interpretation.
    pub reading: String,
}

/// Counts in order of first appearance.
struct Tally<K> {
    entries: Vec<(K, usize)>,
}

impl<K: PartialEq + Clone> Tally<K> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add(&mut self, key: K) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key, 1)),
        }
    }

    /// Most frequent first; ties keep first-appearance order.
    fn ranked(&self) -> Vec<(K, usize)> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

/// The personal daily cards for the `days` days before `today`, most recent
/// first.
pub fn recent_cards<'a>(
    deck: &'a TarotDeck,
    querent: &Querent,
    today: NaiveDate,
    days: u32,
) -> Vec<&'a TarotCard> {
    labels::past_days(today, days, false)
        .into_iter()
        .map(|date| daily_card(deck, querent, date))
        .collect()
}

/// Analyze the personal cards of the `days` days before `today`.
pub fn analyze_recent(
    deck: &TarotDeck,
    querent: &Querent,
    today: NaiveDate,
    days: u32,
) -> TrendAnalysis {
    let cards = recent_cards(deck, querent, today, days);
    analyze(deck, &cards, days)
}

/// Analyze an arbitrary list of drawn cards.
///
/// `deck` supplies the expected share of each suit; `timeframe_days` is only
/// used in the number-pattern text.
pub fn analyze(deck: &TarotDeck, cards: &[&TarotCard], timeframe_days: u32) -> TrendAnalysis {
    let total = cards.len();
    if total == 0 {
        return TrendAnalysis {
            timeframe_days,
            ..TrendAnalysis::default()
        };
    }

    let mut by_card = Tally::new();
    let mut by_family = Tally::new();
    let mut by_keyword = Tally::new();
    let mut by_rank = Tally::new();
    let mut family_cards: Vec<(CardFamily, Tally<&str>)> = Vec::new();
    let mut major = 0;

    for card in cards {
        let family = card.family();
        by_card.add(card.name.as_str());
        by_family.add(family);
        match family_cards.iter_mut().find(|(f, _)| *f == family) {
            Some((_, tally)) => tally.add(card.name.as_str()),
            None => {
                let mut tally = Tally::new();
                tally.add(card.name.as_str());
                family_cards.push((family, tally));
            }
        }
        for keyword in &card.keywords {
            by_keyword.add(keyword.as_str());
        }
        if let Some(rank) = card.rank() {
            by_rank.add(rank);
        }
        if card.arcana() == Arcana::Major {
            major += 1;
        }
    }

    let dominant_themes = by_keyword
        .ranked()
        .into_iter()
        .take(THEME_COUNT)
        .map(|(keyword, _)| keyword.to_string())
        .collect();

    let frequent_cards = by_card
        .ranked()
        .into_iter()
        .filter(|&(_, count)| count >= FREQUENT_CARD_MIN)
        .filter_map(|(name, count)| {
            interpret::card_reading(name, count).map(|reading| CardFrequency {
                name: name.to_string(),
                count,
                reading,
            })
        })
        .collect();

    let suit_patterns = by_family
        .ranked()
        .into_iter()
        .filter_map(|(family, count)| {
            let reading = interpret::suit_reading(family, count, total, deck.family_rate(family))?;
            let cards = family_cards
                .iter()
                .find(|(f, _)| *f == family)
                .map(|(_, tally)| tally.ranked())
                .unwrap_or_default()
                .into_iter()
                .map(|(name, count)| CardCount {
                    name: name.to_string(),
                    count,
                })
                .collect();
            Some(SuitPattern {
                family,
                count,
                reading,
                cards,
            })
        })
        .collect();

    let number_patterns = by_rank
        .ranked()
        .into_iter()
        .filter(|&(_, count)| count >= NUMBER_PATTERN_MIN)
        .map(|(rank, count)| {
            let mut names: Vec<String> = Vec::new();
            for card in cards.iter().filter(|c| c.rank() == Some(rank)) {
                if !names.contains(&card.name) {
                    names.push(card.name.clone());
                }
            }
            NumberPattern {
                rank,
                count,
                reading: interpret::number_reading(rank, count, timeframe_days),
                cards: names,
            }
        })
        .collect();

    let minor = total - major;
    let arcana_patterns = [(Arcana::Major, major), (Arcana::Minor, minor)]
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .filter_map(|(arcana, count)| {
            let rate = deck.arcana_rate(arcana);
            let reading = interpret::arcana_reading(arcana, count, total, rate)?;
            Some(ArcanaPattern {
                arcana,
                count,
                reading,
            })
        })
        .collect();

    TrendAnalysis {
        dominant_themes,
        frequent_cards,
        suit_patterns,
        number_patterns,
        arcana_patterns,
        timeframe_days,
    }
}
