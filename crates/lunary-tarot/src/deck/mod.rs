//! The tarot deck.
//!
//! The standard deck ships with the crate as JSON: the 22 major arcana in
//! order, then Cups, Pentacles, Swords and Wands, fourteen cards each. The
//! order is part of the selection contract. Reordering the file changes which
//! card every past and future seed maps to.
//!
//! A deck is parsed once by its owner and passed around by reference:
//!
//! ```
//! use lunary_tarot::TarotDeck;
//!
//! let deck = TarotDeck::standard().unwrap();
//! let card = deck.tarot_card("daily-2025-01-01", Some("Alice"), Some("1990-05-01"));
//! assert_eq!(card, deck.tarot_card("daily-2025-01-01", Some(" alice"), Some("1990-05-01")));
//! ```

pub mod card;

pub use card::{Arcana, CardFamily, Rank, TarotCard};

use lunary_seed::{Catalog, SeedContext, Selection};
use tracing::debug;

use crate::error::{TarotError, TarotResult};

/// JSON for the bundled 78-card deck.
pub const STANDARD_DECK_JSON: &str = include_str!("../../data/tarot-cards.json");

/// A validated, ordered tarot deck.
#[derive(Debug, Clone)]
pub struct TarotDeck {
    catalog: Catalog<TarotCard>,
}

impl TarotDeck {
    /// Parse the bundled standard deck.
    pub fn standard() -> TarotResult<Self> {
        Self::from_json(STANDARD_DECK_JSON)
    }

    /// Parse a deck from a JSON array of `{name, keywords, information}`.
    pub fn from_json(json: &str) -> TarotResult<Self> {
        let cards: Vec<TarotCard> = serde_json::from_str(json)?;
        Self::from_cards(cards)
    }

    /// Build a deck from cards already in selection order.
    pub fn from_cards(cards: Vec<TarotCard>) -> TarotResult<Self> {
        let catalog = Catalog::new(cards)?;
        debug!(cards = catalog.len(), "tarot deck ready");
        Ok(Self { catalog })
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog<TarotCard> {
        &self.catalog
    }

    /// All cards in selection order.
    pub fn cards(&self) -> &[TarotCard] {
        self.catalog.items()
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Always `false`; a deck has at least one card.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Look up a card by name, ignoring case and surrounding whitespace.
    pub fn card_by_name(&self, name: &str) -> Option<&TarotCard> {
        self.catalog.by_name(name)
    }

    /// Like [`card_by_name`](Self::card_by_name), but an unknown name is an error.
    pub fn find(&self, name: &str) -> TarotResult<&TarotCard> {
        self.card_by_name(name)
            .ok_or_else(|| TarotError::UnknownCard(name.trim().to_string()))
    }

    /// The card for a base seed, optionally personalized by name and birthday.
    pub fn tarot_card(&self, base: &str, name: Option<&str>, birthday: Option<&str>) -> &TarotCard {
        self.catalog.pick(base, name, birthday)
    }

    /// Full selection (seed, index, card) for a context.
    pub fn draw(&self, context: &SeedContext) -> Selection<'_, TarotCard> {
        self.catalog.select(context)
    }

    /// Cards belonging to `family`, in deck order.
    pub fn cards_in(&self, family: CardFamily) -> impl Iterator<Item = &TarotCard> {
        self.cards()
            .iter()
            .filter(move |card| card.family() == family)
    }

    /// Share of the deck made up by `family`: the rate a family shows up at
    /// if draws are uniform.
    pub fn family_rate(&self, family: CardFamily) -> f64 {
        self.cards_in(family).count() as f64 / self.len() as f64
    }

    /// Share of the deck made up by major or minor arcana.
    pub fn arcana_rate(&self, arcana: Arcana) -> f64 {
        let count = self.cards().iter().filter(|c| c.arcana() == arcana).count();
        count as f64 / self.len() as f64
    }
}
