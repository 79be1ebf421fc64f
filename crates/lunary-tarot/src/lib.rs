//! Tarot content for Lunary built on seeded selection.
//!
//! Provides the bundled 78-card deck, the seed labels used for daily, weekly
//! and general cards, readings with guidance, and trend analysis over the
//! cards a person has drawn in recent days.

pub mod config;
pub mod deck;
pub mod error;
pub mod labels;
pub mod reading;
pub mod trends;

pub use config::ReadingConfig;
pub use deck::{Arcana, CardFamily, Rank, TarotCard, TarotDeck};
pub use error::{TarotError, TarotResult};
pub use reading::{Guidance, PastCard, Querent, Reading};
pub use trends::TrendAnalysis;
