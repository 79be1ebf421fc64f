pub mod card;
pub mod draw;
pub mod history;
pub mod reading;
pub mod trends;

use std::path::Path;

use chrono::{FixedOffset, NaiveDate};
use colored::Colorize;
use lunary_tarot::{Querent, TarotCard, TarotDeck, labels};
use serde::Serialize;
use tracing::debug;

/// Everything a command needs: the deck and the caller's notion of today.
pub struct Context {
    pub deck: TarotDeck,
    pub offset: FixedOffset,
}

impl Context {
    /// Load the bundled deck, or the deck at `path` when given.
    pub fn load(path: Option<&Path>, offset: FixedOffset) -> Result<Self, String> {
        let deck = match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read deck {}: {e}", path.display()))?;
                debug!(path = %path.display(), "loading deck from file");
                TarotDeck::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?
            }
            None => TarotDeck::standard().map_err(|e| e.to_string())?,
        };
        Ok(Self { deck, offset })
    }

    /// `date`, or today at the configured offset.
    pub fn date_or_today(&self, date: Option<NaiveDate>) -> NaiveDate {
        date.unwrap_or_else(|| labels::today(self.offset))
    }
}

pub fn querent(name: Option<String>, birthday: Option<String>) -> Querent {
    Querent { name, birthday }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{json}");
    Ok(())
}

/// Name, keywords and interpretation, indented for terminal output.
fn print_card(card: &TarotCard) {
    println!("  {}", card.name.bold());
    if !card.keywords.is_empty() {
        println!("  {}", card.keywords.join(", ").dimmed());
    }
    if !card.information.is_empty() {
        println!();
        println!("  {}", card.information);
    }
}
