//! Error types for the tarot layer.

use thiserror::Error;

/// Result type for tarot operations.
pub type TarotResult<T> = Result<T, TarotError>;

/// Errors that can occur while loading a deck or looking up cards.
#[derive(Debug, Error)]
pub enum TarotError {
    /// Deck data is not valid JSON in the expected shape.
    #[error("invalid deck data: {0}")]
    Data(#[from] serde_json::Error),

    /// Deck data parsed but does not form a valid catalog.
    #[error("invalid deck: {0}")]
    Catalog(#[from] lunary_seed::CatalogError),

    /// No card with the given name exists in the deck.
    #[error("unknown card: {0}")]
    UnknownCard(String),
}
