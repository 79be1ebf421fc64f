//! Tarot cards and their classification.
//!
//! Classification is derived from the card name, so any deck that follows the
//! "<Rank> of <Suit>" naming for its minor arcana is understood.

use serde::{Deserialize, Serialize};

use lunary_seed::CatalogItem;

/// A single tarot card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotCard {
    /// Card name, unique within its deck.
    pub name: String,
    /// Descriptive keywords, most important first.
    pub keywords: Vec<String>,
    /// Interpretation of the card.
    pub information: String,
}

impl TarotCard {
    /// The suit the card belongs to, or the major arcana.
    pub fn family(&self) -> CardFamily {
        CardFamily::of_name(&self.name)
    }

    /// Major or minor arcana.
    pub fn arcana(&self) -> Arcana {
        match self.family() {
            CardFamily::MajorArcana => Arcana::Major,
            _ => Arcana::Minor,
        }
    }

    /// The numbered rank (Ace through Ten), if the name carries one.
    pub fn rank(&self) -> Option<Rank> {
        self.name.split_whitespace().find_map(Rank::from_word)
    }

    /// The keyword at `index`, if present.
    pub fn keyword(&self, index: usize) -> Option<&str> {
        self.keywords.get(index).map(String::as_str)
    }
}

impl CatalogItem for TarotCard {
    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for TarotCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Major or minor arcana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    /// The 22 trump cards.
    Major,
    /// The four suits.
    Minor,
}

impl std::fmt::Display for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "Major Arcana"),
            Self::Minor => write!(f, "Minor Arcana"),
        }
    }
}

/// The group a card is counted in for suit patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFamily {
    /// Any card outside the four suits.
    MajorArcana,
    /// Emotions and relationships.
    Cups,
    /// Creativity and action.
    Wands,
    /// Intellect and conflict.
    Swords,
    /// Material and practical matters.
    Pentacles,
}

impl CardFamily {
    /// Classify a card by its name.
    pub fn of_name(name: &str) -> Self {
        if name.contains("Cups") {
            Self::Cups
        } else if name.contains("Wands") {
            Self::Wands
        } else if name.contains("Swords") {
            Self::Swords
        } else if name.contains("Pentacles") {
            Self::Pentacles
        } else {
            Self::MajorArcana
        }
    }
}

impl std::fmt::Display for CardFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MajorArcana => write!(f, "Major Arcana"),
            Self::Cups => write!(f, "Cups"),
            Self::Wands => write!(f, "Wands"),
            Self::Swords => write!(f, "Swords"),
            Self::Pentacles => write!(f, "Pentacles"),
        }
    }
}

/// Numbered rank of a minor arcana card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    /// One.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 10] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
    ];

    /// Parse a rank from its exact English word ("Ace", "Two", ...).
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.to_string() == word)
    }

    /// What the number stands for in a reading.
    pub fn meaning(self) -> &'static str {
        match self {
            Self::Ace => "new beginnings and fresh starts",
            Self::Two => "balance, partnerships, and choices",
            Self::Three => "creativity, growth, and expansion",
            Self::Four => "stability, foundation, and structure",
            Self::Five => "change, conflict, and challenge",
            Self::Six => "harmony, healing, and progress",
            Self::Seven => "spirituality, introspection, and wisdom",
            Self::Eight => "material success and achievement",
            Self::Nine => "completion and spiritual fulfillment",
            Self::Ten => "endings and new cycles",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
        };
        write!(f, "{word}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> TarotCard {
        TarotCard {
            name: name.to_string(),
            keywords: vec!["one".to_string(), "two".to_string()],
            information: String::new(),
        }
    }

    #[test]
    fn family_from_name() {
        assert_eq!(card("Ace of Cups").family(), CardFamily::Cups);
        assert_eq!(card("Son of Wands").family(), CardFamily::Wands);
        assert_eq!(card("Ten of Swords").family(), CardFamily::Swords);
        assert_eq!(card("Mother of Pentacles").family(), CardFamily::Pentacles);
        assert_eq!(card("The Tower").family(), CardFamily::MajorArcana);
    }

    #[test]
    fn arcana_from_family() {
        assert_eq!(card("Wheel of Fortune").arcana(), Arcana::Major);
        assert_eq!(card("Three of Cups").arcana(), Arcana::Minor);
    }

    #[test]
    fn rank_from_name() {
        assert_eq!(card("Ace of Cups").rank(), Some(Rank::Ace));
        assert_eq!(card("Ten of Wands").rank(), Some(Rank::Ten));
        assert_eq!(card("Father of Swords").rank(), None);
        assert_eq!(card("The Star").rank(), None);
    }

    #[test]
    fn rank_words_round_trip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_word(&rank.to_string()), Some(rank));
        }
        assert_eq!(Rank::from_word("two"), None);
        assert_eq!(Rank::from_word("Eleven"), None);
    }

    #[test]
    fn keyword_access() {
        let c = card("The Sun");
        assert_eq!(c.keyword(1), Some("two"));
        assert_eq!(c.keyword(5), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(CardFamily::MajorArcana.to_string(), "Major Arcana");
        assert_eq!(Arcana::Minor.to_string(), "Minor Arcana");
        assert_eq!(Rank::Seven.to_string(), "Seven");
        assert_eq!(card("The Moon").to_string(), "The Moon");
    }
}
