//! Descriptive card attributes.
//!
//! `CardData` is one row of the externally supplied card table: the
//! descriptive and scoring attributes for a single rank. The engine only
//! reads `power`; the remaining fields exist for presentation layers that
//! poll the catalog (card art references are out of scope and not carried).

use serde::{Deserialize, Serialize};

/// Descriptive attributes for one card rank.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    /// Card name (for display/debugging).
    pub name: String,

    /// Rarity tier (e.g. "Common", "Rare", "Epic", "Legendary").
    pub rarity: String,

    /// Scoring power. This is what a play is worth under catalog scoring.
    pub power: i32,

    /// Attack range (flavor; unused by the engine).
    pub range: f32,

    /// Flavor text.
    pub description: String,

    /// Set the card belongs to (e.g. "BaseSet", "Expansion1").
    pub series: String,
}

impl CardData {
    /// Create a row with the given name and power; remaining fields default.
    pub fn new(name: impl Into<String>, power: i32) -> Self {
        Self {
            name: name.into(),
            rarity: String::new(),
            power,
            range: 0.0,
            description: String::new(),
            series: String::new(),
        }
    }

    /// Set the rarity tier (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = rarity.into();
        self
    }

    /// Set the attack range (builder pattern).
    #[must_use]
    pub fn with_range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    /// Set the flavor text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the card series (builder pattern).
    #[must_use]
    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = series.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let data = CardData::new("Knight", 8)
            .with_rarity("Rare")
            .with_range(1.5)
            .with_description("A stalwart defender.")
            .with_series("BaseSet");

        assert_eq!(data.name, "Knight");
        assert_eq!(data.power, 8);
        assert_eq!(data.rarity, "Rare");
        assert_eq!(data.series, "BaseSet");
    }

    #[test]
    fn test_serde_roundtrip() {
        let data = CardData::new("Goblin", 2).with_rarity("Common");
        let json = serde_json::to_string(&data).unwrap();
        let back: CardData = serde_json::from_str(&json).unwrap();
        assert_eq!(data, back);
    }
}
