//! Card value type.
//!
//! A card is a single rank. Cards carry no identity: two cards with the
//! same rank are interchangeable. Descriptive attributes (name, power,
//! rarity) live in the [`crate::cards::CardCatalog`], keyed by rank.
//!
//! Rank 0 is the sentinel "no card" value. It is returned by play
//! operations that cannot produce a real card and is never legal to play.

use serde::{Deserialize, Serialize};

/// A single card, identified by its rank.
///
/// Ranks in a deck of size N run 1..=N, each appearing exactly once.
///
/// ## Example
///
/// ```
/// use card_battle::core::Card;
///
/// let card = Card::new(7);
/// assert!(card.is_valid());
/// assert!(!Card::NONE.is_valid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card(pub u32);

impl Card {
    /// The sentinel "no card" value (rank 0).
    pub const NONE: Card = Card(0);

    /// Create a card with the given rank.
    #[must_use]
    pub const fn new(rank: u32) -> Self {
        Self(rank)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn rank(self) -> u32 {
        self.0
    }

    /// Check whether this is a real card (not the sentinel).
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "Card({})", self.0)
        } else {
            write!(f, "Card(none)")
        }
    }
}
