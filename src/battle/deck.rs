//! Deck: an ordered pool of distinct cards dealt by cursor.
//!
//! A deck is shuffled exactly once at construction (and again on reset).
//! Dealing never removes cards; a cursor advances past dealt cards, so
//! everything before the cursor has been dealt exactly once and everything
//! at or after it never.

use smallvec::SmallVec;

use crate::cards::CardCatalog;
use crate::core::{BattleRng, Card};

/// Default deck size when no catalog drives composition.
pub const DEFAULT_DECK_SIZE: u32 = 30;

/// Buffer type for dealt cards. Sized for the standard opening draw.
pub type DrawBuffer = SmallVec<[Card; 10]>;

/// An ordered pool of distinct cards with a draw cursor.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Build a deck of ranks 1..=size, shuffled.
    #[must_use]
    pub fn new(size: u32, rng: &mut BattleRng) -> Self {
        let cards: Vec<Card> = (1..=size).map(Card::new).collect();
        let mut deck = Self { cards, cursor: 0 };
        deck.shuffle(rng);
        deck
    }

    /// Build a deck from the ranks of a catalog, shuffled.
    ///
    /// Falls back to [`Deck::new`] with [`DEFAULT_DECK_SIZE`] when the
    /// catalog has no usable rows, so engine logic never has to care which
    /// construction path was taken.
    #[must_use]
    pub fn from_catalog(catalog: &CardCatalog, rng: &mut BattleRng) -> Self {
        let ranks = catalog.ranks();
        if ranks.is_empty() {
            return Self::new(DEFAULT_DECK_SIZE, rng);
        }

        let cards: Vec<Card> = ranks.into_iter().map(Card::new).collect();
        let mut deck = Self { cards, cursor: 0 };
        deck.shuffle(rng);
        deck
    }

    /// Deal up to `count` cards, advancing the cursor past them.
    ///
    /// Returns fewer than requested (possibly none) once the pool is
    /// exhausted; callers must check the returned length.
    pub fn draw(&mut self, count: usize) -> DrawBuffer {
        let end = (self.cursor + count).min(self.cards.len());
        let dealt: DrawBuffer = self.cards[self.cursor..end].iter().copied().collect();
        self.cursor = end;
        dealt
    }

    /// Number of cards not yet dealt.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Total deck size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Reshuffle the full pool and move the cursor back to the start.
    pub fn reset(&mut self, rng: &mut BattleRng) {
        self.shuffle(rng);
        self.cursor = 0;
    }

    fn shuffle(&mut self, rng: &mut BattleRng) {
        rng.shuffle(&mut self.cards);
    }
}
