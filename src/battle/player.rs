//! Per-seat player state: hand, score, and the deck it draws from.

use smallvec::SmallVec;

use crate::core::{BattleRng, Card, Seat};

use super::deck::Deck;

/// One seat's cards and score.
///
/// A `PlayerState` owns its deck for the duration of a game. The battle
/// engine is the sole mutator; presentation layers only read the hand and
/// score through the engine's query surface.
#[derive(Clone, Debug)]
pub struct PlayerState {
    seat: Seat,
    deck: Option<Deck>,
    hand: SmallVec<[Card; 10]>,
    score: i32,
}

impl PlayerState {
    /// Create a player with an empty hand, zero score, and no deck.
    #[must_use]
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            deck: None,
            hand: SmallVec::new(),
            score: 0,
        }
    }

    /// Which seat this player occupies.
    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Hand over a deck for this player to draw from.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = Some(deck);
    }

    /// Draw up to `count` cards from the deck into the hand.
    ///
    /// Preserves draw order. A missing deck or an exhausted one simply
    /// yields fewer cards; returns how many were actually drawn.
    pub fn draw_to_hand(&mut self, count: usize) -> usize {
        let Some(deck) = self.deck.as_mut() else {
            return 0;
        };
        let dealt = deck.draw(count);
        let drawn = dealt.len();
        self.hand.extend(dealt);
        drawn
    }

    /// Remove and return the card at `index`.
    ///
    /// Out-of-range indices return [`Card::NONE`] and leave the hand
    /// untouched. Stale indices from asynchronous callers are expected,
    /// so this is a silent no-op rather than a panic or error.
    pub fn play_card(&mut self, index: usize) -> Card {
        if index < self.hand.len() {
            self.hand.remove(index)
        } else {
            Card::NONE
        }
    }

    /// Remove and return a uniformly random card, with its index at the
    /// time of play. Returns `None` when the hand is empty.
    pub fn play_card_random(&mut self, rng: &mut BattleRng) -> Option<(usize, Card)> {
        if self.hand.is_empty() {
            return None;
        }
        let index = rng.gen_range_usize(0..self.hand.len());
        Some((index, self.play_card(index)))
    }

    /// Current hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Whether the hand is non-empty.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Cumulative score.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Add points to the cumulative score.
    pub fn add_score(&mut self, points: i32) {
        self.score += points;
    }

    /// Reset the score to zero.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Clear the hand (game reset).
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }
}
