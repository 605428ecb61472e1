//! Play notifications for presentation layers.
//!
//! The engine pushes a `CardPlayed` event to subscribers the moment a card
//! leaves a hand, carrying the hand index at the time of play so a view can
//! animate the matching card. Events are fire-and-forget: subscribers
//! cannot influence engine state, and the engine never holds a reference
//! back into a view.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Seat};

/// A card was just played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPlayed {
    /// The seat that played.
    pub seat: Seat,

    /// Index the card occupied in the hand when it was played.
    pub hand_index: usize,

    /// The card itself.
    pub card: Card,

    /// True when the play was forced by timer expiry rather than chosen.
    pub forced: bool,
}

/// Subscriber callback for [`CardPlayed`] events.
pub type CardPlayedFn = Box<dyn FnMut(&CardPlayed)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let event = CardPlayed {
            seat: Seat::Player1,
            hand_index: 3,
            card: Card::new(12),
            forced: true,
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: CardPlayed = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
