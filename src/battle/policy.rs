//! Play policies for non-human seats.
//!
//! Policies are trait-based so a smarter opponent can be swapped in
//! without touching the state machine. The engine only asks a policy for
//! a hand index; recording, scoring, and round resolution stay inside the
//! engine regardless of who chose the card.

use crate::core::{BattleRng, Card};

/// Strategy for choosing which card the AI seat plays.
pub trait PlayPolicy: Send + Sync {
    /// Choose a hand index to play.
    ///
    /// Returns `None` when no play is possible (empty hand).
    fn choose_index(&mut self, hand: &[Card], rng: &mut BattleRng) -> Option<usize>;
}

/// Uniformly random card selection.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl PlayPolicy for RandomPolicy {
    fn choose_index(&mut self, hand: &[Card], rng: &mut BattleRng) -> Option<usize> {
        if hand.is_empty() {
            None
        } else {
            Some(rng.gen_range_usize(0..hand.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_policy_in_range() {
        let mut policy = RandomPolicy;
        let mut rng = BattleRng::new(42);
        let hand: Vec<Card> = (1..=5).map(Card::new).collect();

        for _ in 0..50 {
            let index = policy.choose_index(&hand, &mut rng).unwrap();
            assert!(index < hand.len());
        }
    }

    #[test]
    fn test_random_policy_empty_hand() {
        let mut policy = RandomPolicy;
        let mut rng = BattleRng::new(42);
        assert_eq!(policy.choose_index(&[], &mut rng), None);
    }
}
