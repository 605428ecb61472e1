//! Battle state machine states, round records, and match results.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Seat, SeatMap};

/// State of the battle state machine.
///
/// `Idle → Started → Waiting(..) ⇄ Waiting(..) → GameOver`
///
/// `Started` is transient: `start_game` moves through it into the first
/// `Waiting` state within the same call. Round resolution and turn advance
/// are atomic, so there is no observable between-rounds state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleState {
    /// No game in progress.
    Idle,
    /// Game set up, first turn not yet begun.
    Started,
    /// Waiting for the given seat to play a card.
    Waiting(Seat),
    /// Both hands empty; winner determined.
    GameOver,
}

impl BattleState {
    /// Whether the engine is waiting on a play (timer runs only here).
    #[must_use]
    pub fn is_waiting(self) -> bool {
        matches!(self, BattleState::Waiting(_))
    }
}

/// The most recently completed round.
///
/// Overwritten every round. Cards are the sentinel until the owning seat
/// has played (or passed on an empty hand).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Card each seat played this round.
    pub cards: SeatMap<Card>,

    /// Per-round winner. `None` under cumulative scoring (no per-round
    /// adjudication) and for draws.
    pub winner: Option<Seat>,
}

impl Default for RoundRecord {
    fn default() -> Self {
        Self {
            cards: SeatMap::with_value(Card::NONE),
            winner: None,
        }
    }
}

impl RoundRecord {
    /// Card the given seat played, or the sentinel.
    #[must_use]
    pub fn card(&self, seat: Seat) -> Card {
        self.cards[seat]
    }
}

/// Result of a completed battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleResult {
    /// Single winner.
    Winner(Seat),
    /// Exact score tie.
    Draw,
}

impl BattleResult {
    /// Adjudicate final scores: higher score wins, exact tie is a draw.
    #[must_use]
    pub fn from_scores(score0: i32, score1: i32) -> Self {
        match score0.cmp(&score1) {
            std::cmp::Ordering::Greater => BattleResult::Winner(Seat::Player0),
            std::cmp::Ordering::Less => BattleResult::Winner(Seat::Player1),
            std::cmp::Ordering::Equal => BattleResult::Draw,
        }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, BattleResult::Winner(s) if *s == seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_waiting() {
        assert!(BattleState::Waiting(Seat::Player0).is_waiting());
        assert!(BattleState::Waiting(Seat::Player1).is_waiting());
        assert!(!BattleState::Idle.is_waiting());
        assert!(!BattleState::GameOver.is_waiting());
    }

    #[test]
    fn test_round_record_default() {
        let record = RoundRecord::default();
        assert_eq!(record.card(Seat::Player0), Card::NONE);
        assert_eq!(record.card(Seat::Player1), Card::NONE);
        assert_eq!(record.winner, None);
    }

    #[test]
    fn test_from_scores() {
        assert_eq!(
            BattleResult::from_scores(10, 7),
            BattleResult::Winner(Seat::Player0)
        );
        assert_eq!(
            BattleResult::from_scores(0, 5),
            BattleResult::Winner(Seat::Player1)
        );
        assert_eq!(BattleResult::from_scores(3, 3), BattleResult::Draw);
    }

    #[test]
    fn test_is_winner() {
        let result = BattleResult::Winner(Seat::Player1);
        assert!(result.is_winner(Seat::Player1));
        assert!(!result.is_winner(Seat::Player0));
        assert!(!BattleResult::Draw.is_winner(Seat::Player0));
    }
}
