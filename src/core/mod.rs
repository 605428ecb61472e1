//! Core value types: cards, seats, RNG.
//!
//! These are the leaf building blocks the battle engine is assembled from.
//! Nothing here holds game state; the state machine lives in [`crate::battle`].

pub mod card;
pub mod rng;
pub mod seat;

pub use card::Card;
pub use rng::BattleRng;
pub use seat::{Seat, SeatMap};
