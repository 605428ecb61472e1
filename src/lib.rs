//! # card-battle
//!
//! A two-player, turn-based card battle engine.
//!
//! Each seat draws an opening hand from its own shuffled deck and the
//! seats alternate playing one card per turn, under a per-turn timer that
//! forces a random play on expiry. Scores accumulate as cards are played;
//! when both hands are empty the higher score wins.
//!
//! ## Design Principles
//!
//! 1. **One engine, one match**: All mutable state lives in a
//!    [`battle::BattleEngine`] instance. No globals; concurrent matches
//!    are just multiple engines.
//!
//! 2. **Presentation stays outside**: Views poll the engine's read-only
//!    queries and subscribe to play events. The engine never holds a
//!    reference into a view, and misuse from the UI (stale index, wrong
//!    turn) degrades to a logged no-op rather than an error.
//!
//! 3. **Deterministic randomness**: Shuffling, the first-turn coin flip,
//!    and forced/AI plays all draw from one injected, seedable RNG, so a
//!    seed replays a match exactly.
//!
//! ## Modules
//!
//! - `core`: Cards, seats, RNG
//! - `cards`: Data-driven card catalog (names, rarity, power)
//! - `battle`: Decks, players, policies, events, and the engine

pub mod battle;
pub mod cards;
pub mod core;

// Re-export commonly used types
pub use crate::core::{BattleRng, Card, Seat, SeatMap};

pub use crate::cards::{CardCatalog, CardData};

pub use crate::battle::{
    BattleConfig, BattleEngine, BattleResult, BattleState, CardPlayed, Deck, PlayPolicy,
    PlayerState, RandomPolicy, RoundRecord,
};
