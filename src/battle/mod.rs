//! The battle engine: decks, players, and the turn state machine.
//!
//! ## Key Types
//!
//! - `Deck`: Shuffled pool of distinct cards dealt by cursor
//! - `PlayerState`: One seat's hand, score, and deck
//! - `BattleState` / `RoundRecord` / `BattleResult`: Observable state
//! - `PlayPolicy` / `RandomPolicy`: Card selection for the AI seat
//! - `CardPlayed`: Fire-and-forget play notification
//! - `BattleConfig` / `BattleEngine`: The state machine itself

pub mod deck;
pub mod engine;
pub mod events;
pub mod player;
pub mod policy;
pub mod state;

pub use deck::{Deck, DrawBuffer, DEFAULT_DECK_SIZE};
pub use engine::{BattleConfig, BattleEngine};
pub use events::CardPlayed;
pub use player::PlayerState;
pub use policy::{PlayPolicy, RandomPolicy};
pub use state::{BattleResult, BattleState, RoundRecord};
