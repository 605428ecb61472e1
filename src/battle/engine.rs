//! The battle engine: turn sequencing, timer, scoring, adjudication.
//!
//! The engine owns every mutable piece of a match (both players, both
//! decks, the state machine) and is its sole mutator. It advances only in
//! response to two external stimuli: an explicit play request for the
//! active seat, and per-frame time fed into [`BattleEngine::tick`]. All
//! transitions are synchronous and complete before the call returns.
//!
//! Caller misuse (wrong turn, out-of-range index, starting a running game)
//! never corrupts the state machine and never surfaces as an error: every
//! such case is a logged no-op, because presentation layers are expected
//! to deliver stale or duplicate calls.

use crate::cards::CardCatalog;
use crate::core::{BattleRng, Card, Seat, SeatMap};

use super::deck::Deck;
use super::events::{CardPlayed, CardPlayedFn};
use super::player::PlayerState;
use super::policy::{PlayPolicy, RandomPolicy};
use super::state::{BattleResult, BattleState, RoundRecord};

use serde::{Deserialize, Serialize};

/// Engine configuration.
///
/// ## Example
///
/// ```
/// use card_battle::battle::BattleConfig;
///
/// let config = BattleConfig::default()
///     .with_initial_hand_size(5)
///     .with_turn_time_limit(10.0);
/// assert_eq!(config.deck_size, 30);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Deck size when no catalog drives composition.
    pub deck_size: u32,

    /// Cards dealt to each seat at game start.
    pub initial_hand_size: usize,

    /// Per-turn time limit in seconds.
    pub turn_time_limit: f32,

    /// Seat played by the engine's policy, if any. `None` for two humans.
    pub ai_seat: Option<Seat>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            deck_size: 30,
            initial_hand_size: 10,
            turn_time_limit: 5.0,
            ai_seat: Some(Seat::Player1),
        }
    }
}

impl BattleConfig {
    /// Set the default deck size (builder pattern).
    #[must_use]
    pub fn with_deck_size(mut self, size: u32) -> Self {
        self.deck_size = size;
        self
    }

    /// Set the opening hand size (builder pattern).
    #[must_use]
    pub fn with_initial_hand_size(mut self, size: usize) -> Self {
        self.initial_hand_size = size;
        self
    }

    /// Set the per-turn time limit in seconds (builder pattern).
    #[must_use]
    pub fn with_turn_time_limit(mut self, seconds: f32) -> Self {
        self.turn_time_limit = seconds;
        self
    }

    /// Set which seat the engine plays, or `None` for two humans
    /// (builder pattern).
    #[must_use]
    pub fn with_ai_seat(mut self, seat: Option<Seat>) -> Self {
        self.ai_seat = seat;
        self
    }
}

/// Two-player battle state machine.
///
/// One instance is one match; run several engines for concurrent matches.
/// Presentation layers poll the read-only queries every frame and may
/// subscribe to play events; they never mutate engine state directly.
pub struct BattleEngine {
    config: BattleConfig,
    catalog: Option<CardCatalog>,
    players: SeatMap<PlayerState>,
    policy: Box<dyn PlayPolicy>,
    rng: BattleRng,

    state: BattleState,
    active_seat: Seat,
    remaining_time: f32,

    played: SeatMap<bool>,
    round_cards: SeatMap<Card>,
    history: SeatMap<Vec<Card>>,
    last_round: RoundRecord,
    winner: Option<BattleResult>,

    subscribers: Vec<CardPlayedFn>,
}

impl BattleEngine {
    /// Create an idle engine with the given configuration and RNG seed.
    #[must_use]
    pub fn new(config: BattleConfig, seed: u64) -> Self {
        Self {
            config,
            catalog: None,
            players: SeatMap::new(PlayerState::new),
            policy: Box::new(RandomPolicy),
            rng: BattleRng::new(seed),
            state: BattleState::Idle,
            active_seat: Seat::Player0,
            remaining_time: config.turn_time_limit,
            played: SeatMap::with_value(false),
            round_cards: SeatMap::with_value(Card::NONE),
            history: SeatMap::new(|_| Vec::new()),
            last_round: RoundRecord::default(),
            winner: None,
            subscribers: Vec::new(),
        }
    }

    /// Supply a card catalog for deck composition and scoring.
    ///
    /// Legal only while `Idle`; a running game keeps the table it started
    /// with, so a mid-game call is a logged no-op.
    pub fn set_catalog(&mut self, catalog: CardCatalog) {
        if self.state != BattleState::Idle {
            tracing::warn!("ignored set_catalog: game in progress ({:?})", self.state);
            return;
        }
        self.catalog = Some(catalog);
    }

    /// Replace the play policy for the AI seat.
    pub fn set_policy(&mut self, policy: impl PlayPolicy + 'static) {
        self.policy = Box::new(policy);
    }

    /// Subscribe to card-played notifications.
    ///
    /// Fire-and-forget: subscribers observe plays but cannot affect the
    /// engine.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&CardPlayed) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    // === Commands ===

    /// Start a new game.
    ///
    /// Legal only from `Idle`; otherwise a logged no-op. Deals the opening
    /// hands, picks the first-turn seat uniformly at random, and begins the
    /// first turn (which may include an immediate AI play) before returning.
    pub fn start_game(&mut self) {
        if self.state != BattleState::Idle {
            tracing::warn!("ignored start_game: game already in progress ({:?})", self.state);
            return;
        }

        self.reset_match_state();

        for seat in Seat::ALL {
            let deck = match &self.catalog {
                Some(catalog) => Deck::from_catalog(catalog, &mut self.rng),
                None => Deck::new(self.config.deck_size, &mut self.rng),
            };
            let player = &mut self.players[seat];
            player.set_deck(deck);
            player.draw_to_hand(self.config.initial_hand_size);
        }

        // The first activation flips, so the seat drawn here sits out the
        // opening turn.
        self.active_seat = if self.rng.coin_flip() {
            Seat::Player1
        } else {
            Seat::Player0
        };
        tracing::info!(
            "game started; {} opens, hands {}/{}",
            self.active_seat.opponent(),
            self.players[Seat::Player0].hand().len(),
            self.players[Seat::Player1].hand().len(),
        );

        self.state = BattleState::Started;
        self.go_to_next_turn();
    }

    /// Abandon the current game and return to `Idle`, clearing all state.
    pub fn end_game(&mut self) {
        tracing::info!("game ended externally");
        self.reset_match_state();
    }

    /// Play the card at `index` from `seat`'s hand.
    ///
    /// Ignored unless the engine is waiting on exactly this seat; an
    /// out-of-range index is likewise a no-op and does not consume the turn.
    pub fn player_play_card(&mut self, seat: Seat, index: usize) {
        let BattleState::Waiting(active) = self.state else {
            tracing::warn!("ignored play from {}: state is {:?}", seat, self.state);
            return;
        };
        if seat != active {
            tracing::warn!("ignored play from {}: it is {}'s turn", seat, active);
            return;
        }

        let card = self.players[seat].play_card(index);
        if !card.is_valid() {
            tracing::warn!("ignored play from {}: index {} out of range", seat, index);
            return;
        }

        self.record_play(seat, index, card, false);
        self.after_play();
    }

    /// Advance the turn timer by `delta_seconds`.
    ///
    /// Only ticks while waiting on a seat. Expiry clamps the timer to zero
    /// and forces a uniformly random play from the active seat.
    pub fn tick(&mut self, delta_seconds: f32) {
        if self.state.is_waiting() {
            self.handle_turn_timer(delta_seconds);
        }
    }

    // === Queries (read-only, safe to poll every frame) ===

    /// Current state of the battle state machine.
    #[must_use]
    pub fn state(&self) -> BattleState {
        self.state
    }

    /// The seat whose turn it currently is.
    #[must_use]
    pub fn active_seat(&self) -> Seat {
        self.active_seat
    }

    /// A seat's hand, in draw order.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Card] {
        self.players[seat].hand()
    }

    /// A seat's cumulative score.
    #[must_use]
    pub fn score(&self, seat: Seat) -> i32 {
        self.players[seat].score()
    }

    /// Remaining turn time in seconds, clamped to ≥ 0.
    #[must_use]
    pub fn remaining_turn_time(&self) -> f32 {
        self.remaining_time.max(0.0)
    }

    /// The card a seat has played this round, or the sentinel.
    #[must_use]
    pub fn round_card(&self, seat: Seat) -> Card {
        self.round_cards[seat]
    }

    /// Whether a seat has played this round.
    #[must_use]
    pub fn has_played(&self, seat: Seat) -> bool {
        self.played[seat]
    }

    /// Every card a seat has played this game, in play order.
    #[must_use]
    pub fn played_history(&self, seat: Seat) -> &[Card] {
        &self.history[seat]
    }

    /// The most recently completed round.
    #[must_use]
    pub fn last_round(&self) -> &RoundRecord {
        &self.last_round
    }

    /// Match result. `Some` only once the state is `GameOver`.
    #[must_use]
    pub fn winner(&self) -> Option<BattleResult> {
        self.winner
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// The supplied card catalog, if any.
    #[must_use]
    pub fn catalog(&self) -> Option<&CardCatalog> {
        self.catalog.as_ref()
    }

    // === State machine internals ===

    fn reset_match_state(&mut self) {
        for seat in Seat::ALL {
            self.players[seat].reset_score();
            self.players[seat].clear_hand();
            self.history[seat].clear();
        }
        self.state = BattleState::Idle;
        self.active_seat = Seat::Player0;
        self.remaining_time = self.config.turn_time_limit;
        self.played = SeatMap::with_value(false);
        self.round_cards = SeatMap::with_value(Card::NONE);
        self.last_round = RoundRecord::default();
        self.winner = None;
    }

    /// Begin a new round: strict ping-pong seat flip, fresh round flags.
    fn go_to_next_turn(&mut self) {
        let next = self.active_seat.opponent();
        self.played = SeatMap::with_value(false);
        self.round_cards = SeatMap::with_value(Card::NONE);

        // Zero-card games end before any turn is waited on.
        if self.check_game_over() {
            self.finish_game();
            return;
        }

        self.activate(next);
    }

    /// Make `seat` the active seat and start its turn.
    fn activate(&mut self, seat: Seat) {
        self.active_seat = seat;
        self.state = BattleState::Waiting(seat);
        self.remaining_time = self.config.turn_time_limit;

        // A seat with no cards left auto-passes (its round card stays the
        // sentinel) so rounds keep completing until both hands are empty.
        if !self.players[seat].has_cards() {
            tracing::debug!("{} has no cards; auto-pass", seat);
            self.played[seat] = true;
            self.after_play();
            return;
        }

        if self.config.ai_seat == Some(seat) {
            self.ai_play();
        }
    }

    /// Shared continuation after any play (human, AI, forced, or pass).
    fn after_play(&mut self) {
        if self.played[Seat::Player0] && self.played[Seat::Player1] {
            self.resolve_round();
            if self.check_game_over() {
                self.finish_game();
            } else {
                self.go_to_next_turn();
            }
        } else {
            self.activate(self.active_seat.opponent());
        }
    }

    /// Record a successful play: round card, flag, score, history, event.
    fn record_play(&mut self, seat: Seat, hand_index: usize, card: Card, forced: bool) {
        self.round_cards[seat] = card;
        self.played[seat] = true;

        let points = self.card_power(card.rank());
        self.players[seat].add_score(points);
        self.history[seat].push(card);

        tracing::debug!(
            "{} played {} worth {} points (score now {}){}",
            seat,
            card,
            points,
            self.players[seat].score(),
            if forced { ", forced by timer" } else { "" },
        );

        let event = CardPlayed {
            seat,
            hand_index,
            card,
            forced,
        };
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }

    fn ai_play(&mut self) {
        let seat = self.active_seat;
        let Self {
            policy,
            players,
            rng,
            ..
        } = self;

        let Some(index) = policy.choose_index(players[seat].hand(), rng) else {
            // An abstaining policy leaves the turn to the timer.
            return;
        };

        let card = self.players[seat].play_card(index);
        if !card.is_valid() {
            tracing::warn!("policy chose out-of-range index {} for {}", index, seat);
            return;
        }

        self.record_play(seat, index, card, false);
        self.after_play();
    }

    fn handle_turn_timer(&mut self, delta_seconds: f32) {
        self.remaining_time -= delta_seconds;
        if self.remaining_time > 0.0 {
            return;
        }
        self.remaining_time = 0.0;

        let seat = self.active_seat;
        tracing::info!("{} ran out of time; forcing a random play", seat);

        let Self { players, rng, .. } = self;
        match players[seat].play_card_random(rng) {
            Some((index, card)) => {
                self.record_play(seat, index, card, true);
                self.after_play();
            }
            // Empty hand: no round progress until something else changes.
            None => {}
        }
    }

    fn resolve_round(&mut self) {
        // Cumulative scoring: both seats already scored their own card, so
        // no per-round winner is judged.
        self.last_round = RoundRecord {
            cards: self.round_cards.clone(),
            winner: None,
        };
        tracing::info!(
            "round resolved: {} vs {}; scores {}/{}",
            self.round_cards[Seat::Player0],
            self.round_cards[Seat::Player1],
            self.players[Seat::Player0].score(),
            self.players[Seat::Player1].score(),
        );
    }

    fn check_game_over(&self) -> bool {
        !self.players[Seat::Player0].has_cards() && !self.players[Seat::Player1].has_cards()
    }

    fn finish_game(&mut self) {
        let result = BattleResult::from_scores(
            self.players[Seat::Player0].score(),
            self.players[Seat::Player1].score(),
        );
        tracing::info!(
            "game over: scores {}/{}, result {:?}",
            self.players[Seat::Player0].score(),
            self.players[Seat::Player1].score(),
            result,
        );
        self.winner = Some(result);
        self.state = BattleState::GameOver;
    }

    /// What a play of `rank` is worth.
    ///
    /// No catalog: the raw rank. With a catalog: the row's power, or zero
    /// when the catalog has no row for the rank.
    fn card_power(&self, rank: u32) -> i32 {
        match &self.catalog {
            None => rank as i32,
            Some(catalog) => catalog.power(rank).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = BattleConfig::default();
        assert_eq!(config.deck_size, 30);
        assert_eq!(config.initial_hand_size, 10);
        assert_eq!(config.ai_seat, Some(Seat::Player1));
    }

    #[test]
    fn test_config_builders() {
        let config = BattleConfig::default()
            .with_deck_size(12)
            .with_initial_hand_size(4)
            .with_turn_time_limit(0.5)
            .with_ai_seat(None);

        assert_eq!(config.deck_size, 12);
        assert_eq!(config.initial_hand_size, 4);
        assert_eq!(config.turn_time_limit, 0.5);
        assert_eq!(config.ai_seat, None);
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = BattleEngine::new(BattleConfig::default(), 42);
        assert_eq!(engine.state(), BattleState::Idle);
        assert_eq!(engine.winner(), None);
        assert!(engine.hand(Seat::Player0).is_empty());
        assert!(engine.hand(Seat::Player1).is_empty());
    }

    #[test]
    fn test_start_game_deals_hands() {
        let config = BattleConfig::default().with_ai_seat(None);
        let mut engine = BattleEngine::new(config, 42);
        engine.start_game();

        assert!(engine.state().is_waiting());
        assert_eq!(engine.hand(Seat::Player0).len(), 10);
        assert_eq!(engine.hand(Seat::Player1).len(), 10);
        assert_eq!(engine.score(Seat::Player0), 0);
        assert_eq!(engine.score(Seat::Player1), 0);
    }

    #[test]
    fn test_start_game_twice_is_noop() {
        let config = BattleConfig::default().with_ai_seat(None);
        let mut engine = BattleEngine::new(config, 42);
        engine.start_game();

        let hand_before: Vec<Card> = engine.hand(Seat::Player0).to_vec();
        let active_before = engine.active_seat();

        engine.start_game();

        assert_eq!(engine.hand(Seat::Player0), hand_before.as_slice());
        assert_eq!(engine.active_seat(), active_before);
    }

    #[test]
    fn test_end_game_returns_to_idle() {
        let mut engine = BattleEngine::new(BattleConfig::default(), 42);
        engine.start_game();
        engine.end_game();

        assert_eq!(engine.state(), BattleState::Idle);
        assert!(engine.hand(Seat::Player0).is_empty());
        assert_eq!(engine.score(Seat::Player0), 0);
        assert!(engine.played_history(Seat::Player0).is_empty());
    }

    #[test]
    fn test_zero_hand_game_ends_immediately_in_draw() {
        let config = BattleConfig::default().with_initial_hand_size(0);
        let mut engine = BattleEngine::new(config, 42);
        engine.start_game();

        assert_eq!(engine.state(), BattleState::GameOver);
        assert_eq!(engine.winner(), Some(BattleResult::Draw));
    }

    #[test]
    fn test_play_ignored_when_idle() {
        let mut engine = BattleEngine::new(BattleConfig::default(), 42);
        engine.player_play_card(Seat::Player0, 0);
        assert_eq!(engine.state(), BattleState::Idle);
    }
}
