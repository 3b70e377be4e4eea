//! # tower-clash
//!
//! A rules engine for Tower Clash, a 2-4 player card game: race your
//! tower to 20 steps by playing same-rank suit combos, discarding kings,
//! and working the public-diamond economy.
//!
//! ## Design Principles
//!
//! 1. **Rules as data**: Scoring, penalties, and thresholds live in a
//!    [`RuleTable`] (built in, or loaded from JSON); the engine only
//!    interprets it.
//!
//! 2. **One mutation surface**: [`Game`] validates every operation against
//!    the acting player and turn phase. Everything else reads state
//!    through accessors.
//!
//! 3. **Deterministic games**: Every shuffle comes from a seeded
//!    [`GameRng`], so a seed plus an action sequence replays
//!    bit-identically.
//!
//! ## Architecture
//!
//! - **Ownership overlay**: Public diamonds are a `Card -> PlayerId` map
//!   over hands, not a zone. Reveal and swap never move cards.
//!
//! - **Persistent history**: The action log is an `im::Vector`; snapshots
//!   share structure instead of copying.
//!
//! - **Outcome structs**: Every operation reports exactly what it did
//!   (steps, triggers, draws, penalties) for UIs, bots, and logs.
//!
//! ## Modules
//!
//! - `core`: Cards, players, RNG, game state, action records
//! - `rules`: Combo patterns, the rule table, JSON loader
//! - `deck`: Draw/discard piles, reshuffling, dealing
//! - `effects`: Step awards and king discard triggers
//! - `combo`: Combo detection and resolution
//! - `diamonds`: Reveal, swap, command, jackpot, hoarding
//! - `engine`: Turn state machine and the `Game` facade
//! - `bot`: Greedy reference client
//! - `error`: The `GameError` taxonomy

pub mod bot;
pub mod combo;
pub mod core;
pub mod deck;
pub mod diamonds;
pub mod effects;
pub mod engine;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    standard_deck, ActionRecord, Card, GameRng, GameRngState, GameState, Phase, Player,
    PlayerAction, PlayerId, Rank, Suit, DECK_SIZE,
};

pub use crate::rules::{ComboDefinition, ComboPattern, RuleTable};

pub use crate::deck::DrawOutcome;

pub use crate::effects::KingTrigger;

pub use crate::combo::{find_combos, identify_combo, ComboCandidate, ComboResult};

pub use crate::diamonds::{
    CommandOutcome, CommandRider, HoardingOutcome, JackpotOutcome, SwapOutcome,
};

pub use crate::engine::{EmptyHandPenalty, Game, SkipOutcome, TurnOutcome};

pub use crate::bot::GreedyBot;

pub use crate::error::GameError;
