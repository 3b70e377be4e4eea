//! Core engine types: cards, players, state, action records, RNG.
//!
//! This module contains the fundamental building blocks. Game policy
//! (scoring, penalties, thresholds) lives in the rule table, never here.

pub mod action;
pub mod card;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, PlayerAction};
pub use card::{standard_deck, Card, Rank, Suit, DECK_SIZE};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase};
