//! Turn state machine and engine facade.
//!
//! [`Game`] owns the state and the rule table and is the only mutation
//! surface clients get: every operation validates the acting player and
//! the phase, applies atomically, appends to the history, and runs the
//! victory check. UIs and bots read through [`Game::state`].

mod game;

pub use game::{EmptyHandPenalty, Game, SkipOutcome, TurnOutcome};
