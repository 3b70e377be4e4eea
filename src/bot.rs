//! A greedy bot client.
//!
//! Drives a [`Game`] through the public API exactly as an external AI
//! would: draw, play the best-paying combo until nothing scores, end the
//! turn. Deterministic for a given game, so seeded bot-vs-bot games are
//! reproducible end to end. The integration tests use it to run whole
//! games; it also serves as a usage demo for the engine API.

use std::cmp::Reverse;

use smallvec::SmallVec;
use tracing::debug;

use crate::combo::find_combos;
use crate::core::{Card, PlayerId};
use crate::engine::{Game, TurnOutcome};
use crate::error::GameError;
use crate::rules::RuleTable;

/// Plays per turn cap, so a degenerate rule table cannot spin forever.
const MAX_PLAYS_PER_TURN: usize = 32;

/// Best playable subset in a hand: highest step payout, then draw count,
/// then fewer cards spent.
fn best_combo(hand: &[Card], rules: &RuleTable) -> Option<SmallVec<[Card; 4]>> {
    find_combos(hand, rules)
        .into_iter()
        .max_by_key(|c| {
            (
                c.definition.steps_delta,
                c.definition.draw_count,
                Reverse(c.cards.len()),
            )
        })
        .map(|c| c.cards)
}

/// Greedy policy over the engine's public API.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyBot;

impl GreedyBot {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Take one full turn for the current player.
    ///
    /// Returns `Ok(None)` when a play ends the game mid-turn (the turn no
    /// longer ends normally). The game must be in its Draw phase.
    pub fn take_turn(&self, game: &mut Game) -> Result<Option<TurnOutcome>, GameError> {
        let player = game.current_player();
        game.draw(player)?;

        for _ in 0..MAX_PLAYS_PER_TURN {
            if game.winner().is_some() {
                return Ok(None);
            }
            let Some(cards) = best_combo(game.state().hand(player), game.rules()) else {
                break;
            };
            let result = game.play_combo(player, &cards)?;
            debug!(%player, combo = %result.combo_id, steps = result.steps_delta, "bot played");
        }

        if game.winner().is_some() {
            return Ok(None);
        }
        game.end_turn(player).map(Some)
    }

    /// Run turns until someone wins or `max_turns` elapse.
    pub fn play_game(&self, game: &mut Game, max_turns: u32) -> Result<Option<PlayerId>, GameError> {
        for _ in 0..max_turns {
            if game.winner().is_some() {
                break;
            }
            self.take_turn(game)?;
        }
        Ok(game.winner())
    }
}
