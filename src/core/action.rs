//! Action records for the game history.
//!
//! Every applied operation appends one [`ActionRecord`] to the state's
//! history. The history is append-only and lives in an `im::Vector`, so
//! state snapshots share structure instead of copying it. Clients use it
//! for replay, logging, and spectator feeds.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::player::PlayerId;

/// An applied player action, as recorded in the history.
///
/// Records describe *intent* (what the player asked for). The full outcome
/// of an operation is returned to the caller, not stored here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Turn-start draw.
    Draw { count: u8 },
    /// A combo played from hand.
    PlayCombo {
        combo_id: String,
        cards: SmallVec<[Card; 4]>,
    },
    /// Public-diamond ownership swap.
    DiamondSwap { taken: Card, given: Card },
    /// A diamond spent to force a discard.
    DiamondCommand { cost: Card, target: PlayerId },
    /// Voluntary discard-then-draw cycle.
    SkipCycle { discarded: Card },
    /// End of turn.
    EndTurn,
}

/// One entry in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Turn number the action was applied on (starts at 1).
    pub turn: u32,

    /// The acting player.
    pub player: PlayerId,

    /// What they did.
    pub action: PlayerAction,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(turn: u32, player: PlayerId, action: PlayerAction) -> Self {
        Self {
            turn,
            player,
            action,
        }
    }
}
