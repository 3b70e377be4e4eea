//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Indices are 0-based and stable for the
//! lifetime of a game; turn order is index order.
//!
//! ## Player
//!
//! Per-player record: hand, tower steps, and the per-turn swap budget.
//! Public-diamond ownership is *not* stored here; the overlay map on
//! [`GameState`](super::state::GameState) is the single source of truth.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier; also this player's seat in turn order.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Cards held. Front = oldest held; engine-chosen discards take the
    /// front. Revealed diamonds stay in the hand (see the diamonds module).
    pub hand: Vec<Card>,

    /// Tower height. Never drops below the rule table's floor.
    pub steps: u32,

    /// Whether this player has spent their swap budget this turn.
    pub used_swap_this_turn: bool,
}

impl Player {
    /// Create a player with an empty hand at the tower floor.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            steps: 0,
            used_swap_this_turn: false,
        }
    }

    /// Number of cards held.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Whether the hand holds at least one copy of `card`.
    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Remove one copy of `card` from the hand.
    ///
    /// Multiset semantics: with two decks the hand can hold duplicates and
    /// exactly one copy is consumed. Returns false if no copy is held.
    pub fn remove_card(&mut self, card: Card) -> bool {
        if let Some(pos) = self.hand.iter().position(|&c| c == card) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }
}
