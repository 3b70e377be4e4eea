//! Error taxonomy.
//!
//! Every rejected operation reports one [`GameError`]. All variants are
//! recoverable (the caller picks another action) except `InvalidConfig`,
//! which rejects a rule table outright.
//!
//! Deck exhaustion is deliberately *not* here: running the piles dry is a
//! normal outcome, reported through
//! [`DrawOutcome`](crate::deck::DrawOutcome), and partial draws stand.

use thiserror::Error;

use crate::core::{Card, PlayerId};

/// Why an operation was rejected.
///
/// Operations validate before mutating: an `Err` means the state is exactly
/// as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Wrong phase, wrong player, bad target, or the game is over.
    #[error("invalid action: {reason}")]
    InvalidAction { reason: String },

    /// The card subset is empty, mixes ranks, or matches no combo pattern.
    #[error("invalid combo: {reason}")]
    InvalidCombo { reason: String },

    /// A named card is not in the player's hand.
    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: Card },

    /// A public diamond is owned by someone else, or the player owns no
    /// diamond to trade away.
    #[error("{player} does not own public diamond {card}")]
    DiamondNotOwned { player: PlayerId, card: Card },

    /// The card is not on the public diamond row.
    #[error("{card} is not a public diamond")]
    DiamondNotPublic { card: Card },

    /// A command was issued while owning zero public diamonds.
    #[error("{player} owns no public diamonds to spend")]
    InsufficientDiamonds { player: PlayerId },

    /// The per-turn swap budget is already spent.
    #[error("{player} already swapped this turn")]
    SwapAlreadyUsed { player: PlayerId },

    /// The rule table failed validation. Fatal: no game can start from it.
    #[error("invalid rule table: {reason}")]
    InvalidConfig { reason: String },
}

impl GameError {
    pub(crate) fn invalid_action(reason: impl Into<String>) -> Self {
        Self::InvalidAction {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_combo(reason: impl Into<String>) -> Self {
        Self::InvalidCombo {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    #[test]
    fn test_display_messages() {
        let err = GameError::CardNotInHand {
            player: PlayerId::new(1),
            card: Card::new(Suit::Diamonds, Rank::King),
        };
        assert_eq!(err.to_string(), "K♦ is not in Player 1's hand");

        let err = GameError::invalid_action("draw phase not complete");
        assert_eq!(err.to_string(), "invalid action: draw phase not complete");

        let err = GameError::InsufficientDiamonds {
            player: PlayerId::new(0),
        };
        assert_eq!(err.to_string(), "Player 0 owns no public diamonds to spend");
    }
}
