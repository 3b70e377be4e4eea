//! Deck and hand management.
//!
//! Card movement primitives on [`GameState`]: drawing with automatic
//! reshuffle, spend-discards, the opening deal. Both piles are stacks with
//! the top at the end of the vec.
//!
//! Policy side effects (king triggers, hoarding) are *not* applied here;
//! the engine layers them on top of these primitives. What is enforced
//! here, unconditionally, is the overlay invariant: any card leaving a
//! hand drops its public-diamond entry.
//!
//! Running the piles dry is a normal outcome, not an error. A draw that
//! cannot be satisfied stops early and reports `exhausted`; the cards that
//! were drawn stay drawn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use crate::core::{Card, GameState, PlayerId};
use crate::error::GameError;

/// Result of a draw request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOutcome {
    /// Cards added to the hand, in draw order.
    pub drawn: SmallVec<[Card; 4]>,
    /// True if the request could not be fully satisfied: both piles ran
    /// dry. Partial draws stand.
    pub exhausted: bool,
}

impl DrawOutcome {
    /// Number of cards actually drawn.
    #[must_use]
    pub fn count(&self) -> usize {
        self.drawn.len()
    }
}

impl GameState {
    /// Draw up to `count` cards into a player's hand.
    ///
    /// When the draw pile empties mid-draw the discard pile is reshuffled
    /// in (`keep_top_discard` leaves the top discard behind as the new
    /// discard seed) and drawing continues. If both piles are empty the
    /// draw stops early with `exhausted` set.
    pub fn draw_into_hand(
        &mut self,
        player: PlayerId,
        count: u32,
        keep_top_discard: bool,
    ) -> DrawOutcome {
        let mut outcome = DrawOutcome::default();

        for _ in 0..count {
            if self.draw_pile.is_empty() {
                self.reshuffle_discard(keep_top_discard);
            }
            let Some(card) = self.draw_pile.pop() else {
                outcome.exhausted = true;
                break;
            };
            self.players[player.index()].hand.push(card);
            outcome.drawn.push(card);
        }

        if outcome.exhausted {
            warn!(
                %player,
                requested = count,
                drawn = outcome.drawn.len(),
                "draw and discard piles exhausted"
            );
        }
        outcome
    }

    /// Shuffle the discard pile into the draw pile.
    ///
    /// With `keep_top` the top discard stays behind so the discard pile is
    /// never visually reset to nothing mid-game. No-op when there is
    /// nothing to move.
    pub fn reshuffle_discard(&mut self, keep_top: bool) {
        let kept = if keep_top { self.discard_pile.pop() } else { None };
        if !self.discard_pile.is_empty() {
            self.draw_pile.append(&mut self.discard_pile);
            self.rng.shuffle(&mut self.draw_pile);
        }
        if let Some(card) = kept {
            self.discard_pile.push(card);
        }
    }

    /// Discard a specific card from a player's hand with no side effects.
    ///
    /// Used for played combo cards and command cost payment: no king
    /// trigger, no hoarding. One copy is consumed (multiset semantics).
    pub fn discard_spent(&mut self, player: PlayerId, card: Card) -> Result<(), GameError> {
        if !self.players[player.index()].remove_card(card) {
            return Err(GameError::CardNotInHand { player, card });
        }
        self.clear_public(card);
        self.discard_pile.push(card);
        Ok(())
    }

    /// Discard the oldest held card (hand front), if any.
    ///
    /// This is the engine-chosen discard used by combo effects, commands,
    /// and penalties. Trigger processing is the caller's job.
    pub(crate) fn discard_front(&mut self, player: PlayerId) -> Option<Card> {
        let hand = &mut self.players[player.index()].hand;
        if hand.is_empty() {
            return None;
        }
        let card = hand.remove(0);
        self.clear_public(card);
        self.discard_pile.push(card);
        Some(card)
    }

    /// Deal the opening hands, round-robin from player 0.
    pub fn deal_initial(&mut self, hand_size: usize) {
        for _ in 0..hand_size {
            for i in 0..self.players.len() {
                if let Some(card) = self.draw_pile.pop() {
                    self.players[i].hand.push(card);
                }
            }
        }
    }

    /// First player (in turn order) holding a copy of `card`.
    pub(crate) fn holder_of(&self, card: Card) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|p| p.holds(card))
            .map(|p| p.id)
    }

    /// Discard a public diamond from whichever hand holds it, with no side
    /// effects (spend semantics). Returns the holder, or `None` if no hand
    /// holds the card.
    pub(crate) fn discard_public(&mut self, card: Card) -> Option<PlayerId> {
        let holder = self.holder_of(card)?;
        self.players[holder.index()].remove_card(card);
        self.clear_public(card);
        self.discard_pile.push(card);
        Some(holder)
    }
}
