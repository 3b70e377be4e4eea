//! Shared effect application: step awards and king discard triggers.
//!
//! Every step change in the game funnels through [`award_steps`], which
//! clamps at the tower floor. Every trigger-bearing discard funnels through
//! the `discard_*_with_king` helpers, which move the card and fire the
//! king trigger but leave hoarding evaluation to the caller (the hoarding
//! penalty itself dumps cards through these helpers and must not recurse).
//!
//! ## King triggers
//!
//! A king leaving a hand for the discard pile hurts or helps its holder,
//! by suit: black kings cost steps, the heart king grants steps, the
//! diamond king draws cards. Triggers fire on combo effect-discards,
//! command-forced discards, skip-cycle discards, and hoarding dumps. They
//! never fire on played combo cards or on command cost payment (spends).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Card, GameState, PlayerId, Suit};
use crate::deck::DrawOutcome;
use crate::error::GameError;
use crate::rules::RuleTable;

/// A king discard trigger that fired, with its applied effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KingTrigger {
    /// Black king: the holder lost steps.
    Black { card: Card, steps_delta: i32 },
    /// Heart king: the holder gained steps.
    Heart { card: Card, steps_delta: i32 },
    /// Diamond king: the holder drew cards.
    Diamond { card: Card, drawn: DrawOutcome },
}

/// Apply a step delta to a player, clamped at the tower floor.
///
/// Returns the delta actually applied (a negative delta that would sink
/// below the floor is cut short, not banked).
pub(crate) fn award_steps(
    state: &mut GameState,
    rules: &RuleTable,
    player: PlayerId,
    delta: i32,
) -> i32 {
    let floor = i64::from(rules.victory.floor_steps);
    let before = i64::from(state.player(player).steps);
    let after = (before + i64::from(delta)).max(floor);
    state.player_mut(player).steps = after as u32;

    let applied = (after - before) as i32;
    if applied != 0 {
        debug!(%player, delta = applied, steps = after, "steps changed");
    }
    applied
}

/// Fire the king trigger for a card just discarded by `holder`, if any.
fn king_discard_trigger(
    state: &mut GameState,
    rules: &RuleTable,
    holder: PlayerId,
    card: Card,
) -> Option<KingTrigger> {
    if !card.is_king() {
        return None;
    }
    let trigger = match card.suit {
        Suit::Spades | Suit::Clubs => KingTrigger::Black {
            card,
            steps_delta: award_steps(state, rules, holder, rules.kings.black_steps),
        },
        Suit::Hearts => KingTrigger::Heart {
            card,
            steps_delta: award_steps(state, rules, holder, rules.kings.heart_steps),
        },
        Suit::Diamonds => KingTrigger::Diamond {
            card,
            drawn: state.draw_into_hand(
                holder,
                rules.kings.diamond_draw,
                rules.deck.keep_top_discard_on_reshuffle,
            ),
        },
    };
    debug!(%holder, %card, "king discard trigger");
    Some(trigger)
}

/// Discard the holder's oldest held card and fire its king trigger.
///
/// Returns `None` if the hand is empty. Hoarding is the caller's job.
pub(crate) fn discard_front_with_king(
    state: &mut GameState,
    rules: &RuleTable,
    holder: PlayerId,
) -> Option<(Card, Option<KingTrigger>)> {
    let card = state.discard_front(holder)?;
    let trigger = king_discard_trigger(state, rules, holder, card);
    Some((card, trigger))
}

/// Discard a chosen card from the holder's hand and fire its king trigger.
///
/// Hoarding is the caller's job. Errors with `CardNotInHand` before any
/// mutation.
pub(crate) fn discard_chosen_with_king(
    state: &mut GameState,
    rules: &RuleTable,
    holder: PlayerId,
    card: Card,
) -> Result<Option<KingTrigger>, GameError> {
    state.discard_spent(holder, card)?;
    Ok(king_discard_trigger(state, rules, holder, card))
}
