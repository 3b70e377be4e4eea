//! Combo resolution: validate, then apply the payout in one pass.
//!
//! Resolution is atomic. Every check runs before the first mutation, so a
//! rejected play leaves the state untouched. The apply order is fixed:
//! played cards leave the hand, steps are awarded (King plays double a
//! positive delta when the combo allows it), forced discards run with king
//! triggers and hoarding, effect draws run, and finally the played cards
//! land on the discard pile. The landing is silent; playing a king is not
//! a discard and fires no trigger.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::detect::identify_combo;
use crate::core::{Card, GameState, PlayerId, Rank};
use crate::deck::DrawOutcome;
use crate::diamonds::{hoarding_check, HoardingOutcome};
use crate::effects::{award_steps, discard_front_with_king, KingTrigger};
use crate::error::GameError;
use crate::rules::RuleTable;

/// Everything a resolved combo did to the state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboResult {
    /// Which table entry scored.
    pub combo_id: String,
    /// Step delta actually applied, after doubling and floor clamping.
    pub steps_delta: i32,
    /// Whether a King-rank play doubled the delta.
    pub doubled: bool,
    /// The cards played, now on the discard pile.
    pub played: SmallVec<[Card; 4]>,
    /// Forced effect discards, in discard order.
    pub discarded: Vec<Card>,
    /// King triggers fired by the forced discards.
    pub king_triggers: Vec<KingTrigger>,
    /// Hoarding penalties set off by the forced discards.
    pub hoarding: Vec<HoardingOutcome>,
    /// Effect draw.
    pub drawn: DrawOutcome,
}

fn check_multiset_in_hand(
    hand: &[Card],
    played: &[Card],
    player: PlayerId,
) -> Result<(), GameError> {
    for &card in played {
        let need = played.iter().filter(|&&c| c == card).count();
        let have = hand.iter().filter(|&&c| c == card).count();
        if have < need {
            return Err(GameError::CardNotInHand { player, card });
        }
    }
    Ok(())
}

/// Play a same-rank subset as a combo.
///
/// Duplicate physical cards count as a multiset: playing two copies of one
/// card requires the hand to hold two copies.
pub(crate) fn resolve_combo(
    state: &mut GameState,
    rules: &RuleTable,
    player: PlayerId,
    cards: &[Card],
) -> Result<ComboResult, GameError> {
    check_multiset_in_hand(state.hand(player), cards, player)?;
    let def = identify_combo(cards, rules)?;
    let combo_id = def.id.clone();
    let (base, draw_count, discard_count) = (def.steps_delta, def.draw_count, def.discard_count);
    let doubled = def.doubled_if_king && base > 0 && cards[0].rank == Rank::King;

    // Validated; from here on every step applies.
    let played: SmallVec<[Card; 4]> = cards.iter().copied().collect();
    for &card in &played {
        let removed = state.player_mut(player).remove_card(card);
        debug_assert!(removed);
        state.public_diamonds.remove(&card);
    }

    let delta = if doubled { base * 2 } else { base };
    let steps_delta = award_steps(state, rules, player, delta);

    let mut discarded = Vec::new();
    let mut king_triggers = Vec::new();
    let mut hoarding = Vec::new();
    for _ in 0..discard_count {
        let Some((card, trigger)) = discard_front_with_king(state, rules, player) else {
            break;
        };
        discarded.push(card);
        if let Some(t) = trigger {
            king_triggers.push(t);
        }
        if let Some(h) = hoarding_check(state, rules, player, card) {
            hoarding.push(h);
        }
    }

    let drawn = state.draw_into_hand(player, draw_count, rules.deck.keep_top_discard_on_reshuffle);

    for &card in &played {
        state.discard_pile.push(card);
    }

    debug!(
        %player,
        combo = %combo_id,
        steps = steps_delta,
        doubled,
        "combo resolved"
    );
    Ok(ComboResult {
        combo_id,
        steps_delta,
        doubled,
        played,
        discarded,
        king_triggers,
        hoarding,
        drawn,
    })
}
