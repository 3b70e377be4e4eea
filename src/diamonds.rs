//! The diamond economy: reveal, swap, command, jackpot, hoarding.
//!
//! Public diamonds are an *ownership overlay*, not a zone. The state maps
//! `Card -> PlayerId`; the card itself stays in whatever hand holds it, so
//! a revealed diamond remains playable in combos. Ownership changes via
//! reveal (insert), swap (value change), and card departure (entry drop).
//! Because the overlay is card-keyed, in a double-deck game both copies of
//! one diamond share a single public entry: reveal inserts if absent, and
//! either copy leaving a hand drops the entry.
//!
//! Turn-machine wiring: reveal runs automatically at end of turn, the
//! jackpot check follows it (reveal is the only operation that grows the
//! pool), and hoarding is evaluated immediately after any triggering
//! discard.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Card, GameState, PlayerId};
use crate::deck::DrawOutcome;
use crate::effects::{award_steps, discard_front_with_king, KingTrigger};
use crate::error::GameError;
use crate::rules::RuleTable;

/// Result of a diamond ownership swap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOutcome {
    /// The diamond the actor now owns.
    pub taken: Card,
    /// The diamond handed to the previous owner in exchange.
    pub given: Card,
    /// The previous owner of `taken` (new owner of `given`).
    pub other: PlayerId,
}

/// Suit rider applied to a command's target, decided by the forced card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandRider {
    /// Forced card was black: target lost steps.
    Black { steps_delta: i32 },
    /// Forced card was a heart: target gained steps.
    Heart { steps_delta: i32 },
    /// Forced card was a diamond in the early game: target drew cards.
    DiamondDraw { drawn: DrawOutcome },
}

/// Result of a diamond command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    /// The diamond spent, discarded from its holder's hand.
    pub cost: Card,
    /// The commanded player.
    pub target: PlayerId,
    /// The card the target was forced to discard. `None` when the target's
    /// hand was empty (the cost is still paid).
    pub discarded: Option<Card>,
    /// King trigger fired by the forced discard, if any.
    pub king_trigger: Option<KingTrigger>,
    /// Suit rider applied to the target, if any.
    pub rider: Option<CommandRider>,
    /// Hoarding penalty the forced discard set off, if any.
    pub hoarding: Option<HoardingOutcome>,
}

/// Result of a jackpot firing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JackpotOutcome {
    /// The rewarded player (whoever's action filled the pool).
    pub player: PlayerId,
    /// Steps awarded.
    pub steps_delta: i32,
    /// Public diamonds pulled from hands and shuffled into the draw pile.
    pub returned: Vec<Card>,
}

/// Result of a hoarding penalty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoardingOutcome {
    /// The penalized player.
    pub player: PlayerId,
    /// Hand cards force-discarded, in discard order. Includes cards drawn
    /// mid-dump by diamond-king triggers.
    pub dumped: Vec<Card>,
    /// King triggers fired by the dump.
    pub king_triggers: Vec<KingTrigger>,
    /// Owned public diamonds discarded out of other hands.
    pub public_discarded: Vec<Card>,
    /// Steps lost (clamped at the floor).
    pub steps_delta: i32,
    /// Refill draw after the dump.
    pub refill: DrawOutcome,
}

/// Make every diamond in the player's hand public, owned by that player.
///
/// Cards already on the row keep their current owner; re-reveal never
/// resets ownership (otherwise every swap would be undone a turn later).
/// Returns the newly revealed cards in hand order.
pub(crate) fn reveal_diamonds(state: &mut GameState, player: PlayerId) -> Vec<Card> {
    let diamonds: Vec<Card> = state
        .player(player)
        .hand
        .iter()
        .copied()
        .filter(|c| c.is_diamond())
        .collect();

    let mut revealed = Vec::new();
    for card in diamonds {
        if state.public_owner(card).is_none() {
            state.public_diamonds.insert(card, player);
            revealed.push(card);
        }
    }
    if !revealed.is_empty() {
        debug!(%player, count = revealed.len(), "diamonds revealed");
    }
    revealed
}

/// Exchange ownership of a public diamond.
///
/// The actor takes `target_card` and gives their first owned public
/// diamond (card order) to the previous owner. Cards do not move between
/// hands; only the overlay changes.
pub(crate) fn diamond_swap(
    state: &mut GameState,
    rules: &RuleTable,
    player: PlayerId,
    target_card: Card,
) -> Result<SwapOutcome, GameError> {
    if rules.diamonds.swap_limit_per_turn == 0 {
        return Err(GameError::invalid_action("swaps are disabled by the rule table"));
    }
    if state.player(player).used_swap_this_turn {
        return Err(GameError::SwapAlreadyUsed { player });
    }
    let other = state
        .public_owner(target_card)
        .ok_or(GameError::DiamondNotPublic { card: target_card })?;
    if other == player {
        return Err(GameError::invalid_action(format!(
            "{player} already owns {target_card}"
        )));
    }
    let owned = state.owned_diamonds(player);
    let Some(&given) = owned.first() else {
        return Err(GameError::InsufficientDiamonds { player });
    };

    state.public_diamonds.insert(target_card, player);
    state.public_diamonds.insert(given, other);
    state.player_mut(player).used_swap_this_turn = true;

    debug!(%player, taken = %target_card, given = %given, %other, "diamond swap");
    Ok(SwapOutcome {
        taken: target_card,
        given,
        other,
    })
}

/// Spend an owned public diamond to force `target` to discard.
///
/// The cost is a spend (no triggers). The forced discard is the target's
/// oldest held card and fires king triggers, the suit rider, and hoarding,
/// in that order. An empty target hand forces nothing but still costs.
pub(crate) fn diamond_command(
    state: &mut GameState,
    rules: &RuleTable,
    player: PlayerId,
    cost_card: Card,
    target: PlayerId,
) -> Result<CommandOutcome, GameError> {
    if target == player || target.index() >= state.player_count() {
        return Err(GameError::invalid_action(format!(
            "invalid command target {target}"
        )));
    }
    if state.owned_diamonds(player).is_empty() {
        return Err(GameError::InsufficientDiamonds { player });
    }
    match state.public_owner(cost_card) {
        None => return Err(GameError::DiamondNotPublic { card: cost_card }),
        Some(owner) if owner != player => {
            return Err(GameError::DiamondNotOwned {
                player,
                card: cost_card,
            })
        }
        Some(_) => {}
    }
    if state.holder_of(cost_card).is_none() {
        return Err(GameError::DiamondNotPublic { card: cost_card });
    }

    // Validated; apply. Pay the cost first.
    state.discard_public(cost_card);

    let forced = discard_front_with_king(state, rules, target);
    let (discarded, king_trigger) = match forced {
        Some((card, trigger)) => (Some(card), trigger),
        None => (None, None),
    };

    let rider = discarded.and_then(|card| {
        if card.is_black() {
            Some(CommandRider::Black {
                steps_delta: award_steps(state, rules, target, rules.diamonds.command.black_steps),
            })
        } else if card.is_heart() {
            Some(CommandRider::Heart {
                steps_delta: award_steps(state, rules, target, rules.diamonds.command.heart_steps),
            })
        } else if card.is_diamond() && !rules.is_late_game(state.round()) {
            Some(CommandRider::DiamondDraw {
                drawn: state.draw_into_hand(
                    target,
                    rules.diamonds.command.early_diamond_draw,
                    rules.deck.keep_top_discard_on_reshuffle,
                ),
            })
        } else {
            None
        }
    });

    let hoarding = discarded.and_then(|card| hoarding_check(state, rules, target, card));

    debug!(%player, cost = %cost_card, %target, ?discarded, "diamond command");
    Ok(CommandOutcome {
        cost: cost_card,
        target,
        discarded,
        king_trigger,
        rider,
        hoarding,
    })
}

/// Fire the jackpot if the public pool has reached the threshold.
///
/// The beneficiary gains the reward and a redraw follows: every public
/// diamond is pulled from its holder's hand, shuffled into the draw pile,
/// and the overlay is cleared.
pub(crate) fn jackpot_check(
    state: &mut GameState,
    rules: &RuleTable,
    beneficiary: PlayerId,
) -> Option<JackpotOutcome> {
    if state.public_diamonds.len() < rules.diamonds.jackpot.threshold {
        return None;
    }

    let steps_delta = award_steps(state, rules, beneficiary, rules.diamonds.jackpot.reward_steps);

    let cards: Vec<Card> = state.public_diamonds.keys().copied().collect();
    let mut returned = Vec::with_capacity(cards.len());
    for card in cards {
        if let Some(holder) = state.holder_of(card) {
            state.player_mut(holder).remove_card(card);
            state.draw_pile.push(card);
            returned.push(card);
        }
    }
    state.public_diamonds.clear();
    state.rng.shuffle(&mut state.draw_pile);

    info!(%beneficiary, steps = steps_delta, pool = returned.len(), "jackpot");
    Some(JackpotOutcome {
        player: beneficiary,
        steps_delta,
        returned,
    })
}

/// Apply the hoarding penalty if `discarded` warrants it.
///
/// Fires when a diamond is discarded during the late game: the offender's
/// whole hand is dumped (king triggers fire per card), their owned public
/// diamonds are discarded out of whichever hands hold them, they lose
/// steps, and they draw a refill. The dump's own discards never re-enter
/// this check, so the penalty cannot recurse.
pub(crate) fn hoarding_check(
    state: &mut GameState,
    rules: &RuleTable,
    player: PlayerId,
    discarded: Card,
) -> Option<HoardingOutcome> {
    if !discarded.is_diamond() || !rules.is_late_game(state.round()) {
        return None;
    }
    let rule = rules.diamonds.hoarding;

    let mut dumped = Vec::new();
    let mut king_triggers = Vec::new();
    while let Some((card, trigger)) = discard_front_with_king(state, rules, player) {
        dumped.push(card);
        if let Some(t) = trigger {
            king_triggers.push(t);
        }
    }

    let mut public_discarded = Vec::new();
    if rule.discard_owned_public {
        for card in state.owned_diamonds(player) {
            if state.discard_public(card).is_some() {
                public_discarded.push(card);
            }
        }
    }

    let steps_delta = award_steps(state, rules, player, rule.step_delta);
    let refill = state.draw_into_hand(player, rule.refill, rules.deck.keep_top_discard_on_reshuffle);

    info!(
        %player,
        dumped = dumped.len(),
        refill = refill.count(),
        "hoarding penalty"
    );
    Some(HoardingOutcome {
        player,
        dumped,
        king_triggers,
        public_discarded,
        steps_delta,
        refill,
    })
}
