//! The rule table: every piece of game policy as data.
//!
//! The engine interprets scoring, penalties, and thresholds through a
//! [`RuleTable`]; no gameplay constant is hard-coded in engine logic.
//! Combo definitions are *ordered*: the detector walks them in declared
//! order and the first match wins, so tables list the most specific
//! patterns first (`four_kings` shadows `four_of_a_kind`).
//!
//! Tables come from [`RuleTable::standard()`] or from a JSON document via
//! [`loader`](super::loader); either way [`RuleTable::validate`] must pass
//! before a game starts.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::pattern::ComboPattern;
use crate::error::GameError;

/// One scoring combination: a pattern plus its payout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboDefinition {
    /// Stable identifier, unique within a table.
    pub id: String,

    /// Suit-multiset predicate.
    pub pattern: ComboPattern,

    /// Exact subset size. Must equal the pattern's arity.
    #[serde(rename = "count")]
    pub required_count: usize,

    /// Step delta for the acting player.
    #[serde(rename = "steps")]
    pub steps_delta: i32,

    /// Cards drawn after the combo resolves.
    #[serde(rename = "draw")]
    pub draw_count: u32,

    /// Engine-chosen discards forced after the combo resolves.
    #[serde(rename = "discard")]
    pub discard_count: u32,

    /// Whether a King-rank play doubles a positive step delta.
    /// Draw and discard counts never double.
    #[serde(rename = "king_doubles")]
    pub doubled_if_king: bool,
}

impl ComboDefinition {
    /// Create a definition with the pattern's arity, no draw/discard
    /// effects, and King doubling on.
    #[must_use]
    pub fn new(id: impl Into<String>, pattern: ComboPattern, steps_delta: i32) -> Self {
        Self {
            id: id.into(),
            pattern,
            required_count: pattern.arity(),
            steps_delta,
            draw_count: 0,
            discard_count: 0,
            doubled_if_king: true,
        }
    }

    /// Set the draw effect.
    #[must_use]
    pub fn with_draws(mut self, count: u32) -> Self {
        self.draw_count = count;
        self
    }

    /// Set the forced-discard effect.
    #[must_use]
    pub fn with_discards(mut self, count: u32) -> Self {
        self.discard_count = count;
        self
    }

    /// Exempt this combo from King doubling (fixed-bonus combos).
    #[must_use]
    pub fn without_king_double(mut self) -> Self {
        self.doubled_if_king = false;
        self
    }
}

/// Allowed player counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLimits {
    pub min: usize,
    pub max: usize,
}

/// Victory threshold and tower floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryRule {
    /// Steps to reach (or exceed) to win.
    pub goal_steps: u32,
    /// Steps never drop below this.
    pub floor_steps: u32,
}

/// Opening deal and per-turn draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRule {
    /// Cards dealt to each player at game start.
    pub initial_hand: usize,
    /// Cards drawn in the Draw phase.
    pub draws_per_turn: u32,
}

/// Physical deck policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRule {
    /// Player count at which a second deck is concatenated in.
    pub double_deck_at: usize,
    /// When reshuffling the discard pile into the draw pile, leave the top
    /// discard behind as the new discard pile seed.
    pub keep_top_discard_on_reshuffle: bool,
}

/// King discard triggers (suit of the discarded king decides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KingEffects {
    /// Step delta for discarding a black king.
    pub black_steps: i32,
    /// Step delta for discarding the heart king.
    pub heart_steps: i32,
    /// Cards drawn for discarding the diamond king.
    pub diamond_draw: u32,
}

/// Suit riders on a command's forced discard, credited to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEffects {
    /// Step delta when the forced card is black.
    pub black_steps: i32,
    /// Step delta when the forced card is a heart.
    pub heart_steps: i32,
    /// Cards the target draws when the forced card is a diamond during the
    /// early game (late-game diamond discards fall under hoarding instead).
    pub early_diamond_draw: u32,
}

/// Pool-wide jackpot on the public diamond row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JackpotRule {
    /// Public diamonds needed to fire.
    pub threshold: usize,
    /// Step reward for the current player.
    pub reward_steps: i32,
}

/// Late-game penalty for discarding diamonds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoardingRule {
    /// First round (1-based) in which the penalty is live.
    pub active_from_round: u32,
    /// Step delta applied with the penalty.
    pub step_delta: i32,
    /// Cards drawn after the hand is dumped.
    pub refill: u32,
    /// Also discard the offender's owned public diamonds.
    pub discard_owned_public: bool,
}

/// Penalty for ending a turn with an empty hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyHandRule {
    pub step_delta: i32,
    pub refill: u32,
}

/// Diamond-economy policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiamondRules {
    /// Ownership swaps allowed per player per turn (0 disables, 1 standard).
    pub swap_limit_per_turn: u32,
    pub command: CommandEffects,
    pub jackpot: JackpotRule,
    pub hoarding: HoardingRule,
}

/// Complete game policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    pub players: PlayerLimits,
    pub victory: VictoryRule,
    pub deal: DealRule,
    pub deck: DeckRule,
    /// Ordered combo list; declaration order is priority order.
    pub combos: Vec<ComboDefinition>,
    pub kings: KingEffects,
    pub diamonds: DiamondRules,
    pub empty_hand: EmptyHandRule,
}

impl RuleTable {
    /// The canonical table: 2-4 players, victory at 20 steps, the eight
    /// standard combos, jackpot 6 -> +6, hoarding from round 2.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            players: PlayerLimits { min: 2, max: 4 },
            victory: VictoryRule {
                goal_steps: 20,
                floor_steps: 0,
            },
            deal: DealRule {
                initial_hand: 6,
                draws_per_turn: 1,
            },
            deck: DeckRule {
                double_deck_at: 4,
                keep_top_discard_on_reshuffle: false,
            },
            combos: vec![
                ComboDefinition::new("four_kings", ComboPattern::FourKings, 6)
                    .with_draws(2)
                    .without_king_double(),
                ComboDefinition::new("four_of_a_kind", ComboPattern::FourOfAKind, 3)
                    .with_draws(1),
                ComboDefinition::new("three_with_diamond", ComboPattern::ThreeWithDiamond, 1)
                    .with_draws(1)
                    .with_discards(1),
                ComboDefinition::new("heart_both_blacks", ComboPattern::HeartBothBlacks, 3),
                ComboDefinition::new("heart_diamond", ComboPattern::HeartDiamond, 1)
                    .with_draws(1),
                ComboDefinition::new("heart_black", ComboPattern::HeartBlack, 2),
                ComboDefinition::new("diamond_black", ComboPattern::DiamondBlack, 0)
                    .with_draws(1)
                    .with_discards(1),
                ComboDefinition::new("two_blacks", ComboPattern::TwoBlacks, 1),
            ],
            kings: KingEffects {
                black_steps: -2,
                heart_steps: 2,
                diamond_draw: 2,
            },
            diamonds: DiamondRules {
                swap_limit_per_turn: 1,
                command: CommandEffects {
                    black_steps: -1,
                    heart_steps: 1,
                    early_diamond_draw: 1,
                },
                jackpot: JackpotRule {
                    threshold: 6,
                    reward_steps: 6,
                },
                hoarding: HoardingRule {
                    active_from_round: 2,
                    step_delta: -1,
                    refill: 6,
                    discard_owned_public: true,
                },
            },
            empty_hand: EmptyHandRule {
                step_delta: -1,
                refill: 6,
            },
        }
    }

    /// Look up a combo definition by id.
    ///
    /// Linear scan; tables hold a handful of entries.
    #[must_use]
    pub fn combo(&self, id: &str) -> Option<&ComboDefinition> {
        self.combos.iter().find(|c| c.id == id)
    }

    /// Deck count for a given player count.
    #[must_use]
    pub fn deck_count_for(&self, player_count: usize) -> usize {
        if player_count >= self.deck.double_deck_at {
            2
        } else {
            1
        }
    }

    /// Whether a round is late game for the hoarding rule.
    #[must_use]
    pub const fn is_late_game(&self, round: u32) -> bool {
        round >= self.diamonds.hoarding.active_from_round
    }

    /// Validate the table. Fatal [`GameError::InvalidConfig`] on the first
    /// violation found.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.players.min < 2 {
            return Err(GameError::invalid_config("at least 2 players required"));
        }
        if self.players.max > 8 {
            return Err(GameError::invalid_config("at most 8 players supported"));
        }
        if self.players.min > self.players.max {
            return Err(GameError::invalid_config(format!(
                "player minimum {} exceeds maximum {}",
                self.players.min, self.players.max
            )));
        }
        if self.victory.goal_steps <= self.victory.floor_steps {
            return Err(GameError::invalid_config(format!(
                "victory goal {} must exceed floor {}",
                self.victory.goal_steps, self.victory.floor_steps
            )));
        }
        if self.deal.initial_hand == 0 || self.deal.initial_hand > 52 {
            return Err(GameError::invalid_config(format!(
                "initial hand size {} out of range 1..=52",
                self.deal.initial_hand
            )));
        }
        if self.deal.draws_per_turn == 0 || self.deal.draws_per_turn > 10 {
            return Err(GameError::invalid_config(format!(
                "draws per turn {} out of range 1..=10",
                self.deal.draws_per_turn
            )));
        }
        if self.deck.double_deck_at < 2 {
            return Err(GameError::invalid_config(
                "double_deck_at must be at least 2",
            ));
        }

        if self.combos.is_empty() {
            return Err(GameError::invalid_config("combo list is empty"));
        }
        let mut seen = FxHashSet::default();
        for combo in &self.combos {
            if combo.id.is_empty() {
                return Err(GameError::invalid_config("combo with empty id"));
            }
            if !seen.insert(combo.id.as_str()) {
                return Err(GameError::invalid_config(format!(
                    "duplicate combo id '{}'",
                    combo.id
                )));
            }
            if combo.required_count != combo.pattern.arity() {
                return Err(GameError::invalid_config(format!(
                    "combo '{}': count {} does not match pattern arity {}",
                    combo.id,
                    combo.required_count,
                    combo.pattern.arity()
                )));
            }
            if combo.draw_count > 52 || combo.discard_count > 52 {
                return Err(GameError::invalid_config(format!(
                    "combo '{}': draw/discard counts out of range",
                    combo.id
                )));
            }
        }

        if self.kings.diamond_draw > 52 {
            return Err(GameError::invalid_config("king diamond draw out of range"));
        }
        if self.diamonds.swap_limit_per_turn > 1 {
            return Err(GameError::invalid_config(
                "swap_limit_per_turn must be 0 or 1",
            ));
        }
        if self.diamonds.command.early_diamond_draw > 52 {
            return Err(GameError::invalid_config(
                "command early diamond draw out of range",
            ));
        }
        if self.diamonds.jackpot.threshold == 0 {
            return Err(GameError::invalid_config(
                "jackpot threshold must be at least 1",
            ));
        }
        if self.diamonds.hoarding.active_from_round == 0 {
            return Err(GameError::invalid_config(
                "hoarding active_from_round is 1-based",
            ));
        }
        if self.diamonds.hoarding.refill > 52 || self.empty_hand.refill > 52 {
            return Err(GameError::invalid_config("refill counts out of range"));
        }

        Ok(())
    }
}
