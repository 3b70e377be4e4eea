//! The engine facade: one struct, every legal operation.
//!
//! ## Turn flow
//!
//! `Draw -> Action -> EndOfTurn -> (Draw next player | GameOver)`. The
//! Draw-phase draw is mandatory; the Action phase takes any number of
//! combos, swaps, commands, and skip cycles; `end_turn` runs the
//! end-of-turn sequence (empty-hand penalty, diamond reveal, jackpot
//! check, victory check) and hands play to the next player.
//!
//! ## Victory
//!
//! The victory check runs after every step-changing operation, scanning
//! from the current player in turn order. A command's heart rider can
//! therefore hand the win to the *target* on the actor's turn. `GameOver`
//! is terminal; every later mutating call returns `InvalidAction`.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::combo::{resolve_combo, ComboResult};
use crate::core::{Card, GameState, Phase, PlayerAction, PlayerId};
use crate::deck::DrawOutcome;
use crate::diamonds::{self, CommandOutcome, HoardingOutcome, JackpotOutcome, SwapOutcome};
use crate::effects::{award_steps, discard_chosen_with_king, KingTrigger};
use crate::error::GameError;
use crate::rules::RuleTable;

/// Result of a skip cycle: one chosen discard, one draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipOutcome {
    pub discarded: Card,
    pub king_trigger: Option<KingTrigger>,
    pub hoarding: Option<HoardingOutcome>,
    pub drawn: DrawOutcome,
}

/// Penalty for ending a turn with an empty hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyHandPenalty {
    /// Steps lost (clamped at the floor).
    pub steps_delta: i32,
    pub refill: DrawOutcome,
}

/// Everything the end-of-turn sequence did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub empty_hand: Option<EmptyHandPenalty>,
    /// Diamonds newly revealed from the ending player's hand.
    pub revealed: Vec<Card>,
    pub jackpot: Option<JackpotOutcome>,
    pub winner: Option<PlayerId>,
    /// The player now in their Draw phase; `None` once the game is over.
    pub next_player: Option<PlayerId>,
}

/// A running game: state plus the rule table that governs it.
#[derive(Debug)]
pub struct Game {
    state: GameState,
    rules: RuleTable,
}

impl Game {
    /// Start a game under the given rule table.
    ///
    /// Validates the table and the player count, builds and shuffles the
    /// deck (doubled at the table's `double_deck_at` player count), deals
    /// the opening hands, and puts player 0 in their Draw phase.
    pub fn new(names: &[&str], rules: RuleTable, seed: u64) -> Result<Self, GameError> {
        rules.validate()?;
        let count = names.len();
        if count < rules.players.min || count > rules.players.max {
            return Err(GameError::invalid_config(format!(
                "player count {count} outside {}..={}",
                rules.players.min, rules.players.max
            )));
        }

        let deck_count = rules.deck_count_for(count);
        let mut state = GameState::new(names, deck_count, seed);
        if rules.deal.initial_hand * count > state.total_cards() {
            return Err(GameError::invalid_config(format!(
                "cannot deal {} cards each to {count} players from {} cards",
                rules.deal.initial_hand,
                state.total_cards()
            )));
        }
        state.deal_initial(rules.deal.initial_hand);
        for player in &mut state.players {
            player.steps = rules.victory.floor_steps;
        }

        info!(players = count, decks = deck_count, seed, "game started");
        Ok(Self { state, rules })
    }

    /// Start a game under [`RuleTable::standard`].
    pub fn standard(names: &[&str], seed: u64) -> Result<Self, GameError> {
        Self::new(names, RuleTable::standard(), seed)
    }

    // === Reads ===

    /// The game state, read-only.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The rule table in force.
    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// The winner; `None` while the game is live.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    // === Operations ===

    /// The mandatory Draw-phase draw. Moves the turn into its Action phase.
    ///
    /// Exhaustion is not an error; the outcome reports a partial draw.
    pub fn draw(&mut self, player: PlayerId) -> Result<DrawOutcome, GameError> {
        self.ensure_actionable(player, Phase::Draw)?;
        let outcome = self.state.draw_into_hand(
            player,
            self.rules.deal.draws_per_turn,
            self.rules.deck.keep_top_discard_on_reshuffle,
        );
        self.state.phase = Phase::Action;
        self.state.record(
            player,
            PlayerAction::Draw {
                count: outcome.count() as u8,
            },
        );
        Ok(outcome)
    }

    /// Play a same-rank subset as a combo.
    pub fn play_combo(&mut self, player: PlayerId, cards: &[Card]) -> Result<ComboResult, GameError> {
        self.ensure_actionable(player, Phase::Action)?;
        let result = resolve_combo(&mut self.state, &self.rules, player, cards)?;
        self.state.record(
            player,
            PlayerAction::PlayCombo {
                combo_id: result.combo_id.clone(),
                cards: result.played.clone(),
            },
        );
        self.victory_scan();
        Ok(result)
    }

    /// Take ownership of another player's public diamond, giving one back.
    pub fn diamond_swap(&mut self, player: PlayerId, target_card: Card) -> Result<SwapOutcome, GameError> {
        self.ensure_actionable(player, Phase::Action)?;
        let outcome = diamonds::diamond_swap(&mut self.state, &self.rules, player, target_card)?;
        self.state.record(
            player,
            PlayerAction::DiamondSwap {
                taken: outcome.taken,
                given: outcome.given,
            },
        );
        Ok(outcome)
    }

    /// Spend an owned public diamond to force `target` to discard.
    pub fn diamond_command(
        &mut self,
        player: PlayerId,
        cost_card: Card,
        target: PlayerId,
    ) -> Result<CommandOutcome, GameError> {
        self.ensure_actionable(player, Phase::Action)?;
        let outcome =
            diamonds::diamond_command(&mut self.state, &self.rules, player, cost_card, target)?;
        self.state.record(
            player,
            PlayerAction::DiamondCommand {
                cost: cost_card,
                target,
            },
        );
        self.victory_scan();
        Ok(outcome)
    }

    /// Discard one chosen card, then draw one.
    ///
    /// The discard fires king triggers and hoarding like any other; the
    /// cycle is repeatable within the Action phase.
    pub fn skip_cycle(&mut self, player: PlayerId, card: Card) -> Result<SkipOutcome, GameError> {
        self.ensure_actionable(player, Phase::Action)?;
        let king_trigger = discard_chosen_with_king(&mut self.state, &self.rules, player, card)?;
        let hoarding = diamonds::hoarding_check(&mut self.state, &self.rules, player, card);
        let drawn =
            self.state
                .draw_into_hand(player, 1, self.rules.deck.keep_top_discard_on_reshuffle);
        self.state
            .record(player, PlayerAction::SkipCycle { discarded: card });
        self.victory_scan();
        Ok(SkipOutcome {
            discarded: card,
            king_trigger,
            hoarding,
            drawn,
        })
    }

    /// Run the end-of-turn sequence and pass play on.
    ///
    /// Empty-hand penalty, then diamond reveal, then the jackpot check
    /// (reveal is the only pool-growing operation), then the victory
    /// check. Without a winner, play advances to the next player's Draw
    /// phase and their swap budget resets.
    pub fn end_turn(&mut self, player: PlayerId) -> Result<TurnOutcome, GameError> {
        self.ensure_actionable(player, Phase::Action)?;
        self.state.phase = Phase::EndOfTurn;

        let empty_hand = if self.state.hand(player).is_empty() {
            let steps_delta = award_steps(
                &mut self.state,
                &self.rules,
                player,
                self.rules.empty_hand.step_delta,
            );
            let refill = self.state.draw_into_hand(
                player,
                self.rules.empty_hand.refill,
                self.rules.deck.keep_top_discard_on_reshuffle,
            );
            Some(EmptyHandPenalty { steps_delta, refill })
        } else {
            None
        };

        let revealed = diamonds::reveal_diamonds(&mut self.state, player);
        let jackpot = diamonds::jackpot_check(&mut self.state, &self.rules, player);
        let winner = self.victory_scan();

        self.state.record(player, PlayerAction::EndTurn);

        let next_player = if winner.is_some() {
            None
        } else {
            self.state.advance_turn();
            Some(self.state.current_player())
        };
        Ok(TurnOutcome {
            empty_hand,
            revealed,
            jackpot,
            winner,
            next_player,
        })
    }

    // === Internal ===

    fn ensure_actionable(&self, player: PlayerId, phase: Phase) -> Result<(), GameError> {
        if self.state.phase() == Phase::GameOver {
            return Err(GameError::invalid_action("game is over"));
        }
        if player != self.state.current_player() {
            return Err(GameError::invalid_action(format!("not {player}'s turn")));
        }
        if self.state.phase() != phase {
            return Err(GameError::invalid_action(format!(
                "action not allowed in the {:?} phase",
                self.state.phase()
            )));
        }
        Ok(())
    }

    /// Mark a winner if anyone has reached the goal. Scans from the
    /// current player so the acting side wins its own threshold crossing.
    fn victory_scan(&mut self) -> Option<PlayerId> {
        if let Some(winner) = self.state.winner() {
            return Some(winner);
        }
        let n = self.state.player_count();
        for i in 0..n {
            let id = PlayerId::new(((self.state.current + i) % n) as u8);
            if self.state.steps(id) >= self.rules.victory.goal_steps {
                self.state.set_winner(id);
                info!(winner = %id, steps = self.state.steps(id), "victory");
                return Some(id);
            }
        }
        None
    }
}
