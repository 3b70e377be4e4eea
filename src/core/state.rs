//! Authoritative game state.
//!
//! ## GameState
//!
//! Complete state of one game:
//! - Players (hands, steps, swap budgets)
//! - Draw and discard piles (top = end of vec)
//! - Public-diamond ownership overlay
//! - Turn/phase progression and winner
//! - Action history
//! - RNG
//!
//! The state is mutated only through engine operations (deck manager, combo
//! resolver, diamond subsystem, turn machine); UI and AI layers read it via
//! the accessors here. Fields are `pub(crate)` so those sibling modules can
//! split borrows across piles, players, and RNG.
//!
//! ## The public-diamond overlay
//!
//! `public_diamonds` maps `Card -> PlayerId`. A public diamond physically
//! stays in its holder's hand; the map entry records who *owns* it for
//! swaps, commands, and the jackpot. Any card leaving a hand drops its
//! entry. `im::OrdMap` keeps iteration in card order, so "first owned
//! diamond" is deterministic.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, PlayerAction};
use super::card::{standard_deck, Card, DECK_SIZE};
use super::player::{Player, PlayerId};
use super::rng::{GameRng, GameRngState};

/// Turn phase.
///
/// `Draw -> Action -> EndOfTurn -> (Draw | GameOver)`. `EndOfTurn` is only
/// observable mid-operation; `GameOver` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Draw,
    Action,
    EndOfTurn,
    GameOver,
}

/// Full game state.
#[derive(Debug)]
pub struct GameState {
    /// Players in turn order. Index = `PlayerId::index()`.
    pub(crate) players: Vec<Player>,

    /// Face-down draw pile (top = end).
    pub(crate) draw_pile: Vec<Card>,

    /// Face-up discard pile (top = end).
    pub(crate) discard_pile: Vec<Card>,

    /// Public-diamond ownership overlay (see module docs).
    pub(crate) public_diamonds: OrdMap<Card, PlayerId>,

    /// Index of the player whose turn it is.
    pub(crate) current: usize,

    /// Completed turns across all players.
    pub(crate) turns_completed: u32,

    /// Current phase.
    pub(crate) phase: Phase,

    /// Winner, once the game is over.
    pub(crate) winner: Option<PlayerId>,

    /// Applied actions, append-only.
    pub(crate) history: Vector<ActionRecord>,

    /// Deterministic RNG (opening shuffle, reshuffles, jackpot redraws).
    pub(crate) rng: GameRng,

    /// Cards in play: `52 x deck_count`. Conservation invariant target.
    pub(crate) total_cards: usize,
}

impl GameState {
    /// Create a state with a freshly shuffled deck and empty hands.
    ///
    /// The opening deal is driven by the turn machine, not here, so tests
    /// can stage arbitrary pile and hand contents on top of a bare state.
    ///
    /// ## Panics
    ///
    /// Panics if `names` is empty or holds more than 255 entries, or if
    /// `deck_count` is zero. Player-count limits from the rule table are
    /// enforced by the turn machine.
    #[must_use]
    pub fn new(names: &[&str], deck_count: usize, seed: u64) -> Self {
        assert!(!names.is_empty(), "Must have at least 1 player");
        assert!(names.len() <= 255, "At most 255 players supported");
        assert!(deck_count >= 1, "Must have at least 1 deck");

        let players = names
            .iter()
            .enumerate()
            .map(|(i, name)| Player::new(PlayerId::new(i as u8), *name))
            .collect();

        let mut rng = GameRng::new(seed);
        let mut draw_pile = standard_deck(deck_count);
        rng.shuffle(&mut draw_pile);

        Self {
            players,
            draw_pile,
            discard_pile: Vec::new(),
            public_diamonds: OrdMap::new(),
            current: 0,
            turns_completed: 0,
            phase: Phase::Draw,
            winner: None,
            history: Vector::new(),
            rng,
            total_cards: DECK_SIZE * deck_count,
        }
    }

    // === Players ===

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// All players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A player by ID.
    ///
    /// ## Panics
    ///
    /// Panics on an out-of-range ID (programmer error; operations validate
    /// IDs before reaching here).
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::new(self.current as u8)
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.players[player.index()].hand
    }

    /// A player's tower steps.
    #[must_use]
    pub fn steps(&self, player: PlayerId) -> u32 {
        self.players[player.index()].steps
    }

    // === Progression ===

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Turn number, 1-based.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turns_completed + 1
    }

    /// Round number, 1-based. A round is one turn per player.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.turns_completed / self.players.len() as u32 + 1
    }

    /// Completed turns across all players.
    #[must_use]
    pub const fn turns_completed(&self) -> u32 {
        self.turns_completed
    }

    /// The winner, once the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Mark the game over. Terminal: no operation mutates state afterwards.
    pub(crate) fn set_winner(&mut self, player: PlayerId) {
        self.winner = Some(player);
        self.phase = Phase::GameOver;
    }

    /// Advance to the next player's Draw phase.
    ///
    /// Resets the incoming player's swap budget.
    pub(crate) fn advance_turn(&mut self) {
        self.turns_completed += 1;
        self.current = (self.current + 1) % self.players.len();
        self.players[self.current].used_swap_this_turn = false;
        self.phase = Phase::Draw;
    }

    // === Piles ===

    /// Cards remaining in the draw pile.
    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Top of the discard pile, if any.
    #[must_use]
    pub fn discard_top(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    /// Cards in play (`52 x deck_count`).
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Cards currently accounted for across piles and hands.
    ///
    /// Equals [`total_cards`](Self::total_cards) whenever no operation is
    /// mid-flight; tests assert this conservation invariant.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.players.iter().map(Player::hand_size).sum::<usize>()
    }

    // === Public diamonds ===

    /// The public-diamond overlay, in card order.
    #[must_use]
    pub fn public_diamonds(&self) -> &OrdMap<Card, PlayerId> {
        &self.public_diamonds
    }

    /// Owner of a public diamond, if the card is on the row.
    #[must_use]
    pub fn public_owner(&self, card: Card) -> Option<PlayerId> {
        self.public_diamonds.get(&card).copied()
    }

    /// Public diamonds owned by `player`, in card order.
    #[must_use]
    pub fn owned_diamonds(&self, player: PlayerId) -> Vec<Card> {
        self.public_diamonds
            .iter()
            .filter(|(_, owner)| **owner == player)
            .map(|(card, _)| *card)
            .collect()
    }

    /// Drop a card's overlay entry, if present. Called whenever a card
    /// leaves a hand.
    pub(crate) fn clear_public(&mut self, card: Card) {
        self.public_diamonds.remove(&card);
    }

    // === History ===

    /// Applied actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Append an action taken by `player` on the current turn.
    pub(crate) fn record(&mut self, player: PlayerId, action: PlayerAction) {
        let record = ActionRecord::new(self.turn_number(), player, action);
        self.history.push_back(record);
    }

    // === RNG ===

    /// Capture the RNG state for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
