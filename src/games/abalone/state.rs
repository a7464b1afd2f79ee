//! Abalone game state.
//!
//! ## Turn cycle
//!
//! `apply_action` decodes the id and validates it for the player to move:
//! - Illegal: the mover forfeits; the opponent wins and the board is left
//!   untouched.
//! - Legal: the move is applied and the move counter advances. If the
//!   opponent is now down to the losing marble count, the mover wins;
//!   otherwise the turn passes.
//!
//! The game also ends once the move counter reaches the configured cap.
//!
//! ## Returns
//!
//! ±1 for a forfeit or a marble-threshold win. Otherwise each player gets
//! a tenth of a point per marble of balance (opponent losses minus own
//! losses), which is what a capped game reports.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, trace};

use super::apply::apply;
use super::board::{Board, CellState, MARBLES_PER_PLAYER};
use super::config::AbaloneConfig;
use super::geometry::{NUM_COLS, NUM_ROWS};
use super::moves::{Move, NUM_DISTINCT_ACTIONS};
use super::notation::row_char;
use super::validate::is_valid;
use crate::core::{ActionId, PlayerId, PlayerMap, NUM_PLAYERS};
use crate::encoding::{AbaloneEncoder, EncodedState, StateEncoder};
use crate::error::StateError;
use crate::rules::{GameResult, GameState};

/// A position in a game of Abalone.
///
/// Cloning is the branch point for search; the action history is a
/// persistent vector so copies stay cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbaloneState {
    config: AbaloneConfig,
    board: Board,
    current_player: PlayerId,
    /// Winner, once decided by forfeit or marble count.
    outcome: Option<PlayerId>,
    num_moves: u32,
    history: Vector<ActionId>,
}

impl AbaloneState {
    /// Starting position for `config`, player 0 to move.
    #[must_use]
    pub fn new(config: &AbaloneConfig) -> Self {
        Self::from_board(Board::new(config.layout), PlayerId::new(0), config)
    }

    /// Position with an arbitrary board, for puzzles and tests.
    ///
    /// Marble losses are counted against the standard 14 per side.
    #[must_use]
    pub fn from_board(board: Board, to_move: PlayerId, config: &AbaloneConfig) -> Self {
        Self {
            config: config.clone(),
            board,
            current_player: to_move,
            outcome: None,
            num_moves: 0,
            history: Vector::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &AbaloneConfig {
        &self.config
    }

    /// Winner decided by forfeit or marble count, if any.
    #[must_use]
    pub fn outcome(&self) -> Option<PlayerId> {
        self.outcome
    }

    /// Number of accepted moves so far.
    #[must_use]
    pub fn num_moves(&self) -> u32 {
        self.num_moves
    }

    /// Every action id submitted so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionId> {
        &self.history
    }

    #[must_use]
    pub fn marble_count(&self, player: PlayerId) -> u8 {
        self.board.marble_count(player)
    }

    #[must_use]
    pub fn marbles_lost(&self, player: PlayerId) -> u8 {
        MARBLES_PER_PLAYER.saturating_sub(self.marble_count(player))
    }

    // === Rules ===

    /// Whether `action` is legal for the player to move.
    #[must_use]
    pub fn is_valid_action(&self, action: ActionId) -> bool {
        !self.is_terminal() && is_valid(&Move::from_action(action), &self.board, self.current_player)
    }

    /// The side that wins on marble count alone, if either side is down
    /// to the losing count. Player 0's count is checked first.
    fn marble_winner(&self) -> Option<PlayerId> {
        let losing = self.config.losing_marble_count();
        PlayerId::all(NUM_PLAYERS)
            .find(|&p| self.marble_count(p) <= losing)
            .map(PlayerId::opponent)
    }

    fn finish(&mut self, winner: PlayerId) {
        self.outcome = Some(winner);
        info!(%winner, moves = self.num_moves, "game over");
    }
}

impl GameState for AbaloneState {
    fn current_player(&self) -> Option<PlayerId> {
        (!self.is_terminal()).then_some(self.current_player)
    }

    fn legal_actions(&self) -> Vec<ActionId> {
        if self.is_terminal() {
            return Vec::new();
        }
        let actions: Vec<_> = ActionId::all(NUM_DISTINCT_ACTIONS)
            .filter(|&a| is_valid(&Move::from_action(a), &self.board, self.current_player))
            .collect();
        trace!(player = %self.current_player, count = actions.len(), "legal actions");
        actions
    }

    fn is_legal(&self, action: ActionId) -> bool {
        self.is_valid_action(action)
    }

    fn apply_action(&mut self, action: ActionId) -> Result<(), StateError> {
        if self.is_terminal() {
            return Err(StateError::GameOver);
        }

        let mover = self.current_player;
        let mv = Move::from_action(action);
        self.history.push_back(action);

        if !is_valid(&mv, &self.board, mover) {
            debug!(player = %mover, %action, notation = %mv, "illegal move forfeits");
            self.finish(mover.opponent());
            return Ok(());
        }

        apply(&mv, &mut self.board);
        self.num_moves += 1;

        if self.marble_winner() == Some(mover) {
            self.finish(mover);
        } else {
            self.current_player = mover.opponent();
            if self.num_moves >= self.config.max_moves {
                info!(moves = self.num_moves, "move cap reached");
            }
        }
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.outcome.is_some() || self.num_moves >= self.config.max_moves
    }

    fn returns(&self) -> PlayerMap<f64> {
        let decisive = self.outcome.or_else(|| self.marble_winner());
        if let Some(winner) = decisive {
            return PlayerMap::new(NUM_PLAYERS, |p| if p == winner { 1.0 } else { -1.0 });
        }

        PlayerMap::new(NUM_PLAYERS, |p| {
            let balance =
                i32::from(self.marbles_lost(p.opponent())) - i32::from(self.marbles_lost(p));
            f64::from(balance) / 10.0
        })
    }

    fn result(&self) -> Option<GameResult> {
        if let Some(winner) = self.outcome.or_else(|| self.marble_winner()) {
            return Some(GameResult::Winner(winner));
        }
        if !self.is_terminal() {
            return None;
        }
        let p0 = PlayerId::new(0);
        let returns = self.returns();
        Some(match returns[p0].partial_cmp(&0.0) {
            Some(std::cmp::Ordering::Greater) => GameResult::Winner(p0),
            Some(std::cmp::Ordering::Less) => GameResult::Winner(p0.opponent()),
            _ => GameResult::Draw,
        })
    }

    fn information_state_string(&self, _player: PlayerId) -> String {
        self.history
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn observation_string(&self, _player: PlayerId) -> String {
        self.to_string()
    }

    fn observation_tensor(&self, player: PlayerId) -> EncodedState {
        AbaloneEncoder.encode(self, player)
    }
}

impl fmt::Display for AbaloneState {
    /// Draws the hexagon top row first, each row indented by its distance
    /// from the middle row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let middle = (NUM_ROWS / 2) as i32;
        writeln!(f, "board_ = ")?;
        for row in 0..NUM_ROWS as i32 {
            let skew = row - middle;
            let (first, last) = if skew < 0 {
                (-skew, NUM_COLS as i32)
            } else {
                (0, NUM_COLS as i32 - skew)
            };
            write!(f, "<{}>{}", row_char(row), " ".repeat(2 * skew.unsigned_abs() as usize))?;
            for col in first..last {
                write!(f, "   {}", self.board.at_rc(row, col).glyph())?;
            }
            if skew > 0 {
                write!(f, "  <{}>", NUM_COLS as i32 + 1 - skew)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "               <1> <2> <3> <4> <5>")?;

        let returns = self.returns();
        let winner = self.outcome.map_or(CellState::Invalid, CellState::of_player);
        writeln!(f, "num_moves_ = {}", self.num_moves)?;
        writeln!(f, "returns = {}, {}", returns.as_slice()[0], returns.as_slice()[1])?;
        writeln!(f, "winner = {}", winner.glyph())?;
        writeln!(f, "done = {}", u8::from(self.is_terminal()))
    }
}
