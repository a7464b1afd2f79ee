//! Abalone game descriptor.

use super::board::{Layout, NUM_CELL_STATES};
use super::config::AbaloneConfig;
use super::geometry::{NUM_COLS, NUM_ROWS};
use super::moves::{Move, NUM_DISTINCT_ACTIONS};
use super::state::AbaloneState;
use crate::core::{ActionId, PlayerId, NUM_PLAYERS};
use crate::error::ConfigError;
use crate::rules::RulesEngine;

/// Abalone for two players on the 61-cell hexagon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbaloneGame {
    config: AbaloneConfig,
}

impl AbaloneGame {
    /// Create a game, rejecting out-of-range parameters.
    pub fn new(config: AbaloneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &AbaloneConfig {
        &self.config
    }
}

impl RulesEngine for AbaloneGame {
    type State = AbaloneState;

    fn num_distinct_actions(&self) -> usize {
        NUM_DISTINCT_ACTIONS
    }

    fn num_players(&self) -> usize {
        NUM_PLAYERS
    }

    fn min_utility(&self) -> f64 {
        -1.0
    }

    fn max_utility(&self) -> f64 {
        1.0
    }

    fn utility_sum(&self) -> Option<f64> {
        Some(0.0)
    }

    fn observation_shape(&self) -> Vec<usize> {
        vec![NUM_CELL_STATES, NUM_ROWS, NUM_COLS]
    }

    fn max_game_length(&self) -> usize {
        self.config.max_moves as usize
    }

    fn action_to_string(&self, _player: PlayerId, action: ActionId) -> String {
        Move::from_action(action).to_notation()
    }

    fn new_initial_state(&self) -> AbaloneState {
        AbaloneState::new(&self.config)
    }
}

/// Builder for creating an AbaloneGame.
#[derive(Clone, Debug, Default)]
pub struct AbaloneGameBuilder {
    config: AbaloneConfig,
}

impl AbaloneGameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn marbles_to_win(mut self, marbles: u8) -> Self {
        self.config.marbles_to_win = marbles;
        self
    }

    #[must_use]
    pub fn max_moves(mut self, moves: u32) -> Self {
        self.config.max_moves = moves;
        self
    }

    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.config.layout = layout;
        self
    }

    /// Replace every parameter at once.
    #[must_use]
    pub fn config(mut self, config: AbaloneConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the game and initial state.
    pub fn build(self) -> Result<(AbaloneGame, AbaloneState), ConfigError> {
        let game = AbaloneGame::new(self.config)?;
        let state = game.new_initial_state();
        Ok((game, state))
    }
}
