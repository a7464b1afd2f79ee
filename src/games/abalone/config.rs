//! Game configuration parameters.

use serde::{Deserialize, Serialize};

use super::board::{Layout, MARBLES_PER_PLAYER};
use crate::error::ConfigError;

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbaloneConfig {
    /// Marbles a player must lose for the opponent to win outright
    /// (default: 6, blitz: 4).
    pub marbles_to_win: u8,

    /// Move-count cap after which the game ends without a decisive result.
    pub max_moves: u32,

    /// Starting layout.
    pub layout: Layout,
}

impl Default for AbaloneConfig {
    fn default() -> Self {
        Self {
            marbles_to_win: 6,
            max_moves: 200,
            layout: Layout::Classic,
        }
    }
}

impl AbaloneConfig {
    /// Set the marbles-to-win threshold.
    #[must_use]
    pub fn with_marbles_to_win(mut self, marbles: u8) -> Self {
        self.marbles_to_win = marbles;
        self
    }

    /// Set the move-count cap.
    #[must_use]
    pub fn with_max_moves(mut self, moves: u32) -> Self {
        self.max_moves = moves;
        self
    }

    /// Set the starting layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marbles_to_win == 0 || self.marbles_to_win > MARBLES_PER_PLAYER {
            return Err(ConfigError::MarblesToWin(self.marbles_to_win));
        }
        if self.max_moves == 0 {
            return Err(ConfigError::MaxMoves);
        }
        Ok(())
    }

    /// Survivor count at or below which a side has lost.
    #[must_use]
    pub fn losing_marble_count(&self) -> u8 {
        MARBLES_PER_PLAYER.saturating_sub(self.marbles_to_win)
    }
}
