//! Game descriptor trait.
//!
//! A `RulesEngine` describes a game as a whole:
//! - Size of the flat action space
//! - Player count and utility range
//! - Observation tensor shape
//! - How to create the initial state

use serde::{Deserialize, Serialize};

use crate::core::{ActionId, PlayerId};
use crate::rules::state::GameState;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Game descriptor trait.
///
/// ## Implementation Notes
///
/// - Action ids range over `0..num_distinct_actions()`; not every id is
///   legal in every state
/// - `new_initial_state` must be deterministic
/// - Utilities are reported per player by `GameState::returns`
pub trait RulesEngine {
    /// State type produced by this game.
    type State: GameState;

    /// Size of the flat action space.
    fn num_distinct_actions(&self) -> usize;

    /// Number of players.
    fn num_players(&self) -> usize;

    /// Lowest possible return.
    fn min_utility(&self) -> f64;

    /// Highest possible return.
    fn max_utility(&self) -> f64;

    /// Sum of all players' returns, for constant-sum games.
    fn utility_sum(&self) -> Option<f64>;

    /// Shape of the observation tensor, e.g. `[planes, rows, cols]`.
    fn observation_shape(&self) -> Vec<usize>;

    /// Upper bound on the number of moves in a game.
    fn max_game_length(&self) -> usize;

    /// Human-readable form of an action id.
    fn action_to_string(&self, player: PlayerId, action: ActionId) -> String;

    /// Create the starting position.
    fn new_initial_state(&self) -> Self::State;

    // === Convenience Methods ===

    /// Size of a flattened observation tensor.
    fn observation_size(&self) -> usize {
        self.observation_shape().iter().product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(0)));
        assert!(!draw.is_winner(PlayerId::new(1)));
    }

    #[test]
    fn test_game_result_serialization() {
        let result = GameResult::Winner(PlayerId::new(0));
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
