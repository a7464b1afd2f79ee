//! Game position trait.

use crate::core::{ActionId, PlayerId, PlayerMap};
use crate::encoding::EncodedState;
use crate::error::StateError;
use crate::rules::engine::GameResult;

/// A game position.
///
/// `Clone` is the branch point for search: copy the state, then advance
/// the copy. States share no mutable data.
///
/// ## Implementation Notes
///
/// - `current_player`: `None` once the game is over
/// - `legal_actions`: empty once the game is over
/// - `apply_action`: must be deterministic; an illegal action is a game
///   event (for example a forfeit), not an error
/// - `returns`: defined in every state, not only terminal ones
pub trait GameState: Clone {
    /// Player to move, or `None` for a terminal state.
    fn current_player(&self) -> Option<PlayerId>;

    /// All legal action ids for the player to move, ascending.
    fn legal_actions(&self) -> Vec<ActionId>;

    /// Advance the state by one action.
    ///
    /// Errors only when the game is already over.
    fn apply_action(&mut self, action: ActionId) -> Result<(), StateError>;

    /// Whether the game has ended.
    fn is_terminal(&self) -> bool;

    /// Per-player returns.
    fn returns(&self) -> PlayerMap<f64>;

    /// Discrete result, once the game is over.
    fn result(&self) -> Option<GameResult>;

    /// Everything `player` knows, as text.
    fn information_state_string(&self, player: PlayerId) -> String;

    /// What `player` currently observes, as text.
    fn observation_string(&self, player: PlayerId) -> String;

    /// What `player` currently observes, as a tensor.
    fn observation_tensor(&self, player: PlayerId) -> EncodedState;

    // === Convenience Methods ===

    /// Check a single action for legality.
    ///
    /// Default implementation scans `legal_actions`.
    fn is_legal(&self, action: ActionId) -> bool {
        self.legal_actions().binary_search(&action).is_ok()
    }
}
