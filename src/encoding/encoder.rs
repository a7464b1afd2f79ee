//! State encoding for neural network input.
//!
//! Transforms game state into tensor representations suitable for neural networks.

use crate::core::PlayerId;
use crate::encoding::tensor::EncodedState;
use crate::games::abalone::board::NUM_CELL_STATES;
use crate::games::abalone::geometry::{NUM_COLS, NUM_ROWS};
use crate::games::abalone::moves::NUM_DISTINCT_ACTIONS;
use crate::games::abalone::AbaloneState;

/// Encodes game state into tensors for neural network input.
///
/// Each encoder defines:
/// - How to convert state to a tensor from a player's perspective
/// - The shape of the output tensor
/// - The size of the action space
pub trait StateEncoder<S>: Send + Sync {
    /// Encode the game state from a player's perspective.
    fn encode(&self, state: &S, perspective: PlayerId) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions.
    ///
    /// This defines the size of the policy output vector.
    fn action_space_size(&self) -> usize;
}

/// One-hot board planes for Abalone.
///
/// Shape `[4, 9, 9]`: planes Invalid, Empty, PlayerA, PlayerB, with
/// exactly one hot entry per cell. The board is fully observable, so the
/// perspective does not change the encoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct AbaloneEncoder;

impl StateEncoder<AbaloneState> for AbaloneEncoder {
    fn encode(&self, state: &AbaloneState, _perspective: PlayerId) -> EncodedState {
        let mut encoded = EncodedState::zeros(self.output_shape());
        for (coord, cell) in state.board().iter() {
            encoded.set_at(&[cell.plane(), coord.row as usize, coord.col as usize], 1.0);
        }
        encoded
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![NUM_CELL_STATES, NUM_ROWS, NUM_COLS]
    }

    fn action_space_size(&self) -> usize {
        NUM_DISTINCT_ACTIONS
    }
}
