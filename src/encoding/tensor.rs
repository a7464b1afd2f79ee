//! Flat tensor container.

use serde::{Deserialize, Serialize};

/// Encoded game state as a flat tensor for neural network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor (e.g., [channels, height, width] or [features]).
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Row-major flat index of a multi-dimensional index.
    ///
    /// Returns `None` if the rank differs or any component is out of range.
    #[must_use]
    pub fn flat_index(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }
        index
            .iter()
            .zip(&self.shape)
            .try_fold(0usize, |acc, (&i, &dim)| (i < dim).then_some(acc * dim + i))
    }

    /// Get element at a multi-dimensional index.
    #[must_use]
    pub fn at(&self, index: &[usize]) -> Option<f32> {
        self.flat_index(index).map(|i| self.tensor[i])
    }

    /// Set element at a multi-dimensional index. Out-of-range indices are
    /// ignored.
    pub fn set_at(&mut self, index: &[usize], value: f32) {
        if let Some(i) = self.flat_index(index) {
            self.tensor[i] = value;
        }
    }
}
