//! Observation tensors for neural network input.
//!
//! ## Overview
//!
//! - **Tensor**: `EncodedState`, a flat row-major buffer plus its shape
//! - **Encoding**: `StateEncoder` trait and the `AbaloneEncoder` one-hot
//!   board planes
//!
//! ## Usage
//!
//! ```
//! use abalone_engine::encoding::{AbaloneEncoder, StateEncoder};
//! use abalone_engine::games::abalone::AbaloneGameBuilder;
//! use abalone_engine::core::PlayerId;
//!
//! let (_game, state) = AbaloneGameBuilder::new().build().unwrap();
//! let encoded = AbaloneEncoder.encode(&state, PlayerId::new(0));
//! assert_eq!(encoded.shape, vec![4, 9, 9]);
//! ```

pub mod encoder;
pub mod tensor;

pub use encoder::{AbaloneEncoder, StateEncoder};
pub use tensor::EncodedState;
