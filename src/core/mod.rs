//! Core engine types: players, per-player storage, action identifiers.
//!
//! These building blocks are game-agnostic. Games give action ids their
//! meaning through their own decoders.

pub mod action;
pub mod player;

pub use action::ActionId;
pub use player::{PlayerId, PlayerMap, NUM_PLAYERS};
