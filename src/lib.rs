//! # abalone-engine
//!
//! Abalone rules for reinforcement-learning hosts.
//!
//! ## Design Principles
//!
//! 1. **Flat Action Space**: every move is a dense id in `0..2430`. Hosts
//!    never see coordinates unless they ask for notation.
//!
//! 2. **Illegal Means Forfeit**: applying an illegal id ends the game in
//!    the opponent's favour rather than returning an error.
//!
//! 3. **Cheap Branching**: states are plain values; clone one to explore
//!    a line of play.
//!
//! ## Modules
//!
//! - `core`: Player and action identifiers
//! - `rules`: `RulesEngine` / `GameState` traits hosts program against
//! - `encoding`: Observation tensors
//! - `games`: The Abalone implementation
//! - `error`: Error types

pub mod core;
pub mod encoding;
pub mod error;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{ActionId, PlayerId, PlayerMap, NUM_PLAYERS};

pub use crate::rules::{GameResult, GameState, RulesEngine};

pub use crate::encoding::{AbaloneEncoder, EncodedState, StateEncoder};

pub use crate::error::{AbaloneError, BoardError, ConfigError, NotationError, StateError};

pub use crate::games::abalone::{
    AbaloneConfig, AbaloneGame, AbaloneGameBuilder, AbaloneState, Board, CellState, Coordinate,
    Direction, Layout, Move, MoveKind,
};
