//! Abalone: two players push marbles on a 61-cell hexagon.
//!
//! ## Overview
//!
//! - **Geometry**: coordinates and the six directions of the hex grid
//! - **Board**: cell states and starting layouts
//! - **Moves**: structured moves and the 2430-id action space
//! - **Validation / application**: the pushing and broadside rules
//! - **Notation**: `"c3d3"` / `"e4e3f5"` move text
//! - **State / game**: the `GameState` and `RulesEngine` implementations
//!
//! ## Usage
//!
//! ```
//! use abalone_engine::games::abalone::AbaloneGameBuilder;
//! use abalone_engine::rules::GameState;
//!
//! let (_game, mut state) = AbaloneGameBuilder::new().max_moves(10).build().unwrap();
//! while !state.is_terminal() {
//!     let action = state.legal_actions()[0];
//!     state.apply_action(action).unwrap();
//! }
//! assert_eq!(state.num_moves(), 10);
//! ```

pub mod apply;
pub mod board;
pub mod config;
pub mod game;
pub mod geometry;
pub mod moves;
pub mod notation;
pub mod state;
pub mod validate;

pub use apply::apply;
pub use board::{Board, CellState, Layout, MARBLES_PER_PLAYER, NUM_CELL_STATES};
pub use config::AbaloneConfig;
pub use game::{AbaloneGame, AbaloneGameBuilder};
pub use geometry::{Coordinate, Direction, NUM_CELLS, NUM_COLS, NUM_DIRECTIONS, NUM_ROWS};
pub use moves::{Move, MoveKind, NUM_DISTINCT_ACTIONS};
pub use notation::{cell_to_string, parse_cell};
pub use state::AbaloneState;
pub use validate::is_valid;
