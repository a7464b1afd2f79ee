//! Host contract for game implementations.
//!
//! Games implement two traits:
//! - `RulesEngine`: the game descriptor (action space, utilities, shapes)
//!   and the factory for initial states
//! - `GameState`: a position that can be queried, advanced and copied
//!
//! Hosts (trainers, search, test harnesses) drive games only through
//! these traits and never interpret game-specific concepts directly.

pub mod engine;
pub mod state;

pub use engine::{GameResult, RulesEngine};
pub use state::GameState;
