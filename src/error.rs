//! Error types for board access, notation parsing, configuration, and play.
//!
//! Illegal moves are not errors: submitting one forfeits the game. These
//! types cover the remaining failure paths.

/// Errors from checked board writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell ({row}, {col}) is not part of the playing area")]
    InvalidCell { row: i32, col: i32 },

    #[error("board must have 81 cells, got {0}")]
    WrongSize(usize),

    #[error("board does not match the hexagonal playing area")]
    MaskMismatch,
}

/// Errors from parsing textual move notation such as `"c3d3"` or `"e4e3f5"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("notation must be 4 or 6 characters, got {0}")]
    BadLength(usize),

    #[error("coordinate {0:?} is outside the board")]
    BadCoordinate(String),

    #[error("displacement matches no direction")]
    NoDirection,

    #[error("slide span is not a line of 2 or 3 marbles across the move direction")]
    BadSlide,
}

/// Errors from loading or validating a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("marbles_to_win must be in 1..=14, got {0}")]
    MarblesToWin(u8),

    #[error("max_moves must be at least 1")]
    MaxMoves,

    #[error("unknown layout: {0:?}")]
    UnknownLayout(String),
}

/// Errors from driving a game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("game is already over")]
    GameOver,
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbaloneError {
    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("notation error: {0}")]
    Notation(#[from] NotationError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("state error: {0}")]
    State(#[from] StateError),
}
