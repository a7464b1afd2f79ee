//! Board model: cell states, starting layouts, checked access.
//!
//! The hexagon is stored as a square grid with unused corners marked
//! `Invalid` (`X` below). Each row is shifted half a cell relative to the
//! one above, so the grid columns are the board's diagonals. Classic
//! layout:
//!
//! ```text
//! i  X X X X 2 2 2 2 2
//! h  X X X 2 2 2 2 2 2
//! g  X X . . 2 2 2 . .
//! f  X . . . . . . . .
//! e  . . . . . . . . .
//! d  . . . . . . . . X
//! c  . . 1 1 1 . . X X
//! b  1 1 1 1 1 1 X X X
//! a  1 1 1 1 1 X X X X
//!    1 2 3 4 5 6 7 8 9
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::geometry::{Coordinate, NUM_CELLS, NUM_COLS, NUM_ROWS};
use crate::core::PlayerId;
use crate::error::{BoardError, ConfigError};

/// Marbles each side starts with in every supported layout.
pub const MARBLES_PER_PLAYER: u8 = 14;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Outside the hexagonal playing area. Never changes.
    Invalid,
    Empty,
    /// Marble of player 0.
    PlayerA,
    /// Marble of player 1.
    PlayerB,
}

impl CellState {
    /// The marble colour of `player`.
    #[must_use]
    pub const fn of_player(player: PlayerId) -> Self {
        match player.0 {
            0 => CellState::PlayerA,
            _ => CellState::PlayerB,
        }
    }

    /// The player owning a marble in this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            CellState::PlayerA => Some(PlayerId::new(0)),
            CellState::PlayerB => Some(PlayerId::new(1)),
            CellState::Invalid | CellState::Empty => None,
        }
    }

    /// Observation plane of this state: Invalid, Empty, PlayerA, PlayerB.
    #[must_use]
    pub const fn plane(self) -> usize {
        match self {
            CellState::Invalid => 0,
            CellState::Empty => 1,
            CellState::PlayerA => 2,
            CellState::PlayerB => 3,
        }
    }

    /// Single-character glyph used by the board dump.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            CellState::Invalid => ' ',
            CellState::Empty => '.',
            CellState::PlayerA => '1',
            CellState::PlayerB => '2',
        }
    }
}

/// Number of distinct cell states (observation planes).
pub const NUM_CELL_STATES: usize = 4;

const X: CellState = CellState::Invalid;
const O: CellState = CellState::Empty;
const A: CellState = CellState::PlayerA;
const B: CellState = CellState::PlayerB;

type Grid = [[CellState; NUM_COLS]; NUM_ROWS];

const VALID_MASK: Grid = [
    [X, X, X, X, O, O, O, O, O], // i
    [X, X, X, O, O, O, O, O, O], // h
    [X, X, O, O, O, O, O, O, O], // g
    [X, O, O, O, O, O, O, O, O], // f
    [O, O, O, O, O, O, O, O, O], // e
    [O, O, O, O, O, O, O, O, X], // d
    [O, O, O, O, O, O, O, X, X], // c
    [O, O, O, O, O, O, X, X, X], // b
    [O, O, O, O, O, X, X, X, X], // a
];

const CLASSIC: Grid = [
    [X, X, X, X, B, B, B, B, B],
    [X, X, X, B, B, B, B, B, B],
    [X, X, O, O, B, B, B, O, O],
    [X, O, O, O, O, O, O, O, O],
    [O, O, O, O, O, O, O, O, O],
    [O, O, O, O, O, O, O, O, X],
    [O, O, A, A, A, O, O, X, X],
    [A, A, A, A, A, A, X, X, X],
    [A, A, A, A, A, X, X, X, X],
];

// https://abaloneonline.wordpress.com/variations/the-classics/
const BELGIAN_DAISY: Grid = [
    [X, X, X, X, B, B, O, A, A],
    [X, X, X, B, B, B, A, A, A],
    [X, X, O, B, B, O, A, A, O],
    [X, O, O, O, O, O, O, O, O],
    [O, O, O, O, O, O, O, O, O],
    [O, O, O, O, O, O, O, O, X],
    [O, A, A, O, B, B, O, X, X],
    [A, A, A, B, B, B, X, X, X],
    [A, A, O, B, B, X, X, X, X],
];

/// Named starting layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Standard competitive opening.
    #[default]
    Classic,
    BelgianDaisy,
}

impl Layout {
    fn grid(self) -> &'static Grid {
        match self {
            Layout::Classic => &CLASSIC,
            Layout::BelgianDaisy => &BELGIAN_DAISY,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Layout::Classic => "classic",
            Layout::BelgianDaisy => "belgian_daisy",
        }
    }
}

impl FromStr for Layout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "classic" => Ok(Layout::Classic),
            "belgian_daisy" => Ok(Layout::BelgianDaisy),
            _ => Err(ConfigError::UnknownLayout(s.to_string())),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-size grid of cell states, row-major.
///
/// The Invalid mask is fixed at construction; only Empty and marble cells
/// change afterwards. Deserialization rejects grids of the wrong size or
/// with a different mask.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<CellState>", into = "Vec<CellState>")]
pub struct Board {
    cells: Vec<CellState>,
}

impl Board {
    fn from_grid(grid: &Grid) -> Self {
        Self {
            cells: grid.iter().flatten().copied().collect(),
        }
    }

    /// Board set up with a starting layout.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self::from_grid(layout.grid())
    }

    /// Board with every playable cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_grid(&VALID_MASK)
    }

    /// Cell state at `coord`, or `None` off the grid.
    #[must_use]
    pub fn get(&self, coord: Coordinate) -> Option<CellState> {
        coord.cell_index().map(|i| self.cells[i])
    }

    /// Cell state at `coord`; anything off the grid reads as `Invalid`.
    #[must_use]
    pub fn at(&self, coord: Coordinate) -> CellState {
        self.get(coord).unwrap_or(CellState::Invalid)
    }

    /// Cell state by (row, col).
    #[must_use]
    pub fn at_rc(&self, row: i32, col: i32) -> CellState {
        self.at(Coordinate::new(row, col))
    }

    /// Write a playable cell.
    ///
    /// Fails for coordinates off the grid, for writes into an Invalid cell,
    /// and for attempts to write `Invalid` itself.
    pub fn set(&mut self, coord: Coordinate, state: CellState) -> Result<(), BoardError> {
        let index = coord.cell_index().ok_or(BoardError::OutOfBounds {
            row: coord.row,
            col: coord.col,
        })?;
        if self.cells[index] == CellState::Invalid || state == CellState::Invalid {
            return Err(BoardError::InvalidCell {
                row: coord.row,
                col: coord.col,
            });
        }
        self.cells[index] = state;
        Ok(())
    }

    /// Write a cell known to be playable. Off-grid and Invalid targets are
    /// left untouched.
    pub(crate) fn put(&mut self, coord: Coordinate, state: CellState) {
        if let Some(index) = coord.cell_index() {
            if self.cells[index] != CellState::Invalid {
                self.cells[index] = state;
            }
        }
    }

    /// Whether `coord` is a playable (non-Invalid) cell.
    #[must_use]
    pub fn is_playable(&self, coord: Coordinate) -> bool {
        self.at(coord) != CellState::Invalid
    }

    /// Number of marbles `player` has on the board.
    #[must_use]
    pub fn marble_count(&self, player: PlayerId) -> u8 {
        let colour = CellState::of_player(player);
        self.cells.iter().filter(|&&c| c == colour).count() as u8
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterate over (coordinate, state) pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, CellState)> + '_ {
        self.cells.iter().enumerate().map(|(i, &c)| {
            let coord = Coordinate::new((i / NUM_COLS) as i32, (i % NUM_COLS) as i32);
            (coord, c)
        })
    }

    /// Whether both boards mask the same cells as Invalid.
    #[must_use]
    pub fn same_mask(&self, other: &Board) -> bool {
        self.cells.len() == NUM_CELLS
            && other.cells.len() == NUM_CELLS
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| (*a == CellState::Invalid) == (*b == CellState::Invalid))
    }
}

impl TryFrom<Vec<CellState>> for Board {
    type Error = BoardError;

    fn try_from(cells: Vec<CellState>) -> Result<Self, Self::Error> {
        if cells.len() != NUM_CELLS {
            return Err(BoardError::WrongSize(cells.len()));
        }
        let board = Self { cells };
        if !board.same_mask(&Board::empty()) {
            return Err(BoardError::MaskMismatch);
        }
        Ok(board)
    }
}

impl From<Board> for Vec<CellState> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_share_valid_mask() {
        let mask = Board::empty();
        for layout in [Layout::Classic, Layout::BelgianDaisy] {
            assert!(Board::new(layout).same_mask(&mask), "{layout} mask differs");
        }
    }

    #[test]
    fn test_layouts_have_fourteen_marbles_each() {
        for layout in [Layout::Classic, Layout::BelgianDaisy] {
            let board = Board::new(layout);
            assert_eq!(board.marble_count(PlayerId::new(0)), MARBLES_PER_PLAYER);
            assert_eq!(board.marble_count(PlayerId::new(1)), MARBLES_PER_PLAYER);
        }
    }

    #[test]
    fn test_playable_cell_count() {
        let board = Board::empty();
        let playable = board.iter().filter(|(_, c)| *c != CellState::Invalid).count();
        assert_eq!(playable, 61);
    }

    #[test]
    fn test_at_fails_closed() {
        let board = Board::new(Layout::Classic);
        assert_eq!(board.at_rc(-1, 4), CellState::Invalid);
        assert_eq!(board.at_rc(4, 9), CellState::Invalid);
        assert_eq!(board.get(Coordinate::new(9, 9)), None);
        assert_eq!(board.at_rc(8, 0), CellState::PlayerA);
        assert_eq!(board.at_rc(0, 4), CellState::PlayerB);
    }

    #[test]
    fn test_set_rejects_invalid_cells() {
        let mut board = Board::empty();

        assert_eq!(
            board.set(Coordinate::new(0, 0), CellState::PlayerA),
            Err(BoardError::InvalidCell { row: 0, col: 0 })
        );
        assert_eq!(
            board.set(Coordinate::new(4, 4), CellState::Invalid),
            Err(BoardError::InvalidCell { row: 4, col: 4 })
        );
        assert_eq!(
            board.set(Coordinate::new(-1, 3), CellState::Empty),
            Err(BoardError::OutOfBounds { row: -1, col: 3 })
        );

        board.set(Coordinate::new(4, 4), CellState::PlayerB).unwrap();
        assert_eq!(board.at_rc(4, 4), CellState::PlayerB);
    }

    #[test]
    fn test_put_never_touches_invalid() {
        let mut board = Board::empty();
        board.put(Coordinate::new(0, 0), CellState::PlayerA);
        board.put(Coordinate::new(12, 0), CellState::PlayerA);
        assert!(board.same_mask(&Board::empty()));
        assert_eq!(board.marble_count(PlayerId::new(0)), 0);
    }

    #[test]
    fn test_serde_checks_shape_and_mask() {
        let board = Board::new(Layout::BelgianDaisy);
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, restored);

        let short = serde_json::to_string(&board.cells()[..80]).unwrap();
        assert!(serde_json::from_str::<Board>(&short).is_err());

        let mut unmasked: Vec<CellState> = board.into();
        unmasked[0] = CellState::Empty;
        assert_eq!(Board::try_from(unmasked), Err(BoardError::MaskMismatch));
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("classic".parse::<Layout>(), Ok(Layout::Classic));
        assert_eq!("Belgian-Daisy".parse::<Layout>(), Ok(Layout::BelgianDaisy));
        assert_eq!(
            "german_daisy".parse::<Layout>(),
            Err(ConfigError::UnknownLayout("german_daisy".to_string()))
        );
    }

    #[test]
    fn test_cell_state_owner_roundtrip() {
        for player in PlayerId::all(2) {
            assert_eq!(CellState::of_player(player).owner(), Some(player));
        }
        assert_eq!(CellState::Empty.owner(), None);
        assert_eq!(CellState::Invalid.owner(), None);
    }
}
