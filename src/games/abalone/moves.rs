//! Structured moves and the action-id bijection.
//!
//! An action id packs, most significant first: origin row, origin column,
//! direction (0-5) and move kind (0-4):
//!
//! ```text
//! id = ((row * 9 + col) * 6 + direction) * 5 + kind
//! ```
//!
//! Kinds relative to direction `D` with sisters `(S1, S2) = (D+1, D+2)`:
//!
//! | kind | end                  | meaning                       |
//! |------|----------------------|-------------------------------|
//! | 0    | start + D            | in-line move of 1-3 marbles   |
//! | 1    | start + S1           | broadside of 2, front sister  |
//! | 2    | start + S2           | broadside of 2, back sister   |
//! | 3    | start + 2 * S1       | broadside of 3, front sister  |
//! | 4    | start + 2 * S2       | broadside of 3, back sister   |

use serde::{Deserialize, Serialize};

use super::geometry::{Coordinate, Direction, NUM_CELLS, NUM_COLS, NUM_DIRECTIONS};
use crate::core::ActionId;

/// Number of move kinds per (cell, direction).
pub const NUM_MOVE_KINDS: usize = 5;

/// Number of actions per origin cell.
pub const NUM_ACTIONS_PER_CELL: usize = NUM_DIRECTIONS * NUM_MOVE_KINDS;

/// Size of the action space.
pub const NUM_DISTINCT_ACTIONS: usize = NUM_CELLS * NUM_ACTIONS_PER_CELL;

/// The five move shapes an action id can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    InLine = 0,
    SlideTwoFront = 1,
    SlideTwoBack = 2,
    SlideThreeFront = 3,
    SlideThreeBack = 4,
}

impl MoveKind {
    pub const ALL: [MoveKind; NUM_MOVE_KINDS] = [
        MoveKind::InLine,
        MoveKind::SlideTwoFront,
        MoveKind::SlideTwoBack,
        MoveKind::SlideThreeFront,
        MoveKind::SlideThreeBack,
    ];

    /// Displacement from start to end for a move in `direction`.
    #[must_use]
    pub fn span(self, direction: Direction) -> Coordinate {
        let (front, back) = direction.sisters();
        match self {
            MoveKind::InLine => direction.offset(),
            MoveKind::SlideTwoFront => front.offset(),
            MoveKind::SlideTwoBack => back.offset(),
            MoveKind::SlideThreeFront => front.offset() * 2,
            MoveKind::SlideThreeBack => back.offset() * 2,
        }
    }
}

/// A move: direction of travel plus the start and end of the marble line.
///
/// In-line moves have `end - start == direction.offset()`; `start` is the
/// rearmost marble of the pushing line. Broadside moves span the sideways
/// line of 2 or 3 marbles from `start` to `end`, and every marble of that
/// line steps once along `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub direction: Direction,
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Move {
    #[must_use]
    pub const fn new(direction: Direction, start: Coordinate, end: Coordinate) -> Self {
        Self {
            direction,
            start,
            end,
        }
    }

    /// Whether this is an in-line move (as opposed to a broadside).
    #[must_use]
    pub fn is_inline(&self) -> bool {
        self.end - self.start == self.direction.offset()
    }

    /// The kind whose span matches this move, if any.
    #[must_use]
    pub fn kind(&self) -> Option<MoveKind> {
        let span = self.end - self.start;
        MoveKind::ALL
            .into_iter()
            .find(|k| k.span(self.direction) == span)
    }

    /// Decode an action id.
    ///
    /// Total: ids past the end of the action space decode to origins off the
    /// grid, which validation rejects.
    #[must_use]
    pub fn from_action(action: ActionId) -> Self {
        let mut remains = action.index();
        let kind = MoveKind::ALL[remains % NUM_MOVE_KINDS];
        remains /= NUM_MOVE_KINDS;
        let direction = Direction::from_index(remains % NUM_DIRECTIONS);
        remains /= NUM_DIRECTIONS;
        let col = (remains % NUM_COLS) as i32;
        let row = i32::try_from(remains / NUM_COLS).unwrap_or(i32::MAX);

        let start = Coordinate::new(row, col);
        Self::new(direction, start, start + kind.span(direction))
    }

    /// Encode back to an action id.
    ///
    /// Returns `None` when the origin is off the grid or the span matches
    /// none of the five kinds.
    #[must_use]
    pub fn to_action(&self) -> Option<ActionId> {
        let cell = self.start.cell_index()?;
        let kind = self.kind()?;
        let id = (cell * NUM_DIRECTIONS + self.direction.index()) * NUM_MOVE_KINDS + kind as usize;
        Some(ActionId::new(id as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_space_size() {
        assert_eq!(NUM_ACTIONS_PER_CELL, 30);
        assert_eq!(NUM_DISTINCT_ACTIONS, 2430);
    }

    #[test]
    fn test_decode_layout() {
        // row 4, col 6, Right, in-line
        let mv = Move::from_action(ActionId::new(1260));
        assert_eq!(mv.direction, Direction::Right);
        assert_eq!(mv.start, Coordinate::new(4, 6));
        assert_eq!(mv.end, Coordinate::new(4, 7));
        assert!(mv.is_inline());

        // row 4, col 3, UpRight, back sister (Left) slide of two
        let mv = Move::from_action(ActionId::new(1177));
        assert_eq!(mv.direction, Direction::UpRight);
        assert_eq!(mv.start, Coordinate::new(4, 3));
        assert_eq!(mv.end, Coordinate::new(4, 2));
        assert_eq!(mv.kind(), Some(MoveKind::SlideTwoBack));
        assert!(!mv.is_inline());

        // row 4, col 4, UpRight, back sister slide of three
        let mv = Move::from_action(ActionId::new(1209));
        assert_eq!(mv.end, Coordinate::new(4, 2));
        assert_eq!(mv.kind(), Some(MoveKind::SlideThreeBack));
    }

    #[test]
    fn test_bijection_over_action_space() {
        for action in ActionId::all(NUM_DISTINCT_ACTIONS) {
            let mv = Move::from_action(action);
            assert_eq!(mv.to_action(), Some(action), "id {action} decoded to {mv:?}");
        }
    }

    #[test]
    fn test_out_of_range_ids_decode_off_grid() {
        let mv = Move::from_action(ActionId::new(NUM_DISTINCT_ACTIONS as u32));
        assert!(!mv.start.in_grid());
        assert_eq!(mv.to_action(), None);

        let mv = Move::from_action(ActionId::new(u32::MAX));
        assert!(!mv.start.in_grid());
    }

    #[test]
    fn test_to_action_rejects_foreign_spans() {
        let mv = Move::new(Direction::Right, Coordinate::new(4, 4), Coordinate::new(4, 6));
        assert_eq!(mv.kind(), None);
        assert_eq!(mv.to_action(), None);
    }
}
