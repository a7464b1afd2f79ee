//! Move legality.
//!
//! In-line moves use one line scan: count the mover's marbles from the
//! start cell, then the opponent's marbles directly ahead, then look at the
//! cell beyond. A push succeeds only against a strictly shorter opposing
//! line, and only when the cell beyond it is empty or off the board.

use smallvec::SmallVec;

use super::board::{Board, CellState};
use super::geometry::{Coordinate, Direction};
use super::moves::Move;
use crate::core::PlayerId;

/// Longest line of marbles a player may move at once.
pub const MAX_LINE: usize = 3;

/// Whether `mv` is legal for `mover` on `board`.
///
/// Never panics; any malformed geometry is simply illegal.
#[must_use]
pub fn is_valid(mv: &Move, board: &Board, mover: PlayerId) -> bool {
    if !mv.start.in_grid() || !mv.end.in_grid() {
        return false;
    }
    if board.at(mv.start) != CellState::of_player(mover) {
        return false;
    }

    if mv.is_inline() {
        is_valid_inline(mv, board, mover)
    } else {
        slide_line(mv).is_some_and(|line| is_valid_slide(&line, mv.direction, board, mover))
    }
}

fn is_valid_inline(mv: &Move, board: &Board, mover: PlayerId) -> bool {
    let own = CellState::of_player(mover);
    let opponent = CellState::of_player(mover.opponent());
    let mut cursor = mv.start;

    let mut own_count = 0;
    while board.at(cursor) == own {
        own_count += 1;
        if own_count > MAX_LINE {
            return false;
        }
        cursor = cursor.step(mv.direction);
    }

    let mut opponent_count = 0;
    while board.at(cursor) == opponent {
        opponent_count += 1;
        if opponent_count >= own_count {
            return false;
        }
        cursor = cursor.step(mv.direction);
    }

    match board.at(cursor) {
        CellState::Empty => true,
        // a push may drop the last opposing marble off the board
        CellState::Invalid => opponent_count > 0,
        CellState::PlayerA | CellState::PlayerB => false,
    }
}

/// Cells of a broadside line, from `start` to `end` inclusive.
///
/// The span must be one or two steps along a single axis that is not
/// parallel to the direction of travel.
pub(crate) fn slide_line(mv: &Move) -> Option<SmallVec<[Coordinate; MAX_LINE]>> {
    let span = mv.end - mv.start;
    let unit = span.signum();
    let axis = Direction::from_offset(unit)?;
    if axis == mv.direction || axis == mv.direction.reverse() {
        return None;
    }
    let length = if span == unit {
        2
    } else if span == unit * 2 {
        3
    } else {
        return None;
    };

    Some((0..length).map(|i| mv.start + unit * i).collect())
}

fn is_valid_slide(
    line: &[Coordinate],
    direction: Direction,
    board: &Board,
    mover: PlayerId,
) -> bool {
    let own = CellState::of_player(mover);
    line.iter()
        .all(|&cell| board.at(cell) == own && board.at(cell.step(direction)) == CellState::Empty)
}
