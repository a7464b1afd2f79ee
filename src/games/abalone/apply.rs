//! Move application.
//!
//! Callers validate first; applying an illegal move leaves the board in an
//! unspecified (but memory-safe) state.

use tracing::debug;

use super::board::{Board, CellState};
use super::moves::Move;
use super::validate::slide_line;

/// Apply a validated move to `board`.
///
/// Returns the marble pushed out of play, if any.
pub fn apply(mv: &Move, board: &mut Board) -> Option<CellState> {
    if mv.is_inline() {
        apply_inline(mv, board)
    } else {
        apply_slide(mv, board);
        None
    }
}

/// Shift the line starting at `mv.start` one step forward, each cell taking
/// the value of the cell behind it, until an empty cell absorbs the front
/// marble or the front marble leaves the playing area.
fn apply_inline(mv: &Move, board: &mut Board) -> Option<CellState> {
    let mut cursor = mv.start;
    let mut carried = CellState::Empty;

    loop {
        let current = board.at(cursor);
        if current == CellState::Invalid {
            debug!(marble = ?carried, from = ?mv.start, "marble pushed off the board");
            return Some(carried);
        }
        board.put(cursor, carried);
        if current == CellState::Empty {
            return None;
        }
        carried = current;
        cursor = cursor.step(mv.direction);
    }
}

fn apply_slide(mv: &Move, board: &mut Board) {
    let Some(line) = slide_line(mv) else {
        return;
    };
    for cell in line {
        let marble = board.at(cell);
        board.put(cell.step(mv.direction), marble);
        board.put(cell, CellState::Empty);
    }
}
