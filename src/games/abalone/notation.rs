//! Human-editable move notation.
//!
//! A cell is a row letter (`a` is the bottom row, `i` the top) followed by
//! a column digit (`1`..`9`, left to right). In-line moves are written as
//! start and end cell (`"c3d3"`); broadside moves add a third cell, the
//! start cell stepped once along the direction of travel (`"e4e3f5"`).

use std::fmt;
use std::str::FromStr;

use super::geometry::{Coordinate, Direction, NUM_ROWS};
use super::moves::Move;
use super::validate::slide_line;
use crate::error::NotationError;

pub(crate) fn row_char(row: i32) -> char {
    u32::try_from(i32::from(b'a') + (NUM_ROWS as i32 - 1) - row)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or('?')
}

fn col_char(col: i32) -> char {
    u32::try_from(i32::from(b'1') + col)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or('?')
}

/// Write a cell such as `"e5"`. Off-grid cells still render, with letters
/// past `i` or digits below `1`.
pub fn cell_to_string(coord: Coordinate) -> String {
    format!("{}{}", row_char(coord.row), col_char(coord.col))
}

/// Parse a two-character cell such as `"e5"`.
pub fn parse_cell(text: &str) -> Result<Coordinate, NotationError> {
    let bad = || NotationError::BadCoordinate(text.to_string());
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(bad());
    }
    let row_letter = bytes[0].to_ascii_lowercase();
    let col_digit = bytes[1];
    if !(b'a'..=b'i').contains(&row_letter) || !(b'1'..=b'9').contains(&col_digit) {
        return Err(bad());
    }
    let row = (NUM_ROWS as i32 - 1) - i32::from(row_letter - b'a');
    let col = i32::from(col_digit - b'1');
    Ok(Coordinate::new(row, col))
}

impl Move {
    /// Notation for this move; see the module docs.
    #[must_use]
    pub fn to_notation(&self) -> String {
        let mut text = cell_to_string(self.start);
        text.push_str(&cell_to_string(self.end));
        if !self.is_inline() {
            text.push_str(&cell_to_string(self.start.step(self.direction)));
        }
        text
    }

    /// Parse notation back into a move.
    ///
    /// For broadsides the line may be written from either end: the result
    /// is normalised so the slide axis is a sister of the direction of
    /// travel, matching what the action decoder produces.
    pub fn from_notation(text: &str) -> Result<Self, NotationError> {
        if !text.is_ascii() {
            return Err(NotationError::BadCoordinate(text.to_string()));
        }
        match text.len() {
            4 => {
                let start = parse_cell(&text[0..2])?;
                let end = parse_cell(&text[2..4])?;
                let direction =
                    Direction::from_offset(end - start).ok_or(NotationError::NoDirection)?;
                Ok(Move::new(direction, start, end))
            }
            6 => {
                let start = parse_cell(&text[0..2])?;
                let line_end = parse_cell(&text[2..4])?;
                let stepped = parse_cell(&text[4..6])?;
                let direction =
                    Direction::from_offset(stepped - start).ok_or(NotationError::NoDirection)?;

                let mv = Move::new(direction, start, line_end);
                slide_line(&mv).ok_or(NotationError::BadSlide)?;

                let axis = (line_end - start).signum();
                let (front, back) = direction.sisters();
                if axis == front.offset() || axis == back.offset() {
                    Ok(mv)
                } else {
                    Ok(Move::new(direction, line_end, start))
                }
            }
            n => Err(NotationError::BadLength(n)),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_notation(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActionId;

    #[test]
    fn test_cell_round_trip() {
        assert_eq!(parse_cell("a1"), Ok(Coordinate::new(8, 0)));
        assert_eq!(parse_cell("I9"), Ok(Coordinate::new(0, 8)));
        assert_eq!(cell_to_string(Coordinate::new(4, 4)), "e5");
        assert_eq!(cell_to_string(Coordinate::new(6, 2)), "c3");
    }

    #[test]
    fn test_parse_cell_rejects_out_of_range() {
        assert!(parse_cell("j1").is_err());
        assert!(parse_cell("a0").is_err());
        assert!(parse_cell("e").is_err());
    }

    #[test]
    fn test_inline_notation() {
        let mv = Move::from_action(ActionId::new(1260));
        assert_eq!(mv.to_notation(), "e7e8");
        assert_eq!("e7e8".parse::<Move>(), Ok(mv));
    }

    #[test]
    fn test_broadside_notation() {
        let mv = Move::from_action(ActionId::new(1177));
        assert_eq!(mv.to_string(), "e4e3f5");
        assert_eq!(Move::from_notation("e4e3f5"), Ok(mv));
    }

    #[test]
    fn test_broadside_written_from_other_end() {
        let canonical = Move::from_action(ActionId::new(1177));
        assert_eq!(Move::from_notation("e3e4f4"), Ok(canonical));
        assert_eq!(Move::from_notation("E3E4F4"), Ok(canonical));
    }

    #[test]
    fn test_rejects_bad_length() {
        assert_eq!(Move::from_notation("e3e"), Err(NotationError::BadLength(3)));
        assert_eq!(Move::from_notation("e3e4f4a"), Err(NotationError::BadLength(7)));
        assert_eq!(Move::from_notation(""), Err(NotationError::BadLength(0)));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        // not neighbours
        assert_eq!(Move::from_notation("e3e5"), Err(NotationError::NoDirection));
        // third cell not adjacent to start
        assert_eq!(Move::from_notation("e3e4g3"), Err(NotationError::NoDirection));
        // line parallel to travel
        assert_eq!(Move::from_notation("e3e5e4"), Err(NotationError::BadSlide));
        // line of four
        assert_eq!(Move::from_notation("e3e6f3"), Err(NotationError::BadSlide));
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert!(Move::from_notation("é3e4").is_err());
    }
}
