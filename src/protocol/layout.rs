//! Compact board layout notation.
//!
//! A layout lists the five rows top to bottom, separated by `/`, each row
//! being five cell codes: `0` empty, `1` and `2` pawns, `3` the neutron.
//! The starting position is `22222/00000/00300/00000/11111`.

use crate::board::{Board, Cell, Coord, BOARD_SIZE};

/// Layout of the standard starting position.
pub const INITIAL_LAYOUT: &str = "22222/00000/00300/00000/11111";

/// Errors that can occur when building a board from a layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("expected 5 rows separated by '/', got {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} cells, expected 5")]
    WrongRowLength { row: usize, len: usize },

    #[error("invalid cell character: '{0}'")]
    InvalidCellChar(char),

    #[error("invalid cell code: {0}")]
    InvalidCellCode(u8),

    #[error("expected exactly one neutron, found {0}")]
    NeutronCount(usize),
}

/// Parses a layout string into a board.
pub fn parse_layout(s: &str) -> Result<Board, LayoutError> {
    let rows: Vec<&str> = s.trim().split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(LayoutError::WrongRowCount(rows.len()));
    }

    let mut board = Board::empty();
    for (row, text) in rows.iter().enumerate() {
        let len = text.chars().count();
        if len != BOARD_SIZE {
            return Err(LayoutError::WrongRowLength { row, len });
        }
        for (col, ch) in text.chars().enumerate() {
            let cell = ch
                .to_digit(10)
                .and_then(|d| Cell::from_code(d as u8))
                .ok_or(LayoutError::InvalidCellChar(ch))?;
            if let Some(coord) = Coord::new(row as u8, col as u8) {
                board.set(coord, cell);
            }
        }
    }

    board.check_neutron()?;
    Ok(board)
}

/// Encodes a board as a layout string.
pub fn encode_layout(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
    for (i, row) in board.rows().enumerate() {
        if i > 0 {
            out.push('/');
        }
        for cell in row {
            out.push(char::from(b'0' + cell.code()));
        }
    }
    out
}
