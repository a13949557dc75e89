//! Cell contents.
//!
//! A cell is empty, holds a pawn owned by one side, or holds the neutron.
//! Cells are written as the integer codes 0 (empty), 1 and 2 (pawns of
//! side one and two) and 3 (neutron) in board layouts.

use serde::Serialize;

use super::side::Side;

/// The occupant of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Pawn(Side),
    Neutron,
}

/// Code used for the neutron in layouts.
pub const NEUTRON_CODE: u8 = 3;

impl Cell {
    /// Returns the layout code of this cell.
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Pawn(side) => side.id(),
            Cell::Neutron => NEUTRON_CODE,
        }
    }

    /// Parses a cell from its layout code.
    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            NEUTRON_CODE => Some(Cell::Neutron),
            _ => Side::from_id(code).map(Cell::Pawn),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the kind of piece in this cell, if any.
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Pawn(_) => Some(Piece::Pawn),
            Cell::Neutron => Some(Piece::Neutron),
        }
    }
}

/// The kind of piece a move relocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Pawn,
    Neutron,
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Pawn => f.write_str("pawn"),
            Piece::Neutron => f.write_str("neutron"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for cell in [
            Cell::Empty,
            Cell::Pawn(Side::One),
            Cell::Pawn(Side::Two),
            Cell::Neutron,
        ] {
            assert_eq!(Cell::from_code(cell.code()), Some(cell));
        }
        assert_eq!(Cell::from_code(4), None);
    }

    #[test]
    fn codes_match_layout_convention() {
        assert_eq!(Cell::Empty.code(), 0);
        assert_eq!(Cell::Pawn(Side::One).code(), 1);
        assert_eq!(Cell::Pawn(Side::Two).code(), 2);
        assert_eq!(Cell::Neutron.code(), 3);
    }

    #[test]
    fn piece_kind() {
        assert_eq!(Cell::Empty.piece(), None);
        assert_eq!(Cell::Pawn(Side::Two).piece(), Some(Piece::Pawn));
        assert_eq!(Cell::Neutron.piece(), Some(Piece::Neutron));
    }
}
