//! Board coordinates.
//!
//! A `Coord` is a (row, column) pair that is always on the board; raw
//! integer pairs go through `validate_coordinates` / `Coord::from_signed`
//! before they can be used to index the grid.

use std::fmt;

use serde::Serialize;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 5;

/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Returns true iff both values lie in `[0, BOARD_SIZE)`.
pub fn validate_coordinates(row: i64, col: i64) -> bool {
    let size = BOARD_SIZE as i64;
    (0..size).contains(&row) && (0..size).contains(&col)
}

/// An on-board cell position. Orders by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate, or `None` if it lies off the board.
    pub const fn new(row: u8, col: u8) -> Option<Coord> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Creates a coordinate from signed input, e.g. a parsed user selection.
    pub fn from_signed(row: i64, col: i64) -> Option<Coord> {
        if validate_coordinates(row, col) {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Creates a coordinate from a row-major cell index.
    pub(crate) const fn from_index(idx: usize) -> Coord {
        Coord {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major cell index.
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// The neighbouring cell one step along `(dr, dc)`, if it is on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Coord> {
        Coord::from_signed(
            self.row as i64 + dr as i64,
            self.col as i64 + dc as i64,
        )
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_bounds() {
        assert!(validate_coordinates(0, 0));
        assert!(validate_coordinates(4, 4));
        assert!(!validate_coordinates(5, 0));
        assert!(!validate_coordinates(0, 5));
        assert!(!validate_coordinates(-1, 2));
        assert!(!validate_coordinates(10, 10));
    }

    #[test]
    fn new_rejects_off_board() {
        assert!(Coord::new(4, 4).is_some());
        assert!(Coord::new(5, 0).is_none());
        assert!(Coord::from_signed(-1, 0).is_none());
    }

    #[test]
    fn index_roundtrip() {
        for idx in 0..CELL_COUNT {
            assert_eq!(Coord::from_index(idx).index(), idx);
        }
    }

    #[test]
    fn offset_stops_at_edge() {
        let corner = Coord::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 1), Coord::new(1, 1));
    }

    #[test]
    fn orders_by_row_then_column() {
        let mut coords = vec![
            Coord::new(2, 4).unwrap(),
            Coord::new(3, 2).unwrap(),
            Coord::new(2, 0).unwrap(),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                Coord::new(2, 0).unwrap(),
                Coord::new(2, 4).unwrap(),
                Coord::new(3, 2).unwrap(),
            ]
        );
    }

    #[test]
    fn display_as_pair() {
        assert_eq!(Coord::new(4, 0).unwrap().to_string(), "(4, 0)");
    }
}
