//! Board representation and piece types.
//!
//! Contains the 5x5 grid, board coordinates, the two sides, and the cell
//! contents that move generation and the turn engine operate on.

pub mod cell;
pub mod coord;
pub mod side;
pub mod state;

pub use cell::{Cell, Piece};
pub use coord::{validate_coordinates, Coord, BOARD_SIZE, CELL_COUNT};
pub use side::{Side, ALL_SIDES};
pub use state::{Board, PAWNS_PER_SIDE};
