//! Board state.
//!
//! Holds the complete 5x5 grid of a Neutron game at a given point in time.
//! The grid is a fixed-size array indexed by `Coord::index()`, so the state
//! is trivially copyable and never allocates.

use super::cell::Cell;
use super::coord::{Coord, BOARD_SIZE, CELL_COUNT};
use super::side::Side;
use crate::protocol::layout::LayoutError;

/// Pawns each side owns in a standard game.
pub const PAWNS_PER_SIDE: usize = BOARD_SIZE;

/// Complete board state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a board in the standard starting layout.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Creates a board with no pieces. Only layout parsing builds on this.
    pub(crate) fn empty() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Restores the starting layout: side two on row 0, the neutron in the
    /// centre, side one on row 4.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
        for col in 0..BOARD_SIZE {
            self.cells[col] = Cell::Pawn(Side::Two);
            self.cells[(BOARD_SIZE - 1) * BOARD_SIZE + col] = Cell::Pawn(Side::One);
        }
        let centre = BOARD_SIZE / 2;
        self.cells[centre * BOARD_SIZE + centre] = Cell::Neutron;
    }

    /// Builds a board from a literal grid of cell codes
    /// (0 empty, 1 and 2 pawns, 3 neutron).
    ///
    /// The grid must hold exactly one neutron. Pawn counts are not checked,
    /// so partial positions can be set up directly.
    pub fn from_grid(grid: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Board, LayoutError> {
        let mut board = Board::empty();
        for (row, codes) in grid.iter().enumerate() {
            for (col, &code) in codes.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or(LayoutError::InvalidCellCode(code))?;
                board.cells[row * BOARD_SIZE + col] = cell;
            }
        }
        board.check_neutron()?;
        Ok(board)
    }

    /// Returns the grid as cell codes.
    pub fn to_grid(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for (idx, cell) in self.cells.iter().enumerate() {
            grid[idx / BOARD_SIZE][idx % BOARD_SIZE] = cell.code();
        }
        grid
    }

    /// Errors unless exactly one neutron is on the board.
    pub(crate) fn check_neutron(&self) -> Result<(), LayoutError> {
        let neutrons = self.cells.iter().filter(|c| **c == Cell::Neutron).count();
        if neutrons != 1 {
            return Err(LayoutError::NeutronCount(neutrons));
        }
        Ok(())
    }

    /// Returns the occupant of a cell.
    pub fn occupant(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.index()] = cell;
    }

    /// Returns every cell holding one of `side`'s pawns, in row-major order.
    pub fn pawns_of(&self, side: Side) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Pawn(side))
            .map(|(idx, _)| Coord::from_index(idx))
            .collect()
    }

    /// Returns the cell holding the neutron.
    ///
    /// # Panics
    ///
    /// Panics if the board has no neutron. Every constructor guarantees one
    /// and legal moves preserve it, so this only fires on a core bug.
    pub fn neutron_position(&self) -> Coord {
        let idx = self
            .cells
            .iter()
            .position(|c| *c == Cell::Neutron)
            .expect("board invariant violated: no neutron on the board");
        Coord::from_index(idx)
    }

    /// Moves the occupant of `origin` into `target`, leaving `origin` empty.
    ///
    /// Performs no rule check: callers pass a target taken from
    /// `movegen::legal_targets(origin)`, which only yields empty cells.
    pub fn apply_move(&mut self, origin: Coord, target: Coord) {
        debug_assert!(
            self.occupant(target).is_empty(),
            "move target {} is occupied",
            target
        );
        let piece = std::mem::take(&mut self.cells[origin.index()]);
        self.cells[target.index()] = piece;
    }

    /// Number of occupied cells (11 in a standard game).
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Iterates the grid one row at a time, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIZE)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
