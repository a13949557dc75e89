//! Straight-line slide generation.

use crate::board::{Board, Coord};

/// A unit step `(row delta, column delta)`.
pub type Direction = (i8, i8);

/// The eight compass directions, in row-major order of their deltas.
pub const DIRECTIONS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Returns the farthest cell reachable from `origin` along `direction`.
///
/// Steps while the next cell is on the board and empty. Returns `origin`
/// itself when the first step is already off the board or occupied, i.e.
/// when no move is possible in that direction.
pub fn max_slide(board: &Board, origin: Coord, direction: Direction) -> Coord {
    let (dr, dc) = direction;
    if dr == 0 && dc == 0 {
        return origin;
    }

    let mut current = origin;
    while let Some(next) = current.offset(dr, dc) {
        if !board.occupant(next).is_empty() {
            break;
        }
        current = next;
    }
    current
}

/// Returns every legal destination for the piece on `origin`, sorted by
/// (row, column) and without duplicates. Never contains `origin`.
pub fn legal_targets(board: &Board, origin: Coord) -> Vec<Coord> {
    let mut targets: Vec<Coord> = DIRECTIONS
        .iter()
        .map(|&dir| max_slide(board, origin, dir))
        .filter(|&target| target != origin)
        .collect();
    targets.sort();
    targets.dedup();
    targets
}
