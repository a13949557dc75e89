//! Legal move generation.
//!
//! Every piece, pawn or neutron, moves the same way: it slides in a straight
//! line along one of eight directions and stops on the last empty cell before
//! the board edge or another piece.

pub mod slide;

pub use slide::{legal_targets, max_slide, Direction, DIRECTIONS};

use crate::board::{Board, Coord, Side};

/// Returns `side`'s pawns that have at least one legal target, sorted.
///
/// A pawn boxed in by neighbours and edges is left out, since it cannot be
/// selected for a move.
pub fn movable_pawns(board: &Board, side: Side) -> Vec<Coord> {
    let mut pawns: Vec<Coord> = board
        .pawns_of(side)
        .into_iter()
        .filter(|&pawn| !legal_targets(board, pawn).is_empty())
        .collect();
    pawns.sort();
    pawns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn all_pawns_movable_at_start() {
        let board = Board::new();
        assert_eq!(
            movable_pawns(&board, Side::One),
            vec![at(4, 0), at(4, 1), at(4, 2), at(4, 3), at(4, 4)]
        );
        assert_eq!(
            movable_pawns(&board, Side::Two),
            vec![at(0, 0), at(0, 1), at(0, 2), at(0, 3), at(0, 4)]
        );
    }

    #[test]
    fn blocked_pawn_excluded() {
        let board = Board::from_grid([
            [2, 2, 2, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 3, 0, 0],
            [0, 0, 0, 2, 2],
            [1, 1, 1, 1, 1],
        ])
        .unwrap();
        let pawns = movable_pawns(&board, Side::One);
        assert!(!pawns.contains(&at(4, 4)));
        assert_eq!(pawns, vec![at(4, 0), at(4, 1), at(4, 2), at(4, 3)]);
    }

    #[test]
    fn no_movable_pawns_when_all_boxed() {
        let board = Board::from_grid([
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 3],
            [2, 2, 2, 0, 0],
            [1, 1, 2, 0, 0],
        ])
        .unwrap();
        assert!(movable_pawns(&board, Side::One).is_empty());
    }
}
