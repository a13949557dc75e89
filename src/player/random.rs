//! Uniformly random move selection.

use rand::Rng;

use crate::board::{Board, Coord, Side};
use crate::movegen::{legal_targets, movable_pawns};

use super::pick;

/// Picks one of `side`'s movable pawns at random.
pub fn random_pawn<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Coord> {
    pick(&movable_pawns(board, side), rng)
}

/// Picks one of the legal destinations of the piece on `origin` at random.
pub fn random_target<R: Rng + ?Sized>(board: &Board, origin: Coord, rng: &mut R) -> Option<Coord> {
    pick(&legal_targets(board, origin), rng)
}
