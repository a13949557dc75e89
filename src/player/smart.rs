//! Priority-based move selection.
//!
//! The heuristic only looks one move ahead. Pawn moves try to occupy the
//! enemy row so the neutron cannot be pushed there; neutron moves take an
//! immediate win when one exists and otherwise stay off the enemy row.
//! Within a tier the choice is uniformly random, which keeps bot games
//! varied.

use rand::Rng;

use crate::board::{Board, Coord, Side};
use crate::movegen::{legal_targets, movable_pawns};

use super::pick;

/// Picks a pawn, preferring pawns that can reach the enemy row this turn.
pub fn smart_pawn<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Coord> {
    let enemy_row = side.enemy_row();
    let movable = movable_pawns(board, side);
    let primary: Vec<Coord> = movable
        .iter()
        .copied()
        .filter(|&pawn| {
            legal_targets(board, pawn)
                .iter()
                .any(|t| t.row() == enemy_row)
        })
        .collect();

    first_tier(&[primary.as_slice(), movable.as_slice()], rng)
}

/// Picks a destination for the piece on `origin`.
///
/// The neutron is recognised by position; anything else is treated as one
/// of `side`'s pawns.
pub fn smart_target<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    origin: Coord,
    rng: &mut R,
) -> Option<Coord> {
    let targets = legal_targets(board, origin);
    let enemy_row = side.enemy_row();

    if origin == board.neutron_position() {
        let home_row = side.home_row();
        let winning = on_row(&targets, |row| row == home_row);
        let safe = on_row(&targets, |row| row != enemy_row);
        first_tier(&[winning.as_slice(), safe.as_slice(), targets.as_slice()], rng)
    } else {
        let blocking = on_row(&targets, |row| row == enemy_row);
        first_tier(&[blocking.as_slice(), targets.as_slice()], rng)
    }
}

fn on_row<F: Fn(u8) -> bool>(coords: &[Coord], keep: F) -> Vec<Coord> {
    coords.iter().copied().filter(|c| keep(c.row())).collect()
}

/// Picks uniformly from the first non-empty tier.
fn first_tier<R: Rng + ?Sized>(tiers: &[&[Coord]], rng: &mut R) -> Option<Coord> {
    tiers
        .iter()
        .find(|tier| !tier.is_empty())
        .and_then(|tier| pick(tier, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn open_corner() -> Board {
        Board::from_grid([
            [0, 2, 2, 2, 2],
            [0, 0, 2, 0, 0],
            [0, 0, 3, 0, 0],
            [0, 0, 0, 0, 0],
            [1, 1, 1, 1, 1],
        ])
        .unwrap()
    }

    #[test]
    fn prefers_pawn_reaching_enemy_row() {
        let board = open_corner();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(smart_pawn(&board, Side::One, &mut rng), Some(at(4, 0)));
        }
    }

    #[test]
    fn pawn_target_blocks_enemy_row() {
        let board = open_corner();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(
                smart_target(&board, Side::One, at(4, 0), &mut rng),
                Some(at(0, 0))
            );
        }
    }

    #[test]
    fn falls_back_to_any_movable_pawn() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(5);
        let pawn = smart_pawn(&board, Side::One, &mut rng).unwrap();
        assert_eq!(pawn.row(), 4);
    }

    #[test]
    fn neutron_takes_winning_move() {
        let board = Board::from_grid([
            [0, 2, 2, 2, 2],
            [0, 0, 2, 0, 0],
            [0, 0, 3, 0, 0],
            [1, 0, 0, 0, 0],
            [1, 1, 0, 1, 1],
        ])
        .unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(
                smart_target(&board, Side::Two, at(2, 2), &mut rng),
                Some(at(0, 0))
            );
        }
    }

    #[test]
    fn neutron_avoids_enemy_row() {
        let board = Board::from_grid([
            [2, 2, 2, 2, 2],
            [0, 0, 0, 0, 0],
            [0, 0, 3, 0, 0],
            [1, 0, 0, 0, 0],
            [1, 1, 0, 1, 1],
        ])
        .unwrap();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let target = smart_target(&board, Side::Two, at(2, 2), &mut rng).unwrap();
            assert_ne!(target, at(4, 2));
            assert_ne!(target.row(), 4);
        }
    }

    #[test]
    fn neutron_forced_onto_enemy_row() {
        // Every neutron move lands on row 0, player one's enemy row.
        let board = Board::from_grid([
            [0, 2, 0, 2, 0],
            [2, 1, 3, 1, 2],
            [0, 2, 2, 2, 0],
            [0, 0, 0, 0, 0],
            [1, 0, 0, 0, 1],
        ])
        .unwrap();
        let targets = legal_targets(&board, at(1, 2));
        assert!(!targets.is_empty());
        assert!(targets.iter().all(|t| t.row() == 0));
        let mut rng = StdRng::seed_from_u64(11);
        let target = smart_target(&board, Side::One, at(1, 2), &mut rng).unwrap();
        assert!(targets.contains(&target));
    }

    #[test]
    fn tie_break_is_not_first_match() {
        let board = Board::new();
        let mut seen = Vec::new();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let target = smart_target(&board, Side::One, at(2, 2), &mut rng).unwrap();
            if !seen.contains(&target) {
                seen.push(target);
            }
        }
        assert!(seen.len() > 1);
    }
}
