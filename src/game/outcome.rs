//! Win detection.

use std::fmt;

use serde::Serialize;

use crate::board::{Board, Side};
use crate::movegen::legal_targets;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerOne,
    PlayerTwo,
    Draw,
}

impl Outcome {
    /// Numeric result code: 1 and 2 for a win by that player, 3 for a draw.
    pub const fn code(self) -> u8 {
        match self {
            Outcome::PlayerOne => 1,
            Outcome::PlayerTwo => 2,
            Outcome::Draw => 3,
        }
    }

    /// A win for `side`.
    pub const fn win_for(side: Side) -> Outcome {
        match side {
            Side::One => Outcome::PlayerOne,
            Side::Two => Outcome::PlayerTwo,
        }
    }

    /// The winning side, or `None` for a draw.
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::PlayerOne => Some(Side::One),
            Outcome::PlayerTwo => Some(Side::Two),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(side) => write!(f, "{} wins", side),
            None => f.write_str("Draw"),
        }
    }
}

/// Returns the result of the position, or `None` while the game goes on.
///
/// The neutron on row 0 wins for side two and on row 4 for side one, even
/// if it is also immobile there. Elsewhere, a neutron with no legal move is
/// a draw.
pub fn outcome(board: &Board) -> Option<Outcome> {
    let neutron = board.neutron_position();
    for side in [Side::Two, Side::One] {
        if neutron.row() == side.home_row() {
            return Some(Outcome::win_for(side));
        }
    }
    if legal_targets(board, neutron).is_empty() {
        return Some(Outcome::Draw);
    }
    None
}
