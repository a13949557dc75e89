//! The two sides of a Neutron game.
//!
//! Side one starts on row 4 and drives the neutron towards row 4; side two
//! starts on row 0. A side's id (1 or 2) doubles as its pawn cell code.

use serde::Serialize;

use super::coord::BOARD_SIZE;

/// One of the two players' sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    One,
    Two,
}

/// Both sides, in seating order.
pub const ALL_SIDES: [Side; 2] = [Side::One, Side::Two];

impl Side {
    /// Returns the numeric player id (1 or 2).
    pub const fn id(self) -> u8 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }

    /// Parses a side from its numeric player id.
    pub fn from_id(id: u8) -> Option<Side> {
        match id {
            1 => Some(Side::One),
            2 => Some(Side::Two),
            _ => None,
        }
    }

    /// Returns the array index of this side (0 or 1).
    pub const fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// Returns the other side.
    pub const fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Row where this side's pawns start. The neutron reaching it wins for this side.
    pub const fn home_row(self) -> u8 {
        match self {
            Side::One => (BOARD_SIZE - 1) as u8,
            Side::Two => 0,
        }
    }

    /// The opponent's home row.
    pub const fn enemy_row(self) -> u8 {
        self.opponent().home_row()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_roundtrip() {
        for side in ALL_SIDES {
            assert_eq!(Side::from_id(side.id()), Some(side));
        }
        assert_eq!(Side::from_id(0), None);
        assert_eq!(Side::from_id(3), None);
    }

    #[test]
    fn rows_are_mirrored() {
        assert_eq!(Side::One.home_row(), 4);
        assert_eq!(Side::One.enemy_row(), 0);
        assert_eq!(Side::Two.home_row(), 0);
        assert_eq!(Side::Two.enemy_row(), 4);
    }

    #[test]
    fn opponent_is_involution() {
        for side in ALL_SIDES {
            assert_ne!(side.opponent(), side);
            assert_eq!(side.opponent().opponent(), side);
        }
    }
}
