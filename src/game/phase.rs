//! Turn sequencing.
//!
//! Turn flow for the active side:
//! - AwaitingNeutronMove     -> AwaitingPawnSelection (neutron moved, or skipped on the first turn)
//! - AwaitingPawnSelection   -> AwaitingTargetSelection
//! - AwaitingTargetSelection -> TurnComplete
//! - TurnComplete            -> AwaitingNeutronMove (other side)
//!
//! Any move that ends the game leads to GameOver instead.

use crate::board::Coord;

use super::outcome::Outcome;

/// Where the active side is within its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    AwaitingNeutronMove,
    AwaitingPawnSelection,
    AwaitingTargetSelection { pawn: Coord },
    TurnComplete,
    GameOver(Outcome),
}

impl TurnState {
    pub const fn is_over(self) -> bool {
        matches!(self, TurnState::GameOver(_))
    }

    /// The result, once the game is over.
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            TurnState::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// State after a piece moved: game over if `outcome` is decided, `next` otherwise.
    pub(crate) fn after_move(outcome: Option<Outcome>, next: TurnState) -> TurnState {
        match outcome {
            Some(o) => TurnState::GameOver(o),
            None => next,
        }
    }
}
