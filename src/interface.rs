//! Boundary with the presentation layer.
//!
//! The turn engine calls back into an `Interface` to ask human players for
//! selections, to report rejected input, and to announce what happened on
//! the board. Bots never use it, so bot-only games run with `Headless`.

use std::fmt;

use crate::board::{Board, Coord, Piece, Side};
use crate::game::Outcome;

/// The user cancelled input (interrupt or end of input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("input interrupted")]
pub struct Interrupted;

/// What a selection request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    /// One of the player's own pawns.
    Pawn,
    /// Destination for the selected pawn.
    PawnTarget,
    /// Destination for the neutron.
    NeutronTarget,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionKind::Pawn => "pawn",
            SelectionKind::PawnTarget => "pawn target",
            SelectionKind::NeutronTarget => "neutron target",
        };
        f.write_str(name)
    }
}

/// A request for one coordinate selection from a human player.
#[derive(Debug, Clone, Copy)]
pub struct SelectionRequest<'a> {
    pub side: Side,
    pub kind: SelectionKind,
    /// The piece being moved, for target selections.
    pub origin: Option<Coord>,
    /// Every acceptable answer, sorted.
    pub options: &'a [Coord],
}

/// Something that happened during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// `side` starts its turn. `turn` counts from 1.
    TurnStarted { side: Side, turn: usize },
    /// A piece was moved. The board passed with the event is already updated.
    Moved {
        side: Side,
        piece: Piece,
        from: Coord,
        to: Coord,
    },
    /// The game ended.
    Finished(Outcome),
}

/// Capabilities the core needs from a presentation layer.
pub trait Interface {
    /// Asks the player for a raw `row,col` selection.
    fn request_selection(&mut self, request: &SelectionRequest<'_>) -> Result<String, Interrupted>;

    /// Tells the player why their last selection was rejected.
    fn report_validation_error(&mut self, message: &str);

    /// Observes game progress.
    fn notify(&mut self, _board: &Board, _event: &GameEvent) {}
}

/// An interface with nobody on the other side.
///
/// Every selection request is answered with `Interrupted`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Interface for Headless {
    fn request_selection(&mut self, _request: &SelectionRequest<'_>) -> Result<String, Interrupted> {
        Err(Interrupted)
    }

    fn report_validation_error(&mut self, _message: &str) {}
}
