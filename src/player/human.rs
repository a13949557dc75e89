//! Human move selection.
//!
//! Raw input is validated against the board; every rejection is reported
//! through the interface and the player is asked again. Only an interrupt
//! ends the loop early.

use crate::board::{Board, Cell, Coord, Side};
use crate::interface::{Interface, SelectionKind, SelectionRequest};
use crate::movegen::{legal_targets, movable_pawns};
use crate::protocol::parser::parse_coordinates;

use super::{target_kind, TurnError};

/// Why a typed selection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("expected two comma-separated integers, e.g. 4,0")]
    MalformedInput,

    #[error("coordinates are off the board")]
    OutOfBounds,

    #[error("that cell does not hold one of your pawns")]
    WrongPawnOwnership,

    #[error("that pawn is blocked on every side")]
    PawnBlocked,

    #[error("that piece cannot move there")]
    IllegalTarget,
}

/// Parses raw input into an on-board coordinate.
fn parse_on_board(raw: &str) -> Result<Coord, SelectionError> {
    let (row, col) = parse_coordinates(raw).ok_or(SelectionError::MalformedInput)?;
    Coord::from_signed(row, col).ok_or(SelectionError::OutOfBounds)
}

/// Validates a pawn selection for `side`.
pub fn validate_pawn(board: &Board, side: Side, raw: &str) -> Result<Coord, SelectionError> {
    let coord = parse_on_board(raw)?;
    if board.occupant(coord) != Cell::Pawn(side) {
        return Err(SelectionError::WrongPawnOwnership);
    }
    if legal_targets(board, coord).is_empty() {
        return Err(SelectionError::PawnBlocked);
    }
    Ok(coord)
}

/// Validates a destination for the piece on `origin`.
pub fn validate_target(board: &Board, origin: Coord, raw: &str) -> Result<Coord, SelectionError> {
    let coord = parse_on_board(raw)?;
    if !legal_targets(board, origin).contains(&coord) {
        return Err(SelectionError::IllegalTarget);
    }
    Ok(coord)
}

/// Asks until the player names one of their movable pawns.
pub fn select_pawn(
    side: Side,
    board: &Board,
    interface: &mut dyn Interface,
) -> Result<Coord, TurnError> {
    let options = movable_pawns(board, side);
    if options.is_empty() {
        return Err(TurnError::NoLegalMove(SelectionKind::Pawn));
    }
    let request = SelectionRequest {
        side,
        kind: SelectionKind::Pawn,
        origin: None,
        options: &options,
    };
    ask_until_valid(interface, &request, |raw| validate_pawn(board, side, raw))
}

/// Asks until the player names a legal destination for the piece on `origin`.
pub fn select_target(
    side: Side,
    origin: Coord,
    board: &Board,
    interface: &mut dyn Interface,
) -> Result<Coord, TurnError> {
    let kind = target_kind(board, origin);
    let options = legal_targets(board, origin);
    if options.is_empty() {
        return Err(TurnError::NoLegalMove(kind));
    }
    let request = SelectionRequest {
        side,
        kind,
        origin: Some(origin),
        options: &options,
    };
    ask_until_valid(interface, &request, |raw| validate_target(board, origin, raw))
}

fn ask_until_valid<F>(
    interface: &mut dyn Interface,
    request: &SelectionRequest<'_>,
    validate: F,
) -> Result<Coord, TurnError>
where
    F: Fn(&str) -> Result<Coord, SelectionError>,
{
    loop {
        let raw = interface.request_selection(request)?;
        match validate(&raw) {
            Ok(coord) => return Ok(coord),
            Err(e) => interface.report_validation_error(&e.to_string()),
        }
    }
}
