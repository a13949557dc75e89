//! Players and their move-selection policies.
//!
//! A `Player` is a side plus a policy: a human answering through an
//! `Interface`, a bot picking uniformly at random, or a bot following a
//! fixed priority heuristic. All three share the same selection contract.

pub mod human;
pub mod random;
pub mod smart;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::board::{Board, Coord, Piece, Side};
use crate::game::SetupError;
use crate::interface::{Interface, Interrupted, SelectionKind};

/// How a player chooses its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    Human,
    RandomBot,
    SmartBot,
}

impl PlayerKind {
    pub const fn is_bot(self) -> bool {
        !matches!(self, PlayerKind::Human)
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerKind::Human => "human",
            PlayerKind::RandomBot => "random",
            PlayerKind::SmartBot => "smart",
        };
        f.write_str(name)
    }
}

impl FromStr for PlayerKind {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "random" | "random_bot" => Ok(PlayerKind::RandomBot),
            "smart" | "smart_bot" => Ok(PlayerKind::SmartBot),
            other => Err(SetupError::UnknownPlayerKind(other.to_string())),
        }
    }
}

/// A selection that could not be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error(transparent)]
    Interrupted(#[from] Interrupted),

    #[error("no legal {0} available")]
    NoLegalMove(SelectionKind),
}

/// A participant in a game. Fixed for the game's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub side: Side,
    pub kind: PlayerKind,
}

impl Player {
    pub const fn new(side: Side, kind: PlayerKind) -> Self {
        Player { side, kind }
    }

    /// Chooses one of this player's movable pawns.
    pub fn select_pawn<R: Rng + ?Sized>(
        &self,
        board: &Board,
        interface: &mut dyn Interface,
        rng: &mut R,
    ) -> Result<Coord, TurnError> {
        let choice = match self.kind {
            PlayerKind::Human => return human::select_pawn(self.side, board, interface),
            PlayerKind::RandomBot => random::random_pawn(board, self.side, rng),
            PlayerKind::SmartBot => smart::smart_pawn(board, self.side, rng),
        };
        choice.ok_or(TurnError::NoLegalMove(SelectionKind::Pawn))
    }

    /// Chooses a destination for the piece on `origin`, which is either one
    /// of this player's pawns or the neutron.
    pub fn select_target<R: Rng + ?Sized>(
        &self,
        origin: Coord,
        board: &Board,
        interface: &mut dyn Interface,
        rng: &mut R,
    ) -> Result<Coord, TurnError> {
        let choice = match self.kind {
            PlayerKind::Human => return human::select_target(self.side, origin, board, interface),
            PlayerKind::RandomBot => random::random_target(board, origin, rng),
            PlayerKind::SmartBot => smart::smart_target(board, self.side, origin, rng),
        };
        choice.ok_or(TurnError::NoLegalMove(target_kind(board, origin)))
    }

    /// Applies a move chosen by `select_pawn` / `select_target`.
    pub fn apply_chosen_move(&self, board: &mut Board, origin: Coord, target: Coord) {
        board.apply_move(origin, target);
    }
}

/// Whether a target selection from `origin` moves the neutron or a pawn.
pub(crate) fn target_kind(board: &Board, origin: Coord) -> SelectionKind {
    match board.occupant(origin).piece() {
        Some(Piece::Neutron) => SelectionKind::NeutronTarget,
        _ => SelectionKind::PawnTarget,
    }
}

/// Picks one candidate uniformly at random.
pub(crate) fn pick<R: Rng + ?Sized>(candidates: &[Coord], rng: &mut R) -> Option<Coord> {
    if candidates.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..candidates.len());
    Some(candidates[idx])
}
