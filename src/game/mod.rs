//! Turn engine.
//!
//! A `Game` owns the board, both players, and its random source, and steps
//! through the turn state machine one transition at a time. Each turn the
//! active side first moves the neutron (skipped on the very first turn of
//! the game), then one of its own pawns. The position is checked for a
//! result after every piece movement.

pub mod mode;
pub mod outcome;
pub mod phase;

pub use mode::{GameMode, SetupError, ALL_MODES};
pub use outcome::{outcome, Outcome};
pub use phase::TurnState;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Coord, Piece, Side};
use crate::interface::{GameEvent, Interface};
use crate::movegen::movable_pawns;
use crate::player::{Player, PlayerKind, TurnError};

/// A single match between two players.
pub struct Game {
    board: Board,
    players: [Player; 2],
    active: Side,
    first_turn: bool,
    state: TurnState,
    turn: usize,
    announced: bool,
    rng: SmallRng,
}

impl Game {
    /// Creates a game on the standard board. `kinds` lists side one's
    /// player kind first. The starting side is drawn at random.
    pub fn new(kinds: [PlayerKind; 2]) -> Self {
        Game::with_rng(kinds, SmallRng::from_entropy())
    }

    /// Like `new`, with a reproducible random source.
    pub fn with_seed(kinds: [PlayerKind; 2], seed: u64) -> Self {
        Game::with_rng(kinds, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(kinds: [PlayerKind; 2], mut rng: SmallRng) -> Self {
        let active = if rng.gen_bool(0.5) { Side::One } else { Side::Two };
        Game {
            board: Board::new(),
            players: [
                Player::new(Side::One, kinds[0]),
                Player::new(Side::Two, kinds[1]),
            ],
            active,
            first_turn: true,
            state: TurnState::AwaitingNeutronMove,
            turn: 0,
            announced: false,
            rng,
        }
    }

    /// Replaces the starting position.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Sets whether the neutron move is skipped on the first turn.
    pub fn with_first_turn(mut self, first_turn: bool) -> Self {
        self.first_turn = first_turn;
        self
    }

    /// Overrides the randomly drawn starting side.
    pub fn with_starting_side(mut self, side: Side) -> Self {
        self.active = side;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn is_first_turn(&self) -> bool {
        self.first_turn
    }

    /// Number of turns started so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn player(&self, side: Side) -> Player {
        self.players[side.index()]
    }

    pub fn active_player(&self) -> Player {
        self.player(self.active)
    }

    /// Result of the current position, computed from the board.
    pub fn winner(&self) -> Option<Outcome> {
        outcome(&self.board)
    }

    /// Performs one state transition and returns the new state.
    ///
    /// On error the state is left unchanged, so the same step can be
    /// retried.
    pub fn advance(&mut self, interface: &mut dyn Interface) -> Result<TurnState, TurnError> {
        let player = self.active_player();

        let next = match self.state {
            TurnState::AwaitingNeutronMove => match self.winner() {
                Some(result) => TurnState::GameOver(result),
                None => self.neutron_step(player, interface)?,
            },
            TurnState::AwaitingPawnSelection => {
                if movable_pawns(&self.board, player.side).is_empty() {
                    TurnState::GameOver(Outcome::Draw)
                } else {
                    let pawn = player.select_pawn(&self.board, interface, &mut self.rng)?;
                    TurnState::AwaitingTargetSelection { pawn }
                }
            }
            TurnState::AwaitingTargetSelection { pawn } => {
                let target = player.select_target(pawn, &self.board, interface, &mut self.rng)?;
                self.move_piece(player, Piece::Pawn, pawn, target, interface);
                TurnState::after_move(self.winner(), TurnState::TurnComplete)
            }
            TurnState::TurnComplete => {
                self.active = self.active.opponent();
                self.announced = false;
                TurnState::AwaitingNeutronMove
            }
            TurnState::GameOver(result) => TurnState::GameOver(result),
        };

        if let (TurnState::GameOver(result), false) = (next, self.state.is_over()) {
            interface.notify(&self.board, &GameEvent::Finished(result));
        }
        self.state = next;
        Ok(next)
    }

    /// Runs the game to completion.
    pub fn play(&mut self, interface: &mut dyn Interface) -> Result<Outcome, TurnError> {
        loop {
            if let TurnState::GameOver(result) = self.advance(interface)? {
                return Ok(result);
            }
        }
    }

    fn neutron_step(
        &mut self,
        player: Player,
        interface: &mut dyn Interface,
    ) -> Result<TurnState, TurnError> {
        // A failed selection leaves the state unchanged; announce only once.
        if !self.announced {
            self.start_turn(player, interface);
        }
        if self.first_turn {
            self.first_turn = false;
            return Ok(TurnState::AwaitingPawnSelection);
        }

        let neutron = self.board.neutron_position();
        let target = player.select_target(neutron, &self.board, interface, &mut self.rng)?;
        self.move_piece(player, Piece::Neutron, neutron, target, interface);
        Ok(TurnState::after_move(
            self.winner(),
            TurnState::AwaitingPawnSelection,
        ))
    }

    fn start_turn(&mut self, player: Player, interface: &mut dyn Interface) {
        self.turn += 1;
        self.announced = true;
        interface.notify(
            &self.board,
            &GameEvent::TurnStarted {
                side: player.side,
                turn: self.turn,
            },
        );
    }

    fn move_piece(
        &mut self,
        player: Player,
        piece: Piece,
        from: Coord,
        to: Coord,
        interface: &mut dyn Interface,
    ) {
        player.apply_chosen_move(&mut self.board, from, to);
        interface.notify(
            &self.board,
            &GameEvent::Moved {
                side: player.side,
                piece,
                from,
                to,
            },
        );
    }
}
