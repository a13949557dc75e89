//! Line-oriented text front-end.
//!
//! Implements `Interface` over any input/output pair: prints the board and
//! the selectable cells, reads `row,col` answers one line at a time, and
//! treats end of input as an interrupt. Bytes that are not UTF-8 are passed
//! on lossily so the selection check rejects them like any other bad input.
//! Holds no game rules of its own.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use crate::board::{Board, Coord, BOARD_SIZE};
use crate::game::{GameMode, SetupError, ALL_MODES};
use crate::interface::{GameEvent, Interface, Interrupted, SelectionKind, SelectionRequest};

/// Errors from the mode selection prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Interrupted(#[from] Interrupted),
}

/// Renders the board with row and column headers, one row per line.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  ");
    for col in 0..BOARD_SIZE {
        let _ = write!(out, " {} ", col);
    }
    out.push('\n');
    for (row, cells) in board.rows().enumerate() {
        let _ = write!(out, "{} ", row);
        for cell in cells {
            let _ = write!(out, " {} ", cell.code());
        }
        out.push('\n');
    }
    out
}

fn format_coords(coords: &[Coord]) -> String {
    coords
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A text console reading answers from `input` and writing to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints the mode menu and reads one answer. An unsupported answer is
    /// an error, not a reason to ask again.
    pub fn select_game_mode(&mut self) -> Result<GameMode, ConsoleError> {
        self.say("Choose game mode:");
        for mode in ALL_MODES {
            self.say(mode);
        }
        let line = self.read_line()?;
        Ok(line.parse::<GameMode>()?)
    }

    fn say(&mut self, text: impl std::fmt::Display) {
        let _ = writeln!(self.output, "{}", text);
    }

    fn read_line(&mut self) -> Result<String, Interrupted> {
        let _ = self.output.flush();
        let mut line = Vec::new();
        match self.input.read_until(b'\n', &mut line) {
            Ok(0) | Err(_) => Err(Interrupted),
            Ok(_) => Ok(String::from_utf8_lossy(&line).trim_end().to_string()),
        }
    }
}

impl<R: BufRead, W: Write> Interface for Console<R, W> {
    fn request_selection(&mut self, request: &SelectionRequest<'_>) -> Result<String, Interrupted> {
        let (listing, prompt) = match request.kind {
            SelectionKind::Pawn => ("Possible pawns:", "Select pawn (row, column):"),
            SelectionKind::PawnTarget => ("Possible targets:", "Select target (row, column):"),
            SelectionKind::NeutronTarget => (
                "Possible neutron targets:",
                "Select target for the neutron (row, column):",
            ),
        };
        if let Some(origin) = request.origin {
            self.say(format!("Moving the piece on {}", origin));
        }
        self.say(listing);
        self.say(format_coords(request.options));
        self.say(prompt);
        self.read_line()
    }

    fn report_validation_error(&mut self, message: &str) {
        self.say(format!("Invalid selection: {}. Try again.", message));
    }

    fn notify(&mut self, board: &Board, event: &GameEvent) {
        match event {
            GameEvent::TurnStarted { side, turn } => {
                self.say(format!("\nTurn {}: {} to move", turn, side));
                self.say(render_board(board));
            }
            GameEvent::Moved {
                side,
                piece,
                from,
                to,
            } => {
                self.say(format!("{} moved the {} from {} to {}", side, piece, from, to));
            }
            GameEvent::Finished(result) => {
                self.say("");
                self.say(render_board(board));
                self.say(format!("{}.", result));
            }
        }
    }
}
