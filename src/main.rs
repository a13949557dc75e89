//! Neutron -- play the board game in a terminal.
//!
//! Reads selections from stdin and writes the board and prompts to stdout.
//!
//! Usage:
//!   neutron [--mode N] [--seed N]
//!
//! Without `--mode`, the game mode is read from the first line of input.
//! End of input during a game stops the process.

use std::env;
use std::io;
use std::process;

use neutron::console::{Console, ConsoleError};
use neutron::game::{Game, GameMode};
use neutron::player::TurnError;

/// Exit status when the player interrupts the game.
const EXIT_INTERRUPTED: i32 = 130;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut mode: Option<GameMode> = None;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" => {
                i += 1;
                let value = args.get(i).map(String::as_str).unwrap_or("");
                match value.parse::<GameMode>() {
                    Ok(m) => mode = Some(m),
                    Err(e) => fail(&e.to_string(), 2),
                }
            }
            "--seed" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<u64>().ok()) {
                    Some(s) => seed = Some(s),
                    None => fail("invalid --seed value", 2),
                }
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(2);
            }
        }
        i += 1;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let mode = match mode {
        Some(m) => m,
        None => match console.select_game_mode() {
            Ok(m) => m,
            Err(ConsoleError::Interrupted(_)) => process::exit(EXIT_INTERRUPTED),
            Err(e) => fail(&e.to_string(), 1),
        },
    };

    let mut game = match seed {
        Some(s) => Game::with_seed(mode.player_kinds(), s),
        None => Game::new(mode.player_kinds()),
    };

    match game.play(&mut console) {
        Ok(_) => {}
        Err(TurnError::Interrupted(_)) => process::exit(EXIT_INTERRUPTED),
        Err(e) => fail(&e.to_string(), 1),
    }
}

fn fail(message: &str, code: i32) -> ! {
    eprintln!("{}", message);
    process::exit(code)
}

fn print_usage() {
    eprintln!("Usage: neutron [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --mode N    Game mode (1-4); asked interactively when omitted");
    eprintln!("              1: human vs random bot, 2: human vs smart bot,");
    eprintln!("              3: human vs human, 4: smart bot vs smart bot");
    eprintln!("  --seed N    Random seed for the starting side and bot moves");
    eprintln!("  --help      Show this help");
}
