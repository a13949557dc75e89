//! Self-play game generation CLI.
//!
//! Plays bot-versus-bot Neutron games and outputs game records as JSONL.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N          Number of games to play (default: 10)
//!   --player-one KIND  Bot for side one: random or smart (default: smart)
//!   --player-two KIND  Bot for side two: random or smart (default: random)
//!   --max-turns N      Turn cap per game (default: 1000)
//!   --threads N        Number of parallel threads (default: 4)
//!   --seed N           Random seed, 0 for entropy (default: 0)
//!   --output FILE      Output file path (default: stdout)
//!   --quiet            Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

use neutron::player::PlayerKind;
use neutron::selfplay::{self, SelfPlayConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = value(&args, i, "--games");
            }
            "--player-one" => {
                i += 1;
                config.player_one = bot_kind(&args, i, "--player-one");
            }
            "--player-two" => {
                i += 1;
                config.player_two = bot_kind(&args, i, "--player-two");
            }
            "--max-turns" => {
                i += 1;
                config.max_turns = value(&args, i, "--max-turns");
            }
            "--threads" => {
                i += 1;
                config.threads = value(&args, i, "--threads");
            }
            "--seed" => {
                i += 1;
                config.seed = value(&args, i, "--seed");
            }
            "--output" => {
                i += 1;
                output_path = Some(value(&args, i, "--output"));
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if !config.quiet {
        eprintln!(
            "Self-play: {} games, {} vs {}, max {} turns, {} threads",
            config.num_games,
            config.player_one,
            config.player_two,
            config.max_turns,
            config.threads
        );
    }

    let start = Instant::now();
    let games = selfplay::run_self_play(&config);
    let elapsed = start.elapsed();

    if !config.quiet {
        eprintln!(
            "Completed {} games in {:.2}s ({:.1} games/s)",
            games.len(),
            elapsed.as_secs_f64(),
            games.len() as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
        );
        selfplay::print_summary(&games);
    }

    let written = match output_path {
        Some(path) => {
            let file = match File::create(&path) {
                Ok(f) => f,
                Err(e) => fail(&format!("failed to create {}: {}", path, e)),
            };
            let result = selfplay::write_jsonl(&games, &mut BufWriter::new(file));
            if result.is_ok() && !config.quiet {
                eprintln!("Wrote {} games to {}", games.len(), path);
            }
            result
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer)
        }
    };
    if let Err(e) = written {
        fail(&format!("failed to write output: {}", e));
    }
}

fn value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).and_then(|v| v.parse().ok()) {
        Some(v) => v,
        None => fail(&format!("invalid {} value", flag)),
    }
}

fn bot_kind(args: &[String], i: usize, flag: &str) -> PlayerKind {
    let raw = args.get(i).map(String::as_str).unwrap_or("");
    match raw.parse::<PlayerKind>() {
        Ok(kind) if kind.is_bot() => kind,
        Ok(kind) => fail(&format!("{} must be a bot, got {}", flag, kind)),
        Err(e) => fail(&e.to_string()),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1)
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N          Number of games to play (default: 10)");
    eprintln!("  --player-one KIND  Bot for side one: random or smart (default: smart)");
    eprintln!("  --player-two KIND  Bot for side two: random or smart (default: random)");
    eprintln!("  --max-turns N      Turn cap per game (default: 1000)");
    eprintln!("  --threads N        Number of parallel threads (default: 4)");
    eprintln!("  --seed N           Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE      Output file path (default: stdout)");
    eprintln!("  --quiet            Suppress progress and summary output");
    eprintln!("  --help             Show this help");
}
