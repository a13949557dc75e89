//! Self-play game generation.
//!
//! Plays bot-versus-bot games to completion and records every move with the
//! layout it produced. Used for win-rate statistics between bot kinds and
//! for producing replayable game records as JSONL.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::{Board, Coord, Piece, Side};
use crate::game::{Game, Outcome, TurnState};
use crate::interface::{GameEvent, Interface, Interrupted, SelectionRequest};
use crate::player::PlayerKind;
use crate::protocol::layout::encode_layout;

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Policy for side one.
    pub player_one: PlayerKind,
    /// Policy for side two.
    pub player_two: PlayerKind,
    /// Turn cap; a game still running after this many turns is recorded unfinished.
    pub max_turns: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            player_one: PlayerKind::SmartBot,
            player_two: PlayerKind::RandomBot,
            max_turns: 1000,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// A single recorded move.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    /// Turn the move belongs to, counting from 1.
    pub turn: usize,
    pub side: Side,
    pub piece: Piece,
    pub from: Coord,
    pub to: Coord,
    /// Board layout after the move.
    pub layout: String,
}

/// A complete self-play game record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    pub player_one: PlayerKind,
    pub player_two: PlayerKind,
    /// Side that made the first move.
    pub starting_side: Side,
    /// Result, or `None` if the turn cap was reached first.
    pub outcome: Option<Outcome>,
    /// Number of turns started.
    pub turns: usize,
    pub moves: Vec<MoveRecord>,
    pub final_layout: String,
}

/// Collects move events; answers no selection requests.
#[derive(Default)]
struct Recorder {
    turn: usize,
    moves: Vec<MoveRecord>,
}

impl Interface for Recorder {
    fn request_selection(&mut self, _request: &SelectionRequest<'_>) -> Result<String, Interrupted> {
        Err(Interrupted)
    }

    fn report_validation_error(&mut self, _message: &str) {}

    fn notify(&mut self, board: &Board, event: &GameEvent) {
        match *event {
            GameEvent::TurnStarted { turn, .. } => self.turn = turn,
            GameEvent::Moved {
                side,
                piece,
                from,
                to,
            } => self.moves.push(MoveRecord {
                turn: self.turn,
                side,
                piece,
                from,
                to,
                layout: encode_layout(board),
            }),
            GameEvent::Finished(_) => {}
        }
    }
}

/// Plays a single self-play game and returns the game record.
///
/// No turn starts once `config.max_turns` turns have been played, so a cap
/// of 0 records an empty, unfinished game. Human players cannot answer
/// here; a game that needs one stops unfinished.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let kinds = [config.player_one, config.player_two];
    let mut game = Game::with_rng(kinds, SmallRng::seed_from_u64(rng.gen()));
    let starting_side = game.active_player().side;
    let mut recorder = Recorder::default();

    while !game.is_over() {
        let next_turn = game.state() == TurnState::AwaitingNeutronMove;
        if next_turn && game.turn() >= config.max_turns {
            break;
        }
        if game.advance(&mut recorder).is_err() {
            break;
        }
    }

    GameRecord {
        game_id,
        player_one: config.player_one,
        player_two: config.player_two,
        starting_side,
        outcome: game.state().outcome(),
        turns: game.turn(),
        moves: recorder.moves,
        final_layout: encode_layout(game.board()),
    }
}

/// Runs self-play generation, producing multiple game records.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
/// Records are returned in completion order.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    run_self_play_with_callback(config, |game| games.push(game));
    games
}

/// Runs self-play generation, calling `on_game` with each completed game record.
pub fn run_self_play_with_callback<F>(config: &SelfPlayConfig, on_game: F)
where
    F: FnMut(GameRecord),
{
    if config.threads > 1 {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()
        {
            Ok(pool) => return run_parallel(config, &pool, on_game),
            Err(e) => {
                if !config.quiet {
                    eprintln!("thread pool unavailable ({}), playing sequentially", e);
                }
            }
        }
    }
    run_sequential(config, on_game);
}

fn seeded_rng(seed: u64, offset: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(offset as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays game `game_id` and prints a progress line unless quiet.
fn play_logged(
    config: &SelfPlayConfig,
    game_id: usize,
    rng: &mut SmallRng,
    completed: &AtomicUsize,
) -> GameRecord {
    let started = Instant::now();
    let game = play_game(config, game_id, rng);
    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
    if !config.quiet {
        let result = match game.outcome {
            Some(outcome) => outcome.to_string(),
            None => "unfinished".to_string(),
        };
        eprintln!(
            "Game {}/{}: {} after {} turns ({:.3}s)",
            done,
            config.num_games,
            result,
            game.turns,
            started.elapsed().as_secs_f64(),
        );
    }
    game
}

/// One random stream shared by every game, in order.
fn run_sequential<F: FnMut(GameRecord)>(config: &SelfPlayConfig, mut on_game: F) {
    let completed = AtomicUsize::new(0);
    let mut rng = seeded_rng(config.seed, 0);
    for i in 0..config.num_games {
        on_game(play_logged(config, i, &mut rng, &completed));
    }
}

/// Games are seeded individually and played on `pool`; records come back
/// over a channel so `on_game` runs on the calling thread.
fn run_parallel<F: FnMut(GameRecord)>(
    config: &SelfPlayConfig,
    pool: &rayon::ThreadPool,
    mut on_game: F,
) {
    use rayon::prelude::*;
    use std::sync::mpsc;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<GameRecord>();

    std::thread::scope(|scope| {
        let completed = &completed;
        scope.spawn(move || {
            pool.install(|| {
                (0..config.num_games)
                    .into_par_iter()
                    .for_each_with(tx, |tx, i| {
                        let mut rng = seeded_rng(config.seed, i);
                        let _ = tx.send(play_logged(config, i, &mut rng, completed));
                    });
            });
        });

        for game in rx {
            on_game(game);
        }
    });
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Aggregate results of a batch of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub games: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
    pub unfinished: usize,
    pub total_turns: usize,
}

/// Tallies outcomes and game lengths.
pub fn summarize(games: &[GameRecord]) -> Summary {
    let mut summary = Summary {
        games: games.len(),
        ..Default::default()
    };
    for game in games {
        summary.total_turns += game.turns;
        match game.outcome {
            Some(Outcome::PlayerOne) => summary.player_one_wins += 1,
            Some(Outcome::PlayerTwo) => summary.player_two_wins += 1,
            Some(Outcome::Draw) => summary.draws += 1,
            None => summary.unfinished += 1,
        }
    }
    summary
}

/// Prints a summary of self-play results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let summary = summarize(games);
    let total = summary.games.max(1) as f64;
    let pct = |n: usize| 100.0 * n as f64 / total;

    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", summary.games);
    eprintln!("Avg turns/game: {:.1}", summary.total_turns as f64 / total);
    eprintln!(
        "Player 1 wins: {} ({:.1}%)",
        summary.player_one_wins,
        pct(summary.player_one_wins)
    );
    eprintln!(
        "Player 2 wins: {} ({:.1}%)",
        summary.player_two_wins,
        pct(summary.player_two_wins)
    );
    eprintln!("Draws: {} ({:.1}%)", summary.draws, pct(summary.draws));
    if summary.unfinished > 0 {
        eprintln!("Unfinished (turn cap): {}", summary.unfinished);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::layout::{parse_layout, INITIAL_LAYOUT};

    fn quiet_config(num_games: usize, threads: usize, seed: u64) -> SelfPlayConfig {
        SelfPlayConfig {
            num_games,
            threads,
            seed,
            quiet: true,
            ..Default::default()
        }
    }

    #[test]
    fn play_single_game_completes() {
        let config = quiet_config(1, 1, 42);
        let mut rng = SmallRng::seed_from_u64(42);
        let game = play_game(&config, 0, &mut rng);

        let outcome = game.outcome.expect("game should finish well before the cap");
        assert!((1..=3).contains(&outcome.code()));
        assert!(!game.moves.is_empty());
        assert_eq!(game.moves[0].piece, Piece::Pawn);
        assert_eq!(game.moves[0].side, game.starting_side);
    }

    #[test]
    fn move_layouts_are_valid() {
        let config = quiet_config(1, 1, 123);
        let mut rng = SmallRng::seed_from_u64(123);
        let game = play_game(&config, 0, &mut rng);

        let mut previous = parse_layout(INITIAL_LAYOUT).unwrap();
        for record in &game.moves {
            let board = parse_layout(&record.layout).unwrap();
            assert_eq!(board.piece_count(), 11);
            assert!(previous.occupant(record.to).is_empty());
            assert!(board.occupant(record.from).is_empty());
            previous = board;
        }
        assert_eq!(
            game.moves.last().map(|m| m.layout.as_str()),
            Some(game.final_layout.as_str())
        );
    }

    #[test]
    fn smart_against_random_always_decides() {
        let config = quiet_config(200, 1, 7);
        let games = run_self_play(&config);
        assert_eq!(games.len(), 200);
        for game in &games {
            let code = game.outcome.map(Outcome::code);
            assert!(matches!(code, Some(1..=3)), "bad outcome {:?}", game.outcome);
        }
    }

    #[test]
    fn same_seed_same_games() {
        let a = run_self_play(&quiet_config(3, 1, 99));
        let b = run_self_play(&quiet_config(3, 1, 99));
        let layouts = |games: &[GameRecord]| {
            games
                .iter()
                .map(|g| g.final_layout.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(layouts(&a), layouts(&b));
    }

    #[test]
    fn parallel_run_produces_correct_count() {
        let games = run_self_play(&quiet_config(8, 2, 77));
        assert_eq!(games.len(), 8);
        let mut ids: Vec<usize> = games.iter().map(|g| g.game_id).collect();
        ids.sort();
        assert_eq!(ids, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn zero_turn_cap_plays_nothing() {
        let config = SelfPlayConfig {
            max_turns: 0,
            ..quiet_config(1, 1, 5)
        };
        let mut rng = SmallRng::seed_from_u64(5);
        let game = play_game(&config, 0, &mut rng);
        assert_eq!(game.outcome, None);
        assert_eq!(game.turns, 0);
        assert!(game.moves.is_empty());
        assert_eq!(game.final_layout, INITIAL_LAYOUT);
    }

    #[test]
    fn turn_cap_leaves_game_unfinished() {
        let config = SelfPlayConfig {
            max_turns: 1,
            ..quiet_config(1, 1, 5)
        };
        let mut rng = SmallRng::seed_from_u64(5);
        let game = play_game(&config, 0, &mut rng);
        // The first turn is a single pawn move; no second turn starts.
        assert_eq!(game.outcome, None);
        assert_eq!(game.turns, 1);
        assert_eq!(game.moves.len(), 1);
        assert_eq!(game.moves[0].side, game.starting_side);
    }

    #[test]
    fn human_players_stop_unfinished() {
        let config = SelfPlayConfig {
            player_one: PlayerKind::Human,
            player_two: PlayerKind::Human,
            ..quiet_config(1, 1, 3)
        };
        let mut rng = SmallRng::seed_from_u64(3);
        let game = play_game(&config, 0, &mut rng);
        assert_eq!(game.outcome, None);
        assert!(game.moves.is_empty());
    }

    #[test]
    fn jsonl_output_is_valid() {
        let games = run_self_play(&quiet_config(2, 1, 55));
        let mut buf = Vec::new();
        write_jsonl(&games, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["game_id"].is_u64());
            assert!(value["moves"].is_array());
            assert_eq!(value["player_one"], "smart_bot");
            assert!(value["moves"][0]["layout"].is_string());
            assert!(value["moves"][0]["from"]["row"].is_u64());
        }
    }

    #[test]
    fn summary_counts_outcomes() {
        let games = run_self_play(&quiet_config(10, 1, 31));
        let summary = summarize(&games);
        assert_eq!(summary.games, 10);
        assert_eq!(
            summary.player_one_wins + summary.player_two_wins + summary.draws + summary.unfinished,
            10
        );
        assert_eq!(
            summary.total_turns,
            games.iter().map(|g| g.turns).sum::<usize>()
        );
    }
}
