use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use neutron::board::{Board, Coord, Side};
use neutron::game::{outcome, Game};
use neutron::interface::Headless;
use neutron::movegen::{legal_targets, movable_pawns};
use neutron::player::smart::{smart_pawn, smart_target};
use neutron::player::PlayerKind;
use neutron::protocol::layout::parse_layout;
use neutron::selfplay::{self, SelfPlayConfig};

/// A crowded midgame position with pieces on every row.
const MIDGAME_LAYOUT: &str = "20202/02010/10302/01020/10101";

fn bench_legal_targets(c: &mut Criterion) {
    let board = Board::new();
    let neutron = board.neutron_position();
    c.bench_function("legal_targets_neutron_start", |b| {
        b.iter(|| legal_targets(black_box(&board), black_box(neutron)))
    });

    let midgame = parse_layout(MIDGAME_LAYOUT).unwrap();
    let pawn = Coord::new(4, 2).unwrap();
    c.bench_function("legal_targets_pawn_midgame", |b| {
        b.iter(|| legal_targets(black_box(&midgame), black_box(pawn)))
    });
}

fn bench_movable_pawns(c: &mut Criterion) {
    let midgame = parse_layout(MIDGAME_LAYOUT).unwrap();
    c.bench_function("movable_pawns_midgame", |b| {
        b.iter(|| movable_pawns(black_box(&midgame), black_box(Side::One)))
    });
}

fn bench_outcome(c: &mut Criterion) {
    let midgame = parse_layout(MIDGAME_LAYOUT).unwrap();
    c.bench_function("outcome_midgame", |b| {
        b.iter(|| outcome(black_box(&midgame)))
    });
}

fn bench_smart_selection(c: &mut Criterion) {
    let midgame = parse_layout(MIDGAME_LAYOUT).unwrap();
    let neutron = midgame.neutron_position();
    let mut rng = SmallRng::seed_from_u64(1);

    c.bench_function("smart_pawn_midgame", |b| {
        b.iter(|| smart_pawn(black_box(&midgame), Side::One, &mut rng))
    });
    c.bench_function("smart_neutron_target_midgame", |b| {
        b.iter(|| smart_target(black_box(&midgame), Side::Two, neutron, &mut rng))
    });
}

fn bench_full_game(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("smart_vs_random_game", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut game = Game::with_seed([PlayerKind::SmartBot, PlayerKind::RandomBot], seed);
            game.play(&mut Headless)
        })
    });
}

fn bench_selfplay_batch(c: &mut Criterion) {
    let config = SelfPlayConfig {
        num_games: 20,
        threads: 1,
        seed: 42,
        quiet: true,
        ..Default::default()
    };
    let mut group = c.benchmark_group("selfplay");
    group.sample_size(20);
    group.bench_function("batch_20_games", |b| {
        b.iter(|| selfplay::run_self_play(black_box(&config)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_legal_targets,
    bench_movable_pawns,
    bench_outcome,
    bench_smart_selection,
    bench_full_game,
    bench_selfplay_batch,
);
criterion_main!(benches);
