//! Throughput of whole games driven through the state machine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hitman::core::{Action, GameConfig, GameRng};
use hitman::games::hitman::HitmanGame;

fn play_out(game: &HitmanGame, rng: &mut GameRng) -> usize {
    let mut state = game.reset();
    let mut steps = 0;
    while !state.is_over() {
        let action = if steps % 2 == 0 { Action::Play } else { Action::Draw };
        // Only fails once the game is over, which the loop guards against
        let _ = game.act(&mut state, action, rng);
        steps += 1;
    }
    steps
}

fn bench_full_game(c: &mut Criterion) {
    let two = HitmanGame::default();
    let eight = HitmanGame::new(
        GameConfig::new().with_players((0..8).map(|i| format!("P{i}"))),
    )
    .expect("valid roster");

    c.bench_function("two_player_game", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| black_box(play_out(&two, &mut rng)));
    });

    c.bench_function("eight_player_game", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| black_box(play_out(&eight, &mut rng)));
    });
}

criterion_group!(benches, bench_full_game);
criterion_main!(benches);
