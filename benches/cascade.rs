use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_match3::core::{find_legal_move, find_matches, reshuffle, Game, GameConfig, SimpleRng};

fn bench_find_matches(c: &mut Criterion) {
    let game = Game::new(GameConfig::default().with_seed(12345)).unwrap();
    let board = game.board().clone();

    c.bench_function("find_matches_8x8", |b| {
        b.iter(|| find_matches(black_box(&board)))
    });
}

fn bench_find_legal_move(c: &mut Criterion) {
    let game = Game::new(GameConfig::default().with_seed(12345)).unwrap();
    let board = game.board().clone();

    c.bench_function("find_legal_move_8x8", |b| {
        b.iter(|| find_legal_move(black_box(&board)))
    });
}

fn bench_request_swap(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default().with_seed(12345)).unwrap();

    c.bench_function("request_swap_resolve", |b| {
        b.iter(|| {
            match game.hint() {
                Some(swap) => {
                    let _ = black_box(game.request_swap(swap.a, swap.b));
                }
                None => game.restart(),
            }
        })
    });
}

fn bench_reshuffle(c: &mut Criterion) {
    let game = Game::new(GameConfig::default().with_seed(12345)).unwrap();
    let mut board = game.board().clone();
    let mut rng = SimpleRng::new(7);

    c.bench_function("reshuffle_8x8", |b| {
        b.iter(|| reshuffle(black_box(&mut board), &mut rng))
    });
}

criterion_group!(
    benches,
    bench_find_matches,
    bench_find_legal_move,
    bench_request_swap,
    bench_reshuffle
);
criterion_main!(benches);
