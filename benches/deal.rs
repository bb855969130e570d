use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mindflip::grid::deal;
use mindflip::{GameRng, GameSession, GridSize, MemoryHighScoreStore, SessionConfig};

fn bench_deal_small(c: &mut Criterion) {
    let mut rng = GameRng::new(12345);
    let size = GridSize::for_level(1);

    c.bench_function("deal_level_1", |b| {
        b.iter(|| deal(black_box(size), &mut rng))
    });
}

fn bench_deal_full(c: &mut Criterion) {
    let mut rng = GameRng::new(12345);
    let size = GridSize::for_level(11);

    c.bench_function("deal_4x6", |b| {
        b.iter(|| deal(black_box(size), &mut rng))
    });
}

fn bench_update_idle(c: &mut Criterion) {
    let mut session = GameSession::new(SessionConfig::default(), MemoryHighScoreStore::new(), 12345);
    let mut now = Duration::ZERO;

    c.bench_function("update_idle_16ms", |b| {
        b.iter(|| {
            now += Duration::from_millis(16);
            session.update(black_box(now))
        })
    });
}

fn bench_reset(c: &mut Criterion) {
    let mut session = GameSession::new(SessionConfig::default(), MemoryHighScoreStore::new(), 12345);

    c.bench_function("reset", |b| {
        b.iter(|| session.reset())
    });
}

criterion_group!(benches, bench_deal_small, bench_deal_full, bench_update_idle, bench_reset);
criterion_main!(benches);
