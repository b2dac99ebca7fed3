//! Benchmark for full-match playouts.
//!
//! Drives whole matches with a seeded policy picking uniformly from the
//! selectable actions. Covers the deal, legality scans, resolution and
//! the end-of-match scoring in one number.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rosenkoenig::core::{GameRng, RandomSource};
use rosenkoenig::play::GamePlay;

fn play_one_match(seed: u64) -> usize {
    let mut play = GamePlay::builder()
        .seed(seed)
        .build()
        .expect("a full deck always deals");
    let mut policy = GameRng::new(seed ^ 0x9E37_79B9_7F4A_7C15);

    while !play.is_finished() {
        let actions = play.selectable_actions();
        let pick =
            ((policy.next_uniform() * actions.len() as f64) as usize).min(actions.len() - 1);
        play.play_turn(actions[pick])
            .expect("selectable actions resolve");
    }
    play.history().len()
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("random_playout", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(play_one_match(black_box(seed)))
        });
    });

    c.bench_function("seeded_playout", |b| {
        b.iter(|| black_box(play_one_match(black_box(42))));
    });
}

criterion_group!(benches, bench_playout);
criterion_main!(benches);
