use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

const TIERS: [(&str, GameConfig); 5] = [
    ("beginner", GameConfig::beginner()),
    ("intermediate", GameConfig::intermediate()),
    ("expert", GameConfig::expert()),
    ("dense_half", GameConfig::new_unchecked(16, 30, 240)),
    ("dense_full", GameConfig::new_unchecked(16, 30, 479)),
];

fn gen_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in TIERS {
        for placement in [Placement::Rejection, Placement::Shuffle] {
            group.bench_with_input(
                BenchmarkId::new(format!("{placement:?}"), name),
                &config,
                |b, &config| {
                    let mut seed = 0;
                    b.iter(|| {
                        seed += 1;
                        RandomBoardGenerator::new(seed, placement)
                            .generate(black_box(config))
                            .unwrap()
                    })
                },
            );
        }
    }
    group.finish();
}

fn reveal_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal");
    for (name, config) in TIERS.into_iter().take(3) {
        let board = RandomBoardGenerator::new(7, Placement::Shuffle)
            .generate(config)
            .unwrap();
        let start = (0..config.rows)
            .flat_map(|row| (0..config.columns).map(move |column| (row, column)))
            .find(|&coords| board[coords].value() == 0)
            .unwrap_or((0, 0));
        group.bench_with_input(BenchmarkId::new("flood_fill", name), &board, |b, board| {
            b.iter(|| {
                let mut game = Game::from_board(board.clone());
                game.reveal(black_box(start))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, gen_tiers, reveal_tiers);
criterion_main!(benches);
