use cipherforge::config::{Config, SwapStrategy};
use cipherforge::key::Key;
use cipherforge::language::LanguageModel;
use cipherforge::optimizer::{OptimizationOptions, Optimizer};
use cipherforge::scorer::Scorer;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

const PLAINTEXT: &str = "it was the best of times it was the worst of times it was the age of \
                         wisdom it was the age of foolishness and we had everything before us";

fn setup_scorer(config: &Config) -> Arc<Scorer> {
    Arc::new(Scorer::from_config(Arc::new(LanguageModel::english()), config))
}

fn criterion_benchmark(c: &mut Criterion) {
    let config = Config::default();
    let scorer = setup_scorer(&config);
    let key = Key::parse("QWERTYUIOPASDFGHJKLZXCVBNM").expect("valid key");
    let cipher = key.apply(PLAINTEXT);

    c.bench_function("score (dictionary + ngrams)", |b| {
        b.iter(|| scorer.score(black_box(PLAINTEXT)))
    });

    c.bench_function("apply + score", |b| {
        b.iter(|| scorer.score(&black_box(&key).apply(black_box(&cipher))))
    });

    let mut group = c.benchmark_group("crack");
    group.sample_size(10);
    for strategy in [SwapStrategy::FirstImprovement, SwapStrategy::SteepestAscent] {
        let mut cfg = config.clone();
        cfg.search.swap_strategy = strategy;
        let optimizer = Optimizer::new(setup_scorer(&cfg), OptimizationOptions::from(&cfg));
        group.bench_function(strategy.to_string(), |b| {
            b.iter(|| optimizer.run(black_box(&cipher)))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
