//! Benchmarks for the full odds pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use odds_apex::engine::{Engine, EngineConfig, Profile};
use odds_apex::market::{parse_targets, MatchOdds};
use odds_apex::model::Score;
use odds_apex::params::ParameterSet;
use rust_decimal_macros::dec;

fn live_params() -> ParameterSet {
    let mut params = ParameterSet::default();
    params.home.form.xg_for = 1.7;
    params.away.form.xg_for = 1.2;
    params.home.form.avg_scored = 1.8;
    params.away.form.avg_conceded = 1.3;
    params.state.elapsed_minutes = 55.0;
    params.state.score = Score::new(1, 0);
    params.bankroll.balance = dec!(1000);
    params.market.match_odds = MatchOdds::new(1.6, 3.9, 6.5);
    params.market.over = 2.2;
    params.market.under = 1.7;
    params.market.targets = parse_targets("1-0@4.5, 2-0@6.0, 1-1@5.5, 2-1@9.0");
    params
}

fn benchmark_in_play(c: &mut Criterion) {
    let engine = Engine::new(EngineConfig::preset(Profile::InPlay));
    let params = live_params();

    c.bench_function("pipeline_in_play", |b| {
        b.iter(|| engine.calculate(black_box(&params)))
    });
}

fn benchmark_correct_score(c: &mut Criterion) {
    let engine = Engine::new(EngineConfig::preset(Profile::CorrectScore));
    let params = live_params();

    c.bench_function("pipeline_correct_score", |b| {
        b.iter(|| engine.calculate(black_box(&params)))
    });
}

fn benchmark_wide_grid(c: &mut Criterion) {
    let mut config = EngineConfig::preset(Profile::PreMatch);
    config.scoreline_grid = 20;
    let engine = Engine::new(config);
    let params = live_params();

    c.bench_function("pipeline_pre_match_grid_20", |b| {
        b.iter(|| engine.calculate(black_box(&params)))
    });
}

criterion_group!(
    benches,
    benchmark_in_play,
    benchmark_correct_score,
    benchmark_wide_grid
);
criterion_main!(benches);
