//! Criterion benchmarks for flp_core strategy analysis
//!
//! Run with: cargo bench -p flp_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use flp_core::analysis::{
    AnalysisCache, EconomicParams, analyze_asset, analyze_portfolio, sensitivity_curves, tornado,
};
use flp_core::model::StrategyKind;
use flp_core::seed::baseline_assets;

fn bench_analyze_asset(c: &mut Criterion) {
    let assets = baseline_assets();
    let params = EconomicParams::default();

    c.bench_function("analyze_asset", |b| {
        b.iter(|| analyze_asset(black_box(&assets[0]), black_box(&params)));
    });
}

fn bench_analyze_portfolio(c: &mut Criterion) {
    let assets = baseline_assets();
    let mut group = c.benchmark_group("analyze_portfolio");

    for horizon in [10_u32, 20, 40] {
        let params = EconomicParams {
            planning_horizon_years: horizon,
            ..EconomicParams::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(horizon),
            &params,
            |b, params| {
                b.iter(|| analyze_portfolio(black_box(&assets), black_box(params)));
            },
        );
    }
    group.finish();
}

fn bench_sensitivity(c: &mut Criterion) {
    let assets = baseline_assets();
    let params = EconomicParams::default();
    let primary = StrategyKind::Proactive.strategy();
    let baseline = StrategyKind::Reactive.strategy();

    c.bench_function("sensitivity_curves", |b| {
        b.iter(|| {
            sensitivity_curves(
                black_box(&assets[0]),
                black_box(primary),
                black_box(baseline),
                black_box(&params),
            )
        });
    });

    c.bench_function("tornado", |b| {
        b.iter(|| {
            tornado(
                black_box(&assets[0]),
                black_box(primary),
                black_box(baseline),
                black_box(&params),
            )
        });
    });
}

fn bench_cached_analysis(c: &mut Criterion) {
    let assets = baseline_assets();
    let params = EconomicParams::default();

    c.bench_function("analyze_asset_cached", |b| {
        let mut cache = AnalysisCache::new();
        b.iter(|| {
            for asset in &assets {
                black_box(cache.analyze_asset(asset, &params));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_analyze_asset,
    bench_analyze_portfolio,
    bench_sensitivity,
    bench_cached_analysis
);
criterion_main!(benches);
