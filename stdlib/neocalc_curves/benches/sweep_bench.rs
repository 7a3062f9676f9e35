use criterion::{black_box, criterion_group, criterion_main, Criterion};
use neocalc_curves::{sweep, ChartState, ClinicalInputs, Predictor, SweepConfig};
use neocalc_models::assess;

fn bench_assess(c: &mut Criterion) {
    let inputs = ClinicalInputs::new(1.2, 1500.0, 30.0, 5.0);
    c.bench_function("assess", |b| b.iter(|| assess(black_box(&inputs))));
}

fn bench_sweeps(c: &mut Criterion) {
    let fixed = ClinicalInputs::default();
    let mut group = c.benchmark_group("sweep");

    for predictor in Predictor::ALL {
        let config = SweepConfig::preset(predictor);
        group.bench_function(predictor.as_str(), |b| {
            b.iter(|| sweep(black_box(fixed), black_box(config)).count())
        });
    }

    let dense = SweepConfig::new(Predictor::Flow, 0.2, 3.0, 5_000);
    group.bench_function("flow_dense", |b| {
        b.iter(|| sweep(black_box(fixed), black_box(dense)).count())
    });
    group.finish();
}

fn bench_series(c: &mut Criterion) {
    let state = ChartState::default();
    c.bench_function("chart_series", |b| b.iter(|| black_box(&state).series()));
}

criterion_group!(benches, bench_assess, bench_sweeps, bench_series);
criterion_main!(benches);
