use chart_threshold::{build, classify_value, split_shape, ChartGeometry, Config, ValueAxis};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_values(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.01).sin() * 50.0 + 50.0).collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_value");
    let values = gen_values(100_000);
    for &bands in &[1usize, 4, 16] {
        let thresholds = (0..bands).map(|i| 100.0 - (i as f64 + 1.0) * (100.0 / (bands as f64 + 1.0)));
        let config = Config::builder().thresholds(thresholds).build().expect("config");
        group.bench_with_input(BenchmarkId::from_parameter(format!("t{bands}")), &config, |b, cfg| {
            b.iter(|| {
                for &v in &values {
                    black_box(classify_value(v, cfg.thresholds()));
                }
            });
        });
    }
    group.finish();
}

fn bench_masks(c: &mut Criterion) {
    let config = Config::builder().thresholds([90.0, 75.0, 50.0, 25.0, 10.0]).build().expect("config");
    let axis = ValueAxis::linear(560.0, 0.0, 100.0);
    let geometry = ChartGeometry::full(1024.0, 560.0, &axis);
    c.bench_function("build_masks_5", |b| b.iter(|| black_box(build(&geometry, &config))));

    let masks = build(&geometry, &config).expect("masks");
    c.bench_function("split_shape_5", |b| {
        b.iter(|| black_box(split_shape(String::from("M0,0 L10,10"), &config, &masks)))
    });
}

criterion_group!(benches, bench_classify, bench_masks);
criterion_main!(benches);
