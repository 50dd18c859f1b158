use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gauge_stat::prelude::*;

// Helper building a bounded stat with the given increment rules
fn setup_stat(increment: Option<f64>, round: bool) -> Stat {
    let mut config = StatConfig::new()
        .with_base_value(500.0)
        .with_bounds(0.0, 1000.0)
        .with_round_to_increment(round);
    if let Some(increment) = increment {
        config = config.with_increment_by(increment);
    }
    Stat::new(config)
}

pub fn bench_modify_proxy(c: &mut Criterion) {
    let mut group = c.benchmark_group("modify_proxy");

    let cases = [("unconstrained", None, false), ("increment", Some(1.0), false), ("rounded", Some(5.0), true)];
    for (label, increment, round) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(label), &(increment, round), |b, &(increment, round)| {
            let mut stat = setup_stat(increment, round);
            let mut direction = 1.0;
            b.iter(|| {
                if stat.value() >= 990.0 || stat.value() <= 10.0 {
                    direction = -direction;
                }
                black_box(stat.modify_proxy(black_box(3.0 * direction), ModMode::Commit).ok());
            });
        });
    }

    group.finish();
}

pub fn bench_dry_run(c: &mut Criterion) {
    let stat = setup_stat(Some(2.0), true);

    c.bench_function("can_modify_proxy", |b| {
        b.iter(|| black_box(stat.can_modify_proxy(black_box(-7.0))));
    });
}

pub fn bench_hooks(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_hooks");

    for count in [1usize, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut stat = setup_stat(None, false);
            for i in 0..count {
                let threshold = (i * 10) as f64;
                stat.register_hook(format!("hook_{i}"), threshold, "<", true, |_| {}, true);
            }
            b.iter(|| black_box(stat.check_hooks(black_box(250.0))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_modify_proxy, bench_dry_run, bench_hooks);
criterion_main!(benches);
