use algokit::{MatcherBuilder, Strategy};
use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration,
};
use std::hint::black_box;

// `a*` repeated `stars` times followed by a `c` that never matches
fn pathological(stars: usize) -> (String, String) {
    let text = format!("{}b", "a".repeat(12));
    let pattern = format!("{}c", "a*".repeat(stars));
    (text, pattern)
}

fn check_no_match(strategy: Strategy, text: &str, pattern: &str) {
    let mut m = MatcherBuilder::new()
        .strategy(strategy)
        .build(pattern)
        .unwrap();
    assert!(!m.is_match(text).unwrap());
}

fn matching_varying_stars(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut group = c.benchmark_group("matching_varying_stars");
    group.plot_config(plot_config);

    let star_counts = [1, 2, 4, 6, 8];
    for strategy in [Strategy::Backtrack, Strategy::Table, Strategy::Memo] {
        for &stars in &star_counts {
            let (text, pattern) = pathological(stars);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), stars),
                &stars,
                |b, _| {
                    b.iter(|| check_no_match(strategy, black_box(&text), &pattern));
                },
            );
        }
    }

    group.finish();
}

fn matching_long_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching_long_text");

    for len in [1_000, 10_000] {
        let text = "ab".repeat(len / 2);
        for strategy in [Strategy::Table, Strategy::Memo] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), len),
                &len,
                |b, _| {
                    b.iter(|| check_no_match(strategy, black_box(&text), ".*a"));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(matching, matching_varying_stars, matching_long_text);
criterion_main!(matching);
