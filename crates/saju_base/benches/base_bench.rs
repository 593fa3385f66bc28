use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    FourPillarChart, MidnightPolicy, PillarInputs, StemBranchPair, compatibility, detect_patterns,
    element_tally, resolve_chart, ten_god_tally,
};

fn sample_chart(offset: i64) -> FourPillarChart {
    FourPillarChart::new(
        StemBranchPair::from_sexagenary(15 + offset),
        StemBranchPair::from_sexagenary(12 + offset),
        StemBranchPair::from_sexagenary(54 + offset),
        StemBranchPair::from_sexagenary(54 + offset),
    )
}

fn resolver_bench(c: &mut Criterion) {
    let inputs = PillarInputs {
        calendar_year: 2000,
        calendar_month: 1,
        sun_longitude_deg: 280.0,
        local_jdn: 2_451_545,
        local_hour: 23,
    };
    c.bench_function("resolve_chart", |b| {
        b.iter(|| resolve_chart(black_box(&inputs), MidnightPolicy::EarlyRollover))
    });
}

fn tally_bench(c: &mut Criterion) {
    let chart = sample_chart(0);
    let mut group = c.benchmark_group("tally");
    group.bench_function("element_tally", |b| {
        b.iter(|| element_tally(black_box(&chart)))
    });
    group.bench_function("ten_god_tally", |b| {
        b.iter(|| ten_god_tally(black_box(&chart)))
    });
    group.finish();
}

fn rules_bench(c: &mut Criterion) {
    let chart = sample_chart(0);
    let elements = element_tally(&chart);
    let gods = ten_god_tally(&chart);
    c.bench_function("detect_patterns", |b| {
        b.iter(|| detect_patterns(black_box(&chart), &elements, &gods))
    });

    let other = sample_chart(7);
    c.bench_function("compatibility", |b| {
        b.iter(|| compatibility(black_box(&chart), black_box(&other)))
    });
}

criterion_group!(benches, resolver_bench, tally_bench, rules_bench);
criterion_main!(benches);
