use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sizhu_base::{
    analyze_elements_default, branch_relations, detect_shensha, day_pillar, ten_god,
    FourPillars, Pillar, Stem,
};
use sizhu_time::CivilTime;

fn sample_chart() -> FourPillars {
    FourPillars {
        year: Pillar::from_cycle_index(0),
        month: Pillar::from_cycle_index(2),
        day: Pillar::from_cycle_index(5),
        hour: Pillar::from_cycle_index(0),
    }
}

fn ganzhi_primitives_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ganzhi_primitives");
    group.bench_function("ten_god", |b| {
        b.iter(|| ten_god(black_box(Stem::Jia), black_box(Stem::Geng)))
    });
    group.bench_function("day_pillar", |b| {
        let t = CivilTime::new(1984, 2, 4, 23, 19, 0.0);
        b.iter(|| day_pillar(black_box(&t), true))
    });
    group.finish();
}

fn ornament_bench(c: &mut Criterion) {
    let chart = sample_chart();

    let mut group = c.benchmark_group("ornaments");
    group.bench_function("branch_relations", |b| {
        b.iter(|| branch_relations(black_box(&chart)))
    });
    group.bench_function("detect_shensha", |b| {
        b.iter(|| detect_shensha(black_box(&chart)))
    });
    group.bench_function("analyze_elements", |b| {
        b.iter(|| analyze_elements_default(black_box(&chart)))
    });
    group.finish();
}

criterion_group!(benches, ganzhi_primitives_bench, ornament_bench);
criterion_main!(benches);
