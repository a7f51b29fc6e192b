use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mandala_chart::{
    DesignTimeConfig, GateSequence, LongitudeSnapshot, MandalaParams, map_to_gate_line,
    solve_design_time, zodiac_position,
};
use mandala_ephem::{Ephemeris, EphemerisConfig, NodeMode};

fn mapping_bench(c: &mut Criterion) {
    let gates: Vec<u8> = (1..=64).collect();
    let seq = GateSequence::new(&gates).unwrap();
    let params = MandalaParams::with_start(313.25);

    let mut group = c.benchmark_group("mapping");
    group.bench_function("zodiac_position", |b| {
        b.iter(|| zodiac_position(black_box(219.5432)))
    });
    group.bench_function("map_to_gate_line", |b| {
        b.iter(|| map_to_gate_line(black_box(219.5432), &params, &seq))
    });
    group.finish();
}

fn solver_bench(c: &mut Criterion) {
    let eph = Ephemeris::new(EphemerisConfig::default()).unwrap();
    let cfg = DesignTimeConfig::new(88.0, 1e-4, 1.0);
    let jd = 2_447_991.169_444;

    let mut group = c.benchmark_group("design_time");
    group.bench_function("solve_88deg", |b| {
        b.iter(|| solve_design_time(&eph, black_box(jd), &cfg))
    });
    group.bench_function("capture_snapshot", |b| {
        b.iter(|| LongitudeSnapshot::capture(&eph, black_box(jd), NodeMode::True))
    });
    group.finish();
}

criterion_group!(benches, mapping_bench, solver_bench);
criterion_main!(benches);
