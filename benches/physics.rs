//! Benchmarks for the tail simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use swishy::{NoOpSink, OrthoCamera, StepInputs, TailConfig, TailSimulation, Vec2, Vec3};

fn bench_tail_step(c: &mut Criterion) {
    c.bench_function("tail_50_segments_60_steps", |b| {
        b.iter(|| {
            let camera = OrthoCamera::new(Vec3::new(320.0, 180.0, 0.0), Vec2::new(640.0, 360.0));
            let inputs = StepInputs::new(&camera, Vec2::new(640.0, 360.0))
                .with_base_anchor(Vec3::new(100.0, 40.0, 0.0))
                .with_tip_target(Vec3::new(250.0, 120.0, 0.0));
            let config = TailConfig::<f32>::new()
                .with_segment_count(50)
                .with_total_length(200.0)
                .with_iterations(8);
            let mut sim = TailSimulation::new(Vec2::zero(), config).unwrap();
            for _ in 0..60 {
                sim.step(&inputs, 1.0 / 60.0, &mut NoOpSink);
            }
            sim.positions().to_vec()
        });
    });
}

fn bench_heavy_relaxation(c: &mut Criterion) {
    c.bench_function("tail_15_segments_30_iterations_60_steps", |b| {
        b.iter(|| {
            let camera = OrthoCamera::new(Vec3::new(320.0, 180.0, 0.0), Vec2::new(640.0, 360.0));
            let inputs = StepInputs::new(&camera, Vec2::new(640.0, 360.0))
                .with_base_anchor(Vec3::new(100.0, 40.0, 0.0));
            let config = TailConfig::<f32>::new().with_iterations(30);
            let mut sim = TailSimulation::new(Vec2::zero(), config).unwrap();
            for _ in 0..60 {
                sim.step(&inputs, 1.0 / 60.0, &mut NoOpSink);
            }
            sim.positions().to_vec()
        });
    });
}

criterion_group!(benches, bench_tail_step, bench_heavy_relaxation);
criterion_main!(benches);
