use swishy::{NoOpSink, OrthoCamera, StepInputs, TailConfig, TailSimulation, Vec2, Vec3};

#[test]
fn repeated_runs_are_bitwise_identical() {
    let results: Vec<_> = (0..5)
        .map(|_| {
            let camera = OrthoCamera::new(Vec3::new(320.0, 180.0, 0.0), Vec2::new(640.0, 360.0));
            let inputs = StepInputs::new(&camera, Vec2::new(640.0, 360.0))
                .with_base_anchor(Vec3::new(100.0, 40.0, 0.0))
                .with_tip_target(Vec3::new(220.0, 90.0, 0.0));
            let mut sim = TailSimulation::new(Vec2::zero(), TailConfig::<f32>::new()).unwrap();
            for _ in 0..60 {
                sim.step(&inputs, 1.0 / 60.0, &mut NoOpSink);
            }
            sim.positions().to_vec()
        })
        .collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}
