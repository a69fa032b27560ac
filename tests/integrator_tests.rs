use swishy::integrator;
use swishy::{TailChain, TailConfig, Vec2};

fn drop_config() -> TailConfig<f32> {
    // Two particles, locked base, tip free to fall.
    TailConfig::new()
        .with_segment_count(2)
        .with_total_length(10.0)
        .with_gravity(100.0)
        .with_damping(0.0)
        .with_force_resistance(0.0)
}

#[test]
fn free_particle_falls_under_gravity() {
    let config = drop_config();
    let mut chain = TailChain::new(Vec2::zero(), Vec2::new(10.0, 0.0), &config).unwrap();

    let dt = 1.0 / 60.0;
    for _ in 0..60 {
        integrator::integrate(&mut chain, &config, dt);
    }

    // One second of free fall: y ~ g * t^2 / 2, down is +y.
    let expected_y = 0.5 * 100.0;
    let y = chain.position(1).y;
    assert!((y - expected_y).abs() < 2.0, "tip.y = {}, expected ~{}", y, expected_y);
}

#[test]
fn locked_particle_never_moves() {
    let config = drop_config();
    let mut chain = TailChain::new(Vec2::zero(), Vec2::new(10.0, 0.0), &config).unwrap();

    for _ in 0..120 {
        integrator::integrate(&mut chain, &config, 1.0 / 60.0);
    }

    assert_eq!(chain.position(0), Vec2::zero());
    assert_eq!(chain.prev_position(0), Vec2::zero());
}

#[test]
fn degenerate_dt_is_a_no_op() {
    let config = drop_config();
    let mut chain = TailChain::new(Vec2::zero(), Vec2::new(10.0, 0.0), &config).unwrap();
    let before: Vec<_> = chain.positions().to_vec();

    integrator::integrate(&mut chain, &config, 0.0);
    integrator::integrate(&mut chain, &config, -1.0);
    integrator::integrate(&mut chain, &config, f32::NAN);

    assert_eq!(chain.positions(), &before[..]);
    for p in chain.positions() {
        assert!(p.is_finite());
    }
}

#[test]
fn zero_inertia_discards_carried_velocity() {
    let config = drop_config().with_inertia(0.0);
    let mut chain = TailChain::new(Vec2::zero(), Vec2::new(10.0, 0.0), &config).unwrap();

    let dt = 0.1;
    let step_displacement = 100.0 * dt * dt; // gravity * dt^2, no velocity term

    integrator::integrate(&mut chain, &config, dt);
    let after_one = chain.position(1).y;
    integrator::integrate(&mut chain, &config, dt);
    let after_two = chain.position(1).y;

    assert!((after_one - step_displacement).abs() < 1e-5);
    assert!(
        ((after_two - after_one) - step_displacement).abs() < 1e-5,
        "with zero inertia every step covers the same distance, got {}",
        after_two - after_one,
    );
}

#[test]
fn damping_slows_the_fall() {
    let dt = 1.0 / 60.0;

    let undamped = drop_config();
    let mut free = TailChain::new(Vec2::zero(), Vec2::new(10.0, 0.0), &undamped).unwrap();
    let damped = drop_config().with_damping(0.5);
    let mut slow = TailChain::new(Vec2::zero(), Vec2::new(10.0, 0.0), &damped).unwrap();

    for _ in 0..60 {
        integrator::integrate(&mut free, &undamped, dt);
        integrator::integrate(&mut slow, &damped, dt);
    }

    assert!(
        slow.position(1).y < free.position(1).y,
        "damped fall {} should trail undamped fall {}",
        slow.position(1).y,
        free.position(1).y,
    );
}

#[test]
fn resistance_opposes_motion() {
    let dt = 1.0 / 60.0;

    let plain = drop_config();
    let mut free = TailChain::new(Vec2::zero(), Vec2::new(10.0, 0.0), &plain).unwrap();
    let dragged = drop_config().with_force_resistance(50.0);
    let mut slow = TailChain::new(Vec2::zero(), Vec2::new(10.0, 0.0), &dragged).unwrap();

    for _ in 0..120 {
        integrator::integrate(&mut free, &plain, dt);
        integrator::integrate(&mut slow, &dragged, dt);
    }

    assert!(
        slow.position(1).y < free.position(1).y,
        "drag should slow the fall: {} vs {}",
        slow.position(1).y,
        free.position(1).y,
    );
}

#[test]
fn poke_adds_implicit_velocity() {
    let config = drop_config().with_gravity(0.0);
    let mut chain = TailChain::new(Vec2::zero(), Vec2::new(10.0, 0.0), &config).unwrap();

    chain.poke(1, Vec2::new(5.0, 0.0));
    integrator::integrate(&mut chain, &config, 1.0 / 60.0);

    let x = chain.position(1).x;
    assert!((x - 15.0).abs() < 1e-4, "tip should carry the impulse, x = {}", x);
}
