//! Verlet integration: advances unlocked particles one time step.

use crate::chain::TailChain;
use crate::config::TailConfig;
use crate::float::Float;
use crate::vec::Vec2;

/// Threshold below which the drag term is skipped entirely.
const RESISTANCE_EPSILON: f32 = 0.01;

/// Advance every unlocked particle by one Verlet step.
///
/// Implicit velocity `pos - prev` is scaled by `(1 - damping) * inertia`,
/// gravity pulls along the screen-space down axis, and when resistance is
/// enabled a drag term `velocity * resistance * dt` opposes motion. Locked
/// particles are untouched; each particle reads and writes only its own
/// index, so processing order does not matter.
///
/// `dt <= 0` or a non-finite `dt` is a degenerate step and leaves the chain
/// unchanged.
pub fn integrate<F: Float>(chain: &mut TailChain<F>, config: &TailConfig<F>, dt: F) {
    if !dt.is_finite() || dt <= F::zero() {
        return;
    }
    let dt2 = dt * dt;
    let velocity_scale = (F::one() - config.damping) * config.inertia;
    let resistance_on = config.force_resistance > F::from_f32(RESISTANCE_EPSILON);

    for i in 0..chain.positions.len() {
        if chain.locked[i] {
            continue;
        }

        let pos = chain.positions[i];
        let prev = chain.prev_positions[i];
        let velocity = (pos - prev).scale(velocity_scale);

        let mut force = Vec2::down().scale(config.gravity);
        if resistance_on {
            force = force - velocity.scale(config.force_resistance * dt);
        }

        let next = pos + velocity + force.scale(dt2);

        chain.prev_positions[i] = pos;
        chain.positions[i] = next;
    }
}
