//! Tip control: how the end particle is driven toward its target.

use crate::chain::TailChain;
use crate::config::{ControlMode, TailConfig};
use crate::float::Float;
use crate::vec::Vec2;

/// Below this, base-driven follow is disabled and the tip is a free mass.
const FOLLOW_EPSILON: f32 = 0.01;

/// Apply tip control for one step.
///
/// Tip-driven mode hard-pins the last particle (position and history) to the
/// target, making it a second anchor for the solver. Base-driven mode eases
/// the last particle toward the target with lerp weight `follow_speed * dt`,
/// saturating at 1: a fast-follow configuration snaps onto the target
/// instead of shooting past it and fighting the solver. With no target the
/// step does nothing in either mode.
pub fn apply<F: Float>(
    chain: &mut TailChain<F>,
    config: &TailConfig<F>,
    target: Option<Vec2<F>>,
    dt: F,
) {
    let Some(target) = target else {
        return;
    };

    match config.control_mode {
        ControlMode::TipDriven => {
            chain.pin_tip(target);
        }
        ControlMode::BaseDriven => {
            if config.follow_speed > F::from_f32(FOLLOW_EPSILON) {
                let weight = (config.follow_speed * dt).min(F::one());
                let last = chain.positions.len() - 1;
                let eased = chain.positions[last].lerp(target, weight);
                chain.positions[last] = eased;
            }
        }
    }
}
