//! Cosmetic curvature shaping: relaxes interior particles toward their
//! neighbor midpoint.

use crate::chain::TailChain;
use crate::float::Float;

/// One smoothing pass over the interior particles.
///
/// Each particle 1..N-2 lerps toward the midpoint of its neighbors with
/// weight `smoothness * 0.1`; the scale keeps the pass subtle over the
/// user-facing [0, 1] range. Rest lengths are never touched, so total chain
/// length can drift slightly from the configured rest length. Runs after
/// constraint relaxation has settled the step.
pub fn smooth<F: Float>(chain: &mut TailChain<F>, smoothness: F) {
    let weight = smoothness * F::from_f32(0.1);
    for i in 1..chain.positions.len() - 1 {
        let prev = chain.positions[i - 1];
        let next = chain.positions[i + 1];
        let desired = (prev + next).scale(F::half());
        chain.positions[i] = chain.positions[i].lerp(desired, weight);
    }
}
