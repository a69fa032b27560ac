//! Output seam: where finished particle positions go each step.

use crate::float::Float;
use crate::vec::Vec2;

/// Receives the ordered particle positions at the end of every step.
///
/// The simulation never draws; hosts implement this to feed a polyline
/// renderer, record trajectories, or assert in tests.
pub trait PolylineSink<F: Float> {
    /// Called once per completed step with positions in base-to-tip order.
    fn publish(&mut self, positions: &[Vec2<F>]);
}

/// A sink that discards everything. Use when stepping without output.
pub struct NoOpSink;

impl<F: Float> PolylineSink<F> for NoOpSink {
    fn publish(&mut self, _positions: &[Vec2<F>]) {}
}
