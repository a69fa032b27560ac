//! The particle chain data model: positions, history, locks, rest lengths.

use crate::config::{ControlMode, TailConfig};
use crate::error::TailError;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// An ordered chain of Verlet particles, base to tip.
///
/// Four parallel sequences of equal particle count N: current positions,
/// previous positions (implicit velocity is `positions[i] - prev[i]`), lock
/// flags, and N-1 per-segment rest lengths. Exactly one end is locked at any
/// time, chosen by the control mode at build time.
pub struct TailChain<F: Float> {
    pub(crate) positions: AllocVec<Vec2<F>>,
    pub(crate) prev_positions: AllocVec<Vec2<F>>,
    pub(crate) locked: AllocVec<bool>,
    pub(crate) segment_lengths: AllocVec<F>,
}

impl<F: Float> TailChain<F> {
    /// Build a chain seeded as a straight line from `start` toward `end`.
    ///
    /// Particles are spaced `total_length / (N - 1)` apart along the
    /// start-to-end direction; the distance between the anchors themselves
    /// does not stretch or compress the seed. Coincident anchors degenerate
    /// to all particles at `start`, which the solver separates over the
    /// following steps.
    pub fn new(start: Vec2<F>, end: Vec2<F>, config: &TailConfig<F>) -> Result<Self, TailError> {
        config.validate()?;

        let count = config.segment_count;
        let seg_len = config.total_length / F::from_f32((count - 1) as f32);
        let dir = (end - start).normalize();

        let mut positions = AllocVec::with_capacity(count);
        let mut prev_positions = AllocVec::with_capacity(count);
        let mut locked = AllocVec::with_capacity(count);
        let mut segment_lengths = AllocVec::with_capacity(count - 1);

        for i in 0..count {
            let p = start + dir.scale(seg_len * F::from_f32(i as f32));
            positions.push(p);
            prev_positions.push(p);
            locked.push(match config.control_mode {
                ControlMode::BaseDriven => i == 0,
                ControlMode::TipDriven => i == count - 1,
            });
        }
        for _ in 0..count - 1 {
            segment_lengths.push(seg_len);
        }

        Ok(TailChain { positions, prev_positions, locked, segment_lengths })
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of segments (constraints), always `len() - 1`.
    pub fn segment_count(&self) -> usize {
        self.segment_lengths.len()
    }

    /// Current particle positions, base to tip.
    pub fn positions(&self) -> &[Vec2<F>] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Vec2<F> {
        self.positions[index]
    }

    pub fn prev_position(&self, index: usize) -> Vec2<F> {
        self.prev_positions[index]
    }

    pub fn is_locked(&self, index: usize) -> bool {
        self.locked[index]
    }

    /// Rest length of the segment between particles `index` and `index + 1`.
    pub fn segment_length(&self, index: usize) -> F {
        self.segment_lengths[index]
    }

    /// Sum of all rest lengths.
    pub fn total_rest_length(&self) -> F {
        let mut sum = F::zero();
        for &len in self.segment_lengths.iter() {
            sum = sum + len;
        }
        sum
    }

    /// Hard-pin the base particle: position and history both move, so the
    /// pin carries no implicit velocity into the next integration.
    pub fn pin_base(&mut self, pos: Vec2<F>) {
        self.positions[0] = pos;
        self.prev_positions[0] = pos;
    }

    /// Hard-pin the tip particle, history included.
    pub fn pin_tip(&mut self, pos: Vec2<F>) {
        let last = self.positions.len() - 1;
        self.positions[last] = pos;
        self.prev_positions[last] = pos;
    }

    /// Move one particle without touching its history. The mismatch reads
    /// as implicit velocity on the next integration.
    pub fn set_position(&mut self, index: usize, pos: Vec2<F>) {
        self.positions[index] = pos;
    }

    /// Add an impulse by shifting a particle's previous position; implicit
    /// velocity gains `impulse` on the next integration. Locked particles
    /// ignore it.
    pub fn poke(&mut self, index: usize, impulse: Vec2<F>) {
        if !self.locked[index] {
            self.prev_positions[index] = self.prev_positions[index] - impulse;
        }
    }
}
