//! Configuration types for the tail simulation.

use crate::error::TailError;
use crate::float::Float;

/// Which end of the chain is externally pinned each step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ControlMode {
    /// Particle 0 is pinned to the base anchor; the tip lags its target.
    #[default]
    BaseDriven,
    /// The last particle is hard-pinned to the tip target; both ends anchor
    /// the chain and constraint solving distributes motion between them.
    TipDriven,
}

/// Tunable parameters for one tail chain.
///
/// Replaced wholesale when a preset is applied. Changing `segment_count`,
/// `total_length`, or `control_mode` requires a chain rebuild.
///
/// # Builder Pattern
/// ```
/// use swishy::config::TailConfig;
///
/// let config: TailConfig<f32> = TailConfig::new()
///     .with_segment_count(20)
///     .with_total_length(150.0)
///     .with_gravity(220.0)
///     .with_follow_speed(40.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TailConfig<F: Float> {
    /// Number of particles in the chain. Minimum 2. Default: 15.
    pub segment_count: usize,
    /// Total rest length of the chain. Default: 120.
    pub total_length: F,
    /// Constraint solver iterations per step. More iterations read stiffer.
    /// Default: 10.
    pub iterations: usize,
    /// Constraint correction strength. Values above 1 overshoot toward
    /// faster convergence and can oscillate; useful for whip-like motion.
    /// Default: 1.0.
    pub stiffness: F,
    /// Gravity magnitude along the screen-space down axis (+y). Negative
    /// values pull up. Default: 180.
    pub gravity: F,
    /// Velocity damping factor in [0, 1). 0 keeps all velocity.
    /// Default: 0.012.
    pub damping: F,
    /// Scale applied to implicit velocity. 0 freezes carry-over motion.
    /// Default: 1.0.
    pub inertia: F,
    /// How fast the tip eases toward its target in base-driven mode.
    /// The lerp weight is `follow_speed * dt`, saturating at 1 (snap).
    /// 0 disables following. Default: 50.
    pub follow_speed: F,
    /// Which end is externally driven. Default: base-driven.
    pub control_mode: ControlMode,
    /// Cosmetic curvature shaping in [0, 1]. Default: 0.3.
    pub curve_smoothness: F,
    /// Drag opposing implicit velocity, scaled by dt. Default: 5.0.
    pub force_resistance: F,
    /// Halves the effective iteration count (minimum 1). Default: false.
    pub performance_mode: bool,
}

impl<F: Float> TailConfig<F> {
    /// Create a config with default values.
    pub fn new() -> Self {
        TailConfig {
            segment_count: 15,
            total_length: F::from_f32(120.0),
            iterations: 10,
            stiffness: F::one(),
            gravity: F::from_f32(180.0),
            damping: F::from_f32(0.012),
            inertia: F::one(),
            follow_speed: F::from_f32(50.0),
            control_mode: ControlMode::BaseDriven,
            curve_smoothness: F::from_f32(0.3),
            force_resistance: F::from_f32(5.0),
            performance_mode: false,
        }
    }

    /// Set the number of particles.
    pub fn with_segment_count(mut self, segment_count: usize) -> Self {
        self.segment_count = segment_count;
        self
    }

    /// Set the total rest length.
    pub fn with_total_length(mut self, total_length: F) -> Self {
        self.total_length = total_length;
        self
    }

    /// Set the constraint iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the constraint stiffness.
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the gravity magnitude.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the inertia scale.
    pub fn with_inertia(mut self, inertia: F) -> Self {
        self.inertia = inertia;
        self
    }

    /// Set the tip follow speed.
    pub fn with_follow_speed(mut self, follow_speed: F) -> Self {
        self.follow_speed = follow_speed;
        self
    }

    /// Set the control mode.
    pub fn with_control_mode(mut self, control_mode: ControlMode) -> Self {
        self.control_mode = control_mode;
        self
    }

    /// Set the curve smoothness.
    pub fn with_curve_smoothness(mut self, curve_smoothness: F) -> Self {
        self.curve_smoothness = curve_smoothness;
        self
    }

    /// Set the external-force resistance.
    pub fn with_force_resistance(mut self, force_resistance: F) -> Self {
        self.force_resistance = force_resistance;
        self
    }

    /// Set the performance flag.
    pub fn with_performance_mode(mut self, performance_mode: bool) -> Self {
        self.performance_mode = performance_mode;
        self
    }

    /// Check every declared domain. Called at construction and rebuild;
    /// a rejected config never reaches a live chain.
    pub fn validate(&self) -> Result<(), TailError> {
        let zero = F::zero();
        let one = F::one();

        if self.segment_count < 2 {
            return Err(TailError::InvalidSegmentCount { count: self.segment_count });
        }
        if !self.total_length.is_finite() || self.total_length <= zero {
            return Err(TailError::InvalidTotalLength);
        }
        if self.iterations < 1 {
            return Err(TailError::InvalidIterations);
        }
        if !self.stiffness.is_finite() || self.stiffness <= zero {
            return Err(TailError::InvalidStiffness);
        }
        if !self.damping.is_finite() || self.damping < zero || self.damping >= one {
            return Err(TailError::InvalidDamping);
        }
        if !self.inertia.is_finite() || self.inertia < zero {
            return Err(TailError::InvalidInertia);
        }
        if !self.follow_speed.is_finite() || self.follow_speed < zero {
            return Err(TailError::InvalidFollowSpeed);
        }
        if !self.curve_smoothness.is_finite()
            || self.curve_smoothness < zero
            || self.curve_smoothness > one
        {
            return Err(TailError::InvalidSmoothness);
        }
        if !self.force_resistance.is_finite() || self.force_resistance < zero {
            return Err(TailError::InvalidResistance);
        }
        Ok(())
    }
}

impl<F: Float> Default for TailConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
