//! The per-step orchestrator owning a chain and its configuration.

use crate::chain::TailChain;
use crate::config::{ControlMode, TailConfig};
use crate::error::TailError;
use crate::float::Float;
use crate::integrator;
use crate::preset::TailPreset;
use crate::projector::{CameraView, OrthoCamera, Projector};
use crate::sink::PolylineSink;
use crate::smoother;
use crate::solver;
use crate::tip;
use crate::vec::{Vec2, Vec3};

/// Below this, the smoothing pass is skipped for the step.
const SMOOTHNESS_EPSILON: f32 = 0.01;

/// Per-step inputs. Every field is optional with a defined fallback: a
/// missing anchor falls back to the simulation origin, and projection
/// without a camera or viewport yields the zero point.
pub struct StepInputs<'a, F: Float, C: CameraView<F>> {
    /// World position the base of the chain is attached to.
    pub base_anchor: Option<Vec3<F>>,
    /// World position the tip is driven toward (or pinned to).
    pub tip_target: Option<Vec3<F>>,
    /// Camera used to project world positions into simulation space.
    pub camera: Option<&'a C>,
    /// Target frame size the projection is rescaled into.
    pub viewport: Option<Vec2<F>>,
}

impl<F: Float> StepInputs<'static, F, OrthoCamera<F>> {
    /// No 3D references at all: anchors fall back, projections are zero.
    pub fn detached() -> Self {
        StepInputs {
            base_anchor: None,
            tip_target: None,
            camera: None,
            viewport: None,
        }
    }
}

impl<'a, F: Float, C: CameraView<F>> StepInputs<'a, F, C> {
    /// Inputs with a live camera and viewport, anchors unset.
    pub fn new(camera: &'a C, viewport: Vec2<F>) -> Self {
        StepInputs {
            base_anchor: None,
            tip_target: None,
            camera: Some(camera),
            viewport: Some(viewport),
        }
    }

    /// Set the base anchor world position.
    pub fn with_base_anchor(mut self, world: Vec3<F>) -> Self {
        self.base_anchor = Some(world);
        self
    }

    /// Set the tip target world position.
    pub fn with_tip_target(mut self, world: Vec3<F>) -> Self {
        self.tip_target = Some(world);
        self
    }
}

/// A tail simulation: one chain, one config, stepped by the host loop.
///
/// Single-threaded and synchronous; a step runs to completion inside
/// `step`, and `&mut self` keeps rebuilds from interleaving with one.
pub struct TailSimulation<F: Float> {
    config: TailConfig<F>,
    chain: TailChain<F>,
    origin: Vec2<F>,
}

impl<F: Float> TailSimulation<F> {
    /// Create a simulation whose chain seeds from `origin`, extending
    /// `total_length` to the right until anchors arrive.
    pub fn new(origin: Vec2<F>, config: TailConfig<F>) -> Result<Self, TailError> {
        let end = origin + Vec2::right().scale(config.total_length);
        let chain = TailChain::new(origin, end, &config)?;
        Ok(TailSimulation { config, chain, origin })
    }

    /// Current configuration.
    pub fn config(&self) -> &TailConfig<F> {
        &self.config
    }

    /// The chain being simulated.
    pub fn chain(&self) -> &TailChain<F> {
        &self.chain
    }

    /// Current particle positions, base to tip.
    pub fn positions(&self) -> &[Vec2<F>] {
        self.chain.positions()
    }

    /// Fallback 2D position used when the base anchor is absent.
    pub fn set_origin(&mut self, origin: Vec2<F>) {
        self.origin = origin;
    }

    /// Replace the configuration and rebuild the chain.
    ///
    /// The new chain reseeds as a straight line between the current anchor
    /// projections. On a validation error the previous config and chain are
    /// kept untouched.
    pub fn set_config<C: CameraView<F>>(
        &mut self,
        config: TailConfig<F>,
        inputs: &StepInputs<'_, F, C>,
    ) -> Result<(), TailError> {
        let (start, end) = seed_points(&config, self.origin, inputs);
        let chain = TailChain::new(start, end, &config)?;
        self.config = config;
        self.chain = chain;
        Ok(())
    }

    /// Rebuild the chain from the current configuration and anchors,
    /// discarding all motion state.
    pub fn rebuild<C: CameraView<F>>(&mut self, inputs: &StepInputs<'_, F, C>) {
        let (start, end) = seed_points(&self.config, self.origin, inputs);
        if let Ok(chain) = TailChain::new(start, end, &self.config) {
            self.chain = chain;
        }
    }

    /// Apply a named preset and rebuild, returning the live configuration.
    ///
    /// `TailPreset::Custom` applies nothing and keeps the chain as is.
    /// Control mode and the performance flag always persist.
    pub fn apply_preset<C: CameraView<F>>(
        &mut self,
        preset: TailPreset,
        inputs: &StepInputs<'_, F, C>,
    ) -> Result<&TailConfig<F>, TailError> {
        let mut next = self.config.clone();
        if preset.apply_to(&mut next) {
            self.set_config(next, inputs)?;
        }
        Ok(&self.config)
    }

    /// Advance the simulation by one physics step and publish the result.
    ///
    /// Pipeline, never reordered: base pin (base-driven mode, all 3D
    /// references present), Verlet integration, constraint relaxation for
    /// the effective iteration count, tip control, optional smoothing,
    /// publish. A NaN or negative `dt` is a no-op step: nothing moves and
    /// nothing is published.
    pub fn step<C: CameraView<F>, S: PolylineSink<F>>(
        &mut self,
        inputs: &StepInputs<'_, F, C>,
        dt: F,
        sink: &mut S,
    ) {
        if !dt.is_finite() || dt < F::zero() {
            return;
        }

        if self.config.control_mode == ControlMode::BaseDriven {
            if let (Some(base), Some(_), Some(_)) =
                (inputs.base_anchor, inputs.camera, inputs.viewport)
            {
                let base_2d = Projector::project(base, inputs.camera, inputs.viewport);
                self.chain.pin_base(base_2d);
            }
        }

        integrator::integrate(&mut self.chain, &self.config, dt);

        let iterations =
            solver::effective_iterations(self.config.iterations, self.config.performance_mode);
        solver::relax(&mut self.chain, self.config.stiffness, iterations);

        let tip_target = self.project_tip_target(inputs);
        tip::apply(&mut self.chain, &self.config, tip_target, dt);

        if self.config.curve_smoothness > F::from_f32(SMOOTHNESS_EPSILON) {
            smoother::smooth(&mut self.chain, self.config.curve_smoothness);
        }

        sink.publish(self.chain.positions());
    }

    /// Lerp the tip toward an arbitrary 2D point. A one-frame override:
    /// position history is left alone, so the nudge reads as an impulse.
    pub fn set_tip_position(&mut self, position: Vec2<F>, influence: F) {
        if self.chain.is_empty() {
            return;
        }
        let last = self.chain.len() - 1;
        let eased = self.chain.positions[last].lerp(position, influence);
        self.chain.positions[last] = eased;
    }

    /// Lerp the base toward an arbitrary 2D point, history untouched.
    pub fn set_base_position(&mut self, position: Vec2<F>, influence: F) {
        if self.chain.is_empty() {
            return;
        }
        let eased = self.chain.positions[0].lerp(position, influence);
        self.chain.positions[0] = eased;
    }

    /// Displace every unlocked particle by `offset * influence`, scaled
    /// down linearly from base to tip.
    pub fn add_force(&mut self, offset: Vec2<F>, influence: F) {
        let count = F::from_f32(self.chain.len() as f32);
        for i in 0..self.chain.len() {
            if self.chain.locked[i] {
                continue;
            }
            let falloff = F::one() - F::from_f32(i as f32) / count;
            self.chain.positions[i] =
                self.chain.positions[i] + offset.scale(influence * falloff);
        }
    }

    fn project_tip_target<C: CameraView<F>>(
        &self,
        inputs: &StepInputs<'_, F, C>,
    ) -> Option<Vec2<F>> {
        match (inputs.tip_target, inputs.camera, inputs.viewport) {
            (Some(target), Some(_), Some(_)) => {
                Some(Projector::project(target, inputs.camera, inputs.viewport))
            }
            _ => None,
        }
    }
}

fn seed_points<F: Float, C: CameraView<F>>(
    config: &TailConfig<F>,
    origin: Vec2<F>,
    inputs: &StepInputs<'_, F, C>,
) -> (Vec2<F>, Vec2<F>) {
    let start = match inputs.base_anchor {
        Some(world) => Projector::project(world, inputs.camera, inputs.viewport),
        None => origin,
    };
    let end = match inputs.tip_target {
        Some(world) => Projector::project(world, inputs.camera, inputs.viewport),
        None => start + Vec2::right().scale(config.total_length),
    };
    (start, end)
}
