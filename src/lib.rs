//! Verlet tail-chain simulation for games.
//!
//! `swishy` simulates a tail (or rope, tentacle, antenna) as a 2D chain of
//! point masses advanced by Verlet integration and relaxed by iterative
//! distance constraints. One end anchors to a moving 3D-derived position;
//! the other is hard-pinned to a target or smoothly lags behind it.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity with damping, inertia scale,
//!   and a drag term opposing motion
//! - **Constraint relaxation**: Gauss-Seidel sweeps with tunable stiffness
//!   and iteration count (overshooting stiffness > 1 permitted for whips)
//! - **Two control modes**: base-driven with eased tip follow, or tip-driven
//!   with both ends anchored
//! - **3D-to-2D projection**: camera seam mapping world anchors into the
//!   simulation's viewport space
//! - **Presets**: named parameter bundles that rebuild the chain
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! The crate never draws. Each step publishes the particle polyline to a
//! caller-owned [`PolylineSink`].

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod error;
pub mod config;
pub mod chain;
pub mod integrator;
pub mod solver;
pub mod smoother;
pub mod tip;
pub mod projector;
pub mod preset;
pub mod sink;
pub mod simulation;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec2, Vec3};
pub use error::TailError;
pub use config::{ControlMode, TailConfig};
pub use chain::TailChain;
pub use projector::{CameraView, OrthoCamera, Projector};
pub use preset::TailPreset;
pub use sink::{NoOpSink, PolylineSink};
pub use simulation::{StepInputs, TailSimulation};
