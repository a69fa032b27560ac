//! Named parameter bundles for the tail simulation.

use crate::config::TailConfig;
use crate::float::Float;

/// A named bundle of the ten motion tunables.
///
/// Applying a preset overwrites segment count, total length, iterations,
/// stiffness, gravity, damping, inertia, follow speed, curve smoothness, and
/// force resistance — atomically, leaving control mode and the performance
/// flag alone. `Custom` is the resting display value once live parameters no
/// longer correspond to a named bundle; applying it changes nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TailPreset {
    /// No bundle; applying this is a no-op.
    #[default]
    Custom,
    /// Balanced, lifelike motion.
    Natural,
    /// Long, loose, and swingy.
    Floppy,
    /// Short and tightly controlled.
    Stiff,
    /// Overshooting stiffness and fast follow for snappy, whip-like motion.
    /// Relies on stiffness > 1, which can oscillate.
    Whip,
    /// Heavy drag: strong gravity, sluggish follow, high resistance.
    Heavy,
}

impl TailPreset {
    /// Overwrite `config`'s tunables with this bundle.
    ///
    /// Returns true when values were written (everything except `Custom`),
    /// which is the caller's cue to rebuild the chain.
    pub fn apply_to<F: Float>(self, config: &mut TailConfig<F>) -> bool {
        let bundle = match self {
            TailPreset::Custom => return false,
            TailPreset::Natural => Bundle {
                segment_count: 15,
                total_length: 120.0,
                iterations: 8,
                stiffness: 1.0,
                gravity: 180.0,
                damping: 0.012,
                inertia: 1.0,
                follow_speed: 50.0,
                curve_smoothness: 0.3,
                force_resistance: 5.0,
            },
            TailPreset::Floppy => Bundle {
                segment_count: 25,
                total_length: 150.0,
                iterations: 4,
                stiffness: 0.7,
                gravity: 120.0,
                damping: 0.005,
                inertia: 1.0,
                follow_speed: 30.0,
                curve_smoothness: 0.5,
                force_resistance: 1.0,
            },
            TailPreset::Stiff => Bundle {
                segment_count: 8,
                total_length: 100.0,
                iterations: 15,
                stiffness: 1.5,
                gravity: 250.0,
                damping: 0.02,
                inertia: 0.7,
                follow_speed: 80.0,
                curve_smoothness: 0.1,
                force_resistance: 10.0,
            },
            TailPreset::Whip => Bundle {
                segment_count: 12,
                total_length: 140.0,
                iterations: 12,
                stiffness: 2.0,
                gravity: 150.0,
                damping: 0.003,
                inertia: 1.2,
                follow_speed: 120.0,
                curve_smoothness: 0.05,
                force_resistance: 2.0,
            },
            TailPreset::Heavy => Bundle {
                segment_count: 18,
                total_length: 130.0,
                iterations: 6,
                stiffness: 0.9,
                gravity: 320.0,
                damping: 0.04,
                inertia: 0.6,
                follow_speed: 20.0,
                curve_smoothness: 0.2,
                force_resistance: 25.0,
            },
        };

        config.segment_count = bundle.segment_count;
        config.total_length = F::from_f32(bundle.total_length);
        config.iterations = bundle.iterations;
        config.stiffness = F::from_f32(bundle.stiffness);
        config.gravity = F::from_f32(bundle.gravity);
        config.damping = F::from_f32(bundle.damping);
        config.inertia = F::from_f32(bundle.inertia);
        config.follow_speed = F::from_f32(bundle.follow_speed);
        config.curve_smoothness = F::from_f32(bundle.curve_smoothness);
        config.force_resistance = F::from_f32(bundle.force_resistance);
        true
    }
}

struct Bundle {
    segment_count: usize,
    total_length: f32,
    iterations: usize,
    stiffness: f32,
    gravity: f32,
    damping: f32,
    inertia: f32,
    follow_speed: f32,
    curve_smoothness: f32,
    force_resistance: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControlMode;

    #[test]
    fn custom_is_a_no_op() {
        let mut config: TailConfig<f32> = TailConfig::new().with_gravity(999.0);
        let before = config.clone();
        assert!(!TailPreset::Custom.apply_to(&mut config));
        assert_eq!(config, before);
    }

    #[test]
    fn preset_leaves_mode_and_performance_flag() {
        let mut config: TailConfig<f32> = TailConfig::new()
            .with_control_mode(ControlMode::TipDriven)
            .with_performance_mode(true);
        assert!(TailPreset::Floppy.apply_to(&mut config));
        assert_eq!(config.control_mode, ControlMode::TipDriven);
        assert!(config.performance_mode);
        assert_eq!(config.segment_count, 25);
    }

    #[test]
    fn every_bundle_validates() {
        for preset in [
            TailPreset::Natural,
            TailPreset::Floppy,
            TailPreset::Stiff,
            TailPreset::Whip,
            TailPreset::Heavy,
        ] {
            let mut config: TailConfig<f32> = TailConfig::new();
            preset.apply_to(&mut config);
            assert!(config.validate().is_ok(), "{:?} must validate", preset);
        }
    }
}
