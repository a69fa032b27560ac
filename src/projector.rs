//! Projection of 3D world points into the simulation's 2D coordinate space.

use crate::float::Float;
use crate::vec::{Vec2, Vec3};

/// A camera's view of the world, as much of it as projection needs.
///
/// The simulation never reaches into a scene graph; hosts implement this for
/// whatever camera representation they have.
pub trait CameraView<F: Float> {
    /// Project a world point into the camera's own screen space.
    fn project_to_screen(&self, world: Vec3<F>) -> Vec2<F>;

    /// Size of the camera's visible frame, in the same screen-space units.
    fn frame_size(&self) -> Vec2<F>;
}

/// Maps 3D world points into viewport-relative 2D simulation coordinates.
pub struct Projector;

impl Projector {
    /// Project `world` through `camera`, normalize by the camera's visible
    /// frame, and rescale into `viewport` coordinates.
    ///
    /// Returns the zero point when camera or viewport is absent, or when the
    /// camera reports a degenerate frame — a defined fallback, not an error:
    /// the simulation must stay numerically stable while optional 3D
    /// references are unset.
    pub fn project<F: Float, C: CameraView<F>>(
        world: Vec3<F>,
        camera: Option<&C>,
        viewport: Option<Vec2<F>>,
    ) -> Vec2<F> {
        let (Some(camera), Some(viewport)) = (camera, viewport) else {
            return Vec2::zero();
        };

        let frame = camera.frame_size();
        let eps = F::from_f32(1e-10);
        if frame.x.is_near_zero(eps) || frame.y.is_near_zero(eps) {
            return Vec2::zero();
        }

        let screen = camera.project_to_screen(world);
        let norm = Vec2::new(screen.x / frame.x, screen.y / frame.y);
        norm.component_mul(viewport)
    }
}

/// A flat axis-aligned camera: world x/y map directly onto the frame, z is
/// ignored. Enough for hosts without a real 3D camera, and for tests.
#[derive(Copy, Clone, Debug)]
pub struct OrthoCamera<F: Float> {
    /// World point at the center of the frame.
    pub center: Vec3<F>,
    /// Visible frame size in world units.
    pub frame: Vec2<F>,
}

impl<F: Float> OrthoCamera<F> {
    pub fn new(center: Vec3<F>, frame: Vec2<F>) -> Self {
        OrthoCamera { center, frame }
    }
}

impl<F: Float> CameraView<F> for OrthoCamera<F> {
    fn project_to_screen(&self, world: Vec3<F>) -> Vec2<F> {
        let half = F::half();
        Vec2::new(
            world.x - self.center.x + self.frame.x * half,
            world.y - self.center.y + self.frame.y * half,
        )
    }

    fn frame_size(&self) -> Vec2<F> {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_camera_projects_to_zero() {
        let p = Projector::project::<f32, OrthoCamera<f32>>(
            Vec3::new(5.0, 5.0, 5.0),
            None,
            Some(Vec2::new(640.0, 360.0)),
        );
        assert_eq!(p, Vec2::zero());
    }

    #[test]
    fn missing_viewport_projects_to_zero() {
        let camera = OrthoCamera::new(Vec3::zero(), Vec2::new(640.0, 360.0));
        let p = Projector::project(Vec3::new(5.0, 5.0, 5.0), Some(&camera), None);
        assert_eq!(p, Vec2::zero());
    }

    #[test]
    fn matching_frame_and_viewport_is_identity_in_screen_space() {
        let frame = Vec2::new(640.0f32, 360.0);
        let camera = OrthoCamera::new(Vec3::new(320.0, 180.0, 0.0), frame);
        let p = Projector::project(Vec3::new(100.0, 50.0, -3.0), Some(&camera), Some(frame));
        assert!((p.x - 100.0).abs() < 1e-4);
        assert!((p.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn viewport_rescales_screen_position() {
        let frame = Vec2::new(200.0f32, 100.0);
        let camera = OrthoCamera::new(Vec3::new(100.0, 50.0, 0.0), frame);
        // Half-size viewport halves the coordinates.
        let p = Projector::project(
            Vec3::new(100.0, 50.0, 0.0),
            Some(&camera),
            Some(Vec2::new(100.0, 50.0)),
        );
        assert!((p.x - 50.0).abs() < 1e-4);
        assert!((p.y - 25.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_frame_projects_to_zero() {
        let camera = OrthoCamera::new(Vec3::zero(), Vec2::zero());
        let p = Projector::project(
            Vec3::new(1.0f32, 2.0, 3.0),
            Some(&camera),
            Some(Vec2::new(640.0, 360.0)),
        );
        assert_eq!(p, Vec2::zero());
    }
}
