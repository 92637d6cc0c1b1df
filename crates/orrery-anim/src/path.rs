//! Three-point camera fly-through path.

use glam::Vec3;

use crate::curve::{AnimationCurve, AnimationCurveBuilder, CurveError};

/// A camera path through start, mid, and end control points, parameterized
/// over the scene frame range.
///
/// A path-offset fraction in `[0, 1]` maps linearly onto the frame range;
/// positions along the path follow the quadratic Bézier through the three
/// control points, so the camera swings toward `mid` without passing
/// through it.
#[derive(Clone, Copy, Debug)]
pub struct CameraPath {
    pub start: Vec3,
    pub mid: Vec3,
    pub end: Vec3,
    pub frame_start: f32,
    pub frame_end: f32,
}

impl CameraPath {
    /// The frame a given offset fraction corresponds to.
    pub fn frame_at(&self, fraction: f32) -> f32 {
        self.frame_start + (self.frame_end - self.frame_start) * fraction.clamp(0.0, 1.0)
    }

    /// Position on the path at an offset fraction.
    pub fn position_at(&self, fraction: f32) -> Vec3 {
        let t = fraction.clamp(0.0, 1.0);
        let u = 1.0 - t;
        self.start * (u * u) + self.mid * (2.0 * u * t) + self.end * (t * t)
    }

    /// The two-keyframe offset-fraction curve driving motion along the
    /// path: 0 at the first frame, 1 at the last.
    pub fn offset_curve(&self, property_path: impl Into<String>) -> Result<AnimationCurve, CurveError> {
        AnimationCurveBuilder::new(property_path)
            .key(self.frame_start, 0.0)
            .key(self.frame_end, 1.0)
            .build()
    }
}
