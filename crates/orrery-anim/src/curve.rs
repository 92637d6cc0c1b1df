//! Keyframe sequences on named property paths.

use glam::Vec3;

use crate::interp::Interpolation;

/// A keyed value: scalar (path offsets, rotations) or vector (locations).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyValue {
    Scalar(f32),
    Vector(Vec3),
}

impl From<f32> for KeyValue {
    fn from(v: f32) -> Self {
        KeyValue::Scalar(v)
    }
}

impl From<Vec3> for KeyValue {
    fn from(v: Vec3) -> Self {
        KeyValue::Vector(v)
    }
}

/// A (frame, value) pair on a property path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub frame: f32,
    pub value: KeyValue,
}

/// Errors raised while building a curve. Fatal to that curve only.
#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    /// Keyframe times must strictly increase.
    #[error("curve '{property_path}': keyframe at frame {next} does not follow frame {prev}")]
    NonMonotonicTime {
        property_path: String,
        prev: f32,
        next: f32,
    },

    /// A curve needs at least one keyframe.
    #[error("curve '{property_path}' has no keyframes")]
    Empty { property_path: String },
}

/// An ordered-by-time keyframe sequence for one property path, plus the
/// interpolation mode negotiated for it.
#[derive(Clone, Debug)]
pub struct AnimationCurve {
    property_path: String,
    keyframes: Vec<Keyframe>,
    /// Negotiated by the assembler against the host capability set; starts
    /// at the smooth host default.
    pub interpolation: Interpolation,
}

impl AnimationCurve {
    pub fn property_path(&self) -> &str {
        &self.property_path
    }

    /// Keyframes in strictly increasing frame order.
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn frame_range(&self) -> (f32, f32) {
        // Non-empty by construction.
        (
            self.keyframes[0].frame,
            self.keyframes[self.keyframes.len() - 1].frame,
        )
    }
}

/// Builds a validated [`AnimationCurve`] for one property path.
pub struct AnimationCurveBuilder {
    property_path: String,
    keyframes: Vec<Keyframe>,
}

impl AnimationCurveBuilder {
    pub fn new(property_path: impl Into<String>) -> Self {
        Self {
            property_path: property_path.into(),
            keyframes: Vec::new(),
        }
    }

    /// Append a keyframe. Order is validated at [`build`](Self::build).
    pub fn key(mut self, frame: f32, value: impl Into<KeyValue>) -> Self {
        self.keyframes.push(Keyframe {
            frame,
            value: value.into(),
        });
        self
    }

    /// Validate and freeze the curve.
    ///
    /// Fails with [`CurveError::NonMonotonicTime`] unless frames strictly
    /// increase, and [`CurveError::Empty`] for a keyless curve.
    pub fn build(self) -> Result<AnimationCurve, CurveError> {
        if self.keyframes.is_empty() {
            return Err(CurveError::Empty {
                property_path: self.property_path,
            });
        }
        for pair in self.keyframes.windows(2) {
            if pair[1].frame <= pair[0].frame {
                return Err(CurveError::NonMonotonicTime {
                    property_path: self.property_path,
                    prev: pair[0].frame,
                    next: pair[1].frame,
                });
            }
        }
        Ok(AnimationCurve {
            property_path: self.property_path,
            keyframes: self.keyframes,
            interpolation: Interpolation::Bezier,
        })
    }
}

/// A full-turn orbit curve for a pivot parented to its primary: rotation
/// goes from 0 to TAU across the scene frame range, so a child orbits its
/// parent exactly once.
pub fn orbit_pivot_curve(
    property_path: impl Into<String>,
    frame_start: f32,
    frame_end: f32,
) -> Result<AnimationCurve, CurveError> {
    AnimationCurveBuilder::new(property_path)
        .key(frame_start, 0.0)
        .key(frame_end, std::f32::consts::TAU)
        .build()
}
