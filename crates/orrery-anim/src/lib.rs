//! Keyframe animation curves, interpolation-mode negotiation against host
//! capability sets, and the camera fly-through path.

mod curve;
mod interp;
mod path;

pub use curve::{
    AnimationCurve, AnimationCurveBuilder, CurveError, KeyValue, Keyframe, orbit_pivot_curve,
};
pub use interp::{Interpolation, NegotiationPolicy, negotiate_interpolation};
pub use path::CameraPath;
