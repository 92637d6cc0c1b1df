//! Scene parameter tables with RON persistence.
//!
//! The parameter presets here are the "quick controls" blocks of the scene
//! scripts: everything a build needs, hard-coded per scene rather than
//! exposed through a CLI.

mod error;
mod params;

pub use error::ConfigError;
pub use params::{
    BeltParams, BodyPlacement, CameraParams, FrameParams, MoonParams, NebulaParams,
    RenderParams, RingFieldParams, SceneParams, StarParams, SunParams,
};
