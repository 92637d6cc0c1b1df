//! Graph recipes: pure parameter-to-graph construction strategies, one per
//! material or world type. Every recipe has a fixed topology; parameters
//! only change node values, never the wiring.

mod archetypes;
mod emissive;
mod planets;
mod rings;
mod starfield;
mod volume;

pub use emissive::{EmissiveBodyParams, blackbody_to_rgb, emissive_body};
pub use planets::{
    CrateredRockParams, GasGiantParams, IcePlanetParams, RockyPlanetParams, cratered_rock,
    gas_giant, ice_planet, rocky_planet,
};
pub use rings::{RingParams, rings};
pub use starfield::{StarfieldParams, starfield};
pub use volume::{NebulaVolumeParams, nebula_volume};
