//! Scene parameter structs with preset tables and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Frame range and playback rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrameParams {
    pub start: f32,
    pub end: f32,
    pub fps: u32,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            start: 1.0,
            end: 600.0,
            fps: 24,
        }
    }
}

/// Starfield background controls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarParams {
    /// Star density; higher packs more stars into the sky.
    pub scale: f32,
    /// Mask threshold; lower shows more stars.
    pub spread: f32,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            scale: 600.0,
            spread: 0.003,
        }
    }
}

/// The sun: emissive sphere plus a point light for specular hints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SunParams {
    pub position: [f32; 3],
    pub radius: f32,
    pub temperature_k: f32,
    pub light_energy: f32,
}

impl Default for SunParams {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            radius: 8.0,
            temperature_k: 6500.0,
            light_energy: 1000.0,
        }
    }
}

/// Placement of a simple spherical body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BodyPlacement {
    pub position: [f32; 3],
    pub radius: f32,
}

impl Default for BodyPlacement {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            radius: 1.0,
        }
    }
}

/// Ring disc dimensions around the rocky planet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RingFieldParams {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Disc tilt in degrees (x then z).
    pub tilt_deg: [f32; 2],
}

impl Default for RingFieldParams {
    fn default() -> Self {
        Self {
            inner_radius: 3.0,
            outer_radius: 5.5,
            tilt_deg: [15.0, 25.0],
        }
    }
}

/// Moon size and orbit distance from its planet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MoonParams {
    pub radius: f32,
    pub distance: f32,
}

impl Default for MoonParams {
    fn default() -> Self {
        Self {
            radius: 0.6,
            distance: 4.0,
        }
    }
}

/// Asteroid belt scatter controls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BeltParams {
    pub count: u32,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub half_height: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub seed: u64,
}

impl Default for BeltParams {
    fn default() -> Self {
        Self {
            count: 250,
            inner_radius: 30.0,
            outer_radius: 60.0,
            half_height: 5.0,
            scale_min: 0.2,
            scale_max: 0.8,
            seed: 42,
        }
    }
}

/// Nebula volume bounds and density.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NebulaParams {
    /// Edge length of the volume cube.
    pub size: f32,
    pub density: f32,
}

impl Default for NebulaParams {
    fn default() -> Self {
        Self {
            size: 600.0,
            density: 0.01,
        }
    }
}

/// Camera fly-through controls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraParams {
    pub start: [f32; 3],
    pub mid: [f32; 3],
    pub end: [f32; 3],
    /// Where the camera (and depth of field) looks.
    pub focus: [f32; 3],
    /// How far the focus target drifts over the frame range, for parallax.
    pub target_drift: [f32; 3],
    pub aperture_fstop: f32,
    pub focus_distance: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            start: [-120.0, -80.0, 40.0],
            mid: [-20.0, 30.0, 15.0],
            end: [90.0, 0.0, -20.0],
            focus: [0.0, 0.0, 0.0],
            target_drift: [1.5, 0.7, 0.2],
            aperture_fstop: 2.8,
            focus_distance: 50.0,
        }
    }
}

/// Cosmetic render settings applied best-effort through alias resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderParams {
    pub resolution: (u32, u32),
    pub use_bloom: bool,
    pub bloom_intensity: f32,
    pub ambient_occlusion: bool,
    /// Volumetric far clip as a multiple of the nebula size.
    pub volumetric_end_factor: f32,
    pub exposure: f32,
    pub samples: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            resolution: (1920, 1080),
            use_bloom: true,
            bloom_intensity: 0.05,
            ambient_occlusion: true,
            volumetric_end_factor: 1.5,
            exposure: 0.0,
            samples: 128,
        }
    }
}

/// The complete parameter table for one scene build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneParams {
    pub name: String,
    pub frames: FrameParams,
    pub stars: StarParams,
    pub sun: SunParams,
    /// The ringed rocky planet, if the scene has one.
    pub planet: Option<BodyPlacement>,
    pub rings: Option<RingFieldParams>,
    pub moon: Option<MoonParams>,
    pub gas_giant: Option<BodyPlacement>,
    pub ice_planet: Option<BodyPlacement>,
    pub belt: BeltParams,
    pub nebula: NebulaParams,
    pub camera: CameraParams,
    pub render: RenderParams,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self::grand_flyby()
    }
}

impl SceneParams {
    /// The grand fly-by: sun-centered system with a gas giant, an ice
    /// planet, a wide asteroid ring, and a huge nebula.
    pub fn grand_flyby() -> Self {
        Self {
            name: "GrandFlyBy".to_string(),
            frames: FrameParams::default(),
            stars: StarParams::default(),
            sun: SunParams::default(),
            planet: None,
            rings: None,
            moon: None,
            gas_giant: Some(BodyPlacement {
                position: [40.0, 10.0, -5.0],
                radius: 6.0,
            }),
            ice_planet: Some(BodyPlacement {
                position: [-60.0, -20.0, 15.0],
                radius: 4.0,
            }),
            belt: BeltParams::default(),
            nebula: NebulaParams::default(),
            camera: CameraParams::default(),
            render: RenderParams::default(),
        }
    }

    /// The orbital showcase: a ringed planet with a moon at center, a gas
    /// giant and sun off to the sides, and a tight asteroid belt.
    pub fn orbital_showcase() -> Self {
        Self {
            name: "SpaceFlythrough".to_string(),
            frames: FrameParams {
                start: 1.0,
                end: 300.0,
                fps: 24,
            },
            stars: StarParams {
                scale: 300.0,
                spread: 0.005,
            },
            sun: SunParams {
                position: [15.0, -8.0, 6.0],
                radius: 2.5,
                temperature_k: 5800.0,
                light_energy: 1000.0,
            },
            planet: Some(BodyPlacement {
                position: [0.0, 0.0, 0.0],
                radius: 2.0,
            }),
            rings: Some(RingFieldParams::default()),
            moon: Some(MoonParams::default()),
            gas_giant: Some(BodyPlacement {
                position: [-14.0, 10.0, -3.0],
                radius: 4.0,
            }),
            ice_planet: None,
            belt: BeltParams {
                count: 300,
                inner_radius: 10.0,
                outer_radius: 18.0,
                half_height: 1.5,
                scale_min: 0.1,
                scale_max: 0.4,
                seed: 42,
            },
            nebula: NebulaParams {
                size: 120.0,
                density: 0.03,
            },
            camera: CameraParams {
                start: [-25.0, -18.0, 6.0],
                mid: [-9.0, -7.0, 4.0],
                end: [6.0, 4.0, 2.0],
                focus: [0.0, 0.0, 0.0],
                target_drift: [1.5, 0.7, 0.2],
                aperture_fstop: 2.8,
                focus_distance: 50.0,
            },
            render: RenderParams {
                bloom_intensity: 0.04,
                volumetric_end_factor: 1.2,
                exposure: -0.2,
                ..Default::default()
            },
        }
    }

    /// Load scene parameters from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&content).map_err(ConfigError::ParseError)
    }

    /// Save scene parameters to a RON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::new();
        let content =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;
        std::fs::write(path, content).map_err(ConfigError::WriteError)
    }
}
