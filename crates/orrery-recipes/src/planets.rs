//! Planetary surface materials: layered-noise rocky worlds, banded gas
//! giants, single-ramp ice worlds, and the noise-bumped rock used for
//! moons and asteroids.

use orrery_graph::{Graph, GraphError, NodeGraphBuilder};

use crate::archetypes;

/// Parameters for the rocky (continental) planet surface.
#[derive(Clone, Debug)]
pub struct RockyPlanetParams {
    /// Continent noise scale; lower produces larger landmasses.
    pub continent_scale: f32,
    /// Fine detail noise scale driving roughness and bump.
    pub detail_scale: f32,
    /// Cellular patchiness scale modulating roughness.
    pub patch_scale: f32,
    /// Ramp threshold where ocean turns to land.
    pub sea_level: f32,
    pub ocean_color: [f32; 4],
    pub land_color: [f32; 4],
    pub specular: f32,
    pub roughness: f32,
    pub bump_strength: f32,
}

impl Default for RockyPlanetParams {
    fn default() -> Self {
        Self {
            continent_scale: 5.0,
            detail_scale: 35.0,
            patch_scale: 12.0,
            sea_level: 0.48,
            ocean_color: [0.07, 0.14, 0.25, 1.0],
            land_color: [0.18, 0.32, 0.07, 1.0],
            specular: 0.35,
            roughness: 0.6,
            bump_strength: 0.5,
        }
    }
}

/// Build the rocky planet surface graph.
///
/// Continents come from large-scale noise through a land/sea ramp into the
/// base color; a fine noise layer multiplied with a cellular patch pattern
/// drives roughness; continent and detail noise multiplied together feed
/// the bump height. Fixed topology: 11 nodes, 14 links.
pub fn rocky_planet(params: &RockyPlanetParams) -> Result<Graph, GraphError> {
    let mut b = NodeGraphBuilder::new();

    let coords = b.add_node(archetypes::coords("surface coords"));
    let map = b.add_node(archetypes::mapping(
        "surface mapping",
        [1.0, 1.0, 1.0],
        [0.0, 0.0, 0.0],
    ));
    let continents = b.add_node(archetypes::noise(
        "continent noise",
        params.continent_scale,
        8.0,
        0.5,
    ));
    let land_sea = b.add_node(archetypes::ramp(
        "land/sea ramp",
        [
            (params.sea_level, params.ocean_color),
            (params.sea_level + 0.07, params.land_color),
        ],
    ));
    let detail = b.add_node(archetypes::noise(
        "detail noise",
        params.detail_scale,
        4.0,
        0.6,
    ));
    let patches = b.add_node(archetypes::cellular("patchiness", params.patch_scale));
    let rough_mix = b.add_node(archetypes::mix_color("roughness mix", "multiply", 0.6));
    let height = b.add_node(archetypes::math("height product", "multiply", 1.0));
    let relief = b.add_node(archetypes::bump("relief", params.bump_strength, 0.1));
    let shade = b.add_node(archetypes::surface(
        "planet surface",
        params.specular,
        params.roughness,
    ));
    let out = b.add_node(archetypes::surface_output("material output"));

    b.connect(coords, "object", map, "vector")?;
    b.connect(map, "vector", continents, "vector")?;
    b.connect(map, "vector", detail, "vector")?;
    b.connect(map, "vector", patches, "vector")?;

    b.connect(continents, "fac", land_sea, "fac")?;
    b.connect(land_sea, "color", shade, "base_color")?;

    b.connect(detail, "fac", rough_mix, "color_a")?;
    b.connect(patches, "distance", rough_mix, "color_b")?;
    b.connect(rough_mix, "color", shade, "roughness")?;

    b.connect(continents, "fac", height, "a")?;
    b.connect(detail, "fac", height, "b")?;
    b.connect(height, "value", relief, "height")?;
    b.connect(relief, "normal", shade, "normal")?;

    b.connect(shade, "bsdf", out, "surface")?;

    b.finalize(out)
}

/// Parameters for the ice planet surface.
#[derive(Clone, Debug)]
pub struct IcePlanetParams {
    pub noise_scale: f32,
    pub deep_color: [f32; 4],
    pub ice_color: [f32; 4],
}

impl Default for IcePlanetParams {
    fn default() -> Self {
        Self {
            noise_scale: 12.0,
            deep_color: [0.05, 0.1, 0.2, 1.0],
            ice_color: [0.7, 0.9, 1.0, 1.0],
        }
    }
}

/// Build the ice planet surface graph: one noise layer through a deep-blue
/// to pale-ice ramp. Fixed topology: 5 nodes, 4 links.
pub fn ice_planet(params: &IcePlanetParams) -> Result<Graph, GraphError> {
    let mut b = NodeGraphBuilder::new();

    let coords = b.add_node(archetypes::coords("surface coords"));
    let frost = b.add_node(archetypes::noise("frost noise", params.noise_scale, 2.0, 0.5));
    let tint = b.add_node(archetypes::ramp(
        "ice ramp",
        [(0.0, params.deep_color), (1.0, params.ice_color)],
    ));
    let shade = b.add_node(archetypes::surface("ice surface", 0.5, 0.3));
    let out = b.add_node(archetypes::surface_output("material output"));

    b.connect(coords, "object", frost, "vector")?;
    b.connect(frost, "fac", tint, "fac")?;
    b.connect(tint, "color", shade, "base_color")?;
    b.connect(shade, "bsdf", out, "surface")?;

    b.finalize(out)
}

/// Parameters for the banded gas giant surface.
#[derive(Clone, Debug)]
pub struct GasGiantParams {
    /// Band frequency along the rotation axis.
    pub band_scale: f32,
    /// Turbulence applied to the bands.
    pub distortion: f32,
    pub band_color_a: [f32; 4],
    pub band_color_b: [f32; 4],
}

impl Default for GasGiantParams {
    fn default() -> Self {
        Self {
            band_scale: 2.5,
            distortion: 0.4,
            band_color_a: [0.8, 0.6, 0.4, 1.0],
            band_color_b: [0.4, 0.3, 0.2, 1.0],
        }
    }
}

/// Build the gas giant surface graph: latitudinal wave bands through a
/// two-color ramp. Fixed topology: 6 nodes, 5 links.
pub fn gas_giant(params: &GasGiantParams) -> Result<Graph, GraphError> {
    let mut b = NodeGraphBuilder::new();

    let coords = b.add_node(archetypes::coords("surface coords"));
    // Rotate the banding axis a quarter turn so bands run latitudinally.
    let map = b.add_node(archetypes::mapping(
        "band mapping",
        [1.0, 1.0, 1.0],
        [0.0, 0.0, std::f32::consts::FRAC_PI_2],
    ));
    let bands = b.add_node(archetypes::wave(
        "cloud bands",
        "bands",
        "z",
        params.band_scale,
        params.distortion,
    ));
    let tint = b.add_node(archetypes::ramp(
        "band ramp",
        [(0.0, params.band_color_a), (1.0, params.band_color_b)],
    ));
    let shade = b.add_node(archetypes::surface("giant surface", 0.1, 0.7));
    let out = b.add_node(archetypes::surface_output("material output"));

    b.connect(coords, "object", map, "vector")?;
    b.connect(map, "vector", bands, "vector")?;
    b.connect(bands, "color", tint, "fac")?;
    b.connect(tint, "color", shade, "base_color")?;
    b.connect(shade, "bsdf", out, "surface")?;

    b.finalize(out)
}

/// Parameters for the cratered rock material (moons, asteroids).
#[derive(Clone, Debug)]
pub struct CrateredRockParams {
    pub albedo: [f32; 4],
    pub roughness: f32,
    pub noise_scale: f32,
    pub bump_strength: f32,
}

impl Default for CrateredRockParams {
    fn default() -> Self {
        Self {
            albedo: [0.4, 0.4, 0.42, 1.0],
            roughness: 0.9,
            noise_scale: 25.0,
            bump_strength: 0.4,
        }
    }
}

impl CrateredRockParams {
    /// The darker, rougher variant used for asteroid-belt rocks.
    pub fn asteroid() -> Self {
        Self {
            albedo: [0.25, 0.2, 0.15, 1.0],
            roughness: 0.95,
            noise_scale: 40.0,
            bump_strength: 0.35,
        }
    }
}

/// Build the cratered rock graph: flat albedo with noise-driven bump.
/// Fixed topology: 4 nodes, 3 links.
pub fn cratered_rock(params: &CrateredRockParams) -> Result<Graph, GraphError> {
    let mut b = NodeGraphBuilder::new();

    let pits = b.add_node(archetypes::noise("crater noise", params.noise_scale, 2.0, 0.5));
    let relief = b.add_node(archetypes::bump("relief", params.bump_strength, 0.1));
    let shade = b.add_node(
        archetypes::surface("rock surface", 0.2, params.roughness)
            .param("base_color", params.albedo),
    );
    let out = b.add_node(archetypes::surface_output("material output"));

    b.connect(pits, "fac", relief, "height")?;
    b.connect(relief, "normal", shade, "normal")?;
    b.connect(shade, "bsdf", out, "surface")?;

    b.finalize(out)
}
