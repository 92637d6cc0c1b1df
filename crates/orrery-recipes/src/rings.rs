//! The planetary ring material: periodic bands mixed against transparency
//! so the gaps between rings stay see-through.

use orrery_graph::{Graph, GraphError, NodeGraphBuilder};

use crate::archetypes;

/// Parameters for the ring band material.
#[derive(Clone, Debug)]
pub struct RingParams {
    /// Band frequency across the ring disc.
    pub band_scale: f32,
    pub bright_color: [f32; 4],
    pub dark_color: [f32; 4],
    pub specular: f32,
    pub roughness: f32,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            band_scale: 50.0,
            bright_color: [0.9, 0.9, 0.95, 1.0],
            dark_color: [0.6, 0.6, 0.7, 1.0],
            specular: 0.6,
            roughness: 0.3,
        }
    }
}

/// Build the ring material graph.
///
/// Concentric wave rings are ramped into the band colors; the same ramp
/// output drives the mix factor between a transparent shader and the lit
/// surface, so dark band values read as gaps. Fixed topology: 8 nodes,
/// 8 links.
pub fn rings(params: &RingParams) -> Result<Graph, GraphError> {
    let mut b = NodeGraphBuilder::new();

    let coords = b.add_node(archetypes::coords("ring coords"));
    let map = b.add_node(archetypes::mapping(
        "ring mapping",
        [1.0, 1.0, 1.0],
        [0.0, 0.0, 0.0],
    ));
    let bands = b.add_node(archetypes::wave(
        "ring bands",
        "rings",
        "x",
        params.band_scale,
        0.0,
    ));
    let tint = b.add_node(archetypes::ramp(
        "band ramp",
        [(0.46, params.bright_color), (0.54, params.dark_color)],
    ));
    let gaps = b.add_node(archetypes::transparent("gap shader"));
    let shade = b.add_node(archetypes::surface(
        "ring surface",
        params.specular,
        params.roughness,
    ));
    let mix = b.add_node(archetypes::mix_shader("gap mix"));
    let out = b.add_node(archetypes::surface_output("material output"));

    b.connect(coords, "object", map, "vector")?;
    b.connect(map, "vector", bands, "vector")?;
    b.connect(bands, "color", tint, "fac")?;
    b.connect(tint, "color", shade, "base_color")?;
    b.connect(tint, "color", mix, "fac")?;
    b.connect(gaps, "bsdf", mix, "shader_a")?;
    b.connect(shade, "bsdf", mix, "shader_b")?;
    b.connect(mix, "shader", out, "surface")?;

    b.finalize(out)
}
