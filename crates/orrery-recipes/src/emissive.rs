//! Emissive body materials: a blackbody color by temperature feeding an
//! emission shader. Used for suns.

use orrery_graph::{Graph, GraphError, NodeGraphBuilder, NodeKind, NodeSpec, SocketType};

use crate::archetypes;

/// Parameters for an emissive body.
#[derive(Clone, Debug)]
pub struct EmissiveBodyParams {
    /// Blackbody temperature in Kelvin.
    pub temperature_k: f32,
    /// Emission strength.
    pub strength: f32,
}

impl Default for EmissiveBodyParams {
    fn default() -> Self {
        Self {
            temperature_k: 6500.0,
            strength: 15.0,
        }
    }
}

/// Build the emissive body graph: blackbody color node into an emission
/// shader into the output. Fixed topology: 3 nodes, 2 links.
pub fn emissive_body(params: &EmissiveBodyParams) -> Result<Graph, GraphError> {
    let mut b = NodeGraphBuilder::new();

    let bb = b.add_node(
        NodeSpec::new(NodeKind::Source, "blackbody")
            .param("temperature", params.temperature_k)
            .output("color", SocketType::Color),
    );
    let glow = b.add_node(archetypes::emission(
        "body glow",
        [1.0, 1.0, 1.0, 1.0],
        params.strength,
    ));
    let out = b.add_node(archetypes::surface_output("material output"));

    b.connect(bb, "color", glow, "color")?;
    b.connect(glow, "emission", out, "surface")?;

    b.finalize(out)
}

/// Convert a blackbody temperature in Kelvin to an approximate sRGB color.
///
/// Simplified Planckian locus approximation (Tanner Helland algorithm).
/// Used for host-side light tinting where the host has no blackbody node.
pub fn blackbody_to_rgb(temperature_k: f32) -> [f32; 3] {
    let t = temperature_k / 100.0;
    let r = if t <= 66.0 {
        1.0
    } else {
        (329.698_73 * (t - 60.0).powf(-0.133_204_76) / 255.0).clamp(0.0, 1.0)
    };
    let g = if t <= 66.0 {
        (99.470_8 * t.ln() - 161.119_57).clamp(0.0, 255.0) / 255.0
    } else {
        (288.122_17 * (t - 60.0).powf(-0.075_514_85) / 255.0).clamp(0.0, 1.0)
    };
    let b = if t >= 66.0 {
        1.0
    } else if t <= 19.0 {
        0.0
    } else {
        (138.517_73 * (t - 10.0).ln() - 305.044_8).clamp(0.0, 255.0) / 255.0
    };
    [r, g, b]
}
