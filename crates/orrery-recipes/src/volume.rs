//! The volumetric nebula material: a noise field thresholded into both a
//! color ramp and an emission-strength channel feeding a volume output.

use orrery_graph::{Graph, GraphError, NodeGraphBuilder};

use crate::archetypes;

/// Parameters for the nebula volume.
#[derive(Clone, Debug)]
pub struct NebulaVolumeParams {
    /// Base volume density. Kept very low so stars remain visible through
    /// the cloud.
    pub density: f32,
    /// Scattering anisotropy.
    pub anisotropy: f32,
    /// Noise scale; lower produces larger cloud structures.
    pub noise_scale: f32,
    /// Noise detail octaves.
    pub detail: f32,
    /// Ramp position below which the volume is black (empty).
    pub threshold: f32,
    /// Ramp position where the glow color fully saturates.
    pub saturation_point: f32,
    /// Glow color at full saturation.
    pub glow_color: [f32; 4],
    /// Multiplier from noise value to emission strength.
    pub emission_gain: f32,
}

impl Default for NebulaVolumeParams {
    fn default() -> Self {
        Self {
            density: 0.01,
            anisotropy: 0.3,
            noise_scale: 1.0,
            detail: 8.0,
            threshold: 0.3,
            saturation_point: 0.7,
            glow_color: [0.8, 0.2, 0.9, 1.0],
            emission_gain: 2.0,
        }
    }
}

/// Build the nebula volume graph.
///
/// One noise field drives both the color ramp and, through a multiply,
/// the emission strength, so bright wisps glow where the cloud is dense.
/// Fixed topology: 6 nodes, 6 links.
pub fn nebula_volume(params: &NebulaVolumeParams) -> Result<Graph, GraphError> {
    let mut b = NodeGraphBuilder::new();

    let coords = b.add_node(archetypes::coords("volume coords"));
    let cloud = b.add_node(archetypes::noise(
        "cloud noise",
        params.noise_scale,
        params.detail,
        0.6,
    ));
    let tint = b.add_node(archetypes::ramp(
        "glow ramp",
        [
            (params.threshold, [0.0, 0.0, 0.0, 1.0]),
            (params.saturation_point, params.glow_color),
        ],
    ));
    let gain = b.add_node(archetypes::math("emission gain", "multiply", params.emission_gain));
    let vol = b.add_node(archetypes::principled_volume(
        "nebula volume",
        params.density,
        params.anisotropy,
    ));
    let out = b.add_node(archetypes::volume_output("volume output"));

    b.connect(coords, "object", cloud, "vector")?;
    b.connect(cloud, "fac", tint, "fac")?;
    b.connect(tint, "color", vol, "color")?;
    b.connect(cloud, "fac", gain, "a")?;
    b.connect(gain, "value", vol, "emission_strength")?;
    b.connect(vol, "volume", out, "volume")?;

    b.finalize(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nebula_topology() {
        let graph = nebula_volume(&NebulaVolumeParams::default()).unwrap();
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.link_count(), 6);
        assert_eq!(graph.incoming(graph.terminal()).count(), 1);
        assert!(graph.unreachable_from_terminal().is_empty());
    }

    #[test]
    fn test_noise_fans_out_to_color_and_emission() {
        let graph = nebula_volume(&NebulaVolumeParams::default()).unwrap();
        let (noise_id, _) = graph
            .nodes()
            .find(|(_, spec)| spec.label == "cloud noise")
            .unwrap();
        let fan_out = graph.links().iter().filter(|l| l.src == noise_id).count();
        assert_eq!(
            fan_out, 2,
            "cloud noise drives both the glow ramp and the emission gain"
        );
    }
}
