//! The starfield world background: a cellular distance field thresholded
//! into a sharp star mask, mixed between deep-space black and an emissive
//! star color.

use orrery_graph::{Graph, GraphError, NodeGraphBuilder};

use crate::archetypes;

/// Parameters for the starfield background.
#[derive(Clone, Debug)]
pub struct StarfieldParams {
    /// Cellular pattern scale; higher packs more cells (stars) into the sky.
    pub scale: f32,
    /// Ramp threshold position; lower produces more visible stars.
    pub spread: f32,
    /// Width of the black-to-white transition band above `spread`.
    pub spread_band: f32,
    /// Exponent sharpening the mask so stars stay point-like.
    pub sharpness: f32,
    /// Emission strength of the stars.
    pub emission_strength: f32,
    /// Star color.
    pub star_color: [f32; 4],
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            scale: 600.0,
            spread: 0.003,
            spread_band: 0.015,
            sharpness: 6.5,
            emission_strength: 4.0,
            star_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Build the starfield world graph.
///
/// Fixed topology: 8 nodes, 7 links, one link into the terminal.
pub fn starfield(params: &StarfieldParams) -> Result<Graph, GraphError> {
    let mut b = NodeGraphBuilder::new();

    let coords = b.add_node(archetypes::coords("sky coords"));
    let cells = b.add_node(archetypes::cellular("star cells", params.scale));
    let mask = b.add_node(archetypes::ramp(
        "star mask",
        [
            (params.spread, [0.0, 0.0, 0.0, 1.0]),
            (params.spread + params.spread_band, [1.0, 1.0, 1.0, 1.0]),
        ],
    ));
    let sharpen = b.add_node(archetypes::math("sharpen", "power", params.sharpness));
    let mix = b.add_node(archetypes::mix_shader("star mix"));
    let space = b.add_node(archetypes::background(
        "deep space",
        [0.0, 0.0, 0.0, 1.0],
        1.0,
    ));
    let glow = b.add_node(archetypes::emission(
        "star glow",
        params.star_color,
        params.emission_strength,
    ));
    let out = b.add_node(archetypes::surface_output("world output"));

    b.connect(coords, "generated", cells, "vector")?;
    b.connect(cells, "distance", mask, "fac")?;
    b.connect(mask, "color", sharpen, "a")?;
    b.connect(sharpen, "value", mix, "fac")?;
    b.connect(space, "background", mix, "shader_a")?;
    b.connect(glow, "emission", mix, "shader_b")?;
    b.connect(mix, "shader", out, "surface")?;

    b.finalize(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starfield_topology_is_fixed() {
        let graph = starfield(&StarfieldParams {
            scale: 600.0,
            spread: 0.003,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(graph.node_count(), 8);
        assert_eq!(graph.link_count(), 7);
        assert_eq!(
            graph.incoming(graph.terminal()).count(),
            1,
            "world output takes exactly one shader"
        );
        assert!(graph.unreachable_from_terminal().is_empty());
    }

    #[test]
    fn test_generated_coords_drive_the_cells() {
        let graph = starfield(&StarfieldParams::default()).unwrap();
        let (coords_id, _) = graph
            .nodes()
            .find(|(_, spec)| spec.label == "sky coords")
            .unwrap();
        let (cells_id, _) = graph
            .nodes()
            .find(|(_, spec)| spec.label == "star cells")
            .unwrap();
        assert!(
            graph.links().iter().any(|l| l.src == coords_id
                && l.src_socket == "generated"
                && l.dst == cells_id
                && l.dst_socket == "vector"),
            "generated coordinates must feed the cell pattern"
        );
    }

    #[test]
    fn test_emission_strength_stays_a_constant() {
        let graph = starfield(&StarfieldParams::default()).unwrap();
        let (glow_id, _) = graph
            .nodes()
            .find(|(_, spec)| spec.label == "star glow")
            .unwrap();
        assert_eq!(
            graph.incoming(glow_id).count(),
            0,
            "star brightness comes from the strength parameter, not a link"
        );
    }

    #[test]
    fn test_parameters_do_not_change_topology() {
        let sparse = starfield(&StarfieldParams::default()).unwrap();
        let dense = starfield(&StarfieldParams {
            scale: 300.0,
            spread: 0.005,
            emission_strength: 3.0,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(sparse.node_count(), dense.node_count());
        assert_eq!(sparse.link_count(), dense.link_count());
    }

    #[test]
    fn test_spread_lands_in_mask_stops() {
        use orrery_graph::ParamValue;
        let graph = starfield(&StarfieldParams::default()).unwrap();
        let (_, mask) = graph
            .nodes()
            .find(|(_, spec)| spec.label == "star mask")
            .expect("mask node present");
        let pos_a = mask
            .params
            .iter()
            .find(|(name, _)| name == "pos_a")
            .map(|(_, v)| v.clone());
        assert_eq!(pos_a, Some(ParamValue::Scalar(0.003)));
    }
}
