//! The scene assembler: one pass over the parameter table, driving the
//! host in a fixed phase order.

use glam::Vec3;

use orrery_anim::{
    AnimationCurve, AnimationCurveBuilder, CameraPath, CurveError, Interpolation, KeyValue,
    negotiate_interpolation, orbit_pivot_curve,
};
use orrery_config::SceneParams;
use orrery_graph::{Graph, GraphError};
use orrery_host::{
    CompatibilityResolver, ContainerHandle, ContainerKind, ObjectHandle, PropertyValue, SceneHost,
    upload_graph,
};
use orrery_recipes::{
    CrateredRockParams, EmissiveBodyParams, GasGiantParams, IcePlanetParams, NebulaVolumeParams,
    RingParams, RockyPlanetParams, StarfieldParams, blackbody_to_rgb, cratered_rock, emissive_body,
    gas_giant, ice_planet, nebula_volume, rings, rocky_planet, starfield,
};
use orrery_scatter::{PlacementRecord, ScatterField, ScatterRegion, scatter};

/// A recipe failure for one named body. The rest of the scene still builds.
#[derive(Debug, thiserror::Error)]
#[error("material for '{body}' failed: {source}")]
pub struct BodyError {
    pub body: String,
    #[source]
    pub source: GraphError,
}

/// Errors fatal to the whole assembly pass.
///
/// Recipe failures are not here; they are collected per body in
/// [`SceneReport::body_errors`].
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    /// An animation curve could not be built, usually a degenerate frame
    /// range.
    #[error("animation setup failed: {0}")]
    Curve(#[from] CurveError),
}

/// What one assembly pass produced.
#[derive(Debug, Default)]
pub struct SceneReport {
    /// Node graphs built and uploaded, across world and materials.
    pub graphs_built: usize,
    /// Asteroid-belt placements, in draw order.
    pub placements: Vec<PlacementRecord>,
    /// Animation curves applied, with their negotiated interpolation.
    pub curves: Vec<AnimationCurve>,
    /// Bodies whose material recipe failed.
    pub body_errors: Vec<BodyError>,
}

/// Drives a [`SceneHost`] through the ordered build phases: sky, bodies,
/// belt, animation, cosmetics.
///
/// A failed material recipe skips that body and is reported; a missing or
/// renamed host property degrades silently through the
/// [`CompatibilityResolver`]. Only a broken animation setup aborts the pass.
pub struct SceneAssembler<'a> {
    params: &'a SceneParams,
    host: &'a mut dyn SceneHost,
    report: SceneReport,
    moon_pivot: Option<ObjectHandle>,
}

impl<'a> SceneAssembler<'a> {
    pub fn new(params: &'a SceneParams, host: &'a mut dyn SceneHost) -> Self {
        Self {
            params,
            host,
            report: SceneReport::default(),
            moon_pivot: None,
        }
    }

    /// Run the full build and hand back the report.
    pub fn assemble(mut self) -> Result<SceneReport, AssembleError> {
        log::info!("assembling scene '{}'", self.params.name);
        self.build_sky();
        self.build_bodies();
        self.scatter_belt();
        self.animate()?;
        self.apply_cosmetics();
        log::info!(
            "scene '{}' assembled: {} graphs, {} placements, {} curves, {} body errors",
            self.params.name,
            self.report.graphs_built,
            self.report.placements.len(),
            self.report.curves.len(),
            self.report.body_errors.len()
        );
        Ok(self.report)
    }

    /// Build one recipe graph into a fresh container, or record the failure
    /// and move on.
    fn build_material(
        &mut self,
        kind: ContainerKind,
        body: &str,
        graph: Result<Graph, GraphError>,
    ) -> Option<ContainerHandle> {
        match graph {
            Ok(graph) => {
                let container = self.host.create_node_graph_container(kind, body);
                upload_graph(self.host, container, &graph);
                self.report.graphs_built += 1;
                log::debug!(
                    "built '{body}': {} nodes, {} links",
                    graph.node_count(),
                    graph.link_count()
                );
                Some(container)
            }
            Err(source) => {
                log::warn!("skipping '{body}': {source}");
                self.report.body_errors.push(BodyError {
                    body: body.to_string(),
                    source,
                });
                None
            }
        }
    }

    fn build_sky(&mut self) {
        let stars = &self.params.stars;
        let graph = starfield(&StarfieldParams {
            scale: stars.scale,
            spread: stars.spread,
            ..Default::default()
        });
        self.build_material(ContainerKind::World, "starfield sky", graph);
    }

    fn build_bodies(&mut self) {
        let params = self.params;

        let sun = &params.sun;
        let graph = emissive_body(&EmissiveBodyParams {
            temperature_k: sun.temperature_k,
            ..Default::default()
        });
        self.build_material(ContainerKind::Material, "sun glow", graph);
        self.host
            .create_object_instance("sun", Vec3::from(sun.position), sun.radius);
        // The emissive surface carries no light of its own; a point light at
        // the sun gives the bodies their specular response.
        let light = self.host.property_target("light.sun");
        CompatibilityResolver::apply(self.host, light, &["energy", "power"], sun.light_energy);
        CompatibilityResolver::apply(
            self.host,
            light,
            &["color"],
            blackbody_to_rgb(sun.temperature_k),
        );

        let planet_center = params
            .planet
            .as_ref()
            .map(|p| Vec3::from(p.position))
            .unwrap_or(Vec3::from(sun.position));

        if let Some(planet) = &params.planet {
            let graph = rocky_planet(&RockyPlanetParams::default());
            self.build_material(ContainerKind::Material, "rocky planet", graph);
            self.host
                .create_object_instance("planet", Vec3::from(planet.position), planet.radius);
        }

        if let Some(ring_field) = &params.rings {
            let graph = rings(&RingParams::default());
            self.build_material(ContainerKind::Material, "planet rings", graph);
            self.host
                .create_object_instance("ring_disc", planet_center, ring_field.outer_radius);
            // Gap transparency needs an alpha-aware blend mode; older host
            // versions spell the fields differently or lack them entirely.
            let target = self.host.property_target("material.rings");
            CompatibilityResolver::apply(self.host, target, &["blend_method"], "HASHED");
            CompatibilityResolver::apply(self.host, target, &["shadow_method"], "HASHED");
            let disc = self.host.property_target("object.ring_disc");
            CompatibilityResolver::apply(
                self.host,
                disc,
                &["rotation_euler"],
                [
                    ring_field.tilt_deg[0].to_radians(),
                    0.0,
                    ring_field.tilt_deg[1].to_radians(),
                ],
            );
            CompatibilityResolver::apply(self.host, disc, &["inner_radius"], ring_field.inner_radius);
        }

        if let Some(moon) = &params.moon {
            let graph = cratered_rock(&CrateredRockParams::default());
            self.build_material(ContainerKind::Material, "moon rock", graph);
            let pivot = self
                .host
                .create_object_instance("moon_pivot", planet_center, 1.0);
            self.moon_pivot = Some(pivot);
            self.host.create_object_instance(
                "moon",
                planet_center + Vec3::new(moon.distance, 0.0, 0.0),
                moon.radius,
            );
        }

        if let Some(giant) = &params.gas_giant {
            let graph = gas_giant(&GasGiantParams::default());
            self.build_material(ContainerKind::Material, "gas giant", graph);
            self.host
                .create_object_instance("gas_giant", Vec3::from(giant.position), giant.radius);
        }

        if let Some(ice) = &params.ice_planet {
            let graph = ice_planet(&IcePlanetParams::default());
            self.build_material(ContainerKind::Material, "ice planet", graph);
            self.host
                .create_object_instance("ice_planet", Vec3::from(ice.position), ice.radius);
        }

        let graph = cratered_rock(&CrateredRockParams::asteroid());
        self.build_material(ContainerKind::Material, "asteroid rock", graph);

        let graph = nebula_volume(&NebulaVolumeParams {
            density: params.nebula.density,
            ..Default::default()
        });
        self.build_material(ContainerKind::VolumeMaterial, "nebula", graph);
        self.host
            .create_object_instance("nebula_volume", Vec3::ZERO, params.nebula.size);
    }

    fn scatter_belt(&mut self) {
        let params = self.params;
        let belt = &params.belt;
        // The belt rings the planet when there is one, otherwise the sun.
        let center = params
            .planet
            .as_ref()
            .map(|p| Vec3::from(p.position))
            .unwrap_or(Vec3::from(params.sun.position));

        let field = ScatterField {
            region: ScatterRegion::Annulus {
                inner_radius: belt.inner_radius,
                outer_radius: belt.outer_radius,
                half_height: belt.half_height,
            },
            count: belt.count,
            scale_range: (belt.scale_min, belt.scale_max),
            seed: belt.seed,
            center,
        };
        let records = scatter(&field);
        for record in &records {
            self.host
                .create_object_instance("asteroid", record.position, record.scale);
        }
        log::info!("scattered {} belt asteroids", records.len());
        self.report.placements = records;
    }

    fn animate(&mut self) -> Result<(), AssembleError> {
        let params = self.params;
        let frames = &params.frames;
        let cam = &params.camera;

        let path = CameraPath {
            start: Vec3::from(cam.start),
            mid: Vec3::from(cam.mid),
            end: Vec3::from(cam.end),
            frame_start: frames.start,
            frame_end: frames.end,
        };

        let camera = self
            .host
            .create_object_instance("camera", path.position_at(0.0), 1.0);
        let focus = Vec3::from(cam.focus);
        let target = self.host.create_object_instance("focus_target", focus, 1.0);

        let offset = path.offset_curve("constraint.offset_factor")?;
        self.apply_curve(camera, offset, Interpolation::Linear);

        // The focus target drifts so the camera's gaze sweeps, not just its
        // position.
        let drift = AnimationCurveBuilder::new("location")
            .key(frames.start, focus)
            .key(frames.end, focus + Vec3::from(cam.target_drift))
            .build()?;
        self.apply_curve(target, drift, Interpolation::Sine);

        if let Some(pivot) = self.moon_pivot {
            let orbit = orbit_pivot_curve("rotation.z", frames.start, frames.end)?;
            self.apply_curve(pivot, orbit, Interpolation::Linear);
        }

        Ok(())
    }

    /// Insert the curve's keyframes, negotiate an interpolation mode against
    /// what the host advertises for this property, and apply it.
    fn apply_curve(&mut self, object: ObjectHandle, curve: AnimationCurve, desired: Interpolation) {
        for kf in curve.keyframes() {
            let value = match kf.value {
                KeyValue::Scalar(v) => PropertyValue::Scalar(v),
                KeyValue::Vector(v) => PropertyValue::Vector(v.to_array()),
            };
            self.host
                .insert_keyframe(object, curve.property_path(), kf.frame, value);
        }

        let supported = self
            .host
            .supported_interpolation_modes(object, curve.property_path());
        let negotiated = negotiate_interpolation(desired, &supported);
        if negotiated != desired {
            log::debug!(
                "curve '{}': {desired:?} unsupported, degrading to {negotiated:?}",
                curve.property_path()
            );
        }
        self.host
            .set_interpolation(object, curve.property_path(), negotiated.identifier());

        let mut curve = curve;
        curve.interpolation = negotiated;
        self.report.curves.push(curve);
    }

    fn apply_cosmetics(&mut self) {
        let params = self.params;
        let r = &params.render;

        let render = self.host.property_target("render");
        CompatibilityResolver::apply(self.host, render, &["use_bloom"], r.use_bloom);
        CompatibilityResolver::apply(self.host, render, &["bloom_intensity"], r.bloom_intensity);
        CompatibilityResolver::apply(
            self.host,
            render,
            &["use_gtao", "ambient_occlusion"],
            r.ambient_occlusion,
        );
        CompatibilityResolver::apply(self.host, render, &["volumetric_start"], 0.1);
        CompatibilityResolver::apply(
            self.host,
            render,
            &["volumetric_end"],
            params.nebula.size * r.volumetric_end_factor,
        );
        CompatibilityResolver::apply(self.host, render, &["exposure"], r.exposure);
        CompatibilityResolver::apply(
            self.host,
            render,
            &["taa_render_samples", "samples"],
            r.samples as f32,
        );
        CompatibilityResolver::apply(self.host, render, &["resolution_x"], r.resolution.0 as f32);
        CompatibilityResolver::apply(self.host, render, &["resolution_y"], r.resolution.1 as f32);
        CompatibilityResolver::apply(self.host, render, &["fps"], params.frames.fps as f32);

        let dof = self.host.property_target("camera.dof");
        CompatibilityResolver::apply(self.host, dof, &["use_dof"], true);
        CompatibilityResolver::apply(
            self.host,
            dof,
            &["aperture_fstop"],
            params.camera.aperture_fstop,
        );
        CompatibilityResolver::apply(
            self.host,
            dof,
            &["focus_distance"],
            params.camera.focus_distance,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_host::RecordingHost;

    fn full_host() -> RecordingHost {
        RecordingHost::new()
            .with_property_caps(
                "render",
                &[
                    "use_bloom",
                    "bloom_intensity",
                    "use_gtao",
                    "volumetric_start",
                    "volumetric_end",
                    "exposure",
                    "taa_render_samples",
                    "resolution_x",
                    "resolution_y",
                    "fps",
                ],
            )
            .with_property_caps("camera.dof", &["use_dof", "aperture_fstop", "focus_distance"])
            .with_property_caps("light.sun", &["energy", "color"])
            .with_property_caps("material.rings", &["blend_method", "shadow_method"])
            .with_property_caps("object.ring_disc", &["rotation_euler", "inner_radius"])
            .with_interpolation_modes(&["CONSTANT", "LINEAR", "BEZIER", "SINE"])
    }

    #[test]
    fn test_grand_flyby_builds_clean() {
        let params = SceneParams::grand_flyby();
        let mut host = full_host();
        let report = SceneAssembler::new(&params, &mut host).assemble().unwrap();

        assert!(
            report.body_errors.is_empty(),
            "no recipe should fail: {:?}",
            report.body_errors
        );
        // Sky, sun, gas giant, ice planet, asteroid rock, nebula.
        assert_eq!(report.graphs_built, 6);
        assert_eq!(host.containers_created(), 6);
        // No ringed planet in this preset, so no moon orbit curve.
        assert_eq!(report.curves.len(), 2);
        assert_eq!(host.keyframes_inserted(), 4);
    }

    #[test]
    fn test_grand_flyby_belt_placement() {
        let params = SceneParams::grand_flyby();
        let mut host = full_host();
        let report = SceneAssembler::new(&params, &mut host).assemble().unwrap();

        let asteroids = host.instances_of("asteroid");
        assert_eq!(asteroids.len(), 250);
        assert_eq!(report.placements.len(), 250);

        let center = Vec3::from(params.sun.position);
        for record in &report.placements {
            let radius = record.planar_radius(center);
            assert!(
                (30.0..=60.0).contains(&radius),
                "asteroid {} at planar radius {radius}",
                record.instance
            );
            assert!(
                (0.2..=0.8).contains(&record.scale),
                "asteroid {} at scale {}",
                record.instance,
                record.scale
            );
        }
    }

    #[test]
    fn test_orbital_showcase_adds_ringed_planet_and_moon() {
        let params = SceneParams::orbital_showcase();
        let mut host = full_host();
        let report = SceneAssembler::new(&params, &mut host).assemble().unwrap();

        assert!(report.body_errors.is_empty());
        // Sky, sun, rocky planet, rings, moon rock, gas giant, asteroid
        // rock, nebula.
        assert_eq!(report.graphs_built, 8);
        assert_eq!(host.containers_created(), 8);

        // Offset, target drift, and the moon orbit.
        assert_eq!(report.curves.len(), 3);
        assert_eq!(host.keyframes_inserted(), 6);
        assert_eq!(host.interpolation_applied("rotation.z"), Some("LINEAR"));

        assert_eq!(
            host.property_value("material.rings", "blend_method"),
            Some(PropertyValue::Text("HASHED".to_string()))
        );
        assert_eq!(host.instances_of("moon_pivot").len(), 1);
        assert_eq!(host.instances_of("moon").len(), 1);
    }

    #[test]
    fn test_belt_circles_the_planet_when_present() {
        let params = SceneParams::orbital_showcase();
        let mut host = full_host();
        let report = SceneAssembler::new(&params, &mut host).assemble().unwrap();

        let center = Vec3::from(params.planet.as_ref().unwrap().position);
        for record in &report.placements {
            let radius = record.planar_radius(center);
            assert!(
                (10.0..=18.0).contains(&radius),
                "asteroid {} at planar radius {radius}",
                record.instance
            );
        }
    }

    #[test]
    fn test_interpolation_degrades_to_host_modes() {
        let params = SceneParams::grand_flyby();
        let mut host = full_host().with_interpolation_modes(&["BEZIER"]);
        let report = SceneAssembler::new(&params, &mut host).assemble().unwrap();

        let offset = report
            .curves
            .iter()
            .find(|c| c.property_path() == "constraint.offset_factor")
            .unwrap();
        assert_eq!(offset.interpolation, Interpolation::Bezier);
        assert_eq!(
            host.interpolation_applied("constraint.offset_factor"),
            Some("BEZIER")
        );

        let drift = report
            .curves
            .iter()
            .find(|c| c.property_path() == "location")
            .unwrap();
        assert_eq!(
            drift.interpolation,
            Interpolation::Bezier,
            "SINE must degrade through the fallback chain"
        );
    }

    #[test]
    fn test_cosmetics_degrade_silently_on_a_bare_host() {
        let params = SceneParams::grand_flyby();
        let mut host = RecordingHost::new();
        let report = SceneAssembler::new(&params, &mut host).assemble().unwrap();

        assert!(report.body_errors.is_empty());
        assert_eq!(report.graphs_built, 6);
        assert_eq!(host.property_value("render", "use_bloom"), None);
        assert_eq!(host.property_value("camera.dof", "use_dof"), None);
    }

    #[test]
    fn test_sun_light_set_through_aliases() {
        let params = SceneParams::grand_flyby();
        let mut host = full_host();
        SceneAssembler::new(&params, &mut host).assemble().unwrap();

        assert_eq!(
            host.property_value("light.sun", "energy"),
            Some(PropertyValue::Scalar(1000.0))
        );
        let color = blackbody_to_rgb(params.sun.temperature_k);
        assert_eq!(
            host.property_value("light.sun", "color"),
            Some(PropertyValue::Vector(color))
        );
    }

    #[test]
    fn test_failed_recipe_is_recorded_not_fatal() {
        let params = SceneParams::grand_flyby();
        let mut host = RecordingHost::new();
        let mut asm = SceneAssembler::new(&params, &mut host);

        let err = GraphError::UnknownSocket {
            node: "broken".to_string(),
            direction: "input",
            socket: "fac".to_string(),
        };
        let handle = asm.build_material(ContainerKind::Material, "broken body", Err(err));

        assert!(handle.is_none());
        assert_eq!(asm.report.graphs_built, 0);
        assert_eq!(asm.report.body_errors.len(), 1);
        assert_eq!(asm.report.body_errors[0].body, "broken body");
    }

    #[test]
    fn test_render_values_land_on_the_target() {
        let params = SceneParams::orbital_showcase();
        let mut host = full_host();
        SceneAssembler::new(&params, &mut host).assemble().unwrap();

        assert_eq!(
            host.property_value("render", "bloom_intensity"),
            Some(PropertyValue::Scalar(0.04))
        );
        assert_eq!(
            host.property_value("render", "volumetric_end"),
            Some(PropertyValue::Scalar(120.0 * 1.2))
        );
        assert_eq!(
            host.property_value("render", "exposure"),
            Some(PropertyValue::Scalar(-0.2))
        );
        assert_eq!(
            host.property_value("camera.dof", "aperture_fstop"),
            Some(PropertyValue::Scalar(2.8))
        );
    }

    #[test]
    fn test_frame_rate_and_ring_tilt_reach_the_host() {
        let params = SceneParams::orbital_showcase();
        let mut host = full_host();
        SceneAssembler::new(&params, &mut host).assemble().unwrap();

        assert_eq!(
            host.property_value("render", "fps"),
            Some(PropertyValue::Scalar(params.frames.fps as f32))
        );

        let ring_field = params.rings.as_ref().unwrap();
        assert_eq!(
            host.property_value("object.ring_disc", "rotation_euler"),
            Some(PropertyValue::Vector([
                ring_field.tilt_deg[0].to_radians(),
                0.0,
                ring_field.tilt_deg[1].to_radians(),
            ]))
        );
        assert_eq!(
            host.property_value("object.ring_disc", "inner_radius"),
            Some(PropertyValue::Scalar(ring_field.inner_radius))
        );
    }
}
