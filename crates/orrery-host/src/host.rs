//! The abstract host scene collaborator.

use std::collections::HashSet;

use glam::Vec3;
use orrery_graph::NodeSpec;

/// Opaque handle to a node-graph container (world, material, volume).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContainerHandle(pub u64);

/// Opaque handle to a node instantiated inside a host container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HostNodeHandle(pub u64);

/// Opaque handle to a scene object (camera, pivot, placed instance).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectHandle(pub u64);

/// Opaque handle to a property-bearing target (render settings, a camera's
/// depth-of-field block, a material).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TargetHandle(pub u64);

/// What a node-graph container shades.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    /// The scene background/world shader.
    World,
    /// A surface material.
    Material,
    /// A volumetric material.
    VolumeMaterial,
}

/// A value pushed across the host boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Scalar(f32),
    Vector([f32; 3]),
    Text(String),
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<f32> for PropertyValue {
    fn from(v: f32) -> Self {
        PropertyValue::Scalar(v)
    }
}

impl From<[f32; 3]> for PropertyValue {
    fn from(v: [f32; 3]) -> Self {
        PropertyValue::Vector(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Text(v.to_string())
    }
}

/// Everything the core needs from the host application.
///
/// The core computes graphs, placements, and curves; this trait is the only
/// place those descriptions turn into host-side scene state. Production
/// hosts bridge to a real content-creation API; tests use
/// [`RecordingHost`](crate::RecordingHost).
pub trait SceneHost {
    /// Create an empty node-graph container of the given kind.
    fn create_node_graph_container(&mut self, kind: ContainerKind, name: &str) -> ContainerHandle;

    /// Instantiate one node inside a container.
    fn instantiate_node(&mut self, container: ContainerHandle, spec: &NodeSpec) -> HostNodeHandle;

    /// Wire two instantiated nodes inside a container.
    fn connect(
        &mut self,
        container: ContainerHandle,
        src: HostNodeHandle,
        src_socket: &str,
        dst: HostNodeHandle,
        dst_socket: &str,
    );

    /// Resolve a named property-bearing target ("render", "camera.dof", ...).
    fn property_target(&mut self, path: &str) -> TargetHandle;

    /// Property names the target currently exposes.
    fn available_properties(&self, target: TargetHandle) -> HashSet<String>;

    /// Set a single property. Returns `false` if the host rejected the set
    /// for any reason; never panics.
    fn try_set(&mut self, target: TargetHandle, name: &str, value: PropertyValue) -> bool;

    /// Place one instance of a template object.
    fn create_object_instance(&mut self, template: &str, position: Vec3, scale: f32)
    -> ObjectHandle;

    /// Insert one keyframe on an object property.
    fn insert_keyframe(
        &mut self,
        object: ObjectHandle,
        property_path: &str,
        frame: f32,
        value: PropertyValue,
    );

    /// Interpolation mode identifiers the host supports for this property.
    /// An empty set means the capability could not be determined.
    fn supported_interpolation_modes(
        &self,
        object: ObjectHandle,
        property_path: &str,
    ) -> HashSet<String>;

    /// Apply an interpolation mode to every keyframe of the property.
    fn set_interpolation(&mut self, object: ObjectHandle, property_path: &str, mode: &str);
}
