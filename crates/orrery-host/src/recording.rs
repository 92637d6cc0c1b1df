//! A recording test double for the host collaborator.

use std::collections::{HashMap, HashSet};

use glam::Vec3;
use orrery_graph::NodeSpec;

use crate::host::{
    ContainerHandle, ContainerKind, HostNodeHandle, ObjectHandle, PropertyValue, SceneHost,
    TargetHandle,
};

/// One recorded host call, in the order the core issued it.
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    CreateContainer {
        kind: ContainerKind,
        name: String,
    },
    InstantiateNode {
        container: ContainerHandle,
        label: String,
    },
    Connect {
        container: ContainerHandle,
        src: HostNodeHandle,
        src_socket: String,
        dst: HostNodeHandle,
        dst_socket: String,
    },
    TrySet {
        target: String,
        name: String,
        accepted: bool,
    },
    CreateObjectInstance {
        template: String,
        position: Vec3,
        scale: f32,
    },
    InsertKeyframe {
        object: ObjectHandle,
        property_path: String,
        frame: f32,
    },
    SetInterpolation {
        object: ObjectHandle,
        property_path: String,
        mode: String,
    },
}

/// In-memory host that records every call and answers capability probes
/// from configurable sets.
///
/// `try_set` accepts a property exactly when the target's configured
/// capability set contains it, which lets tests simulate renamed or
/// read-only host fields.
#[derive(Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
    next_handle: u64,
    target_paths: HashMap<TargetHandle, String>,
    property_caps: HashMap<String, HashSet<String>>,
    set_values: HashMap<(String, String), PropertyValue>,
    interpolation_modes: HashSet<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the property names a target path exposes.
    pub fn with_property_caps(mut self, target_path: &str, names: &[&str]) -> Self {
        self.property_caps.insert(
            target_path.to_string(),
            names.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    /// Configure the interpolation mode identifiers the host advertises.
    pub fn with_interpolation_modes(mut self, modes: &[&str]) -> Self {
        self.interpolation_modes = modes.iter().map(|s| s.to_string()).collect();
        self
    }

    fn fresh_handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }

    /// All recorded calls, in issue order.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn containers_created(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::CreateContainer { .. }))
            .count()
    }

    pub fn nodes_instantiated(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::InstantiateNode { .. }))
            .count()
    }

    pub fn links_connected(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::Connect { .. }))
            .count()
    }

    pub fn objects_created(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::CreateObjectInstance { .. }))
            .count()
    }

    /// Placements recorded for one template name.
    pub fn instances_of(&self, template: &str) -> Vec<(Vec3, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::CreateObjectInstance {
                    template: t,
                    position,
                    scale,
                } if t == template => Some((*position, *scale)),
                _ => None,
            })
            .collect()
    }

    pub fn keyframes_inserted(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::InsertKeyframe { .. }))
            .count()
    }

    /// The value most recently set on (target path, property name).
    pub fn property_value(&self, target_path: &str, name: &str) -> Option<PropertyValue> {
        self.set_values
            .get(&(target_path.to_string(), name.to_string()))
            .cloned()
    }

    /// The interpolation mode last applied to an object property.
    pub fn interpolation_applied(&self, property_path: &str) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            HostCall::SetInterpolation {
                property_path: p,
                mode,
                ..
            } if p == property_path => Some(mode.as_str()),
            _ => None,
        })
    }
}

impl SceneHost for RecordingHost {
    fn create_node_graph_container(&mut self, kind: ContainerKind, name: &str) -> ContainerHandle {
        let handle = ContainerHandle(self.fresh_handle());
        self.calls.push(HostCall::CreateContainer {
            kind,
            name: name.to_string(),
        });
        handle
    }

    fn instantiate_node(&mut self, container: ContainerHandle, spec: &NodeSpec) -> HostNodeHandle {
        let handle = HostNodeHandle(self.fresh_handle());
        self.calls.push(HostCall::InstantiateNode {
            container,
            label: spec.label.clone(),
        });
        handle
    }

    fn connect(
        &mut self,
        container: ContainerHandle,
        src: HostNodeHandle,
        src_socket: &str,
        dst: HostNodeHandle,
        dst_socket: &str,
    ) {
        self.calls.push(HostCall::Connect {
            container,
            src,
            src_socket: src_socket.to_string(),
            dst,
            dst_socket: dst_socket.to_string(),
        });
    }

    fn property_target(&mut self, path: &str) -> TargetHandle {
        if let Some((&handle, _)) = self
            .target_paths
            .iter()
            .find(|(_, p)| p.as_str() == path)
        {
            return handle;
        }
        let handle = TargetHandle(self.fresh_handle());
        self.target_paths.insert(handle, path.to_string());
        handle
    }

    fn available_properties(&self, target: TargetHandle) -> HashSet<String> {
        self.target_paths
            .get(&target)
            .and_then(|path| self.property_caps.get(path))
            .cloned()
            .unwrap_or_default()
    }

    fn try_set(&mut self, target: TargetHandle, name: &str, value: PropertyValue) -> bool {
        let path = match self.target_paths.get(&target) {
            Some(p) => p.clone(),
            None => return false,
        };
        let accepted = self
            .property_caps
            .get(&path)
            .is_some_and(|caps| caps.contains(name));
        self.calls.push(HostCall::TrySet {
            target: path.clone(),
            name: name.to_string(),
            accepted,
        });
        if accepted {
            self.set_values.insert((path, name.to_string()), value);
        }
        accepted
    }

    fn create_object_instance(
        &mut self,
        template: &str,
        position: Vec3,
        scale: f32,
    ) -> ObjectHandle {
        let handle = ObjectHandle(self.fresh_handle());
        self.calls.push(HostCall::CreateObjectInstance {
            template: template.to_string(),
            position,
            scale,
        });
        handle
    }

    fn insert_keyframe(
        &mut self,
        object: ObjectHandle,
        property_path: &str,
        frame: f32,
        _value: PropertyValue,
    ) {
        self.calls.push(HostCall::InsertKeyframe {
            object,
            property_path: property_path.to_string(),
            frame,
        });
    }

    fn supported_interpolation_modes(
        &self,
        _object: ObjectHandle,
        _property_path: &str,
    ) -> HashSet<String> {
        self.interpolation_modes.clone()
    }

    fn set_interpolation(&mut self, object: ObjectHandle, property_path: &str, mode: &str) {
        self.calls.push(HostCall::SetInterpolation {
            object,
            property_path: property_path.to_string(),
            mode: mode.to_string(),
        });
    }
}
