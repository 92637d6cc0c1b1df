//! The host scene collaborator boundary: the trait the assembler drives,
//! alias-based compatibility resolution for renamed host properties, and a
//! recording test double.

mod compat;
mod host;
mod recording;
mod upload;

pub use compat::CompatibilityResolver;
pub use host::{
    ContainerHandle, ContainerKind, HostNodeHandle, ObjectHandle, PropertyValue, SceneHost,
    TargetHandle,
};
pub use recording::{HostCall, RecordingHost};
pub use upload::upload_graph;
