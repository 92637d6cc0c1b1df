//! Typed shader node-graph construction: node/socket/link data model and a
//! validating builder that every material and world recipe is built on.

mod builder;
mod error;
mod node;

pub use builder::{Graph, Link, NodeGraphBuilder};
pub use error::GraphError;
pub use node::{NodeId, NodeKind, NodeSpec, ParamValue, SocketDecl, SocketType};
