//! Graph construction error types.

use crate::node::NodeId;

/// Errors raised while wiring or finalizing a node graph.
///
/// Any of these is fatal to the recipe being built, but callers are
/// expected to keep assembling the rest of the scene.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A node id from a different builder, or otherwise out of range.
    #[error("unknown node id {0:?}")]
    UnknownNode(NodeId),

    /// A socket name that does not exist on the named node.
    #[error("node '{node}' has no {direction} socket '{socket}'")]
    UnknownSocket {
        node: String,
        direction: &'static str,
        socket: String,
    },

    /// Source and destination socket types cannot carry the same value.
    #[error(
        "cannot link '{src_node}'.{src_socket} ({src_ty:?}) to '{dst_node}'.{dst_socket} ({dst_ty:?})"
    )]
    IncompatibleSocket {
        src_node: String,
        src_socket: String,
        src_ty: crate::SocketType,
        dst_node: String,
        dst_socket: String,
        dst_ty: crate::SocketType,
    },

    /// The destination input already has an incoming link.
    #[error("input '{dst_node}'.{dst_socket} already has an incoming link")]
    SocketOccupied { dst_node: String, dst_socket: String },

    /// Adding the link would create a cycle.
    #[error("linking '{src_node}' to '{dst_node}' would create a cycle")]
    Cycle { src_node: String, dst_node: String },

    /// A required input socket was left unlinked at finalize time.
    #[error("required input '{node}'.{socket} has no incoming link")]
    DanglingInput { node: String, socket: String },

    /// The designated terminal is not an output-kind node.
    #[error("terminal node '{node}' is not an output node")]
    BadTerminal { node: String },
}
