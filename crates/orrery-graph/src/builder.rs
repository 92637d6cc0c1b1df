//! The generic node-graph builder: add nodes, wire sockets, finalize into
//! an immutable validated graph.

use crate::error::GraphError;
use crate::node::{NodeId, NodeKind, NodeSpec};

/// A directed edge from one node's output socket to another node's input
/// socket.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    pub src: NodeId,
    pub src_socket: String,
    pub dst: NodeId,
    pub dst_socket: String,
}

/// Builds a node graph incrementally, validating every link as it is added.
///
/// Every material and world recipe is structurally the same: declare nodes,
/// wire sockets, designate one terminal. This builder centralizes the
/// validation those recipes would otherwise each reimplement.
#[derive(Default)]
pub struct NodeGraphBuilder {
    nodes: Vec<NodeSpec>,
    links: Vec<Link>,
}

impl NodeGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Always succeeds and returns an opaque handle.
    pub fn add_node(&mut self, spec: NodeSpec) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(spec);
        id
    }

    fn node(&self, id: NodeId) -> Result<&NodeSpec, GraphError> {
        self.nodes
            .get(id.index())
            .ok_or(GraphError::UnknownNode(id))
    }

    /// Whether `to` is reachable from `from` along existing links.
    ///
    /// Iterative DFS, O(V+E) per call. Graphs here stay under a few dozen
    /// nodes, so connect-time cycle probing is cheap.
    fn reachable(&self, from: NodeId, to: NodeId) -> bool {
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![from];
        while let Some(n) = stack.pop() {
            if n == to {
                return true;
            }
            if std::mem::replace(&mut visited[n.index()], true) {
                continue;
            }
            for link in self.links.iter().filter(|l| l.src == n) {
                stack.push(link.dst);
            }
        }
        false
    }

    /// Wire `src`'s output socket into `dst`'s input socket.
    ///
    /// Fails if either socket is unknown, the socket types cannot link, the
    /// destination input is already occupied, or the edge would close a
    /// cycle. On failure the builder is unchanged.
    pub fn connect(
        &mut self,
        src: NodeId,
        src_socket: &str,
        dst: NodeId,
        dst_socket: &str,
    ) -> Result<(), GraphError> {
        let src_node = self.node(src)?;
        let dst_node = self.node(dst)?;

        let out_decl =
            src_node
                .find_output(src_socket)
                .ok_or_else(|| GraphError::UnknownSocket {
                    node: src_node.label.clone(),
                    direction: "output",
                    socket: src_socket.to_string(),
                })?;
        let in_decl =
            dst_node
                .find_input(dst_socket)
                .ok_or_else(|| GraphError::UnknownSocket {
                    node: dst_node.label.clone(),
                    direction: "input",
                    socket: dst_socket.to_string(),
                })?;

        if !out_decl.ty.links_to(in_decl.ty) {
            return Err(GraphError::IncompatibleSocket {
                src_node: src_node.label.clone(),
                src_socket: src_socket.to_string(),
                src_ty: out_decl.ty,
                dst_node: dst_node.label.clone(),
                dst_socket: dst_socket.to_string(),
                dst_ty: in_decl.ty,
            });
        }

        if self
            .links
            .iter()
            .any(|l| l.dst == dst && l.dst_socket == dst_socket)
        {
            return Err(GraphError::SocketOccupied {
                dst_node: dst_node.label.clone(),
                dst_socket: dst_socket.to_string(),
            });
        }

        // A path dst -> src means src already depends on dst.
        if self.reachable(dst, src) {
            return Err(GraphError::Cycle {
                src_node: src_node.label.clone(),
                dst_node: dst_node.label.clone(),
            });
        }

        self.links.push(Link {
            src,
            src_socket: src_socket.to_string(),
            dst,
            dst_socket: dst_socket.to_string(),
        });
        Ok(())
    }

    /// Validate the whole graph and freeze it with `terminal` as the output.
    ///
    /// Connect-time checks already guarantee acyclicity and one link per
    /// input; finalize re-checks required inputs and the terminal kind, and
    /// flags nodes that do not contribute to the terminal.
    pub fn finalize(self, terminal: NodeId) -> Result<Graph, GraphError> {
        let terminal_node = self.node(terminal)?;
        if terminal_node.kind != NodeKind::Output {
            return Err(GraphError::BadTerminal {
                node: terminal_node.label.clone(),
            });
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            for input in node.inputs.iter().filter(|s| s.required) {
                let linked = self
                    .links
                    .iter()
                    .any(|l| l.dst.index() == idx && l.dst_socket == input.name);
                if !linked {
                    return Err(GraphError::DanglingInput {
                        node: node.label.clone(),
                        socket: input.name.clone(),
                    });
                }
            }
        }

        let graph = Graph {
            nodes: self.nodes,
            links: self.links,
            terminal,
        };

        let orphans = graph.unreachable_from_terminal();
        if !orphans.is_empty() {
            let labels: Vec<&str> = orphans
                .iter()
                .map(|id| graph.nodes[id.index()].label.as_str())
                .collect();
            log::warn!(
                "graph finalized with {} node(s) not contributing to the terminal: {labels:?}",
                orphans.len()
            );
        }

        Ok(graph)
    }
}

/// An immutable, validated node graph with a single designated terminal.
#[derive(Debug)]
pub struct Graph {
    nodes: Vec<NodeSpec>,
    links: Vec<Link>,
    terminal: NodeId,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn terminal(&self) -> NodeId {
        self.terminal
    }

    /// Iterate node ids and specs in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NodeSpec)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, spec)| (NodeId(i as u32), spec))
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The spec of a node, if the id belongs to this graph.
    pub fn node(&self, id: NodeId) -> Option<&NodeSpec> {
        self.nodes.get(id.index())
    }

    /// Links arriving at any input of `dst`.
    pub fn incoming(&self, dst: NodeId) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| l.dst == dst)
    }

    /// Nodes from which the terminal cannot be reached.
    ///
    /// Permitted (a recipe may park an experimental branch) but reported so
    /// finalize can flag them.
    pub fn unreachable_from_terminal(&self) -> Vec<NodeId> {
        let mut contributes = vec![false; self.nodes.len()];
        let mut stack = vec![self.terminal];
        while let Some(n) = stack.pop() {
            if std::mem::replace(&mut contributes[n.index()], true) {
                continue;
            }
            for link in self.links.iter().filter(|l| l.dst == n) {
                stack.push(link.src);
            }
        }
        contributes
            .iter()
            .enumerate()
            .filter(|&(_, &c)| !c)
            .map(|(i, _)| NodeId(i as u32))
            .collect()
    }
}
