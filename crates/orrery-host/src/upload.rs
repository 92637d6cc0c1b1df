//! Replaying a finalized graph onto a host container.

use std::collections::HashMap;

use orrery_graph::{Graph, NodeId};

use crate::host::{ContainerHandle, HostNodeHandle, SceneHost};

/// Instantiate every node of `graph` inside `container`, then wire every
/// link, in graph declaration order.
///
/// Returns the mapping from graph node ids to the host's node handles so
/// callers can keep configuring individual nodes afterwards.
pub fn upload_graph(
    host: &mut dyn SceneHost,
    container: ContainerHandle,
    graph: &Graph,
) -> HashMap<NodeId, HostNodeHandle> {
    let mut handles = HashMap::with_capacity(graph.node_count());
    for (id, spec) in graph.nodes() {
        handles.insert(id, host.instantiate_node(container, spec));
    }
    for link in graph.links() {
        // Both endpoints were just instantiated from this same graph.
        let src = handles[&link.src];
        let dst = handles[&link.dst];
        host.connect(container, src, &link.src_socket, dst, &link.dst_socket);
    }
    handles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ContainerKind, SceneHost};
    use crate::recording::RecordingHost;
    use orrery_graph::{NodeGraphBuilder, NodeKind, NodeSpec, SocketType};

    #[test]
    fn test_upload_replays_every_node_and_link() {
        let mut b = NodeGraphBuilder::new();
        let emission = b.add_node(
            NodeSpec::new(NodeKind::Source, "emission")
                .param("strength", 4.0)
                .output("emission", SocketType::Shader),
        );
        let out = b.add_node(
            NodeSpec::new(NodeKind::Output, "world output")
                .input("surface", SocketType::Shader),
        );
        b.connect(emission, "emission", out, "surface").unwrap();
        let graph = b.finalize(out).unwrap();

        let mut host = RecordingHost::new();
        let container = host.create_node_graph_container(ContainerKind::World, "space");
        let handles = upload_graph(&mut host, container, &graph);

        assert_eq!(handles.len(), 2);
        assert_eq!(host.nodes_instantiated(), graph.node_count());
        assert_eq!(host.links_connected(), graph.link_count());
    }
}
