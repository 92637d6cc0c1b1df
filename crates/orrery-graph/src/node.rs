//! Node and socket declarations for shader graphs.

/// The closed set of graph-function kinds a node can have.
///
/// Hosts map these onto their own node vocabularies; the graph layer only
/// cares about them for terminal validation and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Produces values from nothing: coordinates, colors, shaders, emitters.
    Source,
    /// Blends two inputs under a factor (mix shader, mix color).
    Mixer,
    /// Remaps a scalar through a color gradient with positioned stops.
    Ramp,
    /// Scalar or vector arithmetic (multiply, power, mapping transforms).
    MathOp,
    /// Procedural texture patterns (noise, cellular, wave bands).
    Pattern,
    /// Volumetric shading (principled volume).
    Volume,
    /// The graph terminal. Exactly one per finalized graph.
    Output,
}

/// Semantic type carried by a socket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocketType {
    Scalar,
    Color,
    Vector,
    Shader,
    Volume,
}

impl SocketType {
    /// Whether a link may carry a value of type `self` into an input of
    /// type `other`.
    ///
    /// Identical types always link. Scalar and Color link in either
    /// direction: host renderers implicitly convert between a factor and a
    /// grayscale color. Everything else is incompatible.
    pub fn links_to(self, other: SocketType) -> bool {
        if self == other {
            return true;
        }
        matches!(
            (self, other),
            (SocketType::Scalar, SocketType::Color) | (SocketType::Color, SocketType::Scalar)
        )
    }
}

/// A parameter value stored on a node.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Scalar(f32),
    Vector([f32; 3]),
    Color([f32; 4]),
    /// Enum-style parameter, e.g. a wave pattern's band direction.
    Choice(String),
}

impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        ParamValue::Scalar(v)
    }
}

impl From<[f32; 3]> for ParamValue {
    fn from(v: [f32; 3]) -> Self {
        ParamValue::Vector(v)
    }
}

impl From<[f32; 4]> for ParamValue {
    fn from(v: [f32; 4]) -> Self {
        ParamValue::Color(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Choice(v.to_string())
    }
}

/// A declared input or output socket on a node.
#[derive(Clone, Debug)]
pub struct SocketDecl {
    /// Socket name, unique per direction within its node.
    pub name: String,
    /// Semantic type of values flowing through this socket.
    pub ty: SocketType,
    /// For inputs: whether finalize fails if the socket is left unlinked.
    /// Always `false` for outputs.
    pub required: bool,
}

/// Declaration of a node: kind, label, parameters, and sockets.
///
/// Built fluently by recipes, then handed to
/// [`NodeGraphBuilder::add_node`](crate::NodeGraphBuilder::add_node).
/// Immutable once placed in a graph.
#[derive(Clone, Debug)]
pub struct NodeSpec {
    pub kind: NodeKind,
    /// Human-readable label used in diagnostics ("continent noise").
    pub label: String,
    /// Parameter name to value mapping, in declaration order.
    pub params: Vec<(String, ParamValue)>,
    pub inputs: Vec<SocketDecl>,
    pub outputs: Vec<SocketDecl>,
}

impl NodeSpec {
    pub fn new(kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            params: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Declare an input socket that must be linked before finalize.
    pub fn input(mut self, name: impl Into<String>, ty: SocketType) -> Self {
        self.inputs.push(SocketDecl {
            name: name.into(),
            ty,
            required: true,
        });
        self
    }

    /// Declare an input socket that may be left unlinked (its parameter
    /// default is used instead).
    pub fn optional_input(mut self, name: impl Into<String>, ty: SocketType) -> Self {
        self.inputs.push(SocketDecl {
            name: name.into(),
            ty,
            required: false,
        });
        self
    }

    pub fn output(mut self, name: impl Into<String>, ty: SocketType) -> Self {
        self.outputs.push(SocketDecl {
            name: name.into(),
            ty,
            required: false,
        });
        self
    }

    /// Find a declared input socket by name.
    pub fn find_input(&self, name: &str) -> Option<&SocketDecl> {
        self.inputs.iter().find(|s| s.name == name)
    }

    /// Find a declared output socket by name.
    pub fn find_output(&self, name: &str) -> Option<&SocketDecl> {
        self.outputs.iter().find(|s| s.name == name)
    }
}

/// Opaque handle to a node within one builder/graph.
///
/// Ids are scoped to the builder that issued them; using a foreign id is
/// reported as [`GraphError::UnknownNode`](crate::GraphError::UnknownNode).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_socket_types_link() {
        for ty in [
            SocketType::Scalar,
            SocketType::Color,
            SocketType::Vector,
            SocketType::Shader,
            SocketType::Volume,
        ] {
            assert!(ty.links_to(ty), "{ty:?} should link to itself");
        }
    }

    #[test]
    fn test_scalar_and_color_interchange() {
        assert!(SocketType::Scalar.links_to(SocketType::Color));
        assert!(SocketType::Color.links_to(SocketType::Scalar));
    }

    #[test]
    fn test_shader_does_not_link_to_scalar() {
        assert!(!SocketType::Shader.links_to(SocketType::Scalar));
        assert!(!SocketType::Scalar.links_to(SocketType::Shader));
        assert!(!SocketType::Vector.links_to(SocketType::Color));
        assert!(!SocketType::Volume.links_to(SocketType::Shader));
    }

    #[test]
    fn test_node_spec_fluent_construction() {
        let spec = NodeSpec::new(NodeKind::Pattern, "star cells")
            .param("scale", 600.0)
            .param("feature", "f1")
            .optional_input("vector", SocketType::Vector)
            .output("distance", SocketType::Scalar);

        assert_eq!(spec.label, "star cells");
        assert_eq!(spec.params.len(), 2);
        assert!(spec.find_input("vector").is_some());
        assert!(!spec.find_input("vector").unwrap().required);
        assert_eq!(
            spec.find_output("distance").unwrap().ty,
            SocketType::Scalar
        );
        assert!(spec.find_output("missing").is_none());
    }
}
