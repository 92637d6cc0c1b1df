//! Shared node archetypes the recipes wire together.
//!
//! Socket names and semantic types follow one convention across all
//! recipes so hosts can map them onto their own node vocabulary.

use orrery_graph::{NodeKind, NodeSpec, SocketType};

/// Texture coordinate source: generated and object-space vectors.
pub(crate) fn coords(label: &str) -> NodeSpec {
    NodeSpec::new(NodeKind::Source, label)
        .output("generated", SocketType::Vector)
        .output("object", SocketType::Vector)
}

/// Vector mapping transform (scale/rotation applied to coordinates).
pub(crate) fn mapping(label: &str, scale: [f32; 3], rotation: [f32; 3]) -> NodeSpec {
    NodeSpec::new(NodeKind::MathOp, label)
        .param("scale", scale)
        .param("rotation", rotation)
        .input("vector", SocketType::Vector)
        .output("vector", SocketType::Vector)
}

/// Fractal value noise.
pub(crate) fn noise(label: &str, scale: f32, detail: f32, roughness: f32) -> NodeSpec {
    NodeSpec::new(NodeKind::Pattern, label)
        .param("scale", scale)
        .param("detail", detail)
        .param("roughness", roughness)
        .optional_input("vector", SocketType::Vector)
        .output("fac", SocketType::Scalar)
}

/// Cellular (Voronoi F1, euclidean) distance field.
pub(crate) fn cellular(label: &str, scale: f32) -> NodeSpec {
    NodeSpec::new(NodeKind::Pattern, label)
        .param("scale", scale)
        .param("feature", "f1")
        .param("metric", "euclidean")
        .optional_input("vector", SocketType::Vector)
        .output("distance", SocketType::Scalar)
}

/// Periodic wave bands or rings.
pub(crate) fn wave(label: &str, kind: &str, direction: &str, scale: f32, distortion: f32) -> NodeSpec {
    NodeSpec::new(NodeKind::Pattern, label)
        .param("wave", kind)
        .param("direction", direction)
        .param("scale", scale)
        .param("distortion", distortion)
        .optional_input("vector", SocketType::Vector)
        .output("color", SocketType::Color)
}

/// Two-stop color ramp remapping a factor.
pub(crate) fn ramp(label: &str, stops: [(f32, [f32; 4]); 2]) -> NodeSpec {
    NodeSpec::new(NodeKind::Ramp, label)
        .param("pos_a", stops[0].0)
        .param("color_a", stops[0].1)
        .param("pos_b", stops[1].0)
        .param("color_b", stops[1].1)
        .input("fac", SocketType::Scalar)
        .output("color", SocketType::Color)
}

/// Scalar math with a constant second operand.
pub(crate) fn math(label: &str, operation: &str, operand: f32) -> NodeSpec {
    NodeSpec::new(NodeKind::MathOp, label)
        .param("operation", operation)
        .param("operand", operand)
        .input("a", SocketType::Scalar)
        .optional_input("b", SocketType::Scalar)
        .output("value", SocketType::Scalar)
}

/// Color blend under a constant factor.
pub(crate) fn mix_color(label: &str, blend: &str, fac: f32) -> NodeSpec {
    NodeSpec::new(NodeKind::Mixer, label)
        .param("blend", blend)
        .param("fac", fac)
        .input("color_a", SocketType::Color)
        .input("color_b", SocketType::Color)
        .output("color", SocketType::Color)
}

/// Shader blend driven by a factor input.
pub(crate) fn mix_shader(label: &str) -> NodeSpec {
    NodeSpec::new(NodeKind::Mixer, label)
        .input("fac", SocketType::Scalar)
        .input("shader_a", SocketType::Shader)
        .input("shader_b", SocketType::Shader)
        .output("shader", SocketType::Shader)
}

/// Flat background shader.
pub(crate) fn background(label: &str, color: [f32; 4], strength: f32) -> NodeSpec {
    NodeSpec::new(NodeKind::Source, label)
        .param("color", color)
        .param("strength", strength)
        .output("background", SocketType::Shader)
}

/// Emission shader. Color and strength may be driven or left at params.
pub(crate) fn emission(label: &str, color: [f32; 4], strength: f32) -> NodeSpec {
    NodeSpec::new(NodeKind::Source, label)
        .param("color", color)
        .param("strength", strength)
        .optional_input("color", SocketType::Color)
        .optional_input("strength", SocketType::Scalar)
        .output("emission", SocketType::Shader)
}

/// Principled-style surface shader.
pub(crate) fn surface(label: &str, specular: f32, roughness: f32) -> NodeSpec {
    NodeSpec::new(NodeKind::Source, label)
        .param("specular", specular)
        .param("roughness", roughness)
        .optional_input("base_color", SocketType::Color)
        .optional_input("roughness", SocketType::Scalar)
        .optional_input("normal", SocketType::Vector)
        .output("bsdf", SocketType::Shader)
}

/// Fully transparent shader, mixed in for gaps.
pub(crate) fn transparent(label: &str) -> NodeSpec {
    NodeSpec::new(NodeKind::Source, label).output("bsdf", SocketType::Shader)
}

/// Height-to-normal bump conversion.
pub(crate) fn bump(label: &str, strength: f32, distance: f32) -> NodeSpec {
    NodeSpec::new(NodeKind::MathOp, label)
        .param("strength", strength)
        .param("distance", distance)
        .input("height", SocketType::Scalar)
        .output("normal", SocketType::Vector)
}

/// Principled volume shader.
pub(crate) fn principled_volume(label: &str, density: f32, anisotropy: f32) -> NodeSpec {
    NodeSpec::new(NodeKind::Volume, label)
        .param("density", density)
        .param("anisotropy", anisotropy)
        .optional_input("color", SocketType::Color)
        .optional_input("emission_strength", SocketType::Scalar)
        .output("volume", SocketType::Volume)
}

/// Surface-terminal output node.
pub(crate) fn surface_output(label: &str) -> NodeSpec {
    NodeSpec::new(NodeKind::Output, label).input("surface", SocketType::Shader)
}

/// Volume-terminal output node.
pub(crate) fn volume_output(label: &str) -> NodeSpec {
    NodeSpec::new(NodeKind::Output, label).input("volume", SocketType::Volume)
}
