//! Translation of [`VertexLayout`] tables into wgpu vertex buffer layouts.

use crate::mesh::{AttributeFormat, Vertex, VertexAttribute, VertexLayout};

/// wgpu attributes for [`Vertex`], derived from `Vertex::LAYOUT` at compile time.
pub const MESH_VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
    to_wgpu(Vertex::LAYOUT.attributes[0]),
    to_wgpu(Vertex::LAYOUT.attributes[1]),
    to_wgpu(Vertex::LAYOUT.attributes[2]),
];

const fn to_wgpu(a: VertexAttribute) -> wgpu::VertexAttribute {
    wgpu::VertexAttribute {
        format: match a.format {
            AttributeFormat::Float32x2 => wgpu::VertexFormat::Float32x2,
            AttributeFormat::Float32x3 => wgpu::VertexFormat::Float32x3,
        },
        offset: a.offset,
        shader_location: a.location,
    }
}

/// Vertex buffer layout the mesh pipeline is built with.
pub fn mesh_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: Vertex::LAYOUT.stride,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &MESH_VERTEX_ATTRIBUTES,
    }
}

/// Returns the wgpu layout for a vertex table the pipeline understands.
///
/// Only [`Vertex::LAYOUT`] is supported; anything else would not match the
/// shader inputs.
pub fn buffer_layout_for(layout: &VertexLayout) -> Option<wgpu::VertexBufferLayout<'static>> {
    (*layout == Vertex::LAYOUT).then(mesh_vertex_layout)
}
