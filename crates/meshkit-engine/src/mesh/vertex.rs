use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

/// One vertex record as uploaded to the GPU.
///
/// Layout (32 bytes, fields contiguous in declaration order):
///
///  offset  0  position    [f32; 3]   loc 0
///  offset 12  color       [f32; 3]   loc 1
///  offset 24  tex_coords  [f32; 2]   loc 2
///
/// The byte order is part of the contract with the vertex shader; see
/// [`Vertex::LAYOUT`].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Texture coordinate (UV).
    pub tex_coords: [f32; 2],
}

impl Vertex {
    #[inline]
    pub const fn new(position: [f32; 3], color: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self { position, color, tex_coords }
    }

    /// Attribute table for this vertex type. Built once, shared by every mesh.
    pub const LAYOUT: VertexLayout = VertexLayout {
        stride: size_of::<Vertex>() as u64,
        attributes: &VERTEX_ATTRIBUTES,
    };
}

const VERTEX_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        name: "position",
        location: 0,
        format: AttributeFormat::Float32x3,
        offset: offset_of!(Vertex, position) as u64,
    },
    VertexAttribute {
        name: "color",
        location: 1,
        format: AttributeFormat::Float32x3,
        offset: offset_of!(Vertex, color) as u64,
    },
    VertexAttribute {
        name: "tex_coords",
        location: 2,
        format: AttributeFormat::Float32x2,
        offset: offset_of!(Vertex, tex_coords) as u64,
    },
];

/// Element type of a vertex attribute.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttributeFormat {
    Float32x2,
    Float32x3,
}

impl AttributeFormat {
    /// Number of `f32` components.
    pub const fn components(self) -> u32 {
        match self {
            AttributeFormat::Float32x2 => 2,
            AttributeFormat::Float32x3 => 3,
        }
    }

    /// Size in bytes.
    pub const fn size(self) -> u64 {
        self.components() as u64 * size_of::<f32>() as u64
    }
}

/// A named per-vertex channel and where it lives inside the record.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttribute {
    pub name: &'static str,
    /// Shader input location (`@location(n)`).
    pub location: u32,
    pub format: AttributeFormat,
    /// Byte offset from the start of the record.
    pub offset: u64,
}

/// Binary shape of one vertex record, as described to the device.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexLayout {
    pub stride: u64,
    pub attributes: &'static [VertexAttribute],
}

impl VertexLayout {
    /// Looks up an attribute by shader location.
    pub fn attribute(&self, location: u32) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.location == location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_eight_floats() {
        assert_eq!(size_of::<Vertex>(), 32);
        assert_eq!(Vertex::LAYOUT.stride, 32);
    }

    #[test]
    fn offsets_follow_declaration_order() {
        let layout = Vertex::LAYOUT;
        let position = layout.attribute(0).unwrap();
        let color = layout.attribute(1).unwrap();
        let uv = layout.attribute(2).unwrap();

        assert_eq!(position.offset, 0);
        assert_eq!(color.offset, position.format.size());
        assert_eq!(uv.offset, position.format.size() + color.format.size());
        assert_eq!(uv.offset + uv.format.size(), layout.stride);
    }

    #[test]
    fn locations_and_formats() {
        let names: Vec<_> = Vertex::LAYOUT
            .attributes
            .iter()
            .map(|a| (a.location, a.name, a.format.components()))
            .collect();
        assert_eq!(
            names,
            vec![(0, "position", 3), (1, "color", 3), (2, "tex_coords", 2)]
        );
    }

    #[test]
    fn unknown_location_is_none() {
        assert!(Vertex::LAYOUT.attribute(3).is_none());
    }

    #[test]
    fn pod_bytes_match_field_order() {
        let v = Vertex::new([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0]);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }
}
