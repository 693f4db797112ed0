use super::error::MeshError;
use super::vertex::Vertex;

/// CPU-side surface description: vertex records plus triangle-list indices.
///
/// Invariants (checked by [`Geometry::new`], guaranteed by the builders):
/// - at least one vertex
/// - index count is a multiple of 3
/// - every index is `< vertex_count`
///
/// There is no mutation API; a `Geometry` is final once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Geometry {
    /// Validates and wraps explicit vertex/index sequences.
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Result<Self, MeshError> {
        validate(&vertices, &indices)?;
        Ok(Self { vertices, indices })
    }

    /// Wraps builder output whose topology is correct by construction.
    pub(crate) fn from_parts(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        debug_assert!(
            validate(&vertices, &indices).is_ok(),
            "builder produced invalid topology: {:?}",
            validate(&vertices, &indices)
        );
        Self { vertices, indices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates the index list one triangle at a time.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Vertex records as raw bytes, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Indices as raw bytes (`u32`, native endian), ready for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

fn validate(vertices: &[Vertex], indices: &[u32]) -> Result<(), MeshError> {
    if vertices.is_empty() {
        return Err(MeshError::NoVertices);
    }
    if indices.len() % 3 != 0 {
        return Err(MeshError::PartialTriangle {
            index_count: indices.len(),
        });
    }
    let vertex_count = vertices.len();
    if let Some((position, &index)) = indices
        .iter()
        .enumerate()
        .find(|&(_, &i)| i as usize >= vertex_count)
    {
        return Err(MeshError::IndexOutOfRange {
            position,
            index,
            vertex_count,
        });
    }
    Ok(())
}
