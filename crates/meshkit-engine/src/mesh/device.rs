use super::error::MeshError;
use super::vertex::VertexLayout;

/// Which binding point a buffer is uploaded for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BufferKind {
    Vertex,
    Index,
}

/// Device-side operations a [`Mesh`](super::Mesh) needs.
///
/// Implementations hand out owned resource handles. The mesh gives each one
/// back through the matching `release_*` call exactly once. All calls happen on
/// the thread that owns the device; handles are not shared between meshes.
///
/// Binding state is scoped: construction never leaves anything bound, and
/// `draw_indexed` binds what it needs inside `pass` only.
pub trait MeshDevice: Clone {
    /// Vertex-array / input-layout object.
    type VertexArray;
    /// Static GPU buffer.
    type Buffer;
    /// Recording context a draw is issued into.
    type Pass<'p>;

    /// Allocates the layout object describing `layout` to the input pipeline.
    fn create_vertex_array(
        &self,
        label: &str,
        layout: &'static VertexLayout,
    ) -> Result<Self::VertexArray, MeshError>;

    /// Allocates a buffer and uploads `contents` once, as static data.
    fn create_buffer(
        &self,
        label: &str,
        kind: BufferKind,
        contents: &[u8],
    ) -> Result<Self::Buffer, MeshError>;

    /// Draws `index_count` indices as a triangle list.
    fn draw_indexed(
        &self,
        pass: &mut Self::Pass<'_>,
        vertex_array: &Self::VertexArray,
        vertex_buffer: &Self::Buffer,
        index_buffer: &Self::Buffer,
        index_count: u32,
    );

    fn release_vertex_array(&self, vertex_array: Self::VertexArray);

    fn release_buffer(&self, buffer: Self::Buffer);
}
