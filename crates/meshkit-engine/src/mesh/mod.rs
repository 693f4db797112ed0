//! Meshes: vertex format, CPU geometry, primitive builders and the
//! upload/draw/release lifecycle against a [`MeshDevice`].
//!
//! Data flow: a builder in [`primitives`] produces a [`Geometry`], a [`Mesh`]
//! uploads it once at construction, and `Mesh::draw` is called every frame.

mod device;
mod error;
mod geometry;
pub mod primitives;
mod resource;
mod vertex;

#[cfg(test)]
pub(crate) mod testing;

pub use device::{BufferKind, MeshDevice};
pub use error::MeshError;
pub use geometry::Geometry;
pub use primitives::Shape;
pub use resource::Mesh;
pub use vertex::{AttributeFormat, Vertex, VertexAttribute, VertexLayout};
