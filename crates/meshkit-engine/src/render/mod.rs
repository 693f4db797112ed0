//! GPU rendering subsystem.
//!
//! Owns the wgpu side of meshes: the [`MeshDevice`](crate::mesh::MeshDevice)
//! implementation, the vertex layout translation and the mesh pipeline.
//!
//! Convention:
//! - right-handed world space, +Y up, camera looking down -Z
//! - clip-space depth in `[0, 1]` (wgpu)

mod ctx;
mod layout;
mod mesh_device;
mod pipeline;

pub use ctx::{RenderCtx, RenderTarget};
pub use layout::{buffer_layout_for, mesh_vertex_layout, MESH_VERTEX_ATTRIBUTES};
pub use mesh_device::{WgpuMeshDevice, WgpuVertexArray};
pub use pipeline::{MeshPipeline, TransformUniform};
