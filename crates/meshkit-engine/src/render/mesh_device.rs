use wgpu::util::DeviceExt;

use crate::mesh::{BufferKind, MeshDevice, MeshError, VertexLayout};

use super::layout::buffer_layout_for;

/// [`MeshDevice`] backed by a wgpu logical device.
///
/// wgpu has no vertex-array objects; the "vertex array" here is the layout
/// record plus the slot the vertex buffer is bound to. Pipelines are built
/// against [`mesh_vertex_layout`](super::mesh_vertex_layout), so only
/// `Vertex::LAYOUT` is accepted.
#[derive(Debug, Clone)]
pub struct WgpuMeshDevice {
    device: wgpu::Device,
}

/// Input layout handed out by [`WgpuMeshDevice`].
#[derive(Debug)]
pub struct WgpuVertexArray {
    label: String,
    slot: u32,
    layout: wgpu::VertexBufferLayout<'static>,
}

impl WgpuVertexArray {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn buffer_layout(&self) -> &wgpu::VertexBufferLayout<'static> {
        &self.layout
    }
}

impl WgpuMeshDevice {
    pub fn new(device: &wgpu::Device) -> Self {
        Self {
            device: device.clone(),
        }
    }
}

impl MeshDevice for WgpuMeshDevice {
    type VertexArray = WgpuVertexArray;
    type Buffer = wgpu::Buffer;
    type Pass<'p> = wgpu::RenderPass<'p>;

    fn create_vertex_array(
        &self,
        label: &str,
        layout: &'static VertexLayout,
    ) -> Result<WgpuVertexArray, MeshError> {
        let buffer_layout = buffer_layout_for(layout)
            .ok_or_else(|| MeshError::allocation(label, "vertex layout does not match the mesh pipeline"))?;

        Ok(WgpuVertexArray {
            label: label.to_string(),
            slot: 0,
            layout: buffer_layout,
        })
    }

    fn create_buffer(
        &self,
        label: &str,
        kind: BufferKind,
        contents: &[u8],
    ) -> Result<wgpu::Buffer, MeshError> {
        let max = self.device.limits().max_buffer_size;
        if contents.len() as u64 > max {
            return Err(MeshError::allocation(
                label,
                format!("{} bytes exceeds device limit of {max}", contents.len()),
            ));
        }

        let usage = match kind {
            BufferKind::Vertex => wgpu::BufferUsages::VERTEX,
            BufferKind::Index => wgpu::BufferUsages::INDEX,
        };

        Ok(self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents,
            usage,
        }))
    }

    fn draw_indexed(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        vertex_array: &WgpuVertexArray,
        vertex_buffer: &wgpu::Buffer,
        index_buffer: &wgpu::Buffer,
        index_count: u32,
    ) {
        // Empty buffer slices are rejected by wgpu.
        if index_count == 0 || vertex_buffer.size() == 0 {
            return;
        }

        pass.set_vertex_buffer(vertex_array.slot, vertex_buffer.slice(..));
        pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..index_count, 0, 0..1);
    }

    fn release_vertex_array(&self, vertex_array: WgpuVertexArray) {
        drop(vertex_array);
    }

    fn release_buffer(&self, buffer: wgpu::Buffer) {
        buffer.destroy();
    }
}
