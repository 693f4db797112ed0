use super::device::{BufferKind, MeshDevice};
use super::error::MeshError;
use super::geometry::Geometry;
use super::primitives::{self, Shape};
use super::vertex::Vertex;

struct GpuResources<D: MeshDevice> {
    vertex_array: D::VertexArray,
    vertex_buffer: D::Buffer,
    index_buffer: D::Buffer,
}

/// Renderable surface: immutable geometry plus the device resources holding it.
///
/// Construction uploads vertices and indices once, synchronously. [`Mesh::draw`]
/// only references what was uploaded. Dropping the mesh releases the vertex
/// array and both buffers exactly once.
///
/// The device must be current on the calling thread for every operation,
/// including drop.
pub struct Mesh<D: MeshDevice> {
    device: D,
    label: String,
    geometry: Geometry,
    index_count: u32,
    resources: Option<GpuResources<D>>,
}

impl<D: MeshDevice> Mesh<D> {
    /// Validates explicit vertex/index sequences and uploads them.
    pub fn new(device: &D, vertices: Vec<Vertex>, indices: Vec<u32>) -> Result<Self, MeshError> {
        let geometry = Geometry::new(vertices, indices)?;
        Self::from_geometry(device, "mesh", geometry)
    }

    /// Uploads already validated geometry.
    pub fn from_geometry(device: &D, label: &str, geometry: Geometry) -> Result<Self, MeshError> {
        let index_count = u32::try_from(geometry.index_count()).map_err(|_| {
            MeshError::allocation(label, format!("{} indices exceed u32", geometry.index_count()))
        })?;

        let resources = upload(device, label, &geometry)?;

        log::debug!(
            "mesh `{label}` uploaded: {} vertices, {} indices",
            geometry.vertex_count(),
            index_count
        );

        Ok(Self {
            device: device.clone(),
            label: label.to_string(),
            geometry,
            index_count,
            resources: Some(resources),
        })
    }

    pub fn from_shape(device: &D, shape: &Shape) -> Result<Self, MeshError> {
        Self::from_geometry(device, shape.name(), shape.geometry())
    }

    pub fn triangle(device: &D) -> Result<Self, MeshError> {
        Self::from_geometry(device, "triangle", primitives::triangle())
    }

    pub fn quad(device: &D, width: f32, height: f32) -> Result<Self, MeshError> {
        Self::from_geometry(device, "quad", primitives::quad(width, height))
    }

    pub fn circle(device: &D, radius: f32, segments: u32) -> Result<Self, MeshError> {
        Self::from_geometry(device, "circle", primitives::circle(radius, segments))
    }

    pub fn cube(device: &D, size: f32) -> Result<Self, MeshError> {
        Self::from_geometry(device, "cube", primitives::cube(size))
    }

    pub fn pyramid(device: &D, base: f32, height: f32) -> Result<Self, MeshError> {
        Self::from_geometry(device, "pyramid", primitives::pyramid(base, height))
    }

    /// Issues one indexed triangle-list draw into `pass`.
    ///
    /// A mesh without indices records nothing.
    pub fn draw(&self, pass: &mut D::Pass<'_>) {
        if self.index_count == 0 {
            return;
        }
        let Some(res) = self.resources.as_ref() else {
            return;
        };
        self.device.draw_indexed(
            pass,
            &res.vertex_array,
            &res.vertex_buffer,
            &res.index_buffer,
            self.index_count,
        );
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.geometry.vertex_count()
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

impl<D: MeshDevice> Drop for Mesh<D> {
    fn drop(&mut self) {
        if let Some(res) = self.resources.take() {
            self.device.release_buffer(res.index_buffer);
            self.device.release_buffer(res.vertex_buffer);
            self.device.release_vertex_array(res.vertex_array);
            log::trace!("mesh `{}` released", self.label);
        }
    }
}

impl<D: MeshDevice> std::fmt::Debug for Mesh<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mesh")
            .field("label", &self.label)
            .field("vertices", &self.geometry.vertex_count())
            .field("indices", &self.index_count)
            .finish_non_exhaustive()
    }
}

/// Acquires the three resources in order. On failure, whatever was already
/// acquired is released before the error is returned.
fn upload<D: MeshDevice>(
    device: &D,
    label: &str,
    geometry: &Geometry,
) -> Result<GpuResources<D>, MeshError> {
    let vertex_array = device.create_vertex_array(&format!("{label} layout"), &Vertex::LAYOUT)?;

    let vertex_buffer = match device.create_buffer(
        &format!("{label} vbo"),
        BufferKind::Vertex,
        geometry.vertex_bytes(),
    ) {
        Ok(b) => b,
        Err(e) => {
            device.release_vertex_array(vertex_array);
            return Err(e);
        }
    };

    let index_buffer = match device.create_buffer(
        &format!("{label} ibo"),
        BufferKind::Index,
        geometry.index_bytes(),
    ) {
        Ok(b) => b,
        Err(e) => {
            device.release_buffer(vertex_buffer);
            device.release_vertex_array(vertex_array);
            return Err(e);
        }
    };

    Ok(GpuResources {
        vertex_array,
        vertex_buffer,
        index_buffer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::testing::{Op, RecordingDevice};

    fn v(x: f32, y: f32) -> Vertex {
        Vertex::new([x, y, 0.0], [1.0, 1.0, 1.0], [0.0, 0.0])
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn construction_allocates_three_resources_in_order() {
        let dev = RecordingDevice::new();
        let mesh = Mesh::triangle(&dev).unwrap();

        assert_eq!(
            dev.ops(),
            vec![
                Op::CreateVertexArray { id: 1, stride: 32, attributes: 3 },
                Op::CreateBuffer { id: 2, kind: BufferKind::Vertex, bytes: 3 * 32 },
                Op::CreateBuffer { id: 3, kind: BufferKind::Index, bytes: 3 * 4 },
            ]
        );
        assert_eq!(dev.live(), 3);
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn uploaded_bytes_match_geometry() {
        let dev = RecordingDevice::new();
        let mesh = Mesh::cube(&dev, 2.0).unwrap();
        assert_eq!(dev.uploaded(BufferKind::Vertex), vec![mesh.geometry().vertex_bytes().to_vec()]);
        assert_eq!(dev.uploaded(BufferKind::Index), vec![mesh.geometry().index_bytes().to_vec()]);
    }

    #[test]
    fn labels_name_the_shape() {
        let dev = RecordingDevice::new();
        let mesh = Mesh::from_shape(&dev, &Shape::pyramid()).unwrap();
        assert_eq!(mesh.label(), "pyramid");
        assert_eq!(dev.labels(), vec!["pyramid layout", "pyramid vbo", "pyramid ibo"]);
    }

    #[test]
    fn explicit_sequences_are_validated_before_any_device_call() {
        let dev = RecordingDevice::new();
        let err = Mesh::new(&dev, vec![v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0)], vec![0, 1, 3])
            .unwrap_err();
        assert!(matches!(err, MeshError::IndexOutOfRange { index: 3, .. }));
        assert!(dev.ops().is_empty());
    }

    #[test]
    fn explicit_sequences_upload_when_valid() {
        let dev = RecordingDevice::new();
        let mesh = Mesh::new(&dev, vec![v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0)], vec![0, 1, 2]).unwrap();
        assert_eq!(mesh.label(), "mesh");
        assert_eq!(dev.live(), 3);
    }

    #[test]
    fn same_parameters_same_data_different_handles() {
        let dev = RecordingDevice::new();
        let a = Mesh::circle(&dev, 1.0, 12).unwrap();
        let b = Mesh::circle(&dev, 1.0, 12).unwrap();
        assert_eq!(a.geometry(), b.geometry());
        assert_eq!(dev.live(), 6);
        let ids: std::collections::HashSet<_> = dev.ops().iter().filter_map(Op::created_id).collect();
        assert_eq!(ids.len(), 6);
    }

    // ── failure cleanup ───────────────────────────────────────────────────

    #[test]
    fn failure_on_each_allocation_leaks_nothing() {
        for fail_at in 1..=3 {
            let dev = RecordingDevice::failing_at(fail_at);
            let err = Mesh::quad(&dev, 1.0, 1.0).unwrap_err();
            assert!(matches!(err, MeshError::Allocation { .. }), "fail_at {fail_at}");
            assert_eq!(dev.live(), 0, "fail_at {fail_at}");
            assert_eq!(dev.created(), fail_at - 1);
            assert_eq!(dev.released(), fail_at - 1);
        }
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn draw_references_uploaded_resources_without_reupload() {
        let dev = RecordingDevice::new();
        let mesh = Mesh::circle(&dev, 1.0, 5).unwrap();
        let mut pass = Vec::new();

        for _ in 0..3 {
            mesh.draw(&mut pass);
        }

        assert_eq!(dev.created(), 3);
        assert_eq!(
            pass,
            vec![
                Op::Draw { vertex_array: 1, vertex_buffer: 2, index_buffer: 3, index_count: 15 };
                3
            ]
        );
    }

    #[test]
    fn mesh_without_indices_uploads_but_never_draws() {
        let dev = RecordingDevice::new();
        let mesh = Mesh::new(&dev, vec![v(0.0, 0.0)], vec![]).unwrap();
        assert_eq!(mesh.index_count(), 0);
        assert_eq!(dev.live(), 3);

        let mut pass = Vec::new();
        mesh.draw(&mut pass);
        assert!(pass.is_empty());
    }

    #[test]
    fn single_segment_circle_draws_its_degenerate_fan() {
        let dev = RecordingDevice::new();
        let empty = Mesh::circle(&dev, 1.0, 0).unwrap();
        let sliver = Mesh::circle(&dev, 1.0, 1).unwrap();
        let mut pass = Vec::new();

        empty.draw(&mut pass);
        sliver.draw(&mut pass);

        assert_eq!(
            pass,
            vec![Op::Draw { vertex_array: 4, vertex_buffer: 5, index_buffer: 6, index_count: 3 }]
        );
    }

    // ── release ───────────────────────────────────────────────────────────

    #[test]
    fn drop_releases_each_resource_exactly_once() {
        let dev = RecordingDevice::new();
        {
            let _tri = Mesh::triangle(&dev).unwrap();
            let _cube = Mesh::cube(&dev, 1.0).unwrap();
            assert_eq!(dev.live(), 6);
        }
        assert_eq!(dev.live(), 0);
        assert_eq!(dev.created(), 6);
        assert_eq!(dev.released(), 6);
        assert!(dev.double_releases().is_empty());
    }

    #[test]
    fn drop_on_early_return_path_still_releases() {
        fn build_then_bail(dev: &RecordingDevice) -> Result<(), MeshError> {
            let _quad = Mesh::quad(dev, 1.0, 1.0)?;
            Mesh::new(dev, vec![], vec![])?;
            Ok(())
        }

        let dev = RecordingDevice::new();
        assert_eq!(build_then_bail(&dev), Err(MeshError::NoVertices));
        assert_eq!(dev.live(), 0);
        assert_eq!(dev.released(), 3);
    }

    #[test]
    fn debug_output_is_compact() {
        let dev = RecordingDevice::new();
        let mesh = Mesh::pyramid(&dev, 1.0, 1.0).unwrap();
        let s = format!("{mesh:?}");
        assert!(s.contains("pyramid") && s.contains("vertices: 5") && s.contains("indices: 18"));
    }
}
