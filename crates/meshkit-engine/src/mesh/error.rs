use thiserror::Error;

/// Failure while building or uploading a mesh.
///
/// Topology errors are caught before any device call is made. Allocation errors
/// come from the device and abort construction; nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    #[error("mesh has no vertices")]
    NoVertices,

    #[error("index count {index_count} is not a multiple of 3")]
    PartialTriangle { index_count: usize },

    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("device could not allocate `{label}`: {reason}")]
    Allocation { label: String, reason: String },
}

impl MeshError {
    pub(crate) fn allocation(label: &str, reason: impl Into<String>) -> Self {
        Self::Allocation {
            label: label.to_string(),
            reason: reason.into(),
        }
    }
}
