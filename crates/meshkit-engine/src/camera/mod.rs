//! View/projection math for the mesh pipeline.
//!
//! The mesh shader consumes one combined matrix per draw:
//! `projection * view * model`.

mod perspective;

pub use perspective::{spin, Camera};
