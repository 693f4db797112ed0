//! Meshkit engine crate.
//!
//! Parametric primitive meshes (triangle, quad, circle, cube, pyramid) and the
//! platform + GPU runtime pieces needed to upload and draw them.

pub mod mesh;

pub mod camera;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
