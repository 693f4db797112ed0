//! Procedural primitive builders.
//!
//! Every builder is a pure function of its parameters and returns a finished
//! [`Geometry`]. No device is touched here, so all shapes are testable without
//! a GPU. Sizes are not validated: zero or negative values give zero-area (or
//! mirrored) geometry, never a panic.

mod circle;
mod cube;
mod pyramid;
mod quad;
mod shape;
mod triangle;

pub use circle::circle;
pub use cube::cube;
pub use pyramid::pyramid;
pub use quad::quad;
pub use shape::Shape;
pub use triangle::triangle;

pub(crate) const RED: [f32; 3] = [1.0, 0.0, 0.0];
pub(crate) const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
pub(crate) const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
pub(crate) const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
pub(crate) const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];
pub(crate) const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
pub(crate) const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
pub(crate) const GREY: [f32; 3] = [0.5, 0.5, 0.5];
