use glam::{Mat4, Vec3};

/// Perspective camera looking at a fixed target.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    /// Three units back on +Z, looking at the origin.
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy_degrees: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Camera {
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection with wgpu's `[0, 1]` depth range.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_degrees.to_radians(), aspect, self.znear, self.zfar)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }

    /// Combined model-view-projection matrix for one draw.
    pub fn mvp(&self, aspect: f32, model: Mat4) -> Mat4 {
        self.view_projection(aspect) * model
    }
}

/// Rotation of `seconds` radians about `axis` (normalized here).
///
/// A zero axis yields the identity.
pub fn spin(axis: Vec3, seconds: f32) -> Mat4 {
    match axis.try_normalize() {
        Some(axis) => Mat4::from_axis_angle(axis, seconds),
        None => Mat4::IDENTITY,
    }
}
