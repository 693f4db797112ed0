use glam::Vec3;

use meshkit_engine::camera::Camera;
use meshkit_engine::device::GpuInit;
use meshkit_engine::logging::LoggingConfig;
use meshkit_engine::window::RuntimeConfig;

/// Everything the viewer needs at startup.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
    pub logging: LoggingConfig,
    pub camera: Camera,
    pub clear_color: wgpu::Color,
    /// Axis the 3D shapes rotate about, one radian per second.
    pub spin_axis: Vec3,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            gpu: GpuInit::default(),
            logging: LoggingConfig::default(),
            camera: Camera::default(),
            clear_color: wgpu::Color {
                r: 0.1,
                g: 0.1,
                b: 0.1,
                a: 1.0,
            },
            spin_axis: Vec3::new(0.5, 1.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.runtime.title, "Mesh System");
        assert_eq!(cfg.clear_color.r, 0.1);
        assert_eq!(cfg.spin_axis, Vec3::new(0.5, 1.0, 0.0));
        assert_eq!(cfg.camera.eye, Vec3::new(0.0, 0.0, 3.0));
    }
}
