use glam::Mat4;

use meshkit_engine::camera::spin;
use meshkit_engine::core::{App, AppControl, FrameCtx};
use meshkit_engine::input::Key;
use meshkit_engine::mesh::MeshError;
use meshkit_engine::render::{MeshPipeline, RenderCtx, RenderTarget, WgpuMeshDevice};

use crate::config::ViewerConfig;
use crate::showcase::{selected_slot, ShapeSlot, Showcase};

/// GPU-side state, created on the first frame once a device exists.
struct Scene {
    pipeline: MeshPipeline,
    showcase: Showcase<WgpuMeshDevice>,
}

impl Scene {
    fn new(rctx: &RenderCtx<'_>) -> Result<Self, MeshError> {
        let device = WgpuMeshDevice::new(rctx.device);
        let showcase = Showcase::build(&device)?;
        let pipeline = MeshPipeline::new(rctx);

        Ok(Self { pipeline, showcase })
    }

    fn draw(
        &self,
        rctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        slot: ShapeSlot,
        config: &ViewerConfig,
        elapsed: f32,
    ) {
        let model = if slot.spins() {
            spin(config.spin_axis, elapsed)
        } else {
            Mat4::IDENTITY
        };

        self.pipeline
            .set_transform(rctx.queue, config.camera.mvp(rctx.aspect(), model));

        let mut pass = target.begin_pass("meshkit mesh");
        self.pipeline.bind(&mut pass);
        self.showcase.mesh(slot).draw(&mut pass);
    }
}

pub struct ViewerApp {
    config: ViewerConfig,
    current: ShapeSlot,
    scene: Option<Scene>,
}

impl ViewerApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            current: ShapeSlot::Triangle,
            scene: None,
        }
    }
}

impl App for ViewerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.key_pressed(Key::Escape) {
            return AppControl::Exit;
        }

        if let Some(slot) = selected_slot(&ctx.input_frame.events) {
            if slot != self.current {
                log::info!("showing {}", slot.shape().name());
                self.current = slot;
            }
        }

        let elapsed = ctx.time.elapsed;
        let slot = self.current;
        let (config, scene) = (&self.config, &mut self.scene);
        let mut failure = None;

        let control = ctx.render(config.clear_color, |rctx, target| {
            if scene.is_none() {
                match Scene::new(rctx) {
                    Ok(s) => *scene = Some(s),
                    Err(e) => {
                        failure = Some(e);
                        return;
                    }
                }
            }

            if let Some(scene) = scene.as_ref() {
                scene.draw(rctx, target, slot, config, elapsed);
            }
        });

        if let Some(err) = failure {
            log::error!("failed to build meshes: {err}");
            return AppControl::Exit;
        }

        control
    }
}
