use anyhow::Result;
use winit::dpi::LogicalSize;

use whirl_engine::core::{App, AppControl, FrameCtx};
use whirl_engine::device::GpuInit;
use whirl_engine::logging::{LoggingConfig, init_logging};
use whirl_engine::math::Mat4;
use whirl_engine::render::MeshRenderer;
use whirl_engine::window::{Runtime, RuntimeConfig};

mod scene;
mod spin;

use scene::{TETRA_INDICES, TETRA_VERTICES};
use spin::Spin;

const WINDOW_TITLE: &str = "Spinning 3D Triangle";
const WINDOW_WIDTH: f64 = 800.0;
const WINDOW_HEIGHT: f64 = 600.0;

/// The application: one tetrahedron, three ever-growing angles.
struct SpinApp {
    mesh: MeshRenderer,
    spin: Spin,
}

impl SpinApp {
    fn new() -> Self {
        Self {
            mesh: MeshRenderer::new(&TETRA_VERTICES, &TETRA_INDICES),
            spin: Spin::default(),
        }
    }
}

impl App for SpinApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.spin.advance();
        let transform = Mat4::rotation(self.spin.x, self.spin.y, self.spin.z);

        ctx.render(wgpu::Color::BLACK, |rctx, target| {
            self.mesh.render(rctx, target, &transform);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("opening \"{WINDOW_TITLE}\" at {WINDOW_WIDTH}x{WINDOW_HEIGHT}");

    let config = RuntimeConfig {
        title: WINDOW_TITLE.to_string(),
        initial_size: LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        resizable: false,
        centered: true,
    };

    Runtime::run(config, GpuInit::default(), SpinApp::new())
}
