//! Windowed harness for the triangle shader.
//!
//! Opens one window, clears it red every frame and draws the
//! attribute-passthrough triangle on top. The vertex stage currently emits
//! a zero clip-space `w`, so expect a solid red window plus a warning per
//! vertex in the log until the shader is fixed.

use anyhow::Result;
use winit::dpi::LogicalSize;

use citrine_engine::core::{App, AppControl, FrameCtx};
use citrine_engine::device::GpuInit;
use citrine_engine::logging::{LoggingConfig, init_logging};
use citrine_engine::render::TriangleRenderer;
use citrine_engine::window::{Runtime, RuntimeConfig};

struct ViewerApp {
    triangle: TriangleRenderer,
}

impl App for ViewerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let triangle = &mut self.triangle;

        ctx.render(wgpu::Color::RED, |rctx, target| {
            triangle.render(rctx, target);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("citrine viewer starting");

    let config = RuntimeConfig {
        title: "citrine".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
    };

    Runtime::run(config, GpuInit::default(), ViewerApp {
        triangle: TriangleRenderer::default(),
    })
}
