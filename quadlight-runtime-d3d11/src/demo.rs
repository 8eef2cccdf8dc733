use crate::error::Result;
use crate::handler::D3DHandler;
use crate::window::Sample;
use quadlight_common::Size;
use quadlight_runtime::options::DemoOptions;
use quadlight_runtime::scene::Scene;
use std::time::Instant;
use windows::Win32::Foundation::HWND;

/// The rotating lit quad.
pub struct QuadDemo {
    options: DemoOptions,
    scene: Scene,
    handler: Option<D3DHandler>,
}

impl QuadDemo {
    pub fn new(options: DemoOptions) -> Self {
        QuadDemo {
            scene: Scene::new(options.size, Instant::now()),
            options,
            handler: None,
        }
    }
}

impl Sample for QuadDemo {
    fn bind_to_window(&mut self, hwnd: HWND) -> Result<()> {
        self.handler = Some(D3DHandler::setup_direct3d(hwnd, &self.options)?);
        Ok(())
    }

    fn update(&mut self) {
        self.scene.update(Instant::now());
    }

    fn render(&mut self) -> Result<()> {
        let Some(handler) = &mut self.handler else {
            return Ok(());
        };
        handler.render(&self.scene)?;
        handler.present_back_buffer(self.options.vsync)?;
        self.scene.frame_presented(Instant::now());
        Ok(())
    }

    fn shutdown(&mut self) {
        if let Some(handler) = self.handler.take() {
            handler.release();
        }
    }

    fn title(&self) -> &str {
        &self.options.title
    }

    fn window_size(&self) -> Size<u32> {
        self.options.size
    }
}
