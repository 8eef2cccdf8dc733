//! Direct3D 11 renderer for the quadlight demo.
//!
//! [`D3DHandler`] owns the device, swap chain, output views and the pipeline
//! that draws the quad. [`run`] opens a window and renders until it is closed.
#![cfg(windows)]

mod demo;
pub mod error;
mod handler;
mod pipeline;
mod quad_render;
mod samplers;
mod texture;
mod uniforms;
mod util;
pub mod window;

pub use demo::QuadDemo;
pub use handler::D3DHandler;

use quadlight_runtime::options::DemoOptions;

/// Run the demo with `options` until its window is closed.
///
/// Invalid options are rejected by [`D3DHandler::setup_direct3d`] before any
/// Direct3D object is created.
pub fn run(options: DemoOptions) -> error::Result<()> {
    window::run_sample(QuadDemo::new(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadlight_runtime::options::OptionsError;
    use quadlight_runtime::scene::Scene;
    use std::time::Instant;
    use windows::Win32::Foundation::HWND;

    #[test]
    fn invalid_options_are_rejected_before_setup() {
        let options = DemoOptions {
            size: quadlight_common::Size::new(0, 480),
            ..Default::default()
        };
        let Err(error) = D3DHandler::setup_direct3d(HWND::default(), &options) else {
            panic!("setup accepted an empty window");
        };
        assert!(matches!(
            error,
            error::D3D11Error::OptionsError(OptionsError::EmptyWindow(0, 480))
        ));
    }

    #[test]
    fn window_class_registers_once() {
        let size = quadlight_common::Size::new(64, 64);
        window::create_window("quadlight test", size).unwrap();
        window::create_window("quadlight test", size).unwrap();
    }

    #[test]
    #[ignore = "requires a Direct3D 11 adapter"]
    fn draws_once_per_frame() {
        let options = DemoOptions {
            sample_count: 1,
            debug_layer: false,
            ..Default::default()
        };
        let hwnd = window::create_window("quadlight test", options.size).unwrap();
        let mut handler = D3DHandler::setup_direct3d(hwnd, &options).unwrap();

        let viewport = handler.viewport();
        assert_eq!(viewport.Width, 640.0);
        assert_eq!(viewport.Height, 480.0);

        let start = Instant::now();
        let mut scene = Scene::new(options.size, start);
        for _ in 0..3 {
            scene.update(Instant::now());
            handler.render(&scene).unwrap();
            handler.present_back_buffer(false).unwrap();
        }
        assert_eq!(handler.draw_calls(), 3);
        handler.release();
    }

    #[test]
    #[ignore = "requires a Direct3D 11 adapter"]
    fn shader_errors_name_the_entry_point() {
        let dir = tempfile::tempdir().unwrap();
        for stage in quadlight_preprocess::ShaderStage::ALL {
            std::fs::write(dir.path().join(stage.file_name()), "this is not hlsl").unwrap();
        }
        let options = DemoOptions {
            sample_count: 1,
            shader_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let hwnd = window::create_window("quadlight test", options.size).unwrap();
        let Err(error) = D3DHandler::setup_direct3d(hwnd, &options) else {
            panic!("invalid shaders compiled");
        };
        assert!(matches!(
            error,
            error::D3D11Error::ShaderCompileError { entry, .. } if entry == "VS_main"
        ));
    }
}
