use quadlight_common::image::{Image, ImageError};
use quadlight_common::{FilterMode, Size, WrapMode};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_TITLE: &str = "quadlight";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptionsError {
    #[error("window size {0}x{1} is empty")]
    EmptyWindow(u32, u32),
    #[error("{0} is not a supported sample count")]
    UnsupportedSampleCount(u32),
}

/// Where the quad's texture comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TextureSource {
    /// A generated checkerboard.
    #[default]
    Checkerboard,
    File(PathBuf),
}

const CHECKERBOARD_SIZE: u32 = 256;
const CHECKERBOARD_CELL: u32 = 32;

impl TextureSource {
    pub fn load(&self) -> Result<Image, ImageError> {
        match self {
            TextureSource::Checkerboard => Ok(Image::checkerboard(
                Size::new(CHECKERBOARD_SIZE, CHECKERBOARD_SIZE),
                CHECKERBOARD_CELL,
                [240, 240, 240, 255],
                [32, 64, 160, 255],
            )),
            TextureSource::File(path) => Image::load(path),
        }
    }
}

/// Everything the demo can be configured with.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub title: String,
    /// Client area of the window, and the size of the back buffer.
    pub size: Size<u32>,
    /// Multisample count shared by the back buffer and the depth buffer.
    pub sample_count: u32,
    /// Wait for vertical blank when presenting.
    pub vsync: bool,
    pub texture: TextureSource,
    pub filter: FilterMode,
    pub wrap_mode: WrapMode,
    /// Load shaders from this directory instead of the built-in sources.
    pub shader_dir: Option<PathBuf>,
    pub clear_color: [f32; 4],
    /// Create the device with the Direct3D debug layer. On by default in debug builds.
    pub debug_layer: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        DemoOptions {
            title: DEFAULT_TITLE.to_string(),
            size: Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            sample_count: 4,
            vsync: false,
            texture: TextureSource::default(),
            filter: FilterMode::Linear,
            wrap_mode: WrapMode::Repeat,
            shader_dir: None,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            debug_layer: cfg!(debug_assertions),
        }
    }
}

impl DemoOptions {
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(OptionsError::EmptyWindow(self.size.width, self.size.height));
        }
        if !matches!(self.sample_count, 1 | 2 | 4 | 8) {
            return Err(OptionsError::UnsupportedSampleCount(self.sample_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = DemoOptions::default();
        assert_eq!(options.size, Size::new(640, 480));
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_window() {
        let options = DemoOptions {
            size: Size::new(0, 480),
            ..Default::default()
        };
        assert_eq!(options.validate(), Err(OptionsError::EmptyWindow(0, 480)));
    }

    #[test]
    fn rejects_odd_sample_counts() {
        for count in [0, 3, 16] {
            let options = DemoOptions {
                sample_count: count,
                ..Default::default()
            };
            assert_eq!(
                options.validate(),
                Err(OptionsError::UnsupportedSampleCount(count))
            );
        }
    }

    #[test]
    fn checkerboard_texture() {
        let image = TextureSource::Checkerboard.load().unwrap();
        assert_eq!(image.size, Size::new(256, 256));
        assert_ne!(image.texel(0, 0), image.texel(32, 0));
    }
}
