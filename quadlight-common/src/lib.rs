//! Types shared by every quadlight crate.
#[cfg(all(windows, feature = "d3d11"))]
pub mod d3d11;

pub mod image;

use num_traits::AsPrimitive;

/// Pixel formats the demo creates render targets and textures with.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    R8G8B8A8Unorm,
    /// 24 bit depth with an 8 bit stencil.
    D24UnormS8Uint,
}

/// Texture filtering of the quad's sampler.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
pub enum FilterMode {
    #[default]
    Linear,
    Nearest,
}

/// Texture addressing outside of `[0, 1]`.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
pub enum WrapMode {
    ClampToBorder,
    ClampToEdge,
    #[default]
    Repeat,
    MirroredRepeat,
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl<T> Size<T>
where
    T: Copy + AsPrimitive<f32>,
{
    /// Width over height. Zero-height sizes yield an aspect ratio of 1.
    pub fn aspect_ratio(&self) -> f32 {
        let height = self.height.as_();
        if height == 0.0 {
            return 1.0;
        }
        self.width.as_() / height
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn aspect_ratio_of_default_window() {
        let size = Size::new(640u32, 480u32);
        assert!((size.aspect_ratio() - 4.0 / 3.0).abs() < f32::EPSILON);
        assert_eq!(Size::new(10u32, 0u32).aspect_ratio(), 1.0);
    }
}
