use crate::Size;
use std::path::Path;

pub use image::ImageError;

/// A tightly packed RGBA8 image in system memory.
#[derive(Debug, Clone)]
pub struct Image {
    pub bytes: Vec<u8>,
    pub size: Size<u32>,
    /// Bytes per row.
    pub pitch: usize,
}

impl Image {
    /// Load the image from the path as RGBA8, with the first row at the top.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let image = image::open(path.as_ref())?.to_rgba8();
        let size = Size::new(image.width(), image.height());

        Ok(Image {
            bytes: image.into_raw(),
            pitch: size.width as usize * 4,
            size,
        })
    }

    /// Generate a two-colour checkerboard with square cells of `cell` texels.
    pub fn checkerboard(size: Size<u32>, cell: u32, even: [u8; 4], odd: [u8; 4]) -> Self {
        let cell = cell.max(1);
        let mut bytes = Vec::with_capacity(size.width as usize * size.height as usize * 4);
        for y in 0..size.height {
            for x in 0..size.width {
                let texel = if ((x / cell) + (y / cell)) % 2 == 0 {
                    even
                } else {
                    odd
                };
                bytes.extend_from_slice(&texel);
            }
        }

        Image {
            bytes,
            pitch: size.width as usize * 4,
            size,
        }
    }

    /// The texel at `(x, y)`, if it is in bounds.
    pub fn texel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let offset = y as usize * self.pitch + x as usize * 4;
        let mut texel = [0u8; 4];
        texel.copy_from_slice(&self.bytes[offset..offset + 4]);
        Some(texel)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    #[test]
    fn checkerboard_alternates_cells() {
        let image = Image::checkerboard(Size::new(8, 8), 2, WHITE, BLUE);
        assert_eq!(image.bytes.len(), 8 * 8 * 4);
        assert_eq!(image.pitch, 32);
        assert_eq!(image.texel(0, 0), Some(WHITE));
        assert_eq!(image.texel(1, 1), Some(WHITE));
        assert_eq!(image.texel(2, 0), Some(BLUE));
        assert_eq!(image.texel(0, 2), Some(BLUE));
        assert_eq!(image.texel(2, 2), Some(WHITE));
        assert_eq!(image.texel(8, 0), None);
    }

    #[test]
    fn zero_cell_is_clamped() {
        let image = Image::checkerboard(Size::new(2, 1), 0, WHITE, BLUE);
        assert_eq!(image.texel(0, 0), Some(WHITE));
        assert_eq!(image.texel(1, 0), Some(BLUE));
    }

    #[test]
    fn load_keeps_first_row_at_top() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.png");
        image::RgbaImage::from_fn(3, 2, |_, y| image::Rgba(if y == 0 { WHITE } else { BLUE }))
            .save(&path)
            .unwrap();

        let image = Image::load(&path).unwrap();
        assert_eq!(image.size, Size::new(3, 2));
        assert_eq!(image.pitch, 12);
        assert_eq!(image.texel(2, 0), Some(WHITE));
        assert_eq!(image.texel(0, 1), Some(BLUE));
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(Image::load("does/not/exist.png").is_err());
    }
}
