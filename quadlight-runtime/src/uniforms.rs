use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

/// A block of data that is copied verbatim into a constant buffer.
///
/// Direct3D 11 requires constant buffer sizes to be a multiple of 16 bytes.
pub trait UniformBlock: Pod {
    const SIZE: u32 = std::mem::size_of::<Self>() as u32;

    fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// World, view and projection transforms, bound to the geometry stage.
///
/// Matrices are stored column-major, matching the HLSL default packing.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Matrices {
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl Default for Matrices {
    fn default() -> Self {
        Matrices {
            world: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        }
    }
}

impl UniformBlock for Matrices {}

/// Point light parameters, bound to the pixel stage.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Light {
    pub position: Vec4,
    pub color: Vec4,
    /// Eye position for the specular term.
    pub camera: Vec4,
    pub ambient: f32,
    /// Specular exponent.
    pub specular: f32,
    _padding: [f32; 2],
}

impl Light {
    pub fn new(position: Vec4, color: Vec4, camera: Vec4, ambient: f32, specular: f32) -> Self {
        Light {
            position,
            color,
            camera,
            ambient,
            specular,
            _padding: [0.0; 2],
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Light::new(
            Vec4::new(0.0, 1.0, -3.0, 1.0),
            Vec4::new(1.0, 0.84, 0.0, 1.0),
            Vec4::new(0.0, 0.0, -2.0, 1.0),
            0.2,
            10.0,
        )
    }
}

impl UniformBlock for Light {}

const _: () = assert!(Matrices::SIZE % 16 == 0);
const _: () = assert!(Light::SIZE % 16 == 0);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn block_sizes_match_hlsl() {
        assert_eq!(Matrices::SIZE, 192);
        assert_eq!(Light::SIZE, 64);
        assert_eq!(Light::default().as_bytes().len(), 64);
    }

    #[test]
    fn light_packs_scalars_after_vectors() {
        let light = Light::default();
        let floats: &[f32] = bytemuck::cast_slice(light.as_bytes());
        assert_eq!(&floats[0..4], &[0.0, 1.0, -3.0, 1.0]);
        assert_eq!(&floats[4..8], &[1.0, 0.84, 0.0, 1.0]);
        assert_eq!(floats[12], 0.2);
        assert_eq!(floats[13], 10.0);
        assert_eq!(&floats[14..16], &[0.0, 0.0]);
    }

    #[test]
    fn matrices_are_column_major() {
        let matrices = Matrices {
            world: Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0)),
            ..Default::default()
        };
        let floats: &[f32] = bytemuck::cast_slice(matrices.as_bytes());
        assert_eq!(&floats[12..16], &[1.0, 2.0, 3.0, 1.0]);
    }
}
