use glam::{Mat4, Vec3, Vec4};
use std::f32::consts::PI;

/// A left-handed perspective camera.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            eye: Vec3::new(0.0, 0.0, -2.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: PI * 0.45,
            near: 0.1,
            far: 20.0,
        }
    }
}

impl Camera {
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_lh(self.eye, self.target, self.up)
    }

    /// Projection onto Direct3D's `[0, 1]` depth range.
    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_lh(self.fov_y, aspect_ratio, self.near, self.far)
    }

    pub fn position(&self) -> Vec4 {
        self.eye.extend(1.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn to_ndc(camera: &Camera, point: Vec3) -> Vec3 {
        let clip = camera.projection(4.0 / 3.0) * camera.view() * point.extend(1.0);
        assert!(clip.w > 0.0, "{point} is behind the camera");
        clip.truncate() / clip.w
    }

    #[test]
    fn origin_is_centred_and_in_depth_range() {
        let ndc = to_ndc(&Camera::default(), Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn quad_fits_on_screen() {
        let camera = Camera::default();
        for corner in [
            Vec3::new(-0.5, 0.5, 0.0),
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(-0.5, -0.5, 0.0),
        ] {
            let ndc = to_ndc(&camera, corner);
            assert!(ndc.x.abs() < 1.0 && ndc.y.abs() < 1.0, "{corner} -> {ndc}");
            // +x stays to the right in a left-handed view
            assert_eq!(ndc.x.signum(), corner.x.signum());
            assert_eq!(ndc.y.signum(), corner.y.signum());
        }
    }

    #[test]
    fn nearer_points_have_smaller_depth() {
        let camera = Camera::default();
        let near = to_ndc(&camera, Vec3::new(0.0, 0.0, -1.0));
        let far = to_ndc(&camera, Vec3::new(0.0, 0.0, 1.0));
        assert!(near.z < far.z);
    }
}
