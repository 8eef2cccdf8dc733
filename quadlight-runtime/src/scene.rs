use crate::animation::{FrameCounter, FrameLimiter, Rotation};
use crate::camera::Camera;
use crate::uniforms::{Light, Matrices};
use glam::Mat4;
use quadlight_common::Size;
use std::time::Instant;

/// The quad, the camera looking at it and the light shining on it.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub light: Light,
    rotation: Rotation,
    limiter: FrameLimiter,
    counter: FrameCounter,
    aspect_ratio: f32,
}

impl Scene {
    pub fn new(size: Size<u32>, now: Instant) -> Self {
        Scene {
            camera: Camera::default(),
            light: Light::default(),
            rotation: Rotation::default(),
            limiter: FrameLimiter::new(now),
            counter: FrameCounter::new(now),
            aspect_ratio: size.aspect_ratio(),
        }
    }

    /// Advance the rotation if a frame interval has passed.
    ///
    /// Returns whether the rotation changed.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(elapsed) = self.limiter.tick(now) else {
            return false;
        };
        self.rotation.advance(elapsed);
        true
    }

    /// Record a presented frame, logging the frame rate once per second.
    pub fn frame_presented(&mut self, now: Instant) {
        if let Some(fps) = self.counter.record(now) {
            log::trace!("{fps:.1} fps, rotation {:.3} rad", self.rotation.angle());
        }
    }

    pub fn rotation(&self) -> f32 {
        self.rotation.angle()
    }

    pub fn matrices(&self) -> Matrices {
        Matrices {
            world: Mat4::from_rotation_y(self.rotation.angle()),
            view: self.camera.view(),
            projection: self.camera.projection(self.aspect_ratio),
        }
    }

    pub fn light(&self) -> Light {
        let mut light = self.light;
        light.camera = self.camera.position();
        light
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::animation::FRAME_INTERVAL;
    use std::time::Duration;

    #[test]
    fn starts_unrotated() {
        let scene = Scene::new(Size::new(640, 480), Instant::now());
        let matrices = scene.matrices();
        assert_eq!(matrices.world, Mat4::IDENTITY);
        assert_eq!(matrices.view, Camera::default().view());
        assert_eq!(matrices.projection, Camera::default().projection(4.0 / 3.0));
    }

    #[test]
    fn update_is_throttled() {
        let start = Instant::now();
        let mut scene = Scene::new(Size::new(640, 480), start);

        assert!(!scene.update(start + Duration::from_millis(5)));
        assert_eq!(scene.rotation(), 0.0);

        assert!(scene.update(start + FRAME_INTERVAL));
        assert!(scene.rotation() > 0.0);
        assert_ne!(scene.matrices().world, Mat4::IDENTITY);
    }

    #[test]
    fn light_follows_camera() {
        let mut scene = Scene::new(Size::new(640, 480), Instant::now());
        scene.camera.eye = glam::Vec3::new(1.0, 2.0, -4.0);
        let light = scene.light();
        assert_eq!(light.camera, glam::Vec4::new(1.0, 2.0, -4.0, 1.0));
        assert_eq!(light.position, Light::default().position);
    }
}
