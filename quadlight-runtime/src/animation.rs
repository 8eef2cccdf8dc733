use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// One frame at 60 frames per second.
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

/// Wall-clock frame throttle.
///
/// A tick only fires once at least the interval has elapsed since the last
/// tick that fired, and reports the time elapsed since then.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    last: Instant,
    interval: Duration,
}

impl FrameLimiter {
    pub fn new(start: Instant) -> Self {
        Self::with_interval(start, FRAME_INTERVAL)
    }

    pub fn with_interval(start: Instant, interval: Duration) -> Self {
        FrameLimiter {
            last: start,
            interval,
        }
    }

    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(self.last);
        if elapsed < self.interval {
            return None;
        }
        self.last = now;
        Some(elapsed)
    }
}

/// Rotation about the y axis, kept in `[0, 2pi)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    angle: f32,
    /// Radians per second.
    speed: f32,
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::new(1.0)
    }
}

impl Rotation {
    pub fn new(speed: f32) -> Self {
        Rotation { angle: 0.0, speed }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.angle = (self.angle + self.speed * elapsed.as_secs_f32()).rem_euclid(TAU);
    }
}

/// Counts presented frames and reports the rate once per second.
#[derive(Debug, Clone)]
pub struct FrameCounter {
    frames: u32,
    since: Instant,
}

impl FrameCounter {
    pub fn new(start: Instant) -> Self {
        FrameCounter {
            frames: 0,
            since: start,
        }
    }

    pub fn record(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.since);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.since = now;
        Some(fps)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn limiter_waits_for_interval() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::new(start);

        assert_eq!(limiter.tick(start), None);
        assert_eq!(limiter.tick(start + Duration::from_millis(10)), None);

        let fired = limiter.tick(start + Duration::from_millis(20));
        assert_eq!(fired, Some(Duration::from_millis(20)));

        // measured from the last tick that fired
        assert_eq!(limiter.tick(start + Duration::from_millis(30)), None);
        assert_eq!(
            limiter.tick(start + Duration::from_millis(40)),
            Some(Duration::from_millis(20))
        );
    }

    #[test]
    fn limiter_ignores_clock_going_backwards() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut limiter = FrameLimiter::new(start);
        assert_eq!(limiter.tick(start - Duration::from_millis(500)), None);
    }

    #[test]
    fn rotation_advances_one_radian_per_second() {
        let mut rotation = Rotation::default();
        rotation.advance(Duration::from_millis(500));
        assert!((rotation.angle() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn rotation_wraps() {
        let mut rotation = Rotation::new(TAU);
        rotation.advance(Duration::from_millis(1250));
        assert!((rotation.angle() - TAU * 0.25).abs() < 1e-4);
        assert!(rotation.angle() < TAU);
    }

    #[test]
    fn frame_counter_reports_once_per_second() {
        let start = Instant::now();
        let mut counter = FrameCounter::new(start);
        for frame in 1..60 {
            assert_eq!(counter.record(start + Duration::from_millis(frame * 16)), None);
        }
        let fps = counter.record(start + Duration::from_secs(1)).unwrap();
        assert!((fps - 60.0).abs() < 1e-3);
        assert_eq!(counter.record(start + Duration::from_millis(1016)), None);
    }
}
