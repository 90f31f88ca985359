//! Cube highlight color transitions

use super::frame::FrameTask;
use crate::scene::Color;

/// Cubic ease-in-out over t in [0, 1]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

/// Time-driven transition between two colors.
///
/// The start color is captured when the transition is created, so a new
/// transition begun mid-flight continues from whatever is on screen.
#[derive(Debug, Clone, Copy)]
pub struct ColorTransition {
    pub from: Color,
    pub to: Color,
    /// Seconds
    pub start_time: f64,
    /// Seconds
    pub duration: f64,
}

impl ColorTransition {
    pub fn new(from: Color, to: Color, start_time: f64, duration_ms: f32) -> Self {
        Self {
            from,
            to,
            start_time,
            duration: duration_ms as f64 / 1000.0,
        }
    }

    /// Normalized elapsed time; >= 1 once the transition is over
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / self.duration).max(0.0) as f32
    }
}

impl FrameTask for ColorTransition {
    type Output = Color;

    fn sample(&self, now: f64) -> (Color, bool) {
        let t = self.progress(now);
        if t < 1.0 {
            (self.from.lerp(self.to, ease_in_out_cubic(t)), false)
        } else {
            // Snap exactly, no lerp rounding
            (self.to, true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        // Continuous across the piecewise split
        let below = ease_in_out_cubic(0.5 - 1e-4);
        let above = ease_in_out_cubic(0.5 + 1e-4);
        assert!((above - below).abs() < 1e-3);
    }

    #[test]
    fn test_easing_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out_cubic(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_transition_samples() {
        let from = Color::from_hex(0x808080);
        let to = Color::from_hex(0xA0A0A0);
        let tr = ColorTransition::new(from, to, 10.0, 500.0);

        let (c, done) = tr.sample(10.0);
        assert!(!done);
        assert_eq!(c, from);

        let (c, done) = tr.sample(10.25);
        assert!(!done);
        assert_eq!(c.to_hex(), 0x909090);

        let (c, done) = tr.sample(10.5);
        assert!(done);
        assert_eq!(c, to);

        let (c, done) = tr.sample(99.0);
        assert!(done);
        assert_eq!(c, to);
    }

    #[test]
    fn test_sample_before_start_clamps() {
        let tr = ColorTransition::new(Color::BLACK, Color::WHITE, 5.0, 500.0);
        let (c, done) = tr.sample(4.0);
        assert!(!done);
        assert_eq!(c, Color::BLACK);
    }
}
