//! Decorative motion for the backdrop: a sine drift and an exponentially
//! smoothed pointer follower. Both run on the frame clock and never touch
//! the timeline reveal state.

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Vertical drift of the gradient orbs, matching a slow sine sweep.
pub fn sine_drift(elapsed_ms: f64, amplitude: f64) -> f64 {
    (elapsed_ms * 0.0006).sin() * amplitude
}

/// 2D point that eases toward a target with an exponential step, so the
/// approach speed is independent of the frame rate.
#[derive(Debug, Clone, Copy)]
pub struct Follower {
    pub x: f64,
    pub y: f64,
    /// Approach rate in 1/ms; higher snaps faster.
    rate: f64,
}

impl Follower {
    pub fn new(rate: f64) -> Self {
        Self { x: 0.0, y: 0.0, rate }
    }

    /// Advances toward `(tx, ty)` by the fraction covered in `dt_ms`.
    pub fn step_toward(&mut self, tx: f64, ty: f64, dt_ms: f64) {
        if dt_ms <= 0.0 {
            return;
        }
        let t = 1.0 - (-self.rate * dt_ms).exp();
        self.x = lerp(self.x, tx, t);
        self.y = lerp(self.y, ty, t);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_relative_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_relative_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_relative_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn drift_stays_within_amplitude() {
        for ms in (0..60_000).step_by(16) {
            let offset = sine_drift(ms as f64, 80.0);
            assert!(offset.abs() <= 80.0);
        }
    }

    #[test]
    fn follower_approaches_without_overshoot() {
        let mut follower = Follower::new(0.01);
        let mut last_distance = f64::MAX;
        for _ in 0..300 {
            follower.step_toward(120.0, -40.0, 16.0);
            let distance = ((follower.x - 120.0).powi(2) + (follower.y + 40.0).powi(2)).sqrt();
            assert!(distance <= last_distance);
            last_distance = distance;
        }
        assert!(last_distance < 1.0);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut follower = Follower::new(0.01);
        follower.step_toward(50.0, 50.0, 0.0);
        assert_relative_eq!(follower.x, 0.0);
        assert_relative_eq!(follower.y, 0.0);
    }
}
