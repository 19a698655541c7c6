// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-duration moves along an easing curve.

use core::time::Duration;

use crate::easing::Easing;
use crate::math;

/// A timed move toward `target` over a fixed duration.
///
/// The start value is latched on the first step, so a timing created ahead of
/// time picks up wherever the value is when the animation actually begins.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Timing {
    target: f64,
    duration: Duration,
    easing: Easing,
    from: Option<f64>,
    elapsed: f64,
}

impl Timing {
    /// Create a timed move toward `target`.
    pub fn new(target: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            target,
            duration,
            easing,
            from: None,
            elapsed: 0.0,
        }
    }

    /// Target value.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Total duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Advance from `position` by `dt` seconds.
    ///
    /// Returns the new position and whether the move has finished.
    pub fn step(&mut self, position: f64, dt: f64) -> (f64, bool) {
        let from = *self.from.get_or_insert(position);
        self.elapsed += dt;
        let total = self.duration.as_secs_f64();
        if total <= 0.0 || self.elapsed >= total {
            return (self.target, true);
        }
        let eased = self.easing.apply(self.elapsed / total);
        (math::lerp(from, self.target, eased), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_midpoint_and_end() {
        let mut t = Timing::new(100.0, Duration::from_millis(400), Easing::Linear);
        let (p, done) = t.step(0.0, 0.2);
        assert!(!done);
        assert!((p - 50.0).abs() < 1e-9);
        let (p, done) = t.step(p, 0.2);
        assert!(done);
        assert_eq!(p, 100.0);
    }

    #[test]
    fn start_is_latched_on_first_step() {
        let mut t = Timing::new(0.0, Duration::from_secs(1), Easing::Linear);
        let (p, _) = t.step(10.0, 0.5);
        assert!((p - 5.0).abs() < 1e-9);
        // Later positions do not move the origin.
        let (p, _) = t.step(1000.0, 0.25);
        assert!((p - 2.5).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_jumps() {
        let mut t = Timing::new(-3.0, Duration::ZERO, Easing::Exponential);
        assert_eq!(t.step(7.0, 0.0), (-3.0, true));
    }
}
