// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for timed animations.

use core::f64::consts::LN_2;

use crate::math;

/// Maps normalized progress `t` in `[0, 1]` to an eased fraction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    /// Identity curve.
    Linear,
    /// Exponential ease-in, `2^(10(t - 1))`.
    ///
    /// Starts slow and accelerates hard into the end of the move.
    #[default]
    Exponential,
}

impl Easing {
    /// Evaluate the curve at `t`. Inputs outside `[0, 1]` are clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Exponential => math::exp(10.0 * (t - 1.0) * LN_2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        for easing in [Easing::Linear, Easing::Exponential] {
            assert!(
                (easing.apply(1.0) - 1.0).abs() < 1e-12,
                "{easing:?} must reach 1 at t = 1"
            );
        }
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        // The exponential curve starts at 2^-10, not exactly zero.
        assert!((Easing::Exponential.apply(0.0) - 1.0 / 1024.0).abs() < 1e-12);
    }

    #[test]
    fn exponential_is_slow_then_fast() {
        let e = Easing::Exponential;
        assert!(e.apply(0.5) < 0.05);
        assert!(e.apply(0.9) > 0.45);
    }

    #[test]
    fn clamps_out_of_range_progress() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }
}
