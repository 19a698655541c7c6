// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The animation kinds an [`AnimatedValue`](crate::value::AnimatedValue) can run.

use core::time::Duration;

use crate::easing::Easing;
use crate::spring::{Spring, SpringConfig};
use crate::timing::Timing;

/// A single-value animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Animation {
    /// Physically simulated spring; runs until it comes to rest.
    Spring(Spring),
    /// Fixed-duration eased move.
    Timing(Timing),
}

impl Animation {
    /// Spring toward `target` using `config`.
    pub fn spring(config: SpringConfig, target: f64) -> Self {
        Self::Spring(Spring::new(config, target))
    }

    /// Timed move toward `target`.
    pub fn timing(target: f64, duration: Duration, easing: Easing) -> Self {
        Self::Timing(Timing::new(target, duration, easing))
    }

    /// Target value this animation settles on.
    pub fn target(&self) -> f64 {
        match self {
            Self::Spring(s) => s.target(),
            Self::Timing(t) => t.target(),
        }
    }

    /// Advance from `position` by `dt` seconds; returns `(position, finished)`.
    pub fn step(&mut self, position: f64, dt: f64) -> (f64, bool) {
        match self {
            Self::Spring(s) => s.step(position, dt),
            Self::Timing(t) => t.step(position, dt),
        }
    }
}

/// Progress report from ticking an animated value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickStatus {
    /// Nothing was running.
    Idle,
    /// An animation is still in flight.
    Running,
    /// An animation finished during this tick.
    Finished,
}

impl TickStatus {
    /// True unless an animation is still running.
    pub fn is_settled(self) -> bool {
        !matches!(self, Self::Running)
    }

    /// Combine the status of parallel values: running wins, then finished.
    #[must_use]
    pub fn join(self, other: Self) -> Self {
        match (self, other) {
            (Self::Running, _) | (_, Self::Running) => Self::Running,
            (Self::Finished, _) | (_, Self::Finished) => Self::Finished,
            _ => Self::Idle,
        }
    }
}
