// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped harmonic springs.
//!
//! ## Model
//!
//! A spring pulls a value toward its target with stiffness `k`, resists motion
//! with damping `c`, and carries mass `m`. Each step advances the closed-form
//! solution of `m x'' + c x' + k x = 0` from the current displacement and
//! velocity, so results do not depend on how a duration is split into steps.
//! Underdamped, critically damped, and overdamped regimes are all handled.
//!
//! A spring comes to rest once both its speed and its displacement fall below
//! the configured thresholds; at that point it snaps exactly onto the target.

use crate::math;

/// Physical parameters of a spring.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpringConfig {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Mass `m`. Must be positive.
    pub mass: f64,
    /// Displacement from the target below which the spring may come to rest.
    pub rest_displacement: f64,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f64,
    /// If true, the spring stops the first time it reaches or crosses its target.
    pub overshoot_clamping: bool,
}

impl SpringConfig {
    /// Build a config from Origami-style `tension` and `friction` values.
    pub fn from_tension_friction(tension: f64, friction: f64) -> Self {
        Self {
            stiffness: (tension - 30.0) * 3.62 + 194.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            ..Self::default()
        }
    }

    /// True when every parameter is finite, `stiffness`, `damping` and `mass`
    /// are positive, and both rest thresholds are positive.
    ///
    /// A spring built from any other config may never come to rest.
    pub fn is_settling(&self) -> bool {
        let finite = [
            self.stiffness,
            self.damping,
            self.mass,
            self.rest_displacement,
            self.rest_speed,
        ]
        .iter()
        .all(|v| v.is_finite());
        finite
            && self.stiffness > 0.0
            && self.damping > 0.0
            && self.mass > 0.0
            && self.rest_displacement > 0.0
            && self.rest_speed > 0.0
    }

    /// Damping ratio `zeta = c / (2 sqrt(k m))`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * math::sqrt(self.stiffness * self.mass))
    }
}

impl Default for SpringConfig {
    /// Tension 40, friction 7: a soft spring with a little overshoot.
    fn default() -> Self {
        Self {
            stiffness: 230.2,
            damping: 22.0,
            mass: 1.0,
            rest_displacement: 0.001,
            rest_speed: 0.001,
            overshoot_clamping: false,
        }
    }
}

/// An in-flight spring toward a fixed target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    target: f64,
    velocity: f64,
}

impl Spring {
    /// Create a spring toward `target`, starting at rest.
    pub fn new(config: SpringConfig, target: f64) -> Self {
        Self {
            config,
            target,
            velocity: 0.0,
        }
    }

    /// Target value.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Current velocity.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Advance from `position` by `dt` seconds.
    ///
    /// Returns the new position and whether the spring has come to rest.
    pub fn step(&mut self, position: f64, dt: f64) -> (f64, bool) {
        let SpringConfig {
            stiffness: k,
            damping: c,
            mass: m,
            ..
        } = self.config;

        let x0 = position - self.target;
        let v0 = self.velocity;
        if self.is_at_rest(x0, v0) {
            self.velocity = 0.0;
            return (self.target, true);
        }

        let omega0 = math::sqrt(k / m);
        let zeta = c / (2.0 * math::sqrt(k * m));
        let decay = zeta * omega0;
        let envelope = math::exp(-decay * dt);

        let (x, v) = if zeta < 1.0 {
            let omega1 = omega0 * math::sqrt(1.0 - zeta * zeta);
            let a = x0;
            let b = (v0 + decay * x0) / omega1;
            let (s, co) = (math::sin(omega1 * dt), math::cos(omega1 * dt));
            let x = envelope * (a * co + b * s);
            let v = -decay * x + envelope * omega1 * (b * co - a * s);
            (x, v)
        } else if zeta == 1.0 {
            let b = v0 + omega0 * x0;
            let x = envelope * (x0 + b * dt);
            let v = envelope * (b - omega0 * (x0 + b * dt));
            (x, v)
        } else {
            let omega2 = omega0 * math::sqrt(zeta * zeta - 1.0);
            let grow = math::exp(omega2 * dt);
            let shrink = 1.0 / grow;
            let ch = 0.5 * (grow + shrink);
            let sh = 0.5 * (grow - shrink);
            let a = x0;
            let b = (v0 + decay * x0) / omega2;
            let x = envelope * (a * ch + b * sh);
            let v = -decay * x + envelope * omega2 * (a * sh + b * ch);
            (x, v)
        };

        let crossed = x0 != 0.0 && (x == 0.0 || (x < 0.0) != (x0 < 0.0));
        if (self.config.overshoot_clamping && crossed) || self.is_at_rest(x, v) {
            self.velocity = 0.0;
            return (self.target, true);
        }

        self.velocity = v;
        (self.target + x, false)
    }

    fn is_at_rest(&self, displacement: f64, velocity: f64) -> bool {
        let still = math::abs(velocity) <= self.config.rest_speed;
        let near = math::abs(displacement) <= self.config.rest_displacement;
        still && near
    }
}
