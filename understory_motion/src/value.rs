// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated values with synchronous listeners.
//!
//! ## Semantics
//!
//! - Every write notifies listeners with the raw new value: direct writes via
//!   `set_value` and every animation step alike.
//! - `set_value` stops any running animation (last writer wins).
//! - Starting an animation replaces whatever was running.
//! - Listeners run in subscription order and are dropped with the value.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Vec2;

use crate::animation::{Animation, TickStatus};
use crate::easing::Easing;
use crate::spring::SpringConfig;

/// Handle returned by [`AnimatedValue::add_listener`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

type Listener = Box<dyn FnMut(f64)>;

/// A scalar that can be set directly or driven by an [`Animation`].
pub struct AnimatedValue {
    value: f64,
    animation: Option<Animation>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u32,
}

impl core::fmt::Debug for AnimatedValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnimatedValue")
            .field("value", &self.value)
            .field("animation", &self.animation)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl AnimatedValue {
    /// Create a value at rest.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            animation: None,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// True while an animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// The running animation, if any.
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Stop any animation and jump to `value`.
    pub fn set_value(&mut self, value: f64) {
        self.animation = None;
        self.write(value);
    }

    /// Start `animation`, replacing any running one.
    ///
    /// Nothing moves until the next [`tick`](Self::tick).
    pub fn animate(&mut self, animation: Animation) {
        self.animation = Some(animation);
    }

    /// Stop the running animation where it is.
    pub fn stop(&mut self) {
        self.animation = None;
    }

    /// Advance the running animation by `dt`.
    pub fn tick(&mut self, dt: Duration) -> TickStatus {
        let Some(animation) = self.animation.as_mut() else {
            return TickStatus::Idle;
        };
        let (value, finished) = animation.step(self.value, dt.as_secs_f64());
        if finished {
            self.animation = None;
        }
        self.write(value);
        if finished {
            TickStatus::Finished
        } else {
            TickStatus::Running
        }
    }

    /// Subscribe to every write of this value.
    pub fn add_listener(&mut self, listener: impl FnMut(f64) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener = self.next_listener.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Detach one listener. Returns false if `id` was not subscribed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    /// Detach every listener.
    pub fn remove_all_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn write(&mut self, value: f64) {
        self.value = value;
        for (_, listener) in &mut self.listeners {
            listener(value);
        }
    }
}

/// A pair of [`AnimatedValue`]s animated together as a 2D vector.
#[derive(Debug, Default)]
pub struct AnimatedVec2 {
    /// Horizontal component.
    pub x: AnimatedValue,
    /// Vertical component.
    pub y: AnimatedValue,
}

impl AnimatedVec2 {
    /// Create a vector at rest.
    pub fn new(value: Vec2) -> Self {
        Self {
            x: AnimatedValue::new(value.x),
            y: AnimatedValue::new(value.y),
        }
    }

    /// Current value.
    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    /// Stop both components and jump to `value` (x first, then y).
    pub fn set_value(&mut self, value: Vec2) {
        self.x.set_value(value.x);
        self.y.set_value(value.y);
    }

    /// Spring both components toward `target`.
    pub fn spring_to(&mut self, config: SpringConfig, target: Vec2) {
        self.x.animate(Animation::spring(config, target.x));
        self.y.animate(Animation::spring(config, target.y));
    }

    /// Timed move of both components toward `target`.
    pub fn timing_to(&mut self, target: Vec2, duration: Duration, easing: Easing) {
        self.x.animate(Animation::timing(target.x, duration, easing));
        self.y.animate(Animation::timing(target.y, duration, easing));
    }

    /// Stop both components where they are.
    pub fn stop(&mut self) {
        self.x.stop();
        self.y.stop();
    }

    /// True while either component is animating.
    pub fn is_animating(&self) -> bool {
        self.x.is_animating() || self.y.is_animating()
    }

    /// Advance both components by `dt`.
    pub fn tick(&mut self, dt: Duration) -> TickStatus {
        self.x.tick(dt).join(self.y.tick(dt))
    }
}
