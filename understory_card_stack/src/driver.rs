// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stack's animated quantities and the transitions that move them.
//!
//! ## Channels
//!
//! - `pan`: the shared drag vector read by every layer behind the front card.
//!   Listeners on its components observe every write.
//! - `pan_front`: the front card's own mirror, so the dismissed card and the
//!   rest of the stack can head for different targets at the same time.
//! - `scale` / `opacity`: the release pulses.
//!
//! A transition starts a group of animations across these channels; [`Driver::tick`]
//! reports [`TickStatus::Finished`] exactly once, on the frame the whole group
//! comes to rest.

use core::time::Duration;

use kurbo::Vec2;
use understory_motion::animation::{Animation, TickStatus};
use understory_motion::easing::Easing;
use understory_motion::spring::SpringConfig;
use understory_motion::value::{AnimatedValue, AnimatedVec2};

use crate::transform::Pulses;

/// Owner of the stack's animated values.
#[derive(Debug, Default)]
pub struct Driver {
    pan: AnimatedVec2,
    pan_front: AnimatedVec2,
    scale: AnimatedValue,
    opacity: AnimatedValue,
    in_flight: bool,
}

impl Driver {
    /// All channels at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared drag vector.
    pub fn pan(&self) -> Vec2 {
        self.pan.value()
    }

    /// Front card's drag mirror.
    pub fn pan_front(&self) -> Vec2 {
        self.pan_front.value()
    }

    /// Current pulse values.
    pub fn pulses(&self) -> Pulses {
        Pulses {
            scale: self.scale.value(),
            opacity: self.opacity.value(),
        }
    }

    /// Drag vector bound to `depth`: the front mirror at depth 0, the shared one elsewhere.
    pub fn drag_for_depth(&self, depth: usize) -> Vec2 {
        if depth == 0 {
            self.pan_front()
        } else {
            self.pan()
        }
    }

    /// True while a transition group is running.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Mutable access to the shared drag channel, for attaching listeners.
    pub fn pan_channel_mut(&mut self) -> &mut AnimatedVec2 {
        &mut self.pan
    }

    /// Start tracking a new gesture.
    ///
    /// Drops the running group and zeroes the shared drag vector. The front
    /// mirror is not zeroed; a settle already running on it keeps easing toward
    /// rest until the first move sample overwrites it.
    pub fn begin_drag(&mut self) {
        self.in_flight = false;
        self.pan.set_value(Vec2::ZERO);
        self.scale.stop();
        self.opacity.stop();
    }

    /// Track the pointer 1:1 on both drag channels.
    pub fn set_live_drag(&mut self, drag: Vec2) {
        self.cancel();
        self.pan.set_value(drag);
        self.pan_front.set_value(drag);
    }

    /// Hard-set both drag channels without animating.
    pub fn set_drag(&mut self, drag: Vec2) {
        self.pan.set_value(drag);
        self.pan_front.set_value(drag);
    }

    /// Spring both drag channels back to rest.
    pub fn settle(&mut self, spring: SpringConfig) {
        self.pan.spring_to(spring, Vec2::ZERO);
        self.pan_front.spring_to(spring, Vec2::ZERO);
        self.in_flight = true;
    }

    /// Fly the front card out while the rest of the stack moves up a slot.
    ///
    /// `pan` springs to `stack_target`, `pan_front` to twice the released drag,
    /// and both pulses to `1`.
    pub fn commit_exit(&mut self, spring: SpringConfig, stack_target: Vec2) {
        let released = self.pan.value();
        self.scale.animate(Animation::spring(spring, 1.0));
        self.opacity.animate(Animation::spring(spring, 1.0));
        self.pan.spring_to(spring, stack_target);
        self.pan_front.spring_to(spring, released * 2.0);
        self.in_flight = true;
    }

    /// Timed move of both drag channels to `target`.
    pub fn programmatic_move(&mut self, target: Vec2, duration: Duration, easing: Easing) {
        self.pan.timing_to(target, duration, easing);
        self.pan_front.timing_to(target, duration, easing);
        self.in_flight = true;
    }

    /// Hard-set every channel to rest, dropping any running group.
    pub fn reset_to_neutral(&mut self) {
        self.in_flight = false;
        self.pan.set_value(Vec2::ZERO);
        self.pan_front.set_value(Vec2::ZERO);
        self.scale.set_value(0.0);
        self.opacity.set_value(0.0);
    }

    /// Stop every channel where it is, dropping any running group.
    pub fn cancel(&mut self) {
        self.in_flight = false;
        self.pan.stop();
        self.pan_front.stop();
        self.scale.stop();
        self.opacity.stop();
    }

    /// Advance every channel by `dt`.
    ///
    /// Returns [`TickStatus::Finished`] on the frame the running group comes to
    /// rest, [`TickStatus::Running`] before that, and [`TickStatus::Idle`] when
    /// nothing is in flight.
    pub fn tick(&mut self, dt: Duration) -> TickStatus {
        let status = self
            .pan
            .tick(dt)
            .join(self.pan_front.tick(dt))
            .join(self.scale.tick(dt))
            .join(self.opacity.tick(dt));
        if !self.in_flight {
            return TickStatus::Idle;
        }
        if status.is_settled() {
            self.in_flight = false;
            TickStatus::Finished
        } else {
            TickStatus::Running
        }
    }
}
