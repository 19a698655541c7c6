// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_motion --heading-base-level=0

//! Understory Motion: frame-stepped animated values for interactive UI.
//!
//! ## Overview
//!
//! This crate owns the continuous half of an interaction: scalars and 2D vectors that either
//! track input directly or animate toward a target.
//! It does not own a clock.
//! The host calls `tick(dt)` once per frame and reads the values back; everything is deterministic
//! for a given sequence of writes and frame durations.
//!
//! ## Building blocks
//!
//! - [`AnimatedValue`](crate::value::AnimatedValue): a scalar with synchronous listeners. Every write,
//!   direct or animated, is delivered to listeners with the raw value.
//! - [`AnimatedVec2`](crate::value::AnimatedVec2): two values animated together.
//! - [`Spring`](crate::spring::Spring) / [`SpringConfig`](crate::spring::SpringConfig): closed-form
//!   damped springs with rest detection.
//! - [`Timing`](crate::timing::Timing) / [`Easing`](crate::easing::Easing): fixed-duration eased moves.
//!
//! ## Minimal usage
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Vec2;
//! use understory_motion::animation::TickStatus;
//! use understory_motion::spring::SpringConfig;
//! use understory_motion::value::AnimatedVec2;
//!
//! let mut pan = AnimatedVec2::new(Vec2::new(120.0, 0.0));
//! pan.spring_to(SpringConfig::default(), Vec2::ZERO);
//!
//! let frame = Duration::from_micros(16_667);
//! while pan.tick(frame) == TickStatus::Running {}
//! assert_eq!(pan.value(), Vec2::ZERO);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable either `std` (default) or `libm`.

#![no_std]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod animation;
pub mod easing;
pub mod math;
pub mod spring;
pub mod timing;
pub mod value;
