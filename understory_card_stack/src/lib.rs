// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_card_stack --heading-base-level=0

//! Understory Card Stack: a gesture-driven stack of swipeable cards.
//!
//! ## Overview
//!
//! A deck of items is shown as a few visually receding cards. Dragging the front card past a
//! threshold dismisses it in that direction, and the next item moves up. The stack can stop after
//! the last item or loop forever.
//!
//! This crate is the controller only. The host owns the deck, forwards pointer input, calls
//! [`tick`](crate::stack::CardStack::tick) once per frame, and paints the
//! [`Layer`](crate::stack::Layer)s it gets back.
//!
//! - [`classify`](crate::classify::classify): decides which swipe, if any, a released drag was.
//! - [`layer_transform`](crate::transform::layer_transform): rotation, translation, scale, and
//!   opacity of each layer as a function of the shared drag vector.
//! - [`index`](crate::index): circular deck arithmetic.
//! - [`CardStack`](crate::stack::CardStack): the state machine that sequences gesture, animation,
//!   index change, and callbacks.
//!
//! Callbacks go through [`StackHandler`](crate::handler::StackHandler); every method has a no-op
//! default, and `()` implements it.
//!
//! ## Minimal usage
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Vec2;
//! use understory_card_stack::config::StackConfig;
//! use understory_card_stack::handler::PanGesture;
//! use understory_card_stack::stack::CardStack;
//! use understory_motion::animation::TickStatus;
//!
//! let mut stack = CardStack::new(StackConfig::default(), 4, ()).unwrap();
//! assert_eq!(stack.layers().len(), 3);
//!
//! stack.handle_grant(&(), &PanGesture::default());
//! stack.handle_move(&PanGesture::from_delta(Vec2::new(120.0, 0.0)));
//! stack.handle_release(&(), &PanGesture::from_delta(Vec2::new(120.0, 0.0)));
//!
//! // The index advances when the exit animation completes.
//! assert_eq!(stack.active_index(), 0);
//! let frame = Duration::from_micros(16_667);
//! while stack.tick(frame) == TickStatus::Running {}
//! assert_eq!(stack.active_index(), 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default) or `libm`: float math backend, forwarded to Kurbo and Understory Motion.
//! - `tracing`: debug events for swipes, programmatic moves, and stack end.
//! - `serde`: serialize the configuration records.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod classify;
pub mod config;
pub mod directions;
pub mod driver;
pub mod error;
pub mod handler;
pub mod index;
pub mod stack;
pub mod transform;
