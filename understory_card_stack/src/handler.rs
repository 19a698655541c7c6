// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host callbacks and gesture input types.

use kurbo::Vec2;

use crate::directions::SwipeDirection;

/// Snapshot of a single-pointer pan gesture, as reported by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PanGesture {
    /// Displacement since the gesture started.
    pub delta: Vec2,
}

impl PanGesture {
    /// A gesture displaced by `delta`.
    pub fn from_delta(delta: Vec2) -> Self {
        Self { delta }
    }
}

/// What triggered a release notification.
#[derive(Debug)]
pub enum ReleaseSource<'a, E> {
    /// The pointer was lifted (or the gesture terminated).
    Gesture {
        /// Raw host event, passed through unchanged.
        event: &'a E,
        /// Gesture state at release.
        gesture: &'a PanGesture,
    },
    /// A programmatic move finished its timed phase.
    Programmatic {
        /// `true` for a move to the right, `false` for the left.
        liked: bool,
    },
    /// [`CardStack::go_back`](crate::stack::CardStack::go_back) brought the previous card back.
    GoBack,
}

/// Callbacks invoked by a [`CardStack`](crate::stack::CardStack).
///
/// Every method defaults to a no-op. `E` is the host's raw pointer event type.
pub trait StackHandler<E = ()> {
    /// The front card changed; `active` is the new front index.
    fn on_swiped(&mut self, active: usize) {
        let _ = active;
    }

    /// A left swipe dismissed the item at `previous`.
    fn on_swiped_left(&mut self, previous: usize) {
        let _ = previous;
    }

    /// A right swipe dismissed the item at `previous`.
    fn on_swiped_right(&mut self, previous: usize) {
        let _ = previous;
    }

    /// An upward swipe dismissed the item at `previous`.
    fn on_swiped_top(&mut self, previous: usize) {
        let _ = previous;
    }

    /// A downward swipe dismissed the item at `previous`.
    fn on_swiped_bottom(&mut self, previous: usize) {
        let _ = previous;
    }

    /// The deck wrapped past its last item.
    fn on_stack_ended(&mut self) {}

    /// A gesture was granted to the stack.
    fn on_grant(&mut self, event: &E, gesture: &PanGesture) {
        let _ = (event, gesture);
    }

    /// A gesture or programmatic move was released.
    fn on_release(&mut self, source: ReleaseSource<'_, E>) {
        let _ = source;
    }
}

/// Handler that ignores every callback.
impl<E> StackHandler<E> for () {}

pub(crate) fn dispatch_swiped<E, H: StackHandler<E> + ?Sized>(
    handler: &mut H,
    direction: SwipeDirection,
    previous: usize,
) {
    match direction {
        SwipeDirection::Left => handler.on_swiped_left(previous),
        SwipeDirection::Right => handler.on_swiped_right(previous),
        SwipeDirection::Top => handler.on_swiped_top(previous),
        SwipeDirection::Bottom => handler.on_swiped_bottom(previous),
    }
}
