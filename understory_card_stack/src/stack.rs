// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The card stack controller.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle -> Dragging -> Releasing(Exit | Settle) -> Idle
//!   \----------------> Releasing(Programmatic) -> Releasing(Exit | Settle) -> Idle
//! ```
//!
//! - Grant zeroes the shared drag vector and enters `Dragging`.
//! - Each move writes the pointer displacement to both drag channels.
//! - Release always reports to the host first, then classifies the drag. A
//!   swipe starts the commit-exit group and locks the stack (`can_change ==
//!   false`); anything else settles back.
//! - When the running group finishes on a later [`tick`](CardStack::tick), the
//!   completion runs as one step: advance the index, update the stack-ended
//!   flag, reset the channels, then call `on_swiped`, the directional callback,
//!   and `on_stack_ended`, in that order, and unlock.
//!
//! The index and stack-ended flag change only inside that completion step (or
//! in [`go_back`](CardStack::go_back), which needs an idle stack).
//!
//! ## Gestures while locked
//!
//! A gesture granted while an exit is in flight is still acknowledged: the host
//! sees `on_grant` and `on_release`. Its moves are dropped and it never touches
//! the drag channels or the index.

use alloc::vec::Vec;
use core::marker::PhantomData;
use core::time::Duration;

use kurbo::{Size, Vec2};
use understory_motion::animation::TickStatus;
use understory_motion::value::ListenerId;

use crate::classify::classify;
use crate::config::{GO_BACK_OFFSET, Rgba8, StackConfig};
use crate::directions::{Directions, SwipeDirection};
use crate::driver::Driver;
use crate::error::{ConfigError, StackError};
use crate::handler::{PanGesture, ReleaseSource, StackHandler, dispatch_swiped};
use crate::index::{item_at_depth, previous_index};
use crate::transform::{LayerTransform, TRANSFORM_RANGE, commit_exit_offset, layer_transform};

/// What an in-flight release is waiting on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Release {
    /// Drag channels springing back to rest; no index change follows.
    Settle,
    /// Commit-exit in `direction`; the index advances on completion.
    Exit(SwipeDirection),
    /// Timed programmatic move; the release path runs on completion.
    Programmatic {
        /// Direction tag reported with the release.
        liked: bool,
    },
}

/// Controller phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No gesture, no animation.
    Idle,
    /// A granted gesture is tracking the pointer.
    Dragging,
    /// An animation group is running toward a release outcome.
    Releasing(Release),
}

/// One visible layer of the stack.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layer {
    /// Stack depth, `0` = front.
    pub depth: usize,
    /// Deck index of the item shown at this depth.
    pub item_index: usize,
    /// Visual transform for this frame.
    pub transform: LayerTransform,
}

/// A layer paired with the host's rendered content.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedLayer<R> {
    /// Placement of the card.
    pub layer: Layer,
    /// Card box size.
    pub size: Size,
    /// Fill behind the card.
    pub background: Rgba8,
    /// Output of the render callback.
    pub content: R,
}

/// Gesture-driven stack of swipeable cards.
///
/// The controller owns the index, the flags, and the animated values. The deck
/// itself stays with the caller: only its length is stored, and
/// [`render`](Self::render) borrows the items for the duration of one frame.
pub struct CardStack<H, E = ()> {
    config: StackConfig,
    directions: Directions,
    handler: H,
    driver: Driver,
    item_count: usize,
    active: usize,
    stack_ended: bool,
    can_change: bool,
    phase: Phase,
    // Gesture granted while locked; acknowledged but otherwise ignored.
    stray_gesture: bool,
    _event: PhantomData<fn(&E)>,
}

impl<H, E> core::fmt::Debug for CardStack<H, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CardStack")
            .field("item_count", &self.item_count)
            .field("active", &self.active)
            .field("stack_ended", &self.stack_ended)
            .field("can_change", &self.can_change)
            .field("phase", &self.phase)
            .field("directions", &self.directions)
            .field("driver", &self.driver)
            .finish_non_exhaustive()
    }
}

impl<H: StackHandler<E>, E> CardStack<H, E> {
    /// Create a stack over a deck of `item_count` items.
    pub fn new(config: StackConfig, item_count: usize, handler: H) -> Result<Self, ConfigError> {
        config.validate(item_count)?;
        Ok(Self {
            directions: config.directions,
            active: config.initial_index,
            config,
            handler,
            driver: Driver::new(),
            item_count,
            stack_ended: false,
            can_change: true,
            phase: Phase::Idle,
            stray_gesture: false,
            _event: PhantomData,
        })
    }

    /// The configuration this stack was built with.
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// The callback handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The callback handler, mutably.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consume the stack, returning its handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Index of the front item.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Deck length.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// True once a non-wrapping forward step passed the last item.
    pub fn is_stack_ended(&self) -> bool {
        self.stack_ended
    }

    /// False while an exit is in flight; input that could change the index is refused.
    pub fn can_change(&self) -> bool {
        self.can_change
    }

    /// Current controller phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current value of the shared drag vector.
    pub fn drag(&self) -> Vec2 {
        self.driver.pan()
    }

    /// Enabled swipe directions.
    pub fn directions(&self) -> Directions {
        self.directions
    }

    /// Replace the enabled directions from `[top, left, bottom, right]`.
    ///
    /// Takes effect on the next release.
    pub fn set_directions(&mut self, ordered: [bool; 4]) {
        self.directions = Directions::from_ordered(ordered);
    }

    /// Tell the stack the deck was replaced with one of `len` items.
    ///
    /// Clears the stack-ended flag. Only call while [`can_change`](Self::can_change)
    /// is true; the active index is not corrected if it falls outside the new deck.
    pub fn set_item_count(&mut self, len: usize) {
        self.item_count = len;
        self.stack_ended = false;
    }

    /// True when nothing is rendered: an empty deck, or an ended finite stack.
    pub fn is_hidden(&self) -> bool {
        self.item_count == 0 || (self.stack_ended && !self.config.infinite)
    }

    /// Whether the host may take a granted gesture away. Always `false`.
    pub fn allows_termination(&self) -> bool {
        false
    }

    /// Observe every write to the horizontal drag component.
    pub fn subscribe_x(&mut self, listener: impl FnMut(f64) + 'static) -> ListenerId {
        self.driver.pan_channel_mut().x.add_listener(listener)
    }

    /// Observe every write to the vertical drag component.
    pub fn subscribe_y(&mut self, listener: impl FnMut(f64) + 'static) -> ListenerId {
        self.driver.pan_channel_mut().y.add_listener(listener)
    }

    /// Detach a listener added with [`subscribe_x`](Self::subscribe_x).
    pub fn unsubscribe_x(&mut self, id: ListenerId) -> bool {
        self.driver.pan_channel_mut().x.remove_listener(id)
    }

    /// Detach a listener added with [`subscribe_y`](Self::subscribe_y).
    pub fn unsubscribe_y(&mut self, id: ListenerId) -> bool {
        self.driver.pan_channel_mut().y.remove_listener(id)
    }

    /// A gesture started on the stack.
    pub fn handle_grant(&mut self, event: &E, gesture: &PanGesture) {
        if self.is_hidden() {
            return;
        }
        if !self.can_change {
            #[cfg(feature = "tracing")]
            tracing::debug!("gesture granted during exit; ignoring its moves");
            self.stray_gesture = true;
            self.handler.on_grant(event, gesture);
            return;
        }
        self.stray_gesture = false;
        self.handler.on_grant(event, gesture);
        self.driver.begin_drag();
        self.phase = Phase::Dragging;
    }

    /// The pointer moved.
    pub fn handle_move(&mut self, gesture: &PanGesture) {
        if self.phase != Phase::Dragging {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(dx = gesture.delta.x, dy = gesture.delta.y, "drag");
        self.driver.set_live_drag(gesture.delta);
    }

    /// The pointer was lifted.
    pub fn handle_release(&mut self, event: &E, gesture: &PanGesture) {
        if self.stray_gesture {
            self.stray_gesture = false;
            self.handler.on_release(ReleaseSource::Gesture { event, gesture });
            return;
        }
        if self.phase != Phase::Dragging {
            return;
        }
        self.handler.on_release(ReleaseSource::Gesture { event, gesture });
        self.release();
    }

    /// The host terminated the gesture; handled exactly like a release.
    pub fn handle_terminate(&mut self, event: &E, gesture: &PanGesture) {
        self.handle_release(event, gesture);
    }

    /// Dismiss the front card without a gesture: right when `liked`, left otherwise.
    ///
    /// Ignored (returning `false`, with no side effects) while locked, while a
    /// gesture is dragging, or when the deck is empty.
    pub fn move_next(&mut self, liked: bool) -> bool {
        if !self.can_change || self.phase == Phase::Dragging || self.item_count == 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(liked, "move_next ignored");
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(liked, active = self.active, "move_next");
        self.can_change = false;
        let x = if liked { TRANSFORM_RANGE } else { -TRANSFORM_RANGE };
        self.driver.programmatic_move(
            Vec2::new(x, 0.0),
            self.config.move_duration,
            self.config.move_easing,
        );
        self.phase = Phase::Releasing(Release::Programmatic { liked });
        true
    }

    /// Bring back the previously dismissed card.
    ///
    /// Steps the index back (wrapping from `0` to the last item), clears the
    /// stack-ended flag, reports `on_swiped` with the new index, and lets the
    /// card drop back into place from [`GO_BACK_OFFSET`]. No directional callback
    /// fires.
    pub fn go_back(&mut self) -> Result<(), StackError> {
        if self.item_count == 0 {
            return Err(StackError::EmptyDeck);
        }
        if self.phase != Phase::Idle || !self.can_change {
            return Err(StackError::NotIdle);
        }
        self.driver.reset_to_neutral();
        self.active = previous_index(self.item_count, self.active);
        self.stack_ended = false;
        #[cfg(feature = "tracing")]
        tracing::debug!(active = self.active, "go_back");
        self.handler.on_swiped(self.active);

        self.driver.set_drag(GO_BACK_OFFSET);
        self.handler.on_release(ReleaseSource::GoBack);
        self.driver.settle(self.config.spring);
        self.phase = Phase::Releasing(Release::Settle);
        Ok(())
    }

    /// Advance animations by one frame of `dt`.
    ///
    /// When the running group finishes, its completion runs before this returns.
    pub fn tick(&mut self, dt: Duration) -> TickStatus {
        let status = self.driver.tick(dt);
        if status == TickStatus::Finished {
            self.complete();
        }
        status
    }

    /// Visible layers, front first. Empty when [hidden](Self::is_hidden).
    pub fn layers(&self) -> Vec<Layer> {
        if self.is_hidden() {
            return Vec::new();
        }
        let pulses = self.driver.pulses();
        (0..self.config.layers.layer_count)
            .filter_map(|depth| {
                let item_index =
                    item_at_depth(self.item_count, self.active, depth, self.config.infinite)?;
                Some(Layer {
                    depth,
                    item_index,
                    transform: layer_transform(
                        &self.config.layers,
                        depth,
                        self.driver.drag_for_depth(depth),
                        pulses,
                    ),
                })
            })
            .collect()
    }

    /// Render the visible layers, front first, through `render_item(item, width, height)`.
    ///
    /// Layers whose index is missing from `items` are skipped.
    pub fn render<T, R>(
        &self,
        items: &[T],
        mut render_item: impl FnMut(&T, f64, f64) -> R,
    ) -> Vec<RenderedLayer<R>> {
        let size = self.config.layers.item_size;
        let background = self.config.layers.background;
        self.layers()
            .into_iter()
            .filter_map(|layer| {
                let item = items.get(layer.item_index)?;
                Some(RenderedLayer {
                    layer,
                    size,
                    background,
                    content: render_item(item, size.width, size.height),
                })
            })
            .collect()
    }

    fn release(&mut self) {
        match classify(self.driver.pan(), self.config.dist_drag, self.directions) {
            Some(direction) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?direction, active = self.active, "swipe committed");
                self.can_change = false;
                self.driver
                    .commit_exit(self.config.spring, commit_exit_offset(&self.config.layers));
                self.phase = Phase::Releasing(Release::Exit(direction));
            }
            None => {
                self.driver.settle(self.config.spring);
                self.phase = Phase::Releasing(Release::Settle);
            }
        }
    }

    fn complete(&mut self) {
        match core::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Releasing(Release::Settle) => {
                self.can_change = true;
            }
            Phase::Releasing(Release::Programmatic { liked }) => {
                self.handler.on_release(ReleaseSource::Programmatic { liked });
                self.release();
                if self.phase == Phase::Releasing(Release::Settle) {
                    self.can_change = true;
                }
            }
            Phase::Releasing(Release::Exit(direction)) => self.finish_exit(direction),
            Phase::Idle | Phase::Dragging => {}
        }
    }

    fn finish_exit(&mut self, direction: SwipeDirection) {
        let len = self.item_count;
        if len == 0 {
            self.driver.reset_to_neutral();
            self.can_change = true;
            return;
        }
        let mut active = self.active + 1;
        let mut ended = false;
        if active >= len {
            active = 0;
            ended = true;
        }
        self.active = active;
        self.stack_ended = ended;
        self.driver.reset_to_neutral();

        self.handler.on_swiped(active);
        dispatch_swiped::<E, H>(&mut self.handler, direction, previous_index(len, active));
        if ended {
            #[cfg(feature = "tracing")]
            tracing::debug!("stack ended");
            self.handler.on_stack_ended();
        }
        self.can_change = true;
    }
}
