// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use understory_motion::spring::SpringConfig;

/// A [`StackConfig`](crate::config::StackConfig) that cannot drive a stack.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// At least one visible layer is required.
    #[error("layer count must be at least 1")]
    NoLayers,
    /// The swipe threshold must be finite and non-negative.
    #[error("drag threshold {0} must be finite and non-negative")]
    InvalidThreshold(f64),
    /// Items need a positive, finite size.
    #[error("item size {width}x{height} must be positive and finite")]
    InvalidItemSize {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
    /// A layer falloff or effect value is NaN or infinite.
    #[error("`{0}` must be finite")]
    NonFinite(&'static str),
    /// The spring never comes to rest: a parameter is non-finite, or
    /// stiffness, damping, mass or a rest threshold is not positive.
    #[error("spring {0:?} cannot settle")]
    InvalidSpring(SpringConfig),
    /// The initial index does not name an item in the deck.
    #[error("initial index {index} is out of range for a deck of {len}")]
    InitialIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Deck length.
        len: usize,
    },
}

/// An imperative stack operation that was refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// The operation needs an idle stack: no drag and no animation in flight.
    #[error("stack is not idle")]
    NotIdle,
    /// The deck has no items.
    #[error("deck is empty")]
    EmptyDeck,
}
