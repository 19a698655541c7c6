// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe directions and the mask of enabled ones.

bitflags::bitflags! {
    /// Which swipe directions are enabled.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Directions: u8 {
        /// Swiping up past the threshold dismisses the card.
        const TOP    = 0b0001;
        /// Swiping left past the threshold dismisses the card.
        const LEFT   = 0b0010;
        /// Swiping down past the threshold dismisses the card.
        const BOTTOM = 0b0100;
        /// Swiping right past the threshold dismisses the card.
        const RIGHT  = 0b1000;
    }
}

impl Default for Directions {
    fn default() -> Self {
        Self::all()
    }
}

impl Directions {
    /// Build a mask from the ordered list `[top, left, bottom, right]`.
    pub fn from_ordered(flags: [bool; 4]) -> Self {
        let [top, left, bottom, right] = flags;
        let mut out = Self::empty();
        out.set(Self::TOP, top);
        out.set(Self::LEFT, left);
        out.set(Self::BOTTOM, bottom);
        out.set(Self::RIGHT, right);
        out
    }

    /// Whether `direction` is enabled.
    pub fn allows(self, direction: SwipeDirection) -> bool {
        self.contains(direction.flag())
    }
}

/// A committed swipe direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SwipeDirection {
    /// Upward (negative y).
    Top,
    /// Leftward (negative x).
    Left,
    /// Downward (positive y).
    Bottom,
    /// Rightward (positive x).
    Right,
}

impl SwipeDirection {
    /// The mask bit for this direction.
    pub fn flag(self) -> Directions {
        match self {
            Self::Top => Directions::TOP,
            Self::Left => Directions::LEFT,
            Self::Bottom => Directions::BOTTOM,
            Self::Right => Directions::RIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_list_maps_by_position() {
        let d = Directions::from_ordered([true, false, false, true]);
        assert_eq!(d, Directions::TOP | Directions::RIGHT);
        assert_eq!(
            Directions::from_ordered([false, true, true, false]),
            Directions::LEFT | Directions::BOTTOM
        );
        assert!(d.allows(SwipeDirection::Right));
        assert!(!d.allows(SwipeDirection::Left));
    }

    #[test]
    fn default_enables_everything() {
        assert_eq!(Directions::default(), Directions::from_ordered([true; 4]));
    }
}
