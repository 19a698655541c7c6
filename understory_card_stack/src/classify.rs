// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release-time swipe classification.
//!
//! A drag commits in a direction when its displacement along that axis exceeds
//! the threshold (strictly) and the direction is enabled. When several axes
//! qualify at once the winner is fixed: right, then left, then top, then bottom.

use kurbo::Vec2;

use crate::directions::{Directions, SwipeDirection};

/// Classify a finished drag. `None` means the card settles back.
pub fn classify(drag: Vec2, threshold: f64, enabled: Directions) -> Option<SwipeDirection> {
    let left = drag.x < -threshold && enabled.allows(SwipeDirection::Left);
    let right = drag.x > threshold && enabled.allows(SwipeDirection::Right);
    let top = drag.y < -threshold && enabled.allows(SwipeDirection::Top);
    let bottom = drag.y > threshold && enabled.allows(SwipeDirection::Bottom);

    if right {
        Some(SwipeDirection::Right)
    } else if left {
        Some(SwipeDirection::Left)
    } else if top {
        Some(SwipeDirection::Top)
    } else if bottom {
        Some(SwipeDirection::Bottom)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: Directions = Directions::all();

    #[test]
    fn single_axis() {
        assert_eq!(classify(Vec2::new(71.0, 0.0), 70.0, ALL), Some(SwipeDirection::Right));
        assert_eq!(classify(Vec2::new(-71.0, 0.0), 70.0, ALL), Some(SwipeDirection::Left));
        assert_eq!(classify(Vec2::new(0.0, -71.0), 70.0, ALL), Some(SwipeDirection::Top));
        assert_eq!(classify(Vec2::new(0.0, 71.0), 70.0, ALL), Some(SwipeDirection::Bottom));
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(classify(Vec2::new(70.0, -70.0), 70.0, ALL), None);
        assert_eq!(classify(Vec2::new(30.0, 30.0), 70.0, ALL), None);
    }

    #[test]
    fn precedence_right_left_top_bottom() {
        assert_eq!(classify(Vec2::new(71.0, -80.0), 70.0, ALL), Some(SwipeDirection::Right));
        assert_eq!(classify(Vec2::new(-71.0, 300.0), 70.0, ALL), Some(SwipeDirection::Left));
        assert_eq!(classify(Vec2::new(10.0, -90.0), 70.0, ALL), Some(SwipeDirection::Top));
    }

    #[test]
    fn disabled_direction_never_wins() {
        let no_right = Directions::from_ordered([true, true, true, false]);
        assert_eq!(classify(Vec2::new(200.0, 0.0), 70.0, no_right), None);
        // A disabled winner yields to the next qualifying axis.
        assert_eq!(
            classify(Vec2::new(200.0, 90.0), 70.0, no_right),
            Some(SwipeDirection::Bottom)
        );
    }
}
