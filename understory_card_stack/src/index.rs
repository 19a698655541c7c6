// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular index arithmetic over a deck of `count` items.
//!
//! All functions are total for `count >= 1`. With an empty deck there is no
//! valid index; callers render nothing instead of calling in here.

/// Index after `index`, wrapping from the last item back to `0`.
///
/// `count` must be at least 1.
#[inline]
pub fn next_index(count: usize, index: usize) -> usize {
    debug_assert!(count > 0, "next_index on an empty deck");
    if index + 1 >= count { 0 } else { index + 1 }
}

/// Index before `active`, wrapping from `0` to the last item.
///
/// After a swipe commits, this names the item that was just dismissed.
/// `count` must be at least 1.
#[inline]
pub fn previous_index(count: usize, active: usize) -> usize {
    debug_assert!(count > 0, "previous_index on an empty deck");
    if active == 0 { count - 1 } else { active - 1 }
}

/// Item shown at stack `depth` (0 = front) when `active` is the front item.
///
/// The step from `active + depth - 1` wraps at most once, so a deck shorter than
/// the visible layer count yields `None` for the layers it cannot fill. In
/// non-infinite mode nothing wraps: layers past the last item are `None` rather
/// than rendered stale.
pub fn item_at_depth(count: usize, active: usize, depth: usize, infinite: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let raw = active + depth;
    // `raw` is the position one step after `active + depth - 1`.
    if raw < count {
        return Some(raw);
    }
    if !infinite {
        return None;
    }
    let idx = raw - count;
    (idx < count).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wraparound() {
        assert_eq!(next_index(5, 4), 0);
        assert_eq!(previous_index(5, 0), 4);
        assert_eq!(next_index(5, 2), 3);
        assert_eq!(previous_index(5, 3), 2);
        assert_eq!(next_index(1, 0), 0);
        assert_eq!(previous_index(1, 0), 0);
    }

    #[test]
    fn front_layer_is_active_item() {
        for active in 0..4 {
            assert_eq!(item_at_depth(4, active, 0, false), Some(active));
            assert_eq!(item_at_depth(4, active, 0, true), Some(active));
        }
    }

    #[test]
    fn finite_deck_hides_wrapped_layers() {
        // Last card: nothing behind it in finite mode.
        assert_eq!(item_at_depth(5, 4, 1, false), None);
        assert_eq!(item_at_depth(5, 4, 1, true), Some(0));
        assert_eq!(item_at_depth(5, 3, 1, false), Some(4));
        assert_eq!(item_at_depth(5, 3, 2, false), None);
        assert_eq!(item_at_depth(5, 3, 2, true), Some(0));
    }

    #[test]
    fn short_deck_fills_what_it_can() {
        // A single card wraps once onto itself, then runs out.
        assert_eq!(item_at_depth(1, 0, 0, true), Some(0));
        assert_eq!(item_at_depth(1, 0, 1, true), Some(0));
        assert_eq!(item_at_depth(1, 0, 2, true), None);
        assert_eq!(item_at_depth(0, 0, 0, true), None);
        assert_eq!(item_at_depth(2, 0, 2, false), None);
        assert_eq!(item_at_depth(2, 0, 2, true), Some(0));
    }

    proptest! {
        #[test]
        fn previous_undoes_next(count in 1usize..512, seed in 0usize..512) {
            let index = seed % count;
            prop_assert_eq!(previous_index(count, next_index(count, index)), index);
            prop_assert_eq!(next_index(count, previous_index(count, index)), index);
        }

        #[test]
        fn depth_items_stay_in_range(count in 1usize..64, seed in 0usize..64, depth in 0usize..8) {
            let active = seed % count;
            if let Some(i) = item_at_depth(count, active, depth, true) {
                prop_assert!(i < count);
                if depth < count {
                    prop_assert_eq!(i, (active + depth) % count);
                }
            }
        }
    }
}
