// Pure slider geometry: justification gap, travel limits, and next-offset
// computation. No DOM access; callers apply the results.

use crate::types::{Bound, Direction};

/// Inter-item gap that makes `visibles` items plus `visibles - 1` gaps fill
/// the viewport. Rounds upward, so the last visible item may overflow the
/// viewport by up to `visibles - 2` pixels in total; this bias is accepted,
/// not corrected.
///
/// With zero or one visible item there is nothing to distribute and the
/// natural layout is left untouched.
pub fn justification_gap(viewport_size: i32, item_size: i32, visibles: u32) -> i32 {
    if visibles <= 1 {
        return 0;
    }

    let leftover = viewport_size - item_size * visibles as i32;
    // Math.ceil semantics: round toward positive infinity.
    (f64::from(leftover) / f64::from(visibles - 1)).ceil() as i32
}

/// Inclusive bound on the track offset.
///
/// Horizontal motion is a positive "distance traveled rightward" growing from
/// 0 up to the total scrollable distance; vertical motion is the sign-flipped
/// mirror (the track moves up, so the offset goes negative). The asymmetry
/// encodes which CSS edge is being adjusted and must not be "simplified" away.
///
/// When `visibles > item_count` the range degenerates; that is a caller error
/// and is deliberately not guarded here.
pub fn travel_limit(
    direction: Direction,
    bound: Bound,
    item_size: i32,
    gap: i32,
    item_count: usize,
    visibles: u32,
) -> i32 {
    let span = (item_size + gap) * (item_count as i32 - visibles as i32 + 1) - gap;

    match (direction, bound) {
        (Direction::Vertical, Bound::Max) => 0,
        (Direction::Vertical, Bound::Min) => -span,
        (Direction::Horizontal, Bound::Max) => span,
        (Direction::Horizontal, Bound::Min) => 0,
    }
}

/// Offset the track would land on after moving `steps` items from `current`.
/// `steps` may be negative (reverse) or have magnitude above 1 (multi-item
/// jump). The result is not limit-checked; see [`within_limits`].
pub fn next_offset(current: i32, item_size: i32, gap: i32, steps: i32, direction: Direction) -> i32 {
    let delta = (item_size + gap) * steps;

    match direction {
        Direction::Vertical => current - delta,
        Direction::Horizontal => current + delta,
    }
}

/// Inclusive containment check against the travel limits.
pub fn within_limits(offset: i32, min: i32, max: i32) -> bool {
    offset >= min && offset <= max
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn gap_distributes_leftover_space() {
        // visibles = 3, viewport = 100, item = 30: ceil((100 - 90) / 2) = 5.
        assert_eq!(justification_gap(100, 30, 3), 5);
    }

    #[test]
    fn gap_rounds_upward() {
        // leftover 10 over 3 gaps: ceil(3.33) = 4.
        assert_eq!(justification_gap(130, 30, 4), 4);
    }

    #[test]
    fn gap_rounds_toward_positive_infinity_when_negative() {
        // Items overflow the viewport: leftover -10 over 2 gaps, ceil(-5) = -5.
        assert_eq!(justification_gap(80, 30, 3), -5);
    }

    #[test]
    fn gap_skipped_for_single_visible() {
        assert_eq!(justification_gap(100, 30, 1), 0);
        assert_eq!(justification_gap(100, 30, 0), 0);
    }

    #[test]
    fn horizontal_limits() {
        // 5 items, 2 visible, item 50, gap 10: max = (50+10)*(5-2+1) - 10 = 230.
        assert_eq!(
            travel_limit(Direction::Horizontal, Bound::Max, 50, 10, 5, 2),
            230
        );
        assert_eq!(
            travel_limit(Direction::Horizontal, Bound::Min, 50, 10, 5, 2),
            0
        );
    }

    #[test]
    fn vertical_limits_mirror_horizontal() {
        assert_eq!(
            travel_limit(Direction::Vertical, Bound::Min, 50, 10, 5, 2),
            -230
        );
        assert_eq!(
            travel_limit(Direction::Vertical, Bound::Max, 50, 10, 5, 2),
            0
        );
    }

    #[test]
    fn offset_at_the_limit_is_accepted() {
        let min = travel_limit(Direction::Horizontal, Bound::Min, 50, 10, 5, 2);
        let max = travel_limit(Direction::Horizontal, Bound::Max, 50, 10, 5, 2);
        assert!(within_limits(230, min, max));
        assert!(!within_limits(240, min, max));
        assert!(!within_limits(-1, min, max));
    }

    #[test]
    fn next_offset_direction_signs() {
        // One step of (50 + 10) pixels.
        assert_eq!(next_offset(0, 50, 10, 1, Direction::Horizontal), 60);
        assert_eq!(next_offset(0, 50, 10, 1, Direction::Vertical), -60);
        assert_eq!(next_offset(120, 50, 10, -2, Direction::Horizontal), 0);
    }

    proptest! {
        /// Round-trip law: moving by `steps` and back restores the offset.
        #[test]
        fn next_offset_round_trips(
            current in -10_000i32..10_000,
            item_size in 1i32..500,
            gap in 0i32..50,
            steps in -20i32..20,
            vertical in any::<bool>(),
        ) {
            let direction = if vertical { Direction::Vertical } else { Direction::Horizontal };
            let there = next_offset(current, item_size, gap, steps, direction);
            let back = next_offset(there, item_size, gap, -steps, direction);
            prop_assert_eq!(back, current);
        }

        /// The vertical travel range is the exact negative mirror of the
        /// horizontal one for the same geometry.
        #[test]
        fn vertical_range_is_negated_horizontal(
            item_size in 1i32..500,
            gap in 0i32..50,
            item_count in 1usize..50,
            visibles in 1u32..10,
        ) {
            let h_max = travel_limit(Direction::Horizontal, Bound::Max, item_size, gap, item_count, visibles);
            let v_min = travel_limit(Direction::Vertical, Bound::Min, item_size, gap, item_count, visibles);
            prop_assert_eq!(v_min, -h_max);
        }

        /// The justified row never falls short: `visibles` items plus the
        /// computed gaps cover the whole viewport.
        #[test]
        fn justified_row_covers_viewport(
            viewport in 1i32..5_000,
            item_size in 1i32..500,
            visibles in 2u32..10,
        ) {
            let gap = justification_gap(viewport, item_size, visibles);
            let row = item_size * visibles as i32 + gap * (visibles as i32 - 1);
            prop_assert!(row >= viewport);
            // Ceil bias overflows by less than one pixel per gap.
            prop_assert!(row < viewport + visibles as i32 - 1);
        }
    }
}
