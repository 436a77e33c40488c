//! Border wrap and hit-box tests
//!
//! Hit-boxes are axis-aligned squares centered on the obstacle, not circles.

use glam::Vec2;

use crate::Playfield;

/// Result of a border wrap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapResult {
    pub pos: Vec2,
    /// True if either axis crossed an edge
    pub crossed: bool,
}

/// Wrap a position back onto the toroidal playfield.
///
/// Each axis is handled on its own: a coordinate at or past the far edge
/// restarts at 0, a negative coordinate snaps to the far edge. The far edge
/// is the largest value below the bound, so the returned position always
/// lies within [0, width) x [0, height).
pub fn wrap_position(pos: Vec2, field: &Playfield) -> WrapResult {
    let (x, crossed_x) = wrap_axis(pos.x, field.width);
    let (y, crossed_y) = wrap_axis(pos.y, field.height);
    WrapResult {
        pos: Vec2::new(x, y),
        crossed: crossed_x || crossed_y,
    }
}

fn wrap_axis(value: f32, bound: f32) -> (f32, bool) {
    if value < 0.0 {
        (bound.next_down(), true)
    } else if value >= bound {
        (0.0, true)
    } else {
        (value, false)
    }
}

/// Square hit-box test: `point` lies strictly within `half_extent` of
/// `center` on both axes
#[inline]
pub fn within_box(center: Vec2, half_extent: f32, point: Vec2) -> bool {
    point.x > center.x - half_extent
        && point.x < center.x + half_extent
        && point.y > center.y - half_extent
        && point.y < center.y + half_extent
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::sim::Obstacle;

    #[test]
    fn test_wrap_inside_is_untouched() {
        let field = Playfield::default();
        let result = wrap_position(Vec2::new(10.0, 20.0), &field);
        assert!(!result.crossed);
        assert_eq!(result.pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_wrap_far_edge_restarts_at_zero() {
        let field = Playfield::new(500.0, 400.0);
        let result = wrap_position(Vec2::new(500.0, 401.0), &field);
        assert!(result.crossed);
        assert_eq!(result.pos, Vec2::ZERO);
    }

    #[test]
    fn test_wrap_negative_snaps_to_far_edge() {
        let field = Playfield::new(500.0, 400.0);
        let result = wrap_position(Vec2::new(-2.0, 100.0), &field);
        assert!(result.crossed);
        assert_eq!(result.pos.x, 500.0f32.next_down());
        assert_eq!(result.pos.y, 100.0);

        // Overshoot size does not matter
        let result = wrap_position(Vec2::new(-600.0, -0.5), &field);
        assert_eq!(result.pos, Vec2::new(500.0f32.next_down(), 400.0f32.next_down()));
    }

    #[test]
    fn test_both_edges_snap_regardless_of_overshoot() {
        let field = Playfield::default();
        let mut left = Obstacle::new(Vec2::new(1.0, 250.0), Vec2::new(-10.0, 0.0), 10.0);
        let mut right = Obstacle::new(Vec2::new(499.0, 250.0), Vec2::new(10.0, 0.0), 10.0);
        left.advance_physics(1.0, &field);
        right.advance_physics(1.0, &field);

        assert_eq!(left.body.pos.x, field.width.next_down());
        assert_eq!(right.body.pos.x, 0.0);
    }

    #[test]
    fn test_within_box_edges_are_exclusive() {
        let center = Vec2::new(100.0, 100.0);
        assert!(within_box(center, 15.0, Vec2::new(105.0, 105.0)));
        assert!(!within_box(center, 15.0, Vec2::new(115.0, 100.0)));
        assert!(!within_box(center, 15.0, Vec2::new(120.0, 120.0)));
        // Corner of the square is inside even though a circle would miss it
        assert!(within_box(center, 15.0, Vec2::new(114.0, 86.0)));
    }

    proptest! {
        #[test]
        fn prop_wrap_stays_on_field(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            width in 1.0f32..1000.0,
            height in 1.0f32..1000.0,
        ) {
            let field = Playfield::new(width, height);
            let result = wrap_position(Vec2::new(x, y), &field);
            prop_assert!(field.contains(result.pos));
            prop_assert_eq!(result.crossed, !field.contains(Vec2::new(x, y)));
        }
    }
}
