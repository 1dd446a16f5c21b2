//! Quad rasterization: outline and two-triangle fill.
//!
//! Quads are assumed simple (non-self-intersecting) and consistently
//! wound; no validation is performed.

use super::{line, triangle_fill};
use crate::types::Point;

/// Emit the four edges of the quad `a`-`b`-`c`-`d`.
pub fn quad_outline(a: Point, b: Point, c: Point, d: Point, mut plot: impl FnMut(Point)) {
    line(a, b, &mut plot);
    line(b, c, &mut plot);
    line(c, d, &mut plot);
    line(d, a, &mut plot);
}

/// Emit every cell of the quad interior, edges included.
///
/// Decomposes along the `a`-`c` diagonal into triangles `a`-`b`-`c` and
/// `a`-`c`-`d`, filling each with the scanline algorithm.
pub fn quad_fill(a: Point, b: Point, c: Point, d: Point, mut plot: impl FnMut(Point)) {
    triangle_fill(a, b, c, &mut plot);
    triangle_fill(a, c, d, &mut plot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn outline_set(a: Point, b: Point, c: Point, d: Point) -> BTreeSet<(i32, i32)> {
        let mut set = BTreeSet::new();
        quad_outline(a, b, c, d, |p| {
            set.insert((p.x, p.y));
        });
        set
    }

    fn fill_set(a: Point, b: Point, c: Point, d: Point) -> BTreeSet<(i32, i32)> {
        let mut set = BTreeSet::new();
        quad_fill(a, b, c, d, |p| {
            set.insert((p.x, p.y));
        });
        set
    }

    #[test]
    fn axis_aligned_rectangle_outline() {
        let set = outline_set(
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 3),
            Point::new(0, 3),
        );
        for x in 0..=4 {
            assert!(set.contains(&(x, 0)));
            assert!(set.contains(&(x, 3)));
        }
        for y in 0..=3 {
            assert!(set.contains(&(0, y)));
            assert!(set.contains(&(4, y)));
        }
        // Interior stays empty in outline mode.
        assert!(!set.contains(&(2, 1)));
    }

    #[test]
    fn axis_aligned_rectangle_fill_is_solid() {
        let set = fill_set(
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 3),
            Point::new(0, 3),
        );
        for y in 0..=3 {
            for x in 0..=4 {
                assert!(set.contains(&(x, y)), "missing ({x}, {y})");
            }
        }
        assert_eq!(set.len(), 5 * 4);
    }

    #[test]
    fn fill_is_superset_of_outline() {
        let (a, b, c, d) = (
            Point::new(1, 0),
            Point::new(7, 2),
            Point::new(6, 8),
            Point::new(0, 5),
        );
        let filled = fill_set(a, b, c, d);
        let outline = outline_set(a, b, c, d);
        assert!(outline.is_subset(&filled));
    }
}
