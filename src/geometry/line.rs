//! Bresenham line rasterization.

use crate::types::Point;

/// Emit every cell on the line segment from `a` to `b`, endpoints included.
///
/// Integer-only Bresenham in its error-term form: each iteration advances
/// the dominant axis, and the other axis whenever the doubled error term
/// crosses the corresponding delta. When both conditions hold in the same
/// iteration the walk steps diagonally, so the path is 8-connected with no
/// duplicate cells and exactly `1 + max(|dx|, |dy|)` cells overall.
///
/// The error term breaks rounding ties by walk direction, so the segment
/// is first canonicalized to start at the lexicographically smaller
/// endpoint; `line(a, b)` and `line(b, a)` therefore emit the same cell
/// set.
pub fn line(a: Point, b: Point, mut plot: impl FnMut(Point)) {
    let (a, b) = if (b.x, b.y) < (a.x, a.y) { (b, a) } else { (a, b) };

    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };

    let mut err = dx - dy;
    let mut x = a.x;
    let mut y = a.y;

    loop {
        plot(Point::new(x, y));
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}
