//! Pure rasterization primitives.
//!
//! Every function here converts a geometric primitive into the set of grid
//! cells it covers, emitting each cell through a `FnMut(Point)` sink. The
//! primitives know nothing about clipping, colors, or backends — callers
//! decide what happens to each emitted cell.
//!
//! - [`line`] - integer Bresenham walk between two endpoints
//! - [`triangle_outline`] / [`triangle_fill`] - edge cycle / scanline fill
//! - [`quad_outline`] / [`quad_fill`] - edge cycle / two-triangle fill
//! - [`circle_outline`] / [`circle_fill`] - midpoint circle algorithm

mod circle;
mod line;
mod quad;
mod triangle;

pub use circle::{circle_fill, circle_outline};
pub use line::line;
pub use quad::{quad_fill, quad_outline};
pub use triangle::{triangle_fill, triangle_outline};

use crate::types::Point;

/// Emit a horizontal run of cells from `x1` to `x2` inclusive, either order.
pub(crate) fn hspan(x1: i32, x2: i32, y: i32, plot: &mut impl FnMut(Point)) {
    let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
    for x in lo..=hi {
        plot(Point::new(x, y));
    }
}
