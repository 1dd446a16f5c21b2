//! Triangle rasterization: outline and scanline fill.

use super::{hspan, line};
use crate::types::Point;

/// Emit the three edges of the triangle `a`-`b`-`c`.
pub fn triangle_outline(a: Point, b: Point, c: Point, mut plot: impl FnMut(Point)) {
    line(a, b, &mut plot);
    line(b, c, &mut plot);
    line(c, a, &mut plot);
}

/// Emit every cell of the triangle interior, edges included.
///
/// Classic scanline fill: the vertices are sorted by row, flat-top and
/// flat-bottom triangles are walked directly, and the general case is split
/// at the middle vertex row by interpolating X on the long edge. The three
/// edges are traced as well, so the filled set always covers the outline
/// even where span rounding lands inside a steep edge.
pub fn triangle_fill(a: Point, b: Point, c: Point, mut plot: impl FnMut(Point)) {
    let mut v = [a, b, c];
    v.sort_by_key(|p| (p.y, p.x));
    let [top, mid, bot] = v;

    if mid.y == bot.y {
        fill_flat_bottom(top, mid, bot, &mut plot);
    } else if top.y == mid.y {
        fill_flat_top(top, mid, bot, &mut plot);
    } else {
        // Split on the long edge at the middle vertex row.
        let t = (mid.y - top.y) as f64 / (bot.y - top.y) as f64;
        let split_x = (top.x as f64 + t * (bot.x - top.x) as f64).round() as i32;
        let split = Point::new(split_x, mid.y);
        fill_flat_bottom(top, mid, split, &mut plot);
        fill_flat_top(mid, split, bot, &mut plot);
    }

    triangle_outline(a, b, c, &mut plot);
}

/// Fill a triangle whose two bottom vertices share a row.
fn fill_flat_bottom(top: Point, b1: Point, b2: Point, plot: &mut impl FnMut(Point)) {
    let dy = b1.y - top.y;
    if dy == 0 {
        // All three vertices on one row.
        hspan(top.x.min(b1.x).min(b2.x), top.x.max(b1.x).max(b2.x), top.y, plot);
        return;
    }
    let invslope1 = (b1.x - top.x) as f64 / dy as f64;
    let invslope2 = (b2.x - top.x) as f64 / dy as f64;
    let mut x1 = top.x as f64;
    let mut x2 = top.x as f64;
    for y in top.y..=b1.y {
        hspan(x1.round() as i32, x2.round() as i32, y, plot);
        x1 += invslope1;
        x2 += invslope2;
    }
}

/// Fill a triangle whose two top vertices share a row.
fn fill_flat_top(t1: Point, t2: Point, bot: Point, plot: &mut impl FnMut(Point)) {
    let dy = bot.y - t1.y;
    if dy == 0 {
        hspan(bot.x.min(t1.x).min(t2.x), bot.x.max(t1.x).max(t2.x), bot.y, plot);
        return;
    }
    let invslope1 = (bot.x - t1.x) as f64 / dy as f64;
    let invslope2 = (bot.x - t2.x) as f64 / dy as f64;
    let mut x1 = bot.x as f64;
    let mut x2 = bot.x as f64;
    for y in (t1.y..=bot.y).rev() {
        hspan(x1.round() as i32, x2.round() as i32, y, plot);
        x1 -= invslope1;
        x2 -= invslope2;
    }
}
