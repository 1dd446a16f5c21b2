//! Midpoint circle rasterization.

use super::hspan;
use crate::types::Point;

/// Emit the cells on the circle of `radius` around `center`.
///
/// Integer-only midpoint algorithm: one octant is walked with the decision
/// variable `f = 3 - 2r` and every step is mirrored into the other seven
/// octants. A radius of zero (or less) emits nothing.
pub fn circle_outline(center: Point, radius: i32, mut plot: impl FnMut(Point)) {
    if radius <= 0 {
        return;
    }

    let mut x = 0;
    let mut y = radius;
    let mut f = 3 - 2 * radius;

    while y >= x {
        plot(Point::new(center.x + x, center.y + y));
        plot(Point::new(center.x - x, center.y + y));
        plot(Point::new(center.x + x, center.y - y));
        plot(Point::new(center.x - x, center.y - y));
        plot(Point::new(center.x + y, center.y + x));
        plot(Point::new(center.x - y, center.y + x));
        plot(Point::new(center.x + y, center.y - x));
        plot(Point::new(center.x - y, center.y - x));

        if f < 0 {
            f += 4 * x + 6;
        } else {
            f += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
}

/// Emit every cell inside the circle of `radius` around `center`.
///
/// Same octant walk as [`circle_outline`], but each step emits four
/// symmetric horizontal spans instead of eight points.
pub fn circle_fill(center: Point, radius: i32, mut plot: impl FnMut(Point)) {
    if radius <= 0 {
        return;
    }

    let mut x = 0;
    let mut y = radius;
    let mut f = 3 - 2 * radius;

    while y >= x {
        hspan(center.x - x, center.x + x, center.y + y, &mut plot);
        hspan(center.x - x, center.x + x, center.y - y, &mut plot);
        hspan(center.x - y, center.x + y, center.y + x, &mut plot);
        hspan(center.x - y, center.x + y, center.y - x, &mut plot);

        if f < 0 {
            f += 4 * x + 6;
        } else {
            f += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn outline_set(center: Point, radius: i32) -> BTreeSet<(i32, i32)> {
        let mut set = BTreeSet::new();
        circle_outline(center, radius, |p| {
            set.insert((p.x, p.y));
        });
        set
    }

    fn fill_set(center: Point, radius: i32) -> BTreeSet<(i32, i32)> {
        let mut set = BTreeSet::new();
        circle_fill(center, radius, |p| {
            set.insert((p.x, p.y));
        });
        set
    }

    #[test]
    fn zero_radius_emits_nothing() {
        assert!(outline_set(Point::new(5, 5), 0).is_empty());
        assert!(fill_set(Point::new(5, 5), 0).is_empty());
    }

    #[test]
    fn negative_radius_emits_nothing() {
        assert!(outline_set(Point::new(0, 0), -3).is_empty());
        assert!(fill_set(Point::new(0, 0), -3).is_empty());
    }

    #[test]
    fn radius_one_is_the_four_neighbors() {
        let set = outline_set(Point::new(0, 0), 1);
        let expected = BTreeSet::from([(0, 1), (0, -1), (1, 0), (-1, 0)]);
        assert_eq!(set, expected);
    }

    #[test]
    fn outline_is_eightfold_symmetric() {
        let set = outline_set(Point::new(0, 0), 5);
        for &(x, y) in &set {
            assert!(set.contains(&(-x, y)));
            assert!(set.contains(&(x, -y)));
            assert!(set.contains(&(y, x)));
        }
    }

    #[test]
    fn outline_cells_lie_near_the_ideal_radius() {
        let radius = 6;
        for &(x, y) in &outline_set(Point::new(0, 0), radius) {
            let dist = ((x * x + y * y) as f64).sqrt();
            assert!(
                (dist - radius as f64).abs() < 1.0,
                "({x}, {y}) is {dist:.2} from center"
            );
        }
    }

    #[test]
    fn fill_is_superset_of_outline() {
        for radius in 1..=7 {
            let filled = fill_set(Point::new(3, -2), radius);
            let outline = outline_set(Point::new(3, -2), radius);
            assert!(outline.is_subset(&filled), "radius {radius}");
        }
    }

    #[test]
    fn fill_covers_full_center_row_and_column() {
        let radius = 4;
        let filled = fill_set(Point::new(0, 0), radius);
        for i in -radius..=radius {
            assert!(filled.contains(&(i, 0)));
            assert!(filled.contains(&(0, i)));
        }
    }

    #[test]
    fn offset_center_translates_the_cell_set() {
        let at_origin = outline_set(Point::new(0, 0), 3);
        let translated = outline_set(Point::new(10, 20), 3);
        let expected: BTreeSet<_> = at_origin.iter().map(|&(x, y)| (x + 10, y + 20)).collect();
        assert_eq!(translated, expected);
    }
}
