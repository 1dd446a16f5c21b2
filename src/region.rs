//! Nested clip regions and the coordinate clipper.
//!
//! Clip regions form a strict stack: each pushed rectangle is interpreted
//! in the coordinate space of the region below it (the bottom of the chain
//! is the console surface itself). The effective visible rectangle is the
//! intersection of the whole chain, and every drawing call is translated by
//! the chain's cumulative origin offset.
//!
//! Rectangles are not validated at push time; a region that escapes its
//! parent simply clips everything lazily when bounds are computed.

use crate::types::{Point, Rect};

// =============================================================================
// RegionStack
// =============================================================================

/// A LIFO stack of nested clip regions.
///
/// The stack exclusively owns its rectangles; popping with an empty stack
/// is a no-op, never an error.
#[derive(Debug, Clone, Default)]
pub struct RegionStack {
    regions: Vec<Rect>,
}

impl RegionStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a region interpreted relative to the current innermost region.
    pub fn push(&mut self, region: Rect) {
        self.regions.push(region);
    }

    /// Pop the innermost region. No-op when the stack is empty.
    pub fn pop(&mut self) {
        self.regions.pop();
    }

    /// Number of active regions.
    pub fn depth(&self) -> usize {
        self.regions.len()
    }

    /// Whether any region is active.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Drop all active regions.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Compute the effective visible rectangle for a console of the given
    /// size.
    ///
    /// Walks the chain from outermost to innermost, summing region origins
    /// into the cumulative offset and intersecting each region's absolute
    /// edges with the accumulated rectangle. With an empty stack this is
    /// the console rectangle itself.
    pub fn bounds(&self, console_width: i32, console_height: i32) -> Bounds {
        let mut bounds = Bounds {
            offset_x: 0,
            offset_y: 0,
            left: 0,
            top: 0,
            right: console_width,
            bottom: console_height,
        };
        for region in &self.regions {
            bounds.offset_x += region.x;
            bounds.offset_y += region.y;
            bounds.left = bounds.left.max(bounds.offset_x);
            bounds.top = bounds.top.max(bounds.offset_y);
            bounds.right = bounds.right.min(bounds.offset_x + region.width);
            bounds.bottom = bounds.bottom.min(bounds.offset_y + region.height);
        }
        bounds
    }
}

// =============================================================================
// Bounds - The effective visible rectangle
// =============================================================================

/// The intersection of all active clip regions with the console surface.
///
/// `offset_x`/`offset_y` translate region-local draw coordinates into
/// absolute grid coordinates; `left`/`top` are the absolute inclusive edges
/// and `right`/`bottom` the absolute exclusive edges of the visible
/// rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub offset_x: i32,
    pub offset_y: i32,
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Outcome of clipping a fixed-length horizontal write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunClip {
    /// Nothing of the run lands inside the effective rectangle.
    Discard,
    /// `take` characters starting at run index `skip` are visible; the
    /// first visible character lands at absolute position `origin`.
    Visible {
        skip: usize,
        take: usize,
        origin: Point,
    },
}

impl Bounds {
    /// Visible width of the effective rectangle.
    pub fn width(&self) -> i32 {
        (self.right - self.left).max(0)
    }

    /// Visible height of the effective rectangle.
    pub fn height(&self) -> i32 {
        (self.bottom - self.top).max(0)
    }

    /// Whether the region-local point lands inside the effective rectangle.
    ///
    /// This is the per-cell check applied to every cell emitted by the
    /// geometry primitives, so all primitive kinds clip identically.
    pub fn contains(&self, p: Point) -> bool {
        let x = p.x + self.offset_x;
        let y = p.y + self.offset_y;
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Translate a region-local point into absolute grid coordinates.
    pub fn translate(&self, p: Point) -> Point {
        Point::new(p.x + self.offset_x, p.y + self.offset_y)
    }

    /// Clip a fixed-length horizontal write starting at region-local
    /// `(x, y)`.
    ///
    /// The run is translated by the cumulative offset and truncated against
    /// all four edges of the effective rectangle: rows outside the
    /// rectangle discard the whole run, columns clip it to the visible
    /// span. Callers draw `take` characters of the run starting at index
    /// `skip`, positioned at `origin`.
    pub fn clip_run(&self, x: i32, y: i32, len: usize) -> RunClip {
        let abs_x = x + self.offset_x;
        let abs_y = y + self.offset_y;

        if abs_y < self.top || abs_y >= self.bottom {
            return RunClip::Discard;
        }

        let start = abs_x.max(self.left);
        let end = (abs_x + len as i32).min(self.right);
        if end <= start {
            return RunClip::Discard;
        }

        RunClip::Visible {
            skip: (start - abs_x) as usize,
            take: (end - start) as usize,
            origin: Point::new(start, abs_y),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
