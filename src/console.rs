//! The console context: drawing API, polygon-mode dispatch, clip control.
//!
//! `Console` holds all rendering state — cached surface size, feature
//! bitmask, polygon mode, current colors, the clip-region stack, and the
//! error side channel — as one explicit context passed by `&mut` to every
//! operation. Exclusive access is therefore enforced by the borrow
//! checker; there is no interior locking.
//!
//! # Data flow
//!
//! ```text
//! draw call → mode dispatch → geometry primitive → per-cell clip → backend
//! ```
//!
//! Every cell emitted by a primitive passes through the effective clip
//! rectangle before it reaches the backend, so all primitive kinds clip
//! identically. String and character writes are clipped as horizontal runs
//! instead, which lets the backend receive one contiguous write.
//!
//! # Errors
//!
//! No drawing operation returns `Result`. A call that cannot proceed
//! reports through the error callback (and the pull-style last-error slot)
//! and returns without side effects.

use crate::backend::Backend;
use crate::error::{Error, ErrorCallback};
use crate::geometry;
use crate::region::{RegionStack, RunClip};
use crate::types::{CellStyle, Color, Feature, Point, PolygonMode, Rect};

// =============================================================================
// Lifecycle
// =============================================================================

/// Whether the console is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Ready,
    Terminated,
}

// =============================================================================
// Console
// =============================================================================

/// A character-grid drawing surface over a [`Backend`].
pub struct Console<B: Backend> {
    backend: B,
    lifecycle: Lifecycle,
    width: i32,
    height: i32,
    features: Feature,
    mode: PolygonMode,
    style: CellStyle,
    regions: RegionStack,
    error_callback: Option<ErrorCallback>,
    last_error: Option<Error>,
}

impl<B: Backend> Console<B> {
    /// Create a console over the given backend, caching its surface size.
    pub fn new(mut backend: B) -> Self {
        let (width, height) = backend.size();
        log::trace!("console up, surface {width}x{height}");
        Self {
            backend,
            lifecycle: Lifecycle::Ready,
            width,
            height,
            features: Feature::empty(),
            mode: PolygonMode::default(),
            style: CellStyle::UNSET,
            regions: RegionStack::new(),
            error_callback: None,
            last_error: None,
        }
    }

    /// Shut the console down: all state is reset, the backend is released,
    /// and every subsequent operation reports [`Error::NotInitialized`].
    ///
    /// Dropping the console does the same thing; calling this twice is a
    /// no-op.
    pub fn shutdown(&mut self) {
        if self.lifecycle == Lifecycle::Terminated {
            return;
        }
        self.lifecycle = Lifecycle::Terminated;
        self.regions.clear();
        self.features = Feature::empty();
        self.mode = PolygonMode::default();
        self.style = CellStyle::UNSET;
        self.backend.shutdown();
        log::trace!("console down");
    }

    /// Borrow the backend, e.g. to inspect a [`crate::backend::GridBuffer`].
    pub fn backend(&self) -> &B {
        &self.backend
    }

    // =========================================================================
    // Error side channel
    // =========================================================================

    /// Install an error callback, returning the previous one.
    pub fn set_error_callback(&mut self, callback: Option<ErrorCallback>) -> Option<ErrorCallback> {
        std::mem::replace(&mut self.error_callback, callback)
    }

    /// Take the most recent error, clearing the slot.
    pub fn take_last_error(&mut self) -> Option<Error> {
        self.last_error.take()
    }

    fn report(&mut self, error: Error) {
        log::warn!("{error} (code {:#06x})", error.code());
        if let Some(callback) = self.error_callback.as_mut() {
            callback(&error);
        }
        self.last_error = Some(error);
    }

    /// Precondition shared by every public operation.
    fn ready(&mut self) -> bool {
        if self.lifecycle == Lifecycle::Ready {
            true
        } else {
            self.report(Error::NotInitialized);
            false
        }
    }

    // =========================================================================
    // Surface
    // =========================================================================

    /// Cached surface size as (width, height).
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Re-query the backend for the surface size and cache the result.
    pub fn refresh_size(&mut self) {
        if !self.ready() {
            return;
        }
        let (width, height) = self.backend.size();
        if (width, height) != (self.width, self.height) {
            log::trace!("surface resized to {width}x{height}");
        }
        self.width = width;
        self.height = height;
    }

    /// Clear the whole surface.
    pub fn clear(&mut self) {
        if self.ready() {
            self.backend.clear();
        }
    }

    /// Present everything drawn since the last refresh.
    pub fn refresh(&mut self) {
        if self.ready() {
            self.backend.present();
        }
    }

    // =========================================================================
    // Features and colors
    // =========================================================================

    /// Enable optional features.
    pub fn enable(&mut self, features: Feature) {
        if self.ready() {
            self.features |= features;
        }
    }

    /// Disable optional features.
    pub fn disable(&mut self, features: Feature) {
        if self.ready() {
            self.features -= features;
        }
    }

    /// Whether all the given features are enabled.
    pub fn is_enabled(&self, features: Feature) -> bool {
        self.features.contains(features)
    }

    /// Set the colors applied to subsequent draws. Requires
    /// [`Feature::COLOR`]; otherwise reports [`Error::NotEnabled`] and
    /// leaves the current colors unchanged.
    pub fn set_color(&mut self, fg: Option<Color>, bg: Option<Color>) {
        if !self.ready() {
            return;
        }
        if !self.features.contains(Feature::COLOR) {
            self.report(Error::NotEnabled(Feature::COLOR));
            return;
        }
        self.style = CellStyle::new(fg, bg);
    }

    // =========================================================================
    // Polygon mode
    // =========================================================================

    /// Select how subsequent shape primitives are rendered.
    pub fn set_polygon_mode(&mut self, mode: PolygonMode) {
        if self.ready() {
            self.mode = mode;
        }
    }

    /// The currently selected polygon mode.
    pub fn polygon_mode(&self) -> PolygonMode {
        self.mode
    }

    // =========================================================================
    // Clip regions
    // =========================================================================

    /// Push a clip region relative to the current innermost region.
    ///
    /// Negative extents report [`Error::InvalidValue`] and push nothing.
    /// The rectangle itself is not validated against its parent — clipping
    /// happens lazily on every draw.
    pub fn begin_region(&mut self, x: i32, y: i32, width: i32, height: i32) {
        if !self.ready() {
            return;
        }
        if width < 0 || height < 0 {
            self.report(Error::InvalidValue(format!(
                "region extent {width}x{height} is negative"
            )));
            return;
        }
        log::trace!("begin region {x},{y} {width}x{height}");
        self.regions.push(Rect::new(x, y, width, height));
    }

    /// Pop the innermost clip region. No-op when no region is active.
    pub fn end_region(&mut self) {
        if !self.ready() {
            return;
        }
        log::trace!("end region (depth {})", self.regions.depth());
        self.regions.pop();
    }

    /// Size of the effective visible rectangle as (width, height).
    pub fn region_bounds(&mut self) -> (i32, i32) {
        if !self.ready() {
            return (0, 0);
        }
        let bounds = self.regions.bounds(self.width, self.height);
        (bounds.width(), bounds.height())
    }

    // =========================================================================
    // Character and string drawing
    // =========================================================================

    /// Draw a single character at region-local `(x, y)`.
    pub fn draw_char(&mut self, x: i32, y: i32, ch: char) {
        if !self.ready() {
            return;
        }
        let bounds = self.regions.bounds(self.width, self.height);
        if let RunClip::Visible { origin, .. } = bounds.clip_run(x, y, 1) {
            self.backend.draw_char(origin.x, origin.y, ch, self.style);
        }
    }

    /// Draw a string starting at region-local `(x, y)`.
    ///
    /// The run is clipped against the effective rectangle: a fully outside
    /// run is discarded, a partially visible one is truncated to its
    /// visible characters.
    pub fn draw_str(&mut self, x: i32, y: i32, s: &str) {
        if !self.ready() {
            return;
        }
        let len = s.chars().count();
        if len == 0 {
            return;
        }
        let bounds = self.regions.bounds(self.width, self.height);
        match bounds.clip_run(x, y, len) {
            RunClip::Discard => {}
            RunClip::Visible { skip, take, origin } => {
                if skip == 0 && take == len {
                    self.backend.draw_str(origin.x, origin.y, s, self.style);
                } else {
                    let visible: String = s.chars().skip(skip).take(take).collect();
                    self.backend.draw_str(origin.x, origin.y, &visible, self.style);
                }
            }
        }
    }

    // =========================================================================
    // Shape drawing (polygon-mode dispatch)
    // =========================================================================

    /// Draw a line from `a` to `b` with the fill character `ch`.
    ///
    /// `Points` mode draws the two endpoints; `Lines` and `Fill` both draw
    /// the Bresenham line (a line has no interior).
    pub fn draw_line(&mut self, a: Point, b: Point, ch: char) {
        if !self.ready() {
            return;
        }
        let mode = self.mode;
        self.rasterize(ch, |plot| match mode {
            PolygonMode::Points => {
                plot(a);
                plot(b);
            }
            PolygonMode::Lines | PolygonMode::Fill => geometry::line(a, b, plot),
        });
    }

    /// Draw the triangle `a`-`b`-`c` with the fill character `ch`.
    pub fn draw_triangle(&mut self, a: Point, b: Point, c: Point, ch: char) {
        if !self.ready() {
            return;
        }
        let mode = self.mode;
        self.rasterize(ch, |plot| match mode {
            PolygonMode::Points => {
                plot(a);
                plot(b);
                plot(c);
            }
            PolygonMode::Lines => geometry::triangle_outline(a, b, c, plot),
            PolygonMode::Fill => geometry::triangle_fill(a, b, c, plot),
        });
    }

    /// Draw the quad `a`-`b`-`c`-`d` with the fill character `ch`.
    ///
    /// The quad must be simple and consistently wound; fill mode
    /// decomposes it along the `a`-`c` diagonal.
    pub fn draw_quad(&mut self, a: Point, b: Point, c: Point, d: Point, ch: char) {
        if !self.ready() {
            return;
        }
        let mode = self.mode;
        self.rasterize(ch, |plot| match mode {
            PolygonMode::Points => {
                plot(a);
                plot(b);
                plot(c);
                plot(d);
            }
            PolygonMode::Lines => geometry::quad_outline(a, b, c, d, plot),
            PolygonMode::Fill => geometry::quad_fill(a, b, c, d, plot),
        });
    }

    /// Draw a circle around `center` with the fill character `ch`.
    ///
    /// A negative radius reports [`Error::InvalidValue`]; a zero radius
    /// draws nothing in `Lines` and `Fill` modes. `Points` mode draws the
    /// center.
    pub fn draw_circle(&mut self, center: Point, radius: i32, ch: char) {
        if !self.ready() {
            return;
        }
        if radius < 0 {
            self.report(Error::InvalidValue(format!("circle radius {radius} is negative")));
            return;
        }
        let mode = self.mode;
        self.rasterize(ch, |plot| match mode {
            PolygonMode::Points => plot(center),
            PolygonMode::Lines => geometry::circle_outline(center, radius, plot),
            PolygonMode::Fill => geometry::circle_fill(center, radius, plot),
        });
    }

    /// Run a primitive and forward every surviving cell to the backend.
    ///
    /// The per-cell clip against the effective rectangle happens here, in
    /// one place for every shape primitive.
    fn rasterize(&mut self, ch: char, primitive: impl FnOnce(&mut dyn FnMut(Point))) {
        let bounds = self.regions.bounds(self.width, self.height);
        let style = self.style;
        let backend = &mut self.backend;
        primitive(&mut |p: Point| {
            if bounds.contains(p) {
                let abs = bounds.translate(p);
                backend.draw_char(abs.x, abs.y, ch, style);
            }
        });
    }
}

impl<B: Backend> Drop for Console<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// =============================================================================
// Tests
// =============================================================================
