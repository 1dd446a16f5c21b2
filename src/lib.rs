//! # glyphgrid
//!
//! Character-grid drawing library for terminals.
//!
//! glyphgrid rasterizes characters, strings, and vector shapes (lines,
//! triangles, quads, circles) onto a rectangular cell grid, honoring a
//! stack of nested clip regions and a selectable polygon render mode, then
//! hands finished cell content to a pluggable backend.
//!
//! ## Architecture
//!
//! ```text
//! draw call → polygon-mode dispatch → geometry primitive
//!           → region-stack clipping → backend cell write
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core value types (Point, Rect, PolygonMode, colors, features)
//! - [`error`] - Non-fatal error taxonomy and the error side channel
//! - [`geometry`] - Pure rasterization primitives
//! - [`region`] - Nested clip regions and the coordinate clipper
//! - [`backend`] - The grid-writer boundary and its implementations
//! - [`console`] - The drawing context tying everything together
//!
//! ## Example
//!
//! ```
//! use glyphgrid::{backend::GridBuffer, console::Console, types::{Point, PolygonMode}};
//!
//! let mut console = Console::new(GridBuffer::new(40, 12));
//! console.begin_region(2, 1, 30, 10);
//! console.draw_str(0, 0, "status");
//! console.set_polygon_mode(PolygonMode::Fill);
//! console.draw_triangle(Point::new(2, 2), Point::new(12, 2), Point::new(7, 8), '#');
//! console.end_region();
//! console.refresh();
//! ```

pub mod backend;
pub mod console;
pub mod error;
pub mod geometry;
pub mod region;
pub mod types;

// Re-export the everyday surface.
pub use backend::{Backend, GridBuffer, TermBackend};
pub use console::Console;
pub use error::Error;
pub use types::{Cell, CellStyle, Color, Feature, Point, PolygonMode, Rect};
