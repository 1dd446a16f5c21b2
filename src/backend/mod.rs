//! Backends: where finished cell content goes.
//!
//! The drawing engine never touches a terminal directly. Everything it
//! produces is handed to a [`Backend`] as absolute, already-clipped grid
//! writes. Two implementations ship with the library:
//!
//! - [`GridBuffer`] - an in-memory cell grid, used by tests and headless
//!   rendering
//! - [`TermBackend`] - a thin crossterm binding for real terminals

mod grid;
mod term;

pub use grid::GridBuffer;
pub use term::TermBackend;

use crate::types::CellStyle;

/// The grid-writer boundary consumed by [`crate::console::Console`].
///
/// Implementations receive absolute grid coordinates; all clipping has
/// already happened. Writes outside the backend's own surface must be
/// ignored, not treated as errors.
pub trait Backend {
    /// Current surface size as (width, height) in cells.
    fn size(&mut self) -> (i32, i32);

    /// Set a single cell.
    fn draw_char(&mut self, x: i32, y: i32, ch: char, style: CellStyle);

    /// Set a horizontal run of cells starting at `(x, y)`.
    fn draw_str(&mut self, x: i32, y: i32, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            self.draw_char(x + i as i32, y, ch, style);
        }
    }

    /// Clear the whole surface.
    fn clear(&mut self);

    /// Make everything written so far visible.
    fn present(&mut self);

    /// Release the surface. Called once when the console shuts down.
    fn shutdown(&mut self);
}
