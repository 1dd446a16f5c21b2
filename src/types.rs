//! Core types shared across the library.
//!
//! Everything here is a plain value type: coordinates, rectangles, colors,
//! the polygon render mode, and the feature bitmask. The drawing engine in
//! [`crate::console`] and the rasterizers in [`crate::geometry`] only ever
//! exchange these.

use crate::error::Error;

// =============================================================================
// Point - A grid coordinate
// =============================================================================

/// A (column, row) position on the character grid.
///
/// Coordinates are signed and unbounded; whether a point is visible is
/// decided only against the current effective rectangle at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Rect - A clip-region rectangle
// =============================================================================

/// A rectangle in the coordinate space of its parent region.
///
/// Used both for clip regions (where nesting means the origin is relative
/// to the enclosing region) and for the console surface itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

// =============================================================================
// PolygonMode - How shape primitives are rendered
// =============================================================================

/// The current choice of rendering a shape primitive.
///
/// - `Points`: only the defining vertices (or the circle center) are drawn.
/// - `Lines`: the outline is drawn.
/// - `Fill`: the interior is filled (identical to `Lines` for line
///   primitives, which have no interior).
///
/// Mode changes take effect for subsequently issued draw calls only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PolygonMode {
    Points = 0,
    #[default]
    Lines = 1,
    Fill = 2,
}

impl TryFrom<u8> for PolygonMode {
    type Error = Error;

    /// Convert a raw mode value, rejecting anything outside the three
    /// defined modes with [`Error::InvalidValue`].
    fn try_from(value: u8) -> Result<Self, Error> {
        match value {
            0 => Ok(Self::Points),
            1 => Ok(Self::Lines),
            2 => Ok(Self::Fill),
            other => Err(Error::InvalidValue(format!(
                "polygon mode {other} is not one of points (0), lines (1), fill (2)"
            ))),
        }
    }
}

// =============================================================================
// Color and CellStyle
// =============================================================================

/// The eight base terminal colors.
///
/// Color depth negotiation with the backend is out of scope; backends map
/// these onto whatever palette they speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

/// Foreground/background pair applied to every cell write.
///
/// `None` means "unset": the backend keeps its default color for that
/// channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl CellStyle {
    /// Style with both channels unset.
    pub const UNSET: Self = Self { fg: None, bg: None };

    /// Create a style from explicit channels.
    pub const fn new(fg: Option<Color>, bg: Option<Color>) -> Self {
        Self { fg, bg }
    }
}

// =============================================================================
// Cell - One grid cell as stored by buffer backends
// =============================================================================

/// A single character cell: the glyph plus the style it was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::UNSET,
        }
    }
}

// =============================================================================
// Feature - Optional capability bitmask
// =============================================================================

bitflags::bitflags! {
    /// Optional capabilities that must be enabled before use.
    ///
    /// Operations gated on a feature report [`Error::NotEnabled`] when the
    /// feature bit is clear.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Feature: u32 {
        /// Per-cell foreground/background colors.
        const COLOR = 1 << 0;
    }
}

// =============================================================================
// Tests
// =============================================================================
