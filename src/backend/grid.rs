//! In-memory cell-grid backend.

use super::Backend;
use crate::types::{Cell, CellStyle};

/// A 2D grid of cells with flat row-major storage.
///
/// `index = y * width + x`. Writes outside the grid are silently ignored,
/// matching what a terminal would do with an off-screen coordinate. This is
/// the backend used by the test suite and by headless rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuffer {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl GridBuffer {
    /// Create a grid filled with blank cells.
    pub fn new(width: i32, height: i32) -> Self {
        let size = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width: width.max(0),
            height: height.max(0),
            cells: vec![Cell::default(); size],
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the coordinate is on the grid.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get a cell, or `None` when off the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// The character at a cell, blank when off the grid.
    pub fn char_at(&self, x: i32, y: i32) -> char {
        self.get(x, y).map_or(' ', |cell| cell.ch)
    }

    /// One row of the grid as a string.
    pub fn row_string(&self, y: i32) -> String {
        (0..self.width).map(|x| self.char_at(x, y)).collect()
    }

    /// Count the cells holding a given character.
    pub fn count(&self, ch: char) -> usize {
        self.cells.iter().filter(|cell| cell.ch == ch).count()
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &Cell)> {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = (i % self.width as usize) as i32;
            let y = (i / self.width as usize) as i32;
            (x, y, cell)
        })
    }
}

impl Backend for GridBuffer {
    fn size(&mut self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn draw_char(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = Cell { ch, style };
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn present(&mut self) {}

    fn shutdown(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn starts_blank() {
        let grid = GridBuffer::new(4, 2);
        assert_eq!(grid.row_string(0), "    ");
        assert_eq!(grid.count(' '), 8);
    }

    #[test]
    fn draw_char_sets_cell_and_style() {
        let mut grid = GridBuffer::new(4, 2);
        let style = CellStyle::new(Some(Color::Red), None);
        grid.draw_char(2, 1, 'x', style);
        let cell = grid.get(2, 1).unwrap();
        assert_eq!(cell.ch, 'x');
        assert_eq!(cell.style.fg, Some(Color::Red));
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut grid = GridBuffer::new(4, 2);
        grid.draw_char(-1, 0, 'x', CellStyle::UNSET);
        grid.draw_char(4, 0, 'x', CellStyle::UNSET);
        grid.draw_char(0, 2, 'x', CellStyle::UNSET);
        assert_eq!(grid.count('x'), 0);
    }

    #[test]
    fn draw_str_writes_a_run() {
        let mut grid = GridBuffer::new(6, 1);
        grid.draw_str(1, 0, "abc", CellStyle::UNSET);
        assert_eq!(grid.row_string(0), " abc  ");
    }

    #[test]
    fn clear_resets_all_cells() {
        let mut grid = GridBuffer::new(3, 3);
        grid.draw_str(0, 1, "xyz", CellStyle::UNSET);
        grid.clear();
        assert_eq!(grid.count(' '), 9);
    }
}
