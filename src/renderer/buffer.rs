//! CellBuffer: the fixed-size grid mirrored onto the terminal.
//!
//! Flat row-major storage, `index = y * width + x`. Reads outside the grid
//! return a default cell; writes outside it are ignored.

use crate::types::{Cell, ClipRect};

/// A `width × height` grid of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CellBuffer {
    /// Create a buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Full buffer bounds.
    #[inline]
    pub fn bounds(&self) -> ClipRect {
        ClipRect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Cell at `(x, y)`, or a default cell outside the grid.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Cell {
        if self.in_bounds(x, y) {
            self.cells[self.index(x, y)]
        } else {
            Cell::default()
        }
    }

    /// Overwrite one cell. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Overwrite every cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Resize and reset every cell to default.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width as usize * height as usize, Cell::default());
    }

    /// Raw cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row, empty when `y` is outside the grid.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = self.index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// Characters of one row as a string.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }

    /// Iterate over cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        let width = self.width.max(1) as usize;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            ((i % width) as u16, (i / width) as u16, cell)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NamedColor, Style};

    #[test]
    fn test_new_is_blank() {
        let buf = CellBuffer::new(4, 2);
        assert_eq!(buf.cells().len(), 8);
        assert!(buf.cells().iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn test_get_out_of_bounds_is_default() {
        let mut buf = CellBuffer::new(2, 2);
        buf.fill(Cell::new('x', Style::new()));
        assert_eq!(buf.get(5, 0), Cell::default());
        assert_eq!(buf.get(0, 5), Cell::default());
        assert_eq!(buf.get(1, 1).ch, 'x');
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut buf = CellBuffer::new(2, 2);
        let before = buf.clone();
        buf.set(2, 0, Cell::new('x', Style::new()));
        buf.set(0, 2, Cell::new('x', Style::new()));
        assert_eq!(buf, before);
    }

    #[test]
    fn test_set_and_row_text() {
        let mut buf = CellBuffer::new(3, 2);
        buf.set(1, 1, Cell::new('a', Style::new().fg(NamedColor::Red.into())));
        assert_eq!(buf.row_text(0), "   ");
        assert_eq!(buf.row_text(1), " a ");
        assert_eq!(buf.row_text(9), "");
    }

    #[test]
    fn test_resize_clears() {
        let mut buf = CellBuffer::new(2, 2);
        buf.fill(Cell::new('x', Style::new()));
        buf.resize(3, 1);
        assert_eq!((buf.width(), buf.height()), (3, 1));
        assert_eq!(buf.row_text(0), "   ");
    }

    #[test]
    fn test_iter_coordinates() {
        let buf = CellBuffer::new(2, 2);
        let coords: Vec<_> = buf.iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
