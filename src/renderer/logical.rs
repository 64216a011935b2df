//! LogicalBuffer: the paint target.
//!
//! Holds a fixed number of rows (the terminal height). Each row is a
//! growable run of cells that is padded with blanks on demand and never
//! truncated, so content painted past the terminal width survives until the
//! visual transform wraps it.

use crate::types::{Cell, ClipRect, Style};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogicalBuffer {
    rows: Vec<Vec<Cell>>,
}

impl LogicalBuffer {
    pub fn new(row_count: u16) -> Self {
        Self {
            rows: vec![Vec::new(); row_count as usize],
        }
    }

    #[inline]
    pub fn row_count(&self) -> u16 {
        self.rows.len() as u16
    }

    /// Cells of one row; empty when `y` is past the last row.
    #[inline]
    pub fn row(&self, y: u16) -> &[Cell] {
        self.rows.get(y as usize).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Cell at `(x, y)`, or a default cell when never written.
    pub fn get(&self, x: u16, y: u16) -> Cell {
        self.row(y).get(x as usize).copied().unwrap_or_default()
    }

    /// Empty every row, keeping the row count.
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
    }

    /// Change the row count and empty every row.
    pub fn resize(&mut self, row_count: u16) {
        self.rows.clear();
        self.rows.resize(row_count as usize, Vec::new());
    }

    fn slot(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        let row = self.rows.get_mut(y as usize)?;
        let x = x as usize;
        if row.len() <= x {
            row.resize(x + 1, Cell::default());
        }
        Some(&mut row[x])
    }

    /// Overwrite one cell. Rows past the row count are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.slot(x, y) {
            *slot = cell;
        }
    }

    /// Write one cell, keeping the existing background when `cell` has none.
    pub fn merge(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.slot(x, y) {
            *slot = Cell::new(cell.ch, cell.style.merged_over(slot.style));
        }
    }

    /// Fill a rectangle with blank cells of the given style, respecting `clip`.
    pub fn fill_rect(&mut self, rect: ClipRect, style: Style, clip: Option<ClipRect>) {
        let area = match clip {
            Some(clip) => rect.intersect(&clip),
            None => rect,
        };
        let x_end = area.x as u32 + area.width as u32;
        let y_end = area.y as u32 + area.height as u32;
        for y in area.y as u32..y_end {
            for x in area.x as u32..x_end {
                self.set(x as u16, y as u16, Cell::new(' ', style));
            }
        }
    }

    /// Merge a string of characters starting at `(x, y)`, one cell each.
    ///
    /// Control characters are skipped without advancing. Returns the column
    /// after the last character.
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        style: Style,
        clip: Option<ClipRect>,
    ) -> u16 {
        let mut col = x;
        for ch in text.chars().filter(|c| !c.is_control()) {
            if clip.is_none_or(|c| c.contains(col, y)) {
                self.merge(col, y, Cell::new(ch, style));
            }
            col = match col.checked_add(1) {
                Some(next) => next,
                None => break,
            };
        }
        col
    }
}
