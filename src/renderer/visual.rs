//! Visual transform: logical rows to terminal-width rows.
//!
//! Each logical row of `n` cells becomes `ceil(n / width)` visual rows of at
//! most `width` cells. An empty logical row still occupies one visual row.

use super::buffer::CellBuffer;
use super::logical::LogicalBuffer;
use crate::types::Cell;

/// Wrapped rows borrowed from a [`LogicalBuffer`].
#[derive(Debug, Clone, PartialEq)]
pub struct VisualRows<'a> {
    pub rows: Vec<&'a [Cell]>,
    /// For each logical row, the index of its first visual row.
    pub first_visual_row: Vec<usize>,
}

/// Wrap every logical row at `width`.
pub fn to_visual_rows(logical: &LogicalBuffer, width: u16) -> VisualRows<'_> {
    let width = width as usize;
    let mut rows = Vec::new();
    let mut first_visual_row = Vec::with_capacity(logical.row_count() as usize);

    for row in logical.rows() {
        first_visual_row.push(rows.len());
        if row.is_empty() || width == 0 {
            rows.push(&row[..0]);
        } else {
            rows.extend(row.chunks(width));
        }
    }

    VisualRows {
        rows,
        first_visual_row,
    }
}

impl VisualRows<'_> {
    /// Copy rows into `target`, dropping whatever exceeds its height.
    pub fn blit(&self, target: &mut CellBuffer) {
        for (y, row) in self.rows.iter().take(target.height() as usize).enumerate() {
            for (x, cell) in row.iter().enumerate() {
                target.set(x as u16, y as u16, *cell);
            }
        }
    }
}
