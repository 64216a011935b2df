//! Cell-level diff between two frames.
//!
//! Changes are compared by character, attributes and resolved color, then
//! grouped into horizontal runs so the encoder emits one cursor move per run.

use std::collections::BTreeMap;

use super::buffer::CellBuffer;
use crate::types::Cell;

/// One cell that differs from the previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}

/// Changed cells on one row at strictly consecutive columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRun {
    pub x: u16,
    pub y: u16,
    pub cells: Vec<Cell>,
}

/// Every cell of `new` that differs from `old`.
///
/// Cells of `new` outside `old`'s bounds are always reported. Coordinates
/// only present in `old` are not.
pub fn diff(old: &CellBuffer, new: &CellBuffer) -> Vec<CellChange> {
    let mut changes = Vec::new();
    for (x, y, cell) in new.iter() {
        if !old.in_bounds(x, y) || old.get(x, y) != *cell {
            changes.push(CellChange { x, y, cell: *cell });
        }
    }
    changes
}

/// Replay changes onto a buffer.
pub fn apply_changes(buffer: &mut CellBuffer, changes: &[CellChange]) {
    for change in changes {
        buffer.set(change.x, change.y, change.cell);
    }
}

/// Group changes by row, sort by column and merge adjacent columns.
///
/// Runs come out ordered by row, then column.
pub fn group_runs(changes: &[CellChange]) -> Vec<CellRun> {
    let mut by_row: BTreeMap<u16, Vec<&CellChange>> = BTreeMap::new();
    for change in changes {
        by_row.entry(change.y).or_default().push(change);
    }

    let mut runs = Vec::new();
    for (y, mut row) in by_row {
        row.sort_by_key(|c| c.x);

        let mut current: Option<CellRun> = None;
        for change in row {
            match current.as_mut() {
                Some(run) if run.x as u32 + run.cells.len() as u32 == change.x as u32 => {
                    run.cells.push(change.cell);
                }
                _ => {
                    runs.extend(current.take());
                    current = Some(CellRun {
                        x: change.x,
                        y,
                        cells: vec![change.cell],
                    });
                }
            }
        }
        runs.extend(current);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, NamedColor, Style};

    fn change(x: u16, y: u16) -> CellChange {
        CellChange {
            x,
            y,
            cell: Cell::new('x', Style::new()),
        }
    }

    #[test]
    fn test_identical_buffers_have_no_changes() {
        let mut buf = CellBuffer::new(3, 3);
        buf.set(1, 1, Cell::new('a', Style::new()));
        assert!(diff(&buf, &buf.clone()).is_empty());
    }

    #[test]
    fn test_detects_char_and_style_changes() {
        let old = CellBuffer::new(3, 1);
        let mut new = old.clone();
        new.set(0, 0, Cell::new('a', Style::new()));
        new.set(2, 0, Cell::new(' ', Style::new().bg(NamedColor::Red.into())));

        let changes = diff(&old, &new);
        assert_eq!(changes.iter().map(|c| c.x).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_equivalent_colors_are_not_changes() {
        let mut old = CellBuffer::new(1, 1);
        let mut new = CellBuffer::new(1, 1);
        old.set(0, 0, Cell::new('a', Style::new().fg(NamedColor::Red.into())));
        new.set(0, 0, Cell::new('a', Style::new().fg(Color::rgb(205, 0, 0))));
        assert!(diff(&old, &new).is_empty());
    }

    #[test]
    fn test_larger_new_buffer_emits_outside_cells() {
        let old = CellBuffer::new(1, 1);
        let new = CellBuffer::new(2, 2);
        let coords: Vec<_> = diff(&old, &new).iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, vec![(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_smaller_new_buffer_ignores_old_only_cells() {
        let mut old = CellBuffer::new(3, 3);
        old.fill(Cell::new('x', Style::new()));
        let mut new = CellBuffer::new(1, 1);
        new.set(0, 0, Cell::new('x', Style::new()));
        assert!(diff(&old, &new).is_empty());
    }

    #[test]
    fn test_apply_changes_reproduces_new() {
        let old = CellBuffer::new(4, 2);
        let mut new = old.clone();
        new.set(1, 0, Cell::new('a', Style::new()));
        new.set(3, 1, Cell::new('b', Style::new()));

        let mut replay = old.clone();
        apply_changes(&mut replay, &diff(&old, &new));
        assert_eq!(replay, new);
    }

    #[test]
    fn test_group_runs_merges_consecutive_columns() {
        let changes = [change(9, 0), change(3, 0), change(2, 0), change(4, 0)];
        let runs = group_runs(&changes);
        assert_eq!(runs.len(), 2);
        assert_eq!((runs[0].x, runs[0].cells.len()), (2, 3));
        assert_eq!((runs[1].x, runs[1].cells.len()), (9, 1));
    }

    #[test]
    fn test_group_runs_orders_rows() {
        let changes = [change(0, 2), change(1, 2), change(0, 0)];
        let runs = group_runs(&changes);
        assert_eq!(runs.iter().map(|r| r.y).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(runs[1].cells.len(), 2);
    }

    #[test]
    fn test_group_runs_empty() {
        assert!(group_runs(&[]).is_empty());
    }
}
