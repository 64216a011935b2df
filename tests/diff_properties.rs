//! Property-based invariants for cell diffing, run grouping and node hashing.
//!
//! 1. Diffing a buffer against itself yields no changes.
//! 2. Applying `diff(a, b)` to `a` reproduces `b`.
//! 3. Runs cover every change exactly once, in row-then-column order.
//! 4. Node hashes ignore prop insertion order.
//! 5. Wrapped lines never exceed the wrap width.

use std::collections::BTreeMap;

use flint_tui::layout::wrap_text;
use flint_tui::node::{Node, NodeType, PropValue, Props};
use flint_tui::renderer::{apply_changes, diff, group_runs, CellBuffer, CellChange};
use flint_tui::{Attr, Cell, Color, NamedColor, Style};
use proptest::prelude::*;

// =============================================================================
// Helpers
// =============================================================================

fn color_strategy() -> impl Strategy<Value = Option<Color>> {
    prop_oneof![
        Just(None),
        (0usize..8).prop_map(|i| Some(Color::Named(NamedColor::ALL[i]))),
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Some(Color::rgb(r, g, b))),
    ]
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    (
        prop::sample::select(vec![' ', 'a', 'b', '─', '│']),
        color_strategy(),
        color_strategy(),
        (0u8..64).prop_map(Attr::from_bits_truncate),
    )
        .prop_map(|(ch, fg, bg, attrs)| Cell::new(ch, Style { fg, bg, attrs }))
}

fn buffer_strategy(width: u16, height: u16) -> impl Strategy<Value = CellBuffer> {
    prop::collection::vec(cell_strategy(), width as usize * height as usize).prop_map(move |cells| {
        let mut buffer = CellBuffer::new(width, height);
        for (i, cell) in cells.into_iter().enumerate() {
            buffer.set((i % width as usize) as u16, (i / width as usize) as u16, cell);
        }
        buffer
    })
}

fn any_buffer() -> impl Strategy<Value = CellBuffer> {
    (1u16..12, 1u16..6).prop_flat_map(|(w, h)| buffer_strategy(w, h))
}

fn buffer_pair() -> impl Strategy<Value = (CellBuffer, CellBuffer)> {
    (1u16..12, 1u16..6).prop_flat_map(|(w, h)| (buffer_strategy(w, h), buffer_strategy(w, h)))
}

fn prop_entries() -> impl Strategy<Value = BTreeMap<String, i64>> {
    prop::collection::btree_map("[a-z]{1,6}", any::<i64>(), 0..8)
}

// =============================================================================
// Diff
// =============================================================================

proptest! {
    #[test]
    fn diff_with_self_is_empty(buffer in any_buffer()) {
        prop_assert!(diff(&buffer, &buffer).is_empty());
    }

    #[test]
    fn apply_diff_reproduces_target((old, new) in buffer_pair()) {
        let changes = diff(&old, &new);
        let mut replay = old.clone();
        apply_changes(&mut replay, &changes);
        prop_assert_eq!(replay, new);
    }

    #[test]
    fn runs_cover_changes_in_order((old, new) in buffer_pair()) {
        let changes = diff(&old, &new);
        let runs = group_runs(&changes);

        let flattened: Vec<CellChange> = runs
            .iter()
            .flat_map(|run| {
                run.cells.iter().enumerate().map(move |(i, cell)| CellChange {
                    x: run.x + i as u16,
                    y: run.y,
                    cell: *cell,
                })
            })
            .collect();
        prop_assert_eq!(flattened, changes);

        for pair in runs.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.y < b.y || (a.y == b.y && a.x as usize + a.cells.len() < b.x as usize));
        }
    }
}

// =============================================================================
// Hashing
// =============================================================================

proptest! {
    #[test]
    fn hash_ignores_prop_order(entries in prop_entries()) {
        let entry = |(k, v): (&String, &i64)| (k.clone(), PropValue::Int(*v));
        let forward: Props = entries.iter().map(entry).collect();
        let backward: Props = entries.iter().rev().map(entry).collect();

        let a = Node::new(NodeType::Box, forward, Vec::new());
        let b = Node::new(NodeType::Box, backward, Vec::new());
        prop_assert_eq!(a.hash(), b.hash());
    }

    #[test]
    fn wrapped_lines_fit(text in "[a-z ]{0,60}", width in 1u16..20) {
        for line in wrap_text(&text, width) {
            prop_assert!(line.chars().count() <= width as usize, "{:?} wider than {}", line, width);
        }
    }
}

// =============================================================================
// Fixed cases
// =============================================================================

#[test]
fn runs_merge_consecutive_columns() {
    let cell = Cell::new('x', Style::new());
    let changes: Vec<CellChange> = [2u16, 3, 4, 9]
        .iter()
        .map(|&x| CellChange { x, y: 0, cell })
        .collect();
    let runs = group_runs(&changes);

    assert_eq!(runs.len(), 2);
    assert_eq!((runs[0].x, runs[0].cells.len()), (2, 3));
    assert_eq!((runs[1].x, runs[1].cells.len()), (9, 1));
}
