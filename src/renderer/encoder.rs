//! Run encoder: [`CellRun`]s to ANSI bytes.
//!
//! Each run gets one cursor move. Within a run the style sequence is only
//! re-emitted when it differs from the previous cell's, and a single reset
//! closes the output. No state carries over between calls.

use std::io::Write;

use super::ansi;
use super::diff::CellRun;
use crate::types::Style;

/// Encode runs into `w`. Writes nothing when `runs` is empty.
pub fn encode<W: Write>(w: &mut W, runs: &[CellRun]) -> std::io::Result<()> {
    if runs.is_empty() {
        return Ok(());
    }

    let mut utf8 = [0u8; 4];
    for run in runs {
        ansi::cursor_to(w, run.x, run.y)?;

        let mut last: Option<Style> = None;
        for cell in &run.cells {
            if last != Some(cell.style) {
                ansi::style(w, &cell.style)?;
                last = Some(cell.style);
            }
            w.write_all(cell.ch.encode_utf8(&mut utf8).as_bytes())?;
        }
    }

    ansi::reset(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attr, Cell, NamedColor};

    fn encode_to_string(runs: &[CellRun]) -> String {
        let mut out = Vec::new();
        encode(&mut out, runs).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn run(x: u16, y: u16, text: &str, style: Style) -> CellRun {
        CellRun {
            x,
            y,
            cells: text.chars().map(|ch| Cell::new(ch, style)).collect(),
        }
    }

    #[test]
    fn test_empty_runs_write_nothing() {
        assert_eq!(encode_to_string(&[]), "");
    }

    #[test]
    fn test_single_run_plain() {
        let out = encode_to_string(&[run(2, 1, "Hi", Style::new())]);
        assert_eq!(out, "\x1b[2;3H\x1b[0mHi\x1b[0m");
    }

    #[test]
    fn test_style_emitted_only_on_change() {
        let bold = Style::new().attrs(Attr::BOLD);
        let red = Style::new().fg(NamedColor::Red.into());
        let mut r = run(0, 0, "ab", bold);
        r.cells.push(Cell::new('c', red));

        let out = encode_to_string(&[r]);
        assert_eq!(out, "\x1b[1;1H\x1b[0;1mab\x1b[0;31mc\x1b[0m");
    }

    #[test]
    fn test_each_run_moves_cursor_and_restyles() {
        let out = encode_to_string(&[
            run(0, 0, "a", Style::new()),
            run(5, 0, "b", Style::new()),
        ]);
        assert_eq!(out, "\x1b[1;1H\x1b[0ma\x1b[1;6H\x1b[0mb\x1b[0m");
    }

    #[test]
    fn test_multibyte_chars() {
        let out = encode_to_string(&[run(0, 0, "┌─", Style::new())]);
        assert!(out.contains("┌─"));
    }
}
