//! Text Measurement
//!
//! Utilities for measuring and shaping text in terminal cells.
//!
//! Every printable `char` occupies exactly one cell. Control characters
//! (other than `\n`, which splits lines) occupy none and are never painted.

use crate::types::TextAlign;

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    let count = s.chars().filter(|c| !c.is_control()).count();
    count.min(u16::MAX as usize) as u16
}

/// Natural `(width, height)` of text.
///
/// Without a wrap width the text is split on `\n` only; with one, lines are
/// word-wrapped so no line exceeds it.
pub fn measure_text(text: &str, wrap_width: Option<u16>) -> (u16, u16) {
    let lines = match wrap_width {
        Some(width) => wrap_text(text, width),
        None => text.split('\n').map(str::to_owned).collect(),
    };
    let width = lines.iter().map(|l| string_width(l)).max().unwrap_or(0);
    let height = lines.len().min(u16::MAX as usize) as u16;
    (width, height)
}

/// Word-wrap text to a given width.
///
/// Explicit `\n` boundaries are kept (including empty lines). A segment
/// longer than `width` breaks at the last space at or before the boundary,
/// unless that space lies in the first half of the line, in which case it
/// breaks hard at exactly `width`. Spaces at the start of a continuation
/// line are dropped.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return text.split('\n').map(str::to_owned).collect();
    }
    let width = width as usize;
    let mut lines = Vec::new();

    for segment in text.split('\n') {
        let chars: Vec<char> = segment.chars().collect();
        let mut rest: &[char] = &chars;

        if rest.len() <= width {
            lines.push(rest.iter().collect());
            continue;
        }

        while rest.len() > width {
            let space = rest[..=width].iter().rposition(|c| *c == ' ');
            let split = match space {
                Some(i) if i > 0 && i >= width / 2 => i,
                _ => width,
            };
            let (line, tail) = rest.split_at(split);
            lines.push(line.iter().collect());

            let skip = tail.iter().take_while(|c| **c == ' ').count();
            rest = &tail[skip..];
        }

        if !rest.is_empty() {
            lines.push(rest.iter().collect());
        }
    }

    lines
}

/// Truncate text to fit within a given width.
///
/// If text is longer than width, it's truncated and an ellipsis is added.
pub fn truncate_text(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }

    if string_width(text) <= width {
        return text.to_string();
    }

    let keep = width.saturating_sub(1) as usize;
    let mut result: String = text.chars().filter(|c| !c.is_control()).take(keep).collect();
    result.push('…');
    result
}

/// Column offset of a line of `line_width` cells inside `available` cells.
pub fn align_offset(line_width: u16, available: u16, align: TextAlign) -> u16 {
    let free = available.saturating_sub(line_width);
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => free / 2,
        TextAlign::Right => free,
    }
}
