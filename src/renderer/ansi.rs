//! ANSI escape sequences for terminal control.
//!
//! Only the sequences the renderer emits live here:
//! - Cursor movement and visibility
//! - Screen clearing
//! - Synchronized output for flicker-free rendering
//! - SGR styling (8 named colors, TrueColor, text attributes)

use std::io::Write;

use crate::types::{Attr, Color, Style};

// =============================================================================
// Cursor
// =============================================================================

/// Move cursor to absolute position (0-indexed in, 1-indexed on the wire).
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> std::io::Result<()> {
    write!(w, "\x1b[{};{}H", y as u32 + 1, x as u32 + 1)
}

/// Move cursor to the top-left corner.
#[inline]
pub fn cursor_home<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[H")
}

/// Hide cursor.
#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25l")
}

/// Show cursor.
#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25h")
}

// =============================================================================
// Screen Control
// =============================================================================

/// Clear entire screen (viewport only).
#[inline]
pub fn erase_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[2J")
}

/// Clear the viewport and home the cursor.
#[inline]
pub fn clear_and_home<W: Write>(w: &mut W) -> std::io::Result<()> {
    erase_screen(w)?;
    cursor_home(w)
}

// =============================================================================
// Synchronized Output (Flicker Prevention)
// =============================================================================

/// Begin synchronized output (terminal buffers until end_sync).
#[inline]
pub fn begin_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026h")
}

/// End synchronized output (terminal flushes buffer).
#[inline]
pub fn end_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026l")
}

// =============================================================================
// Colors
// =============================================================================

/// Reset all attributes and colors.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[0m")
}

fn fg_params<W: Write>(w: &mut W, color: Color) -> std::io::Result<()> {
    match color {
        Color::Named(named) => write!(w, "{}", 30 + named.index()),
        Color::Rgb(r, g, b) => write!(w, "38;2;{};{};{}", r, g, b),
    }
}

fn bg_params<W: Write>(w: &mut W, color: Color) -> std::io::Result<()> {
    match color {
        Color::Named(named) => write!(w, "{}", 40 + named.index()),
        Color::Rgb(r, g, b) => write!(w, "48;2;{};{};{}", r, g, b),
    }
}

/// Reset then apply a full style in a single SGR sequence.
///
/// Output is `CSI 0 ; <attrs> ; <fg> ; <bg> m`. Unset colors are left at
/// the default established by the leading `0`.
pub fn style<W: Write>(w: &mut W, style: &Style) -> std::io::Result<()> {
    write!(w, "\x1b[0")?;

    for (flag, code) in [
        (Attr::BOLD, 1),
        (Attr::DIM, 2),
        (Attr::ITALIC, 3),
        (Attr::UNDERLINE, 4),
        (Attr::INVERSE, 7),
        (Attr::STRIKETHROUGH, 9),
    ] {
        if style.attrs.contains(flag) {
            write!(w, ";{}", code)?;
        }
    }

    if let Some(color) = style.fg {
        write!(w, ";")?;
        fg_params(w, color)?;
    }
    if let Some(color) = style.bg {
        write!(w, ";")?;
        bg_params(w, color)?;
    }

    write!(w, "m")
}

// =============================================================================
// Tests
// =============================================================================
