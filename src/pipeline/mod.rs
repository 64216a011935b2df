//! Render Pipeline
//!
//! Connects node trees to terminal output.
//!
//! # Pipeline Architecture
//!
//! ```text
//! root_fn() → Node → layout → paint → buffers → diff → ANSI → sink
//! ```
//!
//! ## Data Flow
//!
//! 1. **mount** - an effect calls the root function, tracking every signal it reads
//! 2. **Renderer** - expands, lays out and paints the tree, then writes the diff
//! 3. **terminal** - size detection and raw-mode session handling
//!
//! The renderer itself is not reactive; only [`mount`] ties it to signals.

pub mod mount;
pub mod paint;
pub mod renderer;
pub mod terminal;

pub use mount::{mount, MountHandle};
pub use paint::paint;
pub use renderer::{FrameStats, Renderer};
pub use terminal::{detect_terminal_size, TerminalGuard};
