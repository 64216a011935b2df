//! Terminal renderer - the "blind" output layer.
//!
//! Everything here knows only about cells. It doesn't understand nodes,
//! layout, or reactivity.
//!
//! # Stages
//!
//! ```text
//! LogicalBuffer → visual rows → CellBuffer → diff → runs → ANSI bytes
//! ```
//!
//! - [`LogicalBuffer`]: paint target with growable rows
//! - [`to_visual_rows`]: wraps logical rows at the terminal width
//! - [`CellBuffer`]: fixed grid mirrored onto the terminal
//! - [`diff()`] / [`group_runs`]: changed cells grouped per row
//! - [`encode`]: cursor moves, SGR styling and characters

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod encoder;
pub mod logical;
pub mod output;
pub mod visual;

pub use buffer::CellBuffer;
pub use diff::{apply_changes, diff, group_runs, CellChange, CellRun};
pub use encoder::encode;
pub use logical::LogicalBuffer;
pub use output::OutputBuffer;
pub use visual::{to_visual_rows, VisualRows};
