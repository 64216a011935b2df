//! Frame orchestration.
//!
//! One [`Renderer::render`] call runs the whole pipeline:
//!
//! ```text
//! Node → expand → layout → paint → LogicalBuffer → visual rows
//!      → CellBuffer → diff → runs → ANSI → sink
//! ```
//!
//! Two logical and two visual buffers are kept; `next` is filled each frame,
//! diffed against `current`, and the pairs are swapped once the bytes have
//! reached the sink.

use std::io::Write;
use std::mem;

use super::paint::paint;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::layout::compute_layout;
use crate::node::Node;
use crate::renderer::{ansi, diff, encode, group_runs, to_visual_rows};
use crate::renderer::{CellBuffer, LogicalBuffer, OutputBuffer};
use crate::types::Cell;

/// Counters for one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Cells that differed from the previous frame.
    pub changes: usize,
    /// Horizontal runs those cells were grouped into.
    pub runs: usize,
    /// Bytes written to the sink.
    pub bytes: usize,
}

/// Double-buffered renderer writing ANSI to any [`Write`] sink.
pub struct Renderer<W: Write> {
    sink: W,
    config: RenderConfig,
    width: u16,
    height: u16,
    current_logical: LogicalBuffer,
    next_logical: LogicalBuffer,
    current_visual: CellBuffer,
    next_visual: CellBuffer,
    output: OutputBuffer,
    first_render: bool,
    /// Expanded root hash of the last presented frame.
    last_hash: Option<u64>,
}

impl<W: Write> Renderer<W> {
    /// Renderer for a fixed `width × height` terminal with default settings.
    pub fn new(sink: W, width: u16, height: u16) -> Self {
        Self::with_config(sink, RenderConfig::with_size(width, height))
    }

    /// Renderer sized by `config`, detecting unset dimensions.
    pub fn with_config(sink: W, config: RenderConfig) -> Self {
        let (width, height) = config.resolve_size();
        Self {
            sink,
            config,
            width,
            height,
            current_logical: LogicalBuffer::new(height),
            next_logical: LogicalBuffer::new(height),
            current_visual: CellBuffer::new(width, height),
            next_visual: CellBuffer::new(width, height),
            output: OutputBuffer::new(),
            first_render: true,
            last_hash: None,
        }
    }

    #[inline]
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The last presented frame.
    pub fn current_buffer(&self) -> &CellBuffer {
        &self.current_visual
    }

    pub fn is_first_render(&self) -> bool {
        self.first_render
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Reallocate every buffer and force a full redraw on the next frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        tracing::debug!(width, height, "renderer resized");
        self.width = width;
        self.height = height;
        self.current_logical.resize(height);
        self.next_logical.resize(height);
        self.current_visual.resize(width, height);
        self.next_visual.resize(width, height);
        self.first_render = true;
        self.last_hash = None;
    }

    /// Render one frame and write the changed cells to the sink.
    ///
    /// Nothing is swapped when writing fails, so the next frame diffs
    /// against what was last presented successfully.
    pub fn render(&mut self, root: &Node) -> Result<FrameStats> {
        let root = root.expand();

        if !self.first_render && self.last_hash == Some(root.hash()) {
            tracing::trace!(root_hash = %root.hash_hex(), "frame unchanged, skipped");
            return Ok(FrameStats::default());
        }

        self.next_logical.clear();
        let layout = compute_layout(&root, self.width, self.height);
        paint(&layout, &mut self.next_logical);

        self.next_visual.fill(Cell::default());
        to_visual_rows(&self.next_logical, self.width).blit(&mut self.next_visual);

        let changes = diff(&self.current_visual, &self.next_visual);
        let runs = group_runs(&changes);

        self.output.clear();
        if self.first_render || !runs.is_empty() {
            self.encode_frame(&runs)?;
        }
        let bytes = self.output.len();

        self.output.flush_to(&mut self.sink)?;
        self.sink.flush()?;

        mem::swap(&mut self.current_logical, &mut self.next_logical);
        mem::swap(&mut self.current_visual, &mut self.next_visual);
        self.first_render = false;
        self.last_hash = Some(root.hash());

        let stats = FrameStats {
            changes: changes.len(),
            runs: runs.len(),
            bytes,
        };
        tracing::debug!(
            changes = stats.changes,
            runs = stats.runs,
            bytes = stats.bytes,
            "frame rendered"
        );
        Ok(stats)
    }

    fn encode_frame(&mut self, runs: &[crate::renderer::CellRun]) -> Result<()> {
        let out = &mut self.output;
        if self.config.synchronized_output {
            ansi::begin_sync(out)?;
        }
        if self.first_render {
            if self.config.hide_cursor {
                ansi::cursor_hide(out)?;
            }
            if self.config.clear_on_first_render {
                ansi::clear_and_home(out)?;
            }
        }
        encode(out, runs)?;
        if self.config.synchronized_output {
            ansi::end_sync(out)?;
        }
        Ok(())
    }
}
