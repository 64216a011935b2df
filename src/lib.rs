//! # flint-tui
//!
//! Reactive terminal UI render pipeline for Rust.
//!
//! ## Architecture
//!
//! A UI is a function from reactive state to an immutable [`Node`] tree.
//! Mounting that function wraps it in an effect, so every signal it reads
//! schedules a new frame when it changes:
//!
//! ```text
//! signals → root_fn() → Node tree → layout → paint → LogicalBuffer
//!         → visual rows → CellBuffer → diff → ANSI → sink
//! ```
//!
//! Each frame is diffed against the last one and only changed cells are
//! written.
//!
//! ## Modules
//!
//! - [`reactive`] - Signals, effects, memos, batching, owner scopes
//! - [`node`] - Content-hashed declarative node tree and builders
//! - [`layout`] - Flexbox layout and text measurement
//! - [`renderer`] - Cell buffers, diffing and ANSI encoding
//! - [`pipeline`] - Frame orchestration, paint pass, mount, terminal session
//! - [`types`] - Colors, styles, cells and layout enums
//! - [`config`] - TOML-loadable renderer settings
//!
//! ## Example
//!
//! ```
//! use flint_tui::{box_node, mount, signal, text, BorderStyle, Renderer};
//!
//! let name = signal(String::from("world"));
//! let n = name.clone();
//! let handle = mount(
//!     move || {
//!         box_node()
//!             .border(BorderStyle::Single)
//!             .child(text(format!("Hello {}", n.get())))
//!             .build()
//!     },
//!     Renderer::new(Vec::new(), 20, 3),
//! );
//!
//! name.set("flint".into());
//! assert!(handle.renderer().current_buffer().row_text(1).starts_with("│Hello flint"));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod node;
pub mod pipeline;
pub mod reactive;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::RenderConfig;
pub use error::{Error, Result};

pub use reactive::{
    batch, create_effect, create_memo, create_root, create_signal, on_cleanup, signal, untrack,
    Effect, Memo, ReadSignal, RootDisposer, Signal, WriteSignal,
};

pub use node::{
    box_node, component, custom, fragment, text, Component, Node, NodeBuilder, NodeType, Props,
};

pub use layout::{compute_layout, LayoutBox};

pub use renderer::{CellBuffer, LogicalBuffer};

pub use pipeline::{mount, FrameStats, MountHandle, Renderer, TerminalGuard};
