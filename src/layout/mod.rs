//! Layout Module
//!
//! Flexbox layout computation for terminal UI.
//!
//! # Architecture
//!
//! Layout turns an expanded [`Node`](crate::node::Node) tree plus an available
//! rectangle into a tree of absolutely positioned [`LayoutBox`]es:
//!
//! 1. Measure natural sizes bottom-up
//! 2. Place children top-down with grow, justify and align
//! 3. Place absolute children and sort every child list by z-index
//! 4. Propagate overflow clip rectangles to descendants
//!
//! # Example
//!
//! ```
//! use flint_tui::layout::compute_layout;
//! use flint_tui::node::{box_node, text};
//!
//! let tree = box_node().padding(1).child(text("hi")).build();
//! let layout = compute_layout(&tree, 20, 5);
//! assert_eq!((layout.children[0].x, layout.children[0].y), (1, 1));
//! ```

mod flex;
mod text_measure;
mod types;

pub use flex::{compute_layout, measure};
pub use text_measure::*;
pub use types::LayoutBox;
