//! Mount API - binds a root function to a [`Renderer`] through an effect.
//!
//! # Example
//!
//! ```
//! use flint_tui::node::text;
//! use flint_tui::pipeline::{mount, Renderer};
//! use flint_tui::reactive::signal;
//!
//! let count = signal(0);
//! let c = count.clone();
//! let handle = mount(
//!     move || text(format!("count: {}", c.get())).build(),
//!     Renderer::new(Vec::new(), 20, 1),
//! );
//!
//! count.set(1);
//! assert_eq!(handle.renderer().current_buffer().row_text(0).trim_end(), "count: 1");
//! handle.unmount();
//! ```

use std::cell::{Ref, RefCell};
use std::io::Write;
use std::rc::Rc;

use super::renderer::Renderer;
use crate::error::Error;
use crate::node::Node;
use crate::reactive::{create_effect, create_root, signal, RootDisposer, Signal};

/// Handle returned by [`mount`].
///
/// Dropping the handle unmounts.
pub struct MountHandle<W: Write + 'static> {
    renderer: Rc<RefCell<Renderer<W>>>,
    last_error: Rc<RefCell<Option<Error>>>,
    size: Signal<(u16, u16)>,
    disposer: Option<RootDisposer>,
}

impl<W: Write + 'static> MountHandle<W> {
    /// Resize the renderer and re-render at the new size.
    pub fn resize(&self, width: u16, height: u16) {
        if self.size.get_untracked() == (width, height) {
            return;
        }
        self.renderer.borrow_mut().resize(width, height);
        self.size.set((width, height));
    }

    /// Borrow the renderer, e.g. to inspect [`Renderer::current_buffer`].
    pub fn renderer(&self) -> Ref<'_, Renderer<W>> {
        self.renderer.borrow()
    }

    /// Error from the most recent frame, cleared by the next successful one.
    pub fn last_error(&self) -> Option<Ref<'_, Error>> {
        Ref::filter_map(self.last_error.borrow(), Option::as_ref).ok()
    }

    pub fn is_mounted(&self) -> bool {
        self.disposer.is_some_and(|d| !d.is_disposed())
    }

    /// Dispose the render effect. No frames are rendered afterwards.
    pub fn unmount(mut self) {
        self.dispose();
    }

    fn dispose(&mut self) {
        if let Some(disposer) = self.disposer.take() {
            disposer.dispose();
            tracing::debug!("unmounted");
        }
    }
}

impl<W: Write + 'static> Drop for MountHandle<W> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Render `root_fn` now and again whenever a signal it reads changes.
///
/// Render failures do not stop the effect; they are logged and kept in
/// [`MountHandle::last_error`].
pub fn mount<W, F>(root_fn: F, renderer: Renderer<W>) -> MountHandle<W>
where
    W: Write + 'static,
    F: Fn() -> Node + 'static,
{
    let size = signal(renderer.size());
    let renderer = Rc::new(RefCell::new(renderer));
    let last_error = Rc::new(RefCell::new(None));

    let disposer = {
        let renderer = renderer.clone();
        let last_error = last_error.clone();
        let size = size.clone();
        create_root(move |disposer| {
            create_effect(move || {
                // subscribe to resizes
                size.with(|_| ());
                let tree = root_fn();
                let result = renderer.borrow_mut().render(&tree);
                match result {
                    Ok(_) => {
                        last_error.borrow_mut().take();
                    }
                    Err(err) => {
                        tracing::error!(%err, "render failed");
                        *last_error.borrow_mut() = Some(err);
                    }
                }
            });
            disposer
        })
    };

    MountHandle {
        renderer,
        last_error,
        size,
        disposer: Some(disposer),
    }
}
