//! Fine-grained reactivity: signals, effects, memos, batching and owners.
//!
//! The runtime is thread-local and synchronous. Handles are `!Send`.
//!
//! ```
//! use flint_tui::reactive::{create_effect, signal};
//!
//! let count = signal(0);
//! let c = count.clone();
//! let effect = create_effect(move || println!("count = {}", c.get()));
//! count.set(1);
//! effect.dispose();
//! ```

mod effect;
mod memo;
mod owner;
mod runtime;
mod signal;

pub use effect::{create_effect, Effect, IntoCleanup};
pub use memo::{create_memo, Memo};
pub use owner::{create_root, on_cleanup, RootDisposer};
pub use runtime::{batch, untrack, Cleanup};
pub use signal::{create_signal, signal, ReadSignal, Signal, WriteSignal};
