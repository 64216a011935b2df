//! Owner scopes for bulk disposal.

use super::runtime::{self, Disposer, OwnerId};

/// Disposes everything created inside a [`create_root`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootDisposer {
    owner: OwnerId,
}

impl RootDisposer {
    pub fn dispose(self) {
        runtime::dispose_owner(self.owner);
    }

    pub fn is_disposed(&self) -> bool {
        !runtime::is_owner_alive(self.owner)
    }
}

/// Run `f` inside a fresh detached owner.
///
/// Effects, memos and `on_cleanup` callbacks created inside `f` live until
/// the disposer passed to `f` is called. Reads inside `f` are untracked.
pub fn create_root<R>(f: impl FnOnce(RootDisposer) -> R) -> R {
    let owner = runtime::create_owner();
    runtime::with_owner(owner, || f(RootDisposer { owner }))
}

/// Register `f` to run when the current owner is disposed or, inside an
/// effect, before its next run.
pub fn on_cleanup(f: impl FnOnce() + 'static) {
    if runtime::register_disposer(Disposer::Callback(Box::new(f))).is_some() {
        tracing::warn!("on_cleanup called outside of any owner; the callback will never run");
    }
}
