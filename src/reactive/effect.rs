//! Effects: side-effecting computations that re-run when their inputs change.

use std::cell::RefCell;
use std::rc::Rc;

use super::runtime::{self, Cleanup, ComputationId, ExecuteFn};

/// Values an effect body may return.
///
/// `()` means no cleanup; a boxed closure is run before the next execution
/// and when the effect is disposed.
pub trait IntoCleanup {
    fn into_cleanup(self) -> Option<Cleanup>;
}

impl IntoCleanup for () {
    fn into_cleanup(self) -> Option<Cleanup> {
        None
    }
}

impl IntoCleanup for Cleanup {
    fn into_cleanup(self) -> Option<Cleanup> {
        Some(self)
    }
}

impl IntoCleanup for Option<Cleanup> {
    fn into_cleanup(self) -> Option<Cleanup> {
        self
    }
}

/// Handle to a running effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    id: ComputationId,
}

impl Effect {
    /// Run the pending cleanup and stop reacting permanently.
    pub fn dispose(self) {
        runtime::dispose_computation(self.id);
    }

    pub fn is_disposed(&self) -> bool {
        !runtime::is_computation_alive(self.id)
    }
}

/// Run `f` now and again whenever a signal it read changes.
///
/// Each re-run first calls the cleanup returned by the previous run, then
/// disposes effects and `on_cleanup` callbacks created during that run, then
/// drops every old subscription before tracking afresh.
pub fn create_effect<F, R>(mut f: F) -> Effect
where
    F: FnMut() -> R + 'static,
    R: IntoCleanup,
{
    let execute: ExecuteFn = Rc::new(RefCell::new(move || f().into_cleanup()));
    let id = runtime::create_computation(Some(execute));
    runtime::run_computation(id);
    Effect { id }
}
