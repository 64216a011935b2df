//! Memos: cached derived values.

use std::cell::RefCell;
use std::rc::Rc;

use super::runtime::{self, Cleanup, ComputationId, ExecuteFn};
use super::signal::Signal;

/// A derived value recomputed eagerly whenever one of its inputs changes.
///
/// Readers are notified only when the recomputed value differs from the
/// cached one.
pub struct Memo<T: 'static> {
    value: Signal<T>,
    computation: ComputationId,
}

impl<T: 'static> Clone for Memo<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            computation: self.computation,
        }
    }
}

impl<T: 'static> Memo<T> {
    /// Read the cached value, subscribing the running computation.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.value.with(f)
    }

    pub fn get_untracked(&self) -> T
    where
        T: Clone,
    {
        self.value.get_untracked()
    }

    /// Stop recomputing. The last value stays readable.
    pub fn dispose(&self) {
        runtime::dispose_computation(self.computation);
    }
}

/// Create a memo from `f`, computed once now.
pub fn create_memo<T, F>(f: F) -> Memo<T>
where
    T: PartialEq + 'static,
    F: FnMut() -> T + 'static,
{
    let computation = runtime::create_computation(None);
    let f = Rc::new(RefCell::new(f));
    let initial = runtime::run_tracked(computation, || (&mut *f.borrow_mut())());
    let value = Signal::new(initial);

    let target = value.clone();
    let execute: ExecuteFn = Rc::new(RefCell::new(move || -> Option<Cleanup> {
        let next = (&mut *f.borrow_mut())();
        target.set(next);
        None
    }));
    runtime::set_execute(computation, execute);

    Memo { value, computation }
}
