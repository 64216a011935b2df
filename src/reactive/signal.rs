//! Signals: reactive values with subscriber tracking.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::runtime::{self, SignalId};

struct SignalInner<T> {
    id: SignalId,
    value: RefCell<T>,
}

impl<T> Drop for SignalInner<T> {
    fn drop(&mut self) {
        runtime::remove_signal_node(self.id);
    }
}

/// A reactive value.
///
/// Clones share the same value and graph node; the node is released when the
/// last clone drops. Reading inside an effect or memo subscribes it; writing a
/// different value notifies every subscriber.
pub struct Signal<T: 'static> {
    inner: Rc<SignalInner<T>>,
}

impl<T: 'static> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("id", &self.inner.id)
            .field("value", &*self.inner.value.borrow())
            .finish()
    }
}

impl<T: 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(SignalInner {
                id: runtime::create_signal_node(),
                value: RefCell::new(value),
            }),
        }
    }

    #[cfg(test)]
    pub(crate) fn id(&self) -> SignalId {
        self.inner.id
    }

    /// Read the value by clone, subscribing the running computation.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        runtime::track(self.inner.id);
        self.inner.value.borrow().clone()
    }

    /// Read the value by clone without subscribing.
    pub fn get_untracked(&self) -> T
    where
        T: Clone,
    {
        self.inner.value.borrow().clone()
    }

    /// Borrow the value, subscribing the running computation.
    ///
    /// Writing this signal from inside `f` panics.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        runtime::track(self.inner.id);
        f(&self.inner.value.borrow())
    }

    /// Borrow the value without subscribing.
    pub fn with_untracked<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Store `value` and notify subscribers, unless it equals the current one.
    pub fn set(&self, value: T)
    where
        T: PartialEq,
    {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return;
            }
            *current = value;
        }
        runtime::notify(self.inner.id);
    }

    /// Compute the next value from the current one and [`set`](Self::set) it.
    pub fn update(&self, f: impl FnOnce(&T) -> T)
    where
        T: PartialEq,
    {
        let next = self.with_untracked(f);
        self.set(next);
    }

    /// Split into read-only and write-only halves.
    pub fn split(&self) -> (ReadSignal<T>, WriteSignal<T>) {
        (
            ReadSignal {
                signal: self.clone(),
            },
            WriteSignal {
                signal: self.clone(),
            },
        )
    }
}

/// Read half of a signal.
pub struct ReadSignal<T: 'static> {
    signal: Signal<T>,
}

impl<T: 'static> Clone for ReadSignal<T> {
    fn clone(&self) -> Self {
        Self {
            signal: self.signal.clone(),
        }
    }
}

impl<T: 'static> ReadSignal<T> {
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.signal.get()
    }

    pub fn get_untracked(&self) -> T
    where
        T: Clone,
    {
        self.signal.get_untracked()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.signal.with(f)
    }
}

/// Write half of a signal.
pub struct WriteSignal<T: 'static> {
    signal: Signal<T>,
}

impl<T: 'static> Clone for WriteSignal<T> {
    fn clone(&self) -> Self {
        Self {
            signal: self.signal.clone(),
        }
    }
}

impl<T: PartialEq + 'static> WriteSignal<T> {
    pub fn set(&self, value: T) {
        self.signal.set(value);
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        self.signal.update(f);
    }
}

/// Create a signal and return its read and write halves.
pub fn create_signal<T: 'static>(initial: T) -> (ReadSignal<T>, WriteSignal<T>) {
    Signal::new(initial).split()
}

/// Create a combined read/write signal.
pub fn signal<T: 'static>(initial: T) -> Signal<T> {
    Signal::new(initial)
}
