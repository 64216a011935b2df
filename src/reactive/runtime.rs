//! Thread-local reactive runtime.
//!
//! Signals, computations and owners live in `slotmap` arenas. Subscriptions
//! are stored as keys in both directions, so the arenas are the only owners
//! of graph memory.
//!
//! User closures never run while the runtime is borrowed: every operation
//! takes what it needs out of the arena, releases the borrow, then calls out.

use std::cell::RefCell;
use std::collections::HashMap;
use std::mem;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key of a signal node.
    pub struct SignalId;
    /// Key of an effect or memo.
    pub struct ComputationId;
    /// Key of an owner scope.
    pub struct OwnerId;
}

/// A closure run before a computation re-executes and when it is disposed.
pub type Cleanup = Box<dyn FnOnce()>;

pub(crate) type ExecuteFn = Rc<RefCell<dyn FnMut() -> Option<Cleanup>>>;

/// Upper bound on back-to-back re-runs of a computation that keeps
/// invalidating itself.
const MAX_RERUNS: usize = 100;

// =============================================================================
// Arena nodes
// =============================================================================

#[derive(Default)]
struct SignalNode {
    subscribers: Vec<ComputationId>,
}

struct ComputationNode {
    execute: Option<ExecuteFn>,
    sources: Vec<SignalId>,
    cleanup: Option<Cleanup>,
    /// Owner of everything created during a run.
    scope: OwnerId,
    running: bool,
    stale: bool,
}

#[derive(Default)]
struct OwnerNode {
    disposers: Vec<Disposer>,
}

pub(crate) enum Disposer {
    Computation(ComputationId),
    Owner(OwnerId),
    Callback(Cleanup),
}

// =============================================================================
// Runtime
// =============================================================================

#[derive(Default)]
struct Runtime {
    signals: SlotMap<SignalId, SignalNode>,
    computations: SlotMap<ComputationId, ComputationNode>,
    owners: SlotMap<OwnerId, OwnerNode>,
    observer: Option<ComputationId>,
    owner: Option<OwnerId>,
    batch_depth: u32,
    pending: Vec<ComputationId>,
}

impl Runtime {
    fn unsubscribe(&mut self, id: ComputationId, sources: &[SignalId]) {
        for source in sources {
            if let Some(signal) = self.signals.get_mut(*source) {
                signal.subscribers.retain(|c| *c != id);
            }
        }
    }
}

thread_local! {
    static RUNTIME: RefCell<Runtime> = RefCell::new(Runtime::default());
}

fn with_runtime<R>(f: impl FnOnce(&mut Runtime) -> R) -> R {
    RUNTIME.with(|rt| f(&mut rt.borrow_mut()))
}

// =============================================================================
// Signals
// =============================================================================

pub(crate) fn create_signal_node() -> SignalId {
    with_runtime(|rt| rt.signals.insert(SignalNode::default()))
}

/// Release a signal node. Safe to call during thread teardown.
pub(crate) fn remove_signal_node(id: SignalId) {
    let _ = RUNTIME.try_with(|rt| {
        if let Ok(mut rt) = rt.try_borrow_mut() {
            if let Some(node) = rt.signals.remove(id) {
                for computation in node.subscribers {
                    if let Some(c) = rt.computations.get_mut(computation) {
                        c.sources.retain(|s| *s != id);
                    }
                }
            }
        }
    });
}

/// Subscribe the running computation (if any) to `id`.
pub(crate) fn track(id: SignalId) {
    with_runtime(|rt| {
        let Some(observer) = rt.observer else {
            return;
        };
        let Runtime {
            signals,
            computations,
            ..
        } = rt;
        let (Some(signal), Some(computation)) =
            (signals.get_mut(id), computations.get_mut(observer))
        else {
            return;
        };
        if !signal.subscribers.contains(&observer) {
            signal.subscribers.push(observer);
        }
        if !computation.sources.contains(&id) {
            computation.sources.push(id);
        }
    });
}

/// Run or queue every subscriber of `id`.
pub(crate) fn notify(id: SignalId) {
    let immediate = with_runtime(|rt| {
        let snapshot = rt
            .signals
            .get(id)
            .map(|s| s.subscribers.clone())
            .unwrap_or_default();
        if rt.batch_depth > 0 {
            for computation in snapshot {
                if !rt.pending.contains(&computation) {
                    rt.pending.push(computation);
                }
            }
            Vec::new()
        } else {
            snapshot
        }
    });
    for computation in immediate {
        run_computation(computation);
    }
}

#[cfg(test)]
pub(crate) fn is_signal_alive(id: SignalId) -> bool {
    with_runtime(|rt| rt.signals.contains_key(id))
}

#[cfg(test)]
pub(crate) fn subscriber_count(id: SignalId) -> usize {
    with_runtime(|rt| rt.signals.get(id).map_or(0, |s| s.subscribers.len()))
}

// =============================================================================
// Computations
// =============================================================================

/// Allocate a computation and register it with the current owner.
pub(crate) fn create_computation(execute: Option<ExecuteFn>) -> ComputationId {
    with_runtime(|rt| {
        let scope = rt.owners.insert(OwnerNode::default());
        let id = rt.computations.insert(ComputationNode {
            execute,
            sources: Vec::new(),
            cleanup: None,
            scope,
            running: false,
            stale: false,
        });
        if let Some(owner) = rt.owner.and_then(|o| rt.owners.get_mut(o)) {
            owner.disposers.push(Disposer::Computation(id));
        }
        id
    })
}

pub(crate) fn set_execute(id: ComputationId, execute: ExecuteFn) {
    with_runtime(|rt| {
        if let Some(node) = rt.computations.get_mut(id) {
            node.execute = Some(execute);
        }
    });
}

pub(crate) fn is_computation_alive(id: ComputationId) -> bool {
    with_runtime(|rt| rt.computations.contains_key(id))
}

/// Run `f` with `id` as observer and its scope as owner.
pub(crate) fn run_tracked<R>(id: ComputationId, f: impl FnOnce() -> R) -> R {
    let scope = with_runtime(|rt| rt.computations.get(id).map(|c| c.scope));
    let previous = with_runtime(|rt| {
        let observer = mem::replace(&mut rt.observer, Some(id));
        let owner = match scope {
            Some(scope) => rt.owner.replace(scope),
            None => rt.owner,
        };
        (observer, owner)
    });
    let result = f();
    with_runtime(|rt| {
        rt.observer = previous.0;
        rt.owner = previous.1;
    });
    result
}

/// Execute a computation: cleanup, dispose the nested scope, drop old
/// subscriptions, then re-run with tracking.
///
/// A computation notified while it is running is marked stale and re-run
/// once the current pass returns.
pub(crate) fn run_computation(id: ComputationId) {
    for pass in 0.. {
        if pass == MAX_RERUNS {
            tracing::warn!(?id, passes = pass, "effect keeps invalidating itself, giving up");
            with_runtime(|rt| {
                if let Some(node) = rt.computations.get_mut(id) {
                    node.stale = false;
                }
            });
            return;
        }

        let prepared = with_runtime(|rt| {
            let node = rt.computations.get_mut(id)?;
            if node.running {
                node.stale = true;
                return None;
            }
            let execute = node.execute.clone()?;
            node.running = true;
            node.stale = false;
            let cleanup = node.cleanup.take();
            let scope = node.scope;
            let disposers = rt
                .owners
                .get_mut(scope)
                .map(|o| mem::take(&mut o.disposers))
                .unwrap_or_default();
            Some((execute, cleanup, disposers))
        });
        let Some((execute, cleanup, disposers)) = prepared else {
            return;
        };

        tracing::trace!(?id, pass, "running computation");

        if let Some(cleanup) = cleanup {
            cleanup();
        }
        run_disposers(disposers);

        with_runtime(|rt| {
            let sources = rt
                .computations
                .get_mut(id)
                .map(|c| mem::take(&mut c.sources))
                .unwrap_or_default();
            rt.unsubscribe(id, &sources);
        });

        let returned = run_tracked(id, || (&mut *execute.borrow_mut())());

        let (orphaned, rerun) = with_runtime(|rt| match rt.computations.get_mut(id) {
            Some(node) => {
                node.running = false;
                node.cleanup = returned;
                (None, node.stale)
            }
            None => (returned, false),
        });
        // Disposed during its own run.
        if let Some(cleanup) = orphaned {
            cleanup();
        }
        if !rerun {
            return;
        }
    }
}

/// Permanently remove a computation: run its cleanup and dispose its scope.
pub(crate) fn dispose_computation(id: ComputationId) {
    let removed = with_runtime(|rt| {
        let node = rt.computations.remove(id)?;
        rt.unsubscribe(id, &node.sources);
        rt.pending.retain(|c| *c != id);
        Some(node)
    });
    if let Some(node) = removed {
        if let Some(cleanup) = node.cleanup {
            cleanup();
        }
        dispose_owner(node.scope);
    }
}

// =============================================================================
// Owners
// =============================================================================

pub(crate) fn create_owner() -> OwnerId {
    with_runtime(|rt| rt.owners.insert(OwnerNode::default()))
}

/// Run `f` with `owner` current and tracking suspended.
pub(crate) fn with_owner<R>(owner: OwnerId, f: impl FnOnce() -> R) -> R {
    let previous = with_runtime(|rt| (rt.observer.take(), rt.owner.replace(owner)));
    let result = f();
    with_runtime(|rt| {
        rt.observer = previous.0;
        rt.owner = previous.1;
    });
    result
}

/// Attach a disposer to the current owner. Hands it back when there is none.
pub(crate) fn register_disposer(disposer: Disposer) -> Option<Disposer> {
    with_runtime(|rt| match rt.owner.and_then(|o| rt.owners.get_mut(o)) {
        Some(owner) => {
            owner.disposers.push(disposer);
            None
        }
        None => Some(disposer),
    })
}

pub(crate) fn dispose_owner(id: OwnerId) {
    let removed = with_runtime(|rt| rt.owners.remove(id));
    if let Some(owner) = removed {
        run_disposers(owner.disposers);
    }
}

pub(crate) fn is_owner_alive(id: OwnerId) -> bool {
    with_runtime(|rt| rt.owners.contains_key(id))
}

fn run_disposers(disposers: Vec<Disposer>) {
    for disposer in disposers {
        match disposer {
            Disposer::Computation(id) => dispose_computation(id),
            Disposer::Owner(id) => dispose_owner(id),
            Disposer::Callback(f) => f(),
        }
    }
}

// =============================================================================
// Tracking and batching
// =============================================================================

/// Run `f` without subscribing the current computation to anything it reads.
pub fn untrack<R>(f: impl FnOnce() -> R) -> R {
    let previous = with_runtime(|rt| rt.observer.take());
    let result = f();
    with_runtime(|rt| rt.observer = previous);
    result
}

/// Defer notifications until `f` returns.
///
/// Batches nest; when the outermost one returns, every computation notified
/// inside it runs exactly once, in first-notified order.
pub fn batch<R>(f: impl FnOnce() -> R) -> R {
    with_runtime(|rt| rt.batch_depth += 1);
    let result = f();
    let outermost = with_runtime(|rt| rt.batch_depth == 1);
    if outermost {
        // Stay batched while flushing so writes made by pending computations
        // queue behind them instead of running re-entrantly.
        let mut runs: HashMap<ComputationId, usize> = HashMap::new();
        loop {
            let next = with_runtime(|rt| {
                if rt.pending.is_empty() {
                    None
                } else {
                    Some(rt.pending.remove(0))
                }
            });
            let Some(id) = next else {
                break;
            };
            let passes = runs.entry(id).or_insert(0);
            if *passes == MAX_RERUNS {
                tracing::warn!(
                    ?id,
                    passes = *passes,
                    "effect keeps invalidating itself, giving up"
                );
                continue;
            }
            *passes += 1;
            run_computation(id);
        }
    }
    with_runtime(|rt| rt.batch_depth -= 1);
    result
}

// =============================================================================
// Tests
// =============================================================================
