//! Scheduling behaviour of the reactive engine as seen from outside the crate.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use flint_tui::reactive::{
    batch, create_effect, create_memo, create_root, on_cleanup, signal, untrack,
};

fn counter() -> (Rc<Cell<u32>>, impl Fn()) {
    let runs = Rc::new(Cell::new(0));
    let r = runs.clone();
    (runs, move || r.set(r.get() + 1))
}

#[test]
fn equal_writes_do_not_notify() {
    let value = signal(5);
    let (runs, bump) = counter();
    let v = value.clone();
    let _effect = create_effect(move || {
        v.get();
        bump();
    });

    value.set(5);
    value.set(5);
    assert_eq!(runs.get(), 1);

    value.set(6);
    assert_eq!(runs.get(), 2);
}

#[test]
fn batch_coalesces_writes_into_one_run() {
    let first = signal("a".to_string());
    let last = signal("b".to_string());
    let seen = Rc::new(RefCell::new(Vec::new()));

    let (f, l, s) = (first.clone(), last.clone(), seen.clone());
    let _effect = create_effect(move || {
        s.borrow_mut().push(format!("{} {}", f.get(), l.get()));
    });

    batch(|| {
        first.set("x".into());
        last.set("y".into());
        first.set("z".into());
    });

    assert_eq!(*seen.borrow(), vec!["a b", "z y"]);
}

#[test]
fn nested_batches_flush_at_outermost() {
    let value = signal(0);
    let (runs, bump) = counter();
    let v = value.clone();
    let _effect = create_effect(move || {
        v.get();
        bump();
    });

    batch(|| {
        value.set(1);
        batch(|| value.set(2));
        assert_eq!(runs.get(), 1);
    });
    assert_eq!(runs.get(), 2);
}

#[test]
fn memo_chain_propagates_once_per_write() {
    let base = signal(1);
    let b = base.clone();
    let doubled = create_memo(move || b.get() * 2);
    let d = doubled.clone();
    let quadrupled = create_memo(move || d.get() * 2);

    let (runs, bump) = counter();
    let q = quadrupled.clone();
    let _effect = create_effect(move || {
        q.get();
        bump();
    });

    base.set(2);
    assert_eq!(quadrupled.get(), 8);
    assert_eq!(runs.get(), 2);
}

#[test]
fn untracked_reads_do_not_subscribe() {
    let tracked = signal(0);
    let ignored = signal(0);
    let (runs, bump) = counter();

    let (t, i) = (tracked.clone(), ignored.clone());
    let _effect = create_effect(move || {
        t.get();
        untrack(|| i.get());
        bump();
    });

    ignored.set(1);
    assert_eq!(runs.get(), 1);
    tracked.set(1);
    assert_eq!(runs.get(), 2);
}

#[test]
fn disposing_root_runs_cleanups_and_stops_effects() {
    let value = signal(0);
    let (runs, bump) = counter();
    let cleaned = Rc::new(Cell::new(false));

    let v = value.clone();
    let c = cleaned.clone();
    let root = create_root(move |root| {
        create_effect(move || {
            v.get();
            bump();
        });
        on_cleanup(move || c.set(true));
        root
    });

    root.dispose();
    assert!(cleaned.get());
    value.set(1);
    assert_eq!(runs.get(), 1);
}
