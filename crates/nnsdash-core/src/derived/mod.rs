//! Projections over stores.
//!
//! A [`Derived`] recomputes synchronously whenever a source publishes and
//! publishes itself only when the result differs from the previous one.
//! It stays subscribed to its sources until the last clone is dropped.

mod selected_project;
mod sns_neurons;
mod tokens;

pub use selected_project::*;
pub use sns_neurons::*;
pub use tokens::*;

use crate::store::{Readable, Unsubscriber, Writable};
use std::{any::Any, cell::RefCell, rc::Rc};

///
/// SourceSubscriptions
/// Subscriptions to the sources, and the sources themselves so a chain of
/// projections stays alive while its tail is held.
///

#[derive(Default)]
struct SourceSubscriptions {
    unsubscribers: RefCell<Vec<Unsubscriber>>,
    sources: RefCell<Vec<Box<dyn Any>>>,
}

impl Drop for SourceSubscriptions {
    fn drop(&mut self) {
        for unsubscriber in self.unsubscribers.take() {
            unsubscriber.unsubscribe();
        }
    }
}

///
/// Derived
///

pub struct Derived<T> {
    store: Writable<T>,
    sources: Rc<SourceSubscriptions>,
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            sources: Rc::clone(&self.sources),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Derived<T> {
    fn new(initial: T) -> Self {
        Self {
            store: Writable::new(initial),
            sources: Rc::new(SourceSubscriptions::default()),
        }
    }

    fn attach<S: Clone + 'static>(&self, source: &S, unsubscriber: Unsubscriber) {
        self.sources.unsubscribers.borrow_mut().push(unsubscriber);
        self.sources.sources.borrow_mut().push(Box::new(source.clone()));
    }

    fn publisher(&self) -> impl Fn(T) + 'static {
        let target = self.store.clone();

        move |next: T| {
            if target.with(|current| current != &next) {
                target.set(next);
            }
        }
    }
}

impl<T: Clone + 'static> Readable<T> for Derived<T> {
    fn get(&self) -> T {
        self.store.get()
    }

    fn subscribe<F>(&self, f: F) -> Unsubscriber
    where
        F: Fn(&T) + 'static,
    {
        self.store.subscribe(f)
    }
}

/// Projection of one source.
pub fn derived<A, S, T, F>(source: &S, f: F) -> Derived<T>
where
    S: Readable<A> + Clone + 'static,
    A: 'static,
    T: Clone + PartialEq + 'static,
    F: Fn(&A) -> T + 'static,
{
    let derived = Derived::new(f(&source.get()));
    let publish = derived.publisher();

    derived.attach(source, source.subscribe(move |a| publish(f(a))));

    derived
}

/// Projection of two sources.
pub fn derived2<A, B, SA, SB, T, F>(a: &SA, b: &SB, f: F) -> Derived<T>
where
    SA: Readable<A> + Clone + 'static,
    SB: Readable<B> + Clone + 'static,
    A: 'static,
    B: 'static,
    T: Clone + PartialEq + 'static,
    F: Fn(&A, &B) -> T + 'static,
{
    let f = Rc::new(f);
    let derived = Derived::new(f(&a.get(), &b.get()));

    let (publish, f_a, other) = (derived.publisher(), Rc::clone(&f), b.clone());
    derived.attach(a, a.subscribe(move |a| publish(f_a(a, &other.get()))));

    let (publish, f_b, other) = (derived.publisher(), f, a.clone());
    derived.attach(b, b.subscribe(move |b| publish(f_b(&other.get(), b))));

    derived
}

/// Projection of three sources.
pub fn derived3<A, B, C, SA, SB, SC, T, F>(a: &SA, b: &SB, c: &SC, f: F) -> Derived<T>
where
    SA: Readable<A> + Clone + 'static,
    SB: Readable<B> + Clone + 'static,
    SC: Readable<C> + Clone + 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    T: Clone + PartialEq + 'static,
    F: Fn(&A, &B, &C) -> T + 'static,
{
    let f = Rc::new(f);
    let derived = Derived::new(f(&a.get(), &b.get(), &c.get()));

    let (publish, g, sb, sc) = (derived.publisher(), Rc::clone(&f), b.clone(), c.clone());
    derived.attach(a, a.subscribe(move |a| publish(g(a, &sb.get(), &sc.get()))));

    let (publish, g, sa, sc) = (derived.publisher(), Rc::clone(&f), a.clone(), c.clone());
    derived.attach(b, b.subscribe(move |b| publish(g(&sa.get(), b, &sc.get()))));

    let (publish, g, sa, sb) = (derived.publisher(), f, a.clone(), b.clone());
    derived.attach(c, c.subscribe(move |c| publish(g(&sa.get(), &sb.get(), c))));

    derived
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn publishes_only_on_change() {
        let source = Writable::new(1_u32);
        let parity = derived(&source, |v| v % 2);
        let notified = Rc::new(Cell::new(0));

        let counter = Rc::clone(&notified);
        let _unsub = parity.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(notified.get(), 1);

        source.set(3);
        assert_eq!(notified.get(), 1);

        source.set(4);
        assert_eq!(notified.get(), 2);
        assert_eq!(parity.get(), 0);
    }

    #[test]
    fn combines_two_sources() {
        let a = Writable::new(2_u32);
        let b = Writable::new(3_u32);
        let sum = derived2(&a, &b, |a, b| a + b);

        assert_eq!(sum.get(), 5);
        b.set(10);
        assert_eq!(sum.get(), 12);
        a.set(0);
        assert_eq!(sum.get(), 10);
    }

    #[test]
    fn chain_survives_dropped_middle() {
        let source = Writable::new(1_u32);
        let tail = {
            let middle = derived(&source, |v| v + 1);
            derived(&middle, |v| v * 10)
        };

        source.set(4);
        assert_eq!(tail.get(), 50);
    }

    #[test]
    fn chains_and_unsubscribes_on_drop() {
        let source = Writable::new(1_u32);
        let double = derived(&source, |v| v * 2);
        let quad = derived(&double, |v| v * 2);
        let all = derived3(&source, &double, &quad, |a, b, c| (*a, *b, *c));

        source.set(2);
        assert_eq!(all.get(), (2, 4, 8));

        drop(all);
        drop(quad);
        drop(double);
        assert_eq!(source.subscriber_count(), 0);
    }
}
