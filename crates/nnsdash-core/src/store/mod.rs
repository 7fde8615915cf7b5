//! Application state.
//!
//! Every slice of state is a [`Writable`]: a shared, single-threaded cell
//! with subscribers. Domain stores wrap one and add typed mutators; services
//! write only through those. Subscribers run synchronously after each write,
//! against a snapshot taken once the store borrow is released, so a
//! subscriber may read or write any store, including the one notifying it.

pub mod accounts;
pub mod auth;
pub mod page;
pub mod sns_neurons;
pub mod toasts;
pub mod tokens;
pub mod transactions;
pub mod universes;

pub use accounts::*;
pub use auth::*;
pub use page::*;
pub use sns_neurons::*;
pub use toasts::*;
pub use tokens::*;
pub use transactions::*;
pub use universes::*;

use crate::types::Principal;
use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::{Rc, Weak},
};

type Subscriber<T> = Rc<dyn Fn(&T)>;

///
/// Readable
///

pub trait Readable<T> {
    /// A snapshot of the current value.
    fn get(&self) -> T;

    /// Calls `f` with the current value now and after every change.
    fn subscribe<F>(&self, f: F) -> Unsubscriber
    where
        F: Fn(&T) + 'static;
}

///
/// Unsubscriber
///

#[must_use = "dropping an Unsubscriber keeps the subscription alive"]
pub struct Unsubscriber {
    cancel: Box<dyn FnOnce()>,
}

impl Unsubscriber {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Box::new(cancel),
        }
    }

    pub fn unsubscribe(self) {
        (self.cancel)();
    }
}

///
/// Writable
///

struct Inner<T> {
    value: T,
    initial: T,
    subscribers: BTreeMap<u64, Subscriber<T>>,
    next_subscriber: u64,
}

pub struct Writable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default + Clone + 'static> Default for Writable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                initial: value.clone(),
                value,
                subscribers: BTreeMap::new(),
                next_subscriber: 0,
            })),
        }
    }

    /// Read without cloning the whole value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        self.notify();
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.borrow_mut().value);
        self.notify();
    }

    /// Back to the value the store was created with.
    pub fn reset(&self) {
        let initial = self.inner.borrow().initial.clone();
        self.set(initial);
    }

    /// Writes without notifying. The caller must [`notify`](Self::notify)
    /// once every store written in the same step is up to date.
    pub(crate) fn update_quiet(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.borrow_mut().value);
    }

    pub(crate) fn reset_quiet(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.value = inner.initial.clone();
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    pub(crate) fn notify(&self) {
        let (value, subscribers) = {
            let inner = self.inner.borrow();
            let subscribers: Vec<Subscriber<T>> = inner.subscribers.values().cloned().collect();

            (inner.value.clone(), subscribers)
        };

        for subscriber in subscribers {
            subscriber(&value);
        }
    }
}

impl<T: Clone + 'static> Readable<T> for Writable<T> {
    fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    fn subscribe<F>(&self, f: F) -> Unsubscriber
    where
        F: Fn(&T) + 'static,
    {
        let subscriber: Subscriber<T> = Rc::new(f);

        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_subscriber;
            inner.next_subscriber += 1;
            inner.subscribers.insert(id, Rc::clone(&subscriber));
            id
        };

        subscriber(&self.get());

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Unsubscriber::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().subscribers.remove(&id);
            }
        })
    }
}

///
/// AppStores
/// Every store the application owns.
///

#[derive(Clone, Default)]
pub struct AppStores {
    pub accounts: AccountsStore,
    pub auth: AuthStore,
    pub page: PageStore,
    pub sns_neurons: SnsNeuronsStore,
    pub toasts: ToastsStore,
    pub tokens: TokensStore,
    pub transactions: TransactionsStore,
    pub universes: UniversesStore,
}

impl AppStores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops user data on sign-out. Page, universes and toasts stay.
    pub fn reset_user_data(&self) {
        self.accounts.reset_quiet();
        self.sns_neurons.reset_quiet();
        self.tokens.reset_quiet();
        self.transactions.reset_quiet();

        self.accounts.notify();
        self.sns_neurons.notify();
        self.tokens.notify();
        self.transactions.notify();
    }

    /// Clears the accounts of a universe together with their transactions.
    /// Both maps are written before either store notifies, so no subscriber
    /// sees one without the other.
    pub fn reset_universe_data(&self, universe_id: &Principal) {
        self.accounts.update_quiet(|state| {
            state.remove(universe_id);
        });
        self.transactions.update_quiet(|state| {
            state.remove(universe_id);
        });

        self.accounts.notify();
        self.transactions.notify();
    }
}

///
/// TESTS
///
