use crate::{
    store::Writable,
    types::{Toast, ToastId, ToastLevel},
};
use derive_more::Deref;
use std::{cell::Cell, rc::Rc};

///
/// NewToast
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewToast {
    pub text: String,
    pub level: ToastLevel,
    pub duration_ms: Option<u64>,
    pub spinner: bool,
}

///
/// ToastsStore
/// Displayed toasts, oldest first.
///

#[derive(Clone, Default, Deref)]
pub struct ToastsStore {
    #[deref]
    toasts: Writable<Vec<Toast>>,
    next_id: Rc<Cell<u64>>,
}

impl ToastsStore {
    pub fn show(&self, toast: NewToast, now_ms: u64) -> ToastId {
        let id = ToastId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                text: toast.text,
                level: toast.level,
                duration_ms: toast.duration_ms,
                spinner: toast.spinner,
                created_at_ms: now_ms,
            });
        });

        id
    }

    pub fn hide(&self, id: ToastId) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    /// Replaces the content of `id` in place. Returns false if it is gone.
    pub fn replace(&self, id: ToastId, toast: NewToast) -> bool {
        let found = self.toasts.with(|toasts| toasts.iter().any(|t| t.id == id));
        if !found {
            return false;
        }

        self.toasts.update(|toasts| {
            if let Some(existing) = toasts.iter_mut().find(|t| t.id == id) {
                existing.text = toast.text;
                existing.level = toast.level;
                existing.duration_ms = toast.duration_ms;
                existing.spinner = toast.spinner;
            }
        });

        true
    }

    /// Drops every toast whose level is not in `keep`.
    pub fn reset_keeping(&self, keep: &[ToastLevel]) {
        self.toasts
            .update(|toasts| toasts.retain(|toast| keep.contains(&toast.level)));
    }

    /// Removes expired toasts and returns how many went.
    pub fn prune_expired(&self, now_ms: u64) -> usize {
        let expired = self
            .toasts
            .with(|toasts| toasts.iter().filter(|t| t.is_expired(now_ms)).count());

        if expired > 0 {
            self.toasts
                .update(|toasts| toasts.retain(|toast| !toast.is_expired(now_ms)));
        }

        expired
    }
}
