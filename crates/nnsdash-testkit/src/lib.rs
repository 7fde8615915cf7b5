//! Test utilities and fixtures for exercising nnsdash services.
//!
//! Provides deterministic dummy values, scriptable canister mocks whose
//! replies can be held back to control arrival order, a mock hardware
//! wallet and a manual clock.

pub mod clock;
pub mod fixtures;
pub mod ledger;
pub mod mock;

use nnsdash_core::types::{IcrcAccount, Identity, Principal};
use std::task::Poll;

///
/// Deterministic dummy-value generator for tests.
///
/// Produces stable principals/accounts derived from a numeric seed, which makes
/// tests reproducible without hardcoding raw byte arrays.
///

pub struct Fake;

impl Fake {
    ///
    /// Deterministically derive an [`IcrcAccount`] from `seed`.
    ///
    #[must_use]
    pub fn account(seed: u32) -> IcrcAccount {
        let mut sub = [0u8; 32];
        sub[..4].copy_from_slice(&seed.to_be_bytes());

        IcrcAccount {
            owner: Self::principal(seed),
            subaccount: Some(sub),
        }
    }

    ///
    /// Deterministically derive a [`Principal`] from `seed`.
    ///
    #[must_use]
    pub fn principal(seed: u32) -> Principal {
        let mut buf = [0u8; 29];
        buf[..4].copy_from_slice(&seed.to_be_bytes());

        Principal::from_slice(&buf)
    }

    #[must_use]
    pub fn identity(seed: u32) -> Identity {
        Identity::new(Self::principal(seed))
    }
}

/// Returns `Pending` once so sibling futures in a `join!` get polled.
///
/// The only copy in the workspace; the core crate's unit tests use it too.
pub async fn yield_now() {
    let mut yielded = false;

    futures::future::poll_fn(|cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await;
}

///
/// TESTS
///
