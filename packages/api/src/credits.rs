//! # Credit gate
//!
//! The credit balance decides whether credit-consuming actions may run. Balance and
//! gate flag are one value: [`CreditState::has_insufficient_credits`] is derived from
//! the balance, so an unknown balance is never insufficient and a failed refresh can
//! not leave the two out of step.
//!
//! State lives behind [`CreditCell`] so the same logic drives a Dioxus signal in the
//! dashboard and a plain value in tests.

use std::future::Future;

use dioxus::prelude::*;

use crate::client::Backend;
use crate::notice::{Notice, Notify};

const NO_CREDITS_TITLE: &str = "No Credits Available";
const NO_CREDITS_DESCRIPTION: &str = "Please recharge to continue using the service";

/// The last known credit balance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CreditState {
    /// `None` until the first successful fetch.
    pub balance: Option<i64>,
    pub loading: bool,
}

impl CreditState {
    pub fn with_balance(balance: i64) -> Self {
        Self {
            balance: Some(balance),
            loading: false,
        }
    }

    pub fn has_insufficient_credits(&self) -> bool {
        matches!(self.balance, Some(b) if b <= 0)
    }
}

/// Somewhere a [`CreditState`] is kept.
pub trait CreditCell {
    fn snapshot(&self) -> CreditState;
    fn replace(&mut self, state: CreditState);
}

impl CreditCell for CreditState {
    fn snapshot(&self) -> CreditState {
        *self
    }

    fn replace(&mut self, state: CreditState) {
        *self = state;
    }
}

impl CreditCell for Signal<CreditState> {
    fn snapshot(&self) -> CreditState {
        *self.peek()
    }

    fn replace(&mut self, state: CreditState) {
        self.set(state);
    }
}

fn no_credits_notice() -> Notice {
    Notice::error(NO_CREDITS_TITLE, NO_CREDITS_DESCRIPTION)
}

/// Refresh the balance from the backend.
///
/// A zero or negative balance raises a notice. A failed fetch keeps the previous
/// balance and raises an error notice; it never fails the caller.
pub async fn fetch_credits<B, C, N>(backend: &B, cell: &mut C, notify: &mut N)
where
    B: Backend,
    C: CreditCell,
    N: Notify,
{
    let previous = cell.snapshot();
    cell.replace(CreditState {
        loading: true,
        ..previous
    });

    match backend.find_credit().await {
        Ok(balance) => {
            let state = CreditState::with_balance(balance);
            cell.replace(state);
            if state.has_insufficient_credits() {
                notify.notify(no_credits_notice());
            }
        }
        Err(e) => {
            tracing::error!("Error fetching credits: {e}");
            cell.replace(CreditState {
                loading: false,
                ..previous
            });
            notify.notify(Notice::error("Error", "Failed to fetch credit information"));
        }
    }
}

/// Whether a gated action ran.
#[derive(Debug, PartialEq, Eq)]
pub enum GateOutcome<T> {
    Completed(T),
    Blocked,
}

impl<T> GateOutcome<T> {
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Blocked => None,
        }
    }
}

/// Run `action` only if the account still has credits after a fresh balance check.
///
/// An already-insufficient balance blocks without a network call. Otherwise the
/// balance is refreshed and re-read before deciding.
pub async fn check_credits_before_action<B, C, N, F, Fut, T>(
    backend: &B,
    cell: &mut C,
    notify: &mut N,
    action: F,
) -> GateOutcome<T>
where
    B: Backend,
    C: CreditCell,
    N: Notify,
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    if !ensure_credits(backend, cell, notify).await {
        return GateOutcome::Blocked;
    }
    GateOutcome::Completed(action().await)
}

/// The check half of [`check_credits_before_action`], for callers that run the
/// action inline: `true` when the action may proceed.
pub async fn ensure_credits<B, C, N>(backend: &B, cell: &mut C, notify: &mut N) -> bool
where
    B: Backend,
    C: CreditCell,
    N: Notify,
{
    if cell.snapshot().has_insufficient_credits() {
        notify.notify(no_credits_notice());
        return false;
    }

    fetch_credits(backend, cell, notify).await;

    if cell.snapshot().has_insufficient_credits() {
        tracing::info!("Action blocked: no credits left");
        return false;
    }
    true
}
