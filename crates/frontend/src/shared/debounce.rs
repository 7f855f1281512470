//! Trailing-edge debounce for inputs that trigger work (search boxes).
//!
//! Every keystroke takes a ticket and sleeps; only the holder of the most
//! recent ticket gets to run once it wakes up.

use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: Rc<Cell<u64>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every outstanding ticket and hand out a new one
    pub fn schedule(&self) -> Ticket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.get() == ticket.0
    }

    /// Drop any pending run
    pub fn cancel(&self) {
        self.schedule();
    }

    /// Sleep for `delay_ms`, then report whether this call is still the latest
    pub fn settle(&self, delay_ms: u32) -> impl Future<Output = bool> {
        self.settle_with(TimeoutFuture::new(delay_ms))
    }

    /// Like [`Debouncer::settle`] with any sleep. The ticket is taken now,
    /// not on first poll.
    pub fn settle_with<S: Future<Output = ()>>(&self, sleep: S) -> impl Future<Output = bool> {
        let ticket = self.schedule();
        let this = self.clone();
        async move {
            sleep.await;
            this.is_current(ticket)
        }
    }

    /// Run `f` after `delay_ms` unless a later call superseded this one
    pub fn debounce<F: FnOnce()>(&self, delay_ms: u32, f: F) -> impl Future<Output = bool> {
        self.debounce_with(TimeoutFuture::new(delay_ms), f)
    }

    pub fn debounce_with<S, F>(&self, sleep: S, f: F) -> impl Future<Output = bool>
    where
        S: Future<Output = ()>,
        F: FnOnce(),
    {
        let settled = self.settle_with(sleep);
        async move {
            let current = settled.await;
            if current {
                f();
            }
            current
        }
    }
}
