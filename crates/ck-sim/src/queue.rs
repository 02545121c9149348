//! `WaitQueue` — the FIFO holding area feeding one or more stations.
//!
//! Strictly first-in-first-out: customers are never reordered by basket
//! size, accumulated wait, or anything else.  There is no capacity bound —
//! unbounded growth is itself a statistic of interest, so length is never
//! artificially capped.

use std::collections::VecDeque;

use crate::{Customer, SimError, SimResult};

/// An ordered line of customers awaiting a free station.
#[derive(Debug, Default)]
pub struct WaitQueue {
    inner: VecDeque<Customer>,
}

impl WaitQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a customer at the tail.
    pub fn enqueue(&mut self, customer: Customer) {
        self.inner.push_back(customer);
    }

    /// Remove and return the head customer.
    ///
    /// Errors with [`SimError::EmptyQueue`] on an empty line — callers check
    /// [`is_empty`][Self::is_empty] first; the engine never trips this.
    pub fn dequeue(&mut self) -> SimResult<Customer> {
        self.inner.pop_front().ok_or(SimError::EmptyQueue)
    }

    /// The head customer without removing it.  Same failure condition as
    /// [`dequeue`][Self::dequeue].
    pub fn peek(&self) -> SimResult<&Customer> {
        self.inner.front().ok_or(SimError::EmptyQueue)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate the waiting customers, head first.
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.inner.iter()
    }
}
