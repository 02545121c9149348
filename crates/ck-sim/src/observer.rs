//! Simulation observer trait for progress reporting and data collection.

use ck_core::{LineId, StationId, Tick};

use crate::Customer;

/// Callbacks invoked by [`Engine::run`][crate::Engine::run] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The engine itself never prints;
/// applications attach an observer when they want progress output.
///
/// # Example — dispatch printer
///
/// ```rust,ignore
/// struct DispatchPrinter;
///
/// impl SimObserver for DispatchPrinter {
///     fn on_dispatch(&mut self, tick: Tick, station: StationId, wait_secs: u64) {
///         println!("{tick}: {station} took a customer after {wait_secs}s");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when a new customer has been routed into a line.
    ///
    /// `queue_len` is the line's length including the new customer.
    fn on_arrival(&mut self, _tick: Tick, _line: LineId, _queue_len: usize) {}

    /// Called when a station takes the head customer from its line.
    ///
    /// `wait_secs` is the time the customer spent waiting before dispatch.
    fn on_dispatch(&mut self, _tick: Tick, _station: StationId, _wait_secs: u64) {}

    /// Called when a station finishes a checkout and releases its customer.
    fn on_checkout_complete(&mut self, _tick: Tick, _station: StationId, _customer: &Customer) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
