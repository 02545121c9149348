//! The `Engine` struct and its tick loop.

use ck_core::{SimClock, SimConfig, SimRng, StationId, Tick};

use crate::{
    Customer, RoutingPolicy, RunStats, ServiceModel, SimObserver, SimResult, Station, WaitQueue,
    MAX_ITEMS, MIN_ITEMS,
};

/// The simulation runner.
///
/// `Engine<P, S>` holds all run state and drives the two-step tick loop:
///
/// 1. **Arrival step**: on every arrival-interval boundary, synthesize one
///    customer (basket size and service duration drawn from the run's RNG
///    stream), route it through `P`, and fold the target line's new length
///    into the max-queue-length statistic.
/// 2. **Service step** (ascending station index — the tie-break that decides
///    which station claims a shared-line customer when several free up in
///    the same tick): release finished checkouts, then dispatch the head of
///    each free station's line, accumulating the customer's wait.
///
/// The loop runs for exactly `config.total_ticks` ticks and never drains:
/// customers still waiting or mid-checkout at the end are reported in
/// [`RunStats`], not served retroactively.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine<P: RoutingPolicy, S: ServiceModel> {
    /// Global configuration (station count, duration, arrival interval, seed).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// Checkout stations, indexed by `StationId`.
    pub stations: Vec<Station>,

    /// Waiting lines: one for the single-line policy, one per station
    /// otherwise (never zero — see `RoutingPolicy::line_count`).
    pub lines: Vec<WaitQueue>,

    policy:  P,
    service: S,
    rng:     SimRng,

    // Running counters, folded into `RunStats` on demand.
    arrivals:        u64,
    served:          u64,
    total_wait_secs: u64,
    max_queue_len:   usize,
}

impl<P: RoutingPolicy, S: ServiceModel> Engine<P, S> {
    pub(crate) fn from_parts(
        config:   SimConfig,
        policy:   P,
        service:  S,
        stations: Vec<Station>,
        lines:    Vec<WaitQueue>,
        rng:      SimRng,
    ) -> Self {
        Self {
            clock: config.make_clock(),
            config,
            stations,
            lines,
            policy,
            service,
            rng,
            arrivals:        0,
            served:          0,
            total_wait_secs: 0,
            max_queue_len:   0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }

            observer.on_tick_start(now);
            self.process_tick(now, observer)?;
            observer.on_tick_end(now);

            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            self.process_tick(now, observer)?;
            observer.on_tick_end(now);
            self.clock.advance();
        }
        Ok(())
    }

    /// Snapshot the run's statistics.  Valid at any point; after
    /// [`run`][Self::run] it is the final results object.
    pub fn stats(&self) -> RunStats {
        RunStats {
            duration_ticks:     self.config.total_ticks,
            total_arrivals:     self.arrivals,
            customers_served:   self.served,
            total_wait_secs:    self.total_wait_secs,
            max_queue_len:      self.max_queue_len,
            final_line_lengths: self.lines.iter().map(WaitQueue::len).collect(),
            in_service_at_end:  self.stations.iter().filter(|s| !s.is_free()).count(),
        }
    }

    /// The policy's stable label (for reports).
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        // ── Arrival step ──────────────────────────────────────────────────
        //
        // Arrivals land on ticks 0, I, 2I, …  The basket size and the frozen
        // service duration are drawn before routing, so the RNG stream has
        // the same shape for every policy; only RandomLine draws again.
        if now.0 % self.config.arrival_interval_ticks == 0 {
            let items = self.rng.gen_range(MIN_ITEMS..=MAX_ITEMS);
            let service_secs = self.service.sample_secs(items, &mut self.rng);
            let customer = Customer::new(now, items, service_secs);

            let line = self.policy.route(&self.lines, &mut self.rng);
            self.lines[line.index()].enqueue(customer);
            self.arrivals += 1;

            let len = self.lines[line.index()].len();
            if len > self.max_queue_len {
                self.max_queue_len = len;
            }
            observer.on_arrival(now, line, len);
        }

        // ── Service step ──────────────────────────────────────────────────
        //
        // Ascending station index.  Release before dispatch, so a station
        // whose checkout ends this tick can take its next customer in the
        // same tick.
        for i in 0..self.stations.len() {
            let station = StationId(i as u32);
            if let Some(done) = self.stations[i].tick(now) {
                observer.on_checkout_complete(now, station, &done);
            }

            let line = self.policy.line_for_station(station);
            if self.stations[i].is_free() && !self.lines[line.index()].is_empty() {
                let customer = self.lines[line.index()].dequeue()?;
                let wait = customer.wait_secs(now);
                self.total_wait_secs += wait;
                self.served += 1;
                observer.on_dispatch(now, station, wait);
                self.stations[i].dispatch(customer, now);
            }
        }

        Ok(())
    }
}
