//! The `Customer` value entity — one shopper and the workload it imposes.

use ck_core::Tick;

/// Smallest basket a customer arrives with.
pub const MIN_ITEMS: u32 = 10;
/// Largest basket a customer arrives with.
pub const MAX_ITEMS: u32 = 40;

/// One shopper moving through the system: arrives, waits in a line, is
/// served by a station, and leaves.
///
/// The service duration is computed **once at creation** and stored, so the
/// value used to plan a station's free time is exactly the value any later
/// consumer observes.  Nothing recomputes it after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    arrival_tick:   Tick,
    item_count:     u32,
    checkout_start: Option<Tick>,
    service_secs:   u64,
}

impl Customer {
    /// Create a customer arriving at `arrival_tick` with a frozen service
    /// duration.  `item_count` must be positive — callers draw it from
    /// [`MIN_ITEMS`]`..=`[`MAX_ITEMS`].
    pub fn new(arrival_tick: Tick, item_count: u32, service_secs: u64) -> Self {
        debug_assert!(item_count > 0, "customers carry at least one item");
        Self {
            arrival_tick,
            item_count,
            checkout_start: None,
            service_secs,
        }
    }

    /// Tick at which this customer entered the system.
    #[inline]
    pub fn arrival_tick(&self) -> Tick {
        self.arrival_tick
    }

    /// Number of items in the basket.
    #[inline]
    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Tick at which service began, or `None` while still waiting.
    #[inline]
    pub fn checkout_start(&self) -> Option<Tick> {
        self.checkout_start
    }

    /// Seconds of station time this customer requires.  Stable for the
    /// customer's whole lifetime.
    #[inline]
    pub fn service_secs(&self) -> u64 {
        self.service_secs
    }

    /// Ticks spent waiting if dispatched at `now`.
    #[inline]
    pub fn wait_secs(&self, now: Tick) -> u64 {
        now - self.arrival_tick
    }

    /// Stamp the start of service.  Called exactly once, by
    /// [`Station::dispatch`][crate::Station::dispatch].
    pub(crate) fn begin_checkout(&mut self, now: Tick) {
        debug_assert!(self.checkout_start.is_none(), "service begins only once");
        self.checkout_start = Some(now);
    }
}
